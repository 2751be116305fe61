//! Input scripts for the headless driver.
//!
//! A script is plain text with one command per line. Blank lines and lines
//! starting with `#` are skipped; a trailing `# comment` is allowed too.
//!
//! ```text
//! # phone-sized viewport
//! resize 390
//! next
//! swipe -120 150
//! tap
//! escape
//! link about
//! wait
//! ```

use crate::app::{Event, Section};
use thiserror::Error;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Feed an event to the page.
    Event(Event),
    /// Tear the page down and mount it again at the current width.
    Remount,
    /// Block until the loader has answered every outstanding request.
    Wait,
}

/// A line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// Parses a single line. Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns a [`ParseError`] naming `line_no` for unknown commands, missing
/// or extra arguments and arguments of the wrong type.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>, ParseError> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let error = |message: String| ParseError {
        line: line_no,
        message,
    };

    let mut words = content.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let expect_args = |count: usize| {
        if args.len() == count {
            Ok(())
        } else {
            Err(error(format!(
                "`{name}` takes {count} argument(s), got {}",
                args.len()
            )))
        }
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "resize" => {
            expect_args(1)?;
            Command::Event(Event::Resize {
                width: parse_arg(args[0], "width").map_err(error)?,
            })
        }
        "next" => {
            expect_args(0)?;
            Command::Event(Event::Next)
        }
        "prev" | "previous" => {
            expect_args(0)?;
            Command::Event(Event::Previous)
        }
        "goto" => {
            expect_args(1)?;
            Command::Event(Event::GoTo(parse_arg(args[0], "index").map_err(error)?))
        }
        "swipe" => {
            expect_args(2)?;
            Command::Event(Event::DragEnd {
                offset: parse_arg(args[0], "offset").map_err(error)?,
                velocity: parse_arg(args[1], "velocity").map_err(error)?,
            })
        }
        "open" => {
            expect_args(1)?;
            Command::Event(Event::ActivateItem(
                parse_arg(args[0], "index").map_err(error)?,
            ))
        }
        "tap" => {
            expect_args(0)?;
            Command::Event(Event::ActivateCurrent)
        }
        "close" => {
            expect_args(0)?;
            Command::Event(Event::CloseButton)
        }
        "backdrop" => {
            expect_args(0)?;
            Command::Event(Event::Backdrop)
        }
        "escape" | "esc" => {
            expect_args(0)?;
            Command::Event(Event::CancelKey)
        }
        "menu" => {
            expect_args(0)?;
            Command::Event(Event::ToggleMenu)
        }
        "link" => {
            expect_args(1)?;
            let section = Section::from_name(args[0])
                .ok_or_else(|| error(format!("unknown section `{}`", args[0])))?;
            Command::Event(Event::FollowLink(section))
        }
        "remount" => {
            expect_args(0)?;
            Command::Remount
        }
        "wait" => {
            expect_args(0)?;
            Command::Wait
        }
        other => return Err(error(format!("unknown command `{other}`"))),
    };

    Ok(Some(command))
}

fn parse_arg<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid {what} `{raw}`"))
}

/// Parses a whole script, keeping good lines and collecting bad ones.
///
/// Line numbers start at 1.
#[must_use]
pub fn parse_script(source: &str) -> (Vec<Command>, Vec<ParseError>) {
    let mut commands = Vec::new();
    let mut errors = Vec::new();

    for (i, line) in source.lines().enumerate() {
        match parse_line(i + 1, line) {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {}
            Err(e) => errors.push(e),
        }
    }

    (commands, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_line(1, ""), Ok(None));
        assert_eq!(parse_line(2, "   # just a note"), Ok(None));
        assert_eq!(
            parse_line(3, "next # advance"),
            Ok(Some(Command::Event(Event::Next)))
        );
    }

    #[test]
    fn arguments_are_typed() {
        assert_eq!(
            parse_line(1, "swipe -50 300"),
            Ok(Some(Command::Event(Event::DragEnd {
                offset: -50.0,
                velocity: 300.0
            })))
        );
        assert_eq!(
            parse_line(1, "resize 767"),
            Ok(Some(Command::Event(Event::Resize { width: 767 })))
        );
        assert_eq!(
            parse_line(1, "LINK contact"),
            Ok(Some(Command::Event(Event::FollowLink(Section::Contact))))
        );
        assert_eq!(parse_line(1, "wait"), Ok(Some(Command::Wait)));
    }

    #[test]
    fn bad_lines_name_their_line_number() {
        let err = parse_line(7, "goto two").unwrap_err();
        assert_eq!(err.line, 7);
        assert!(err.message.contains("index"));

        assert!(parse_line(1, "next 3").is_err());
        assert!(parse_line(1, "link blog").is_err());
        assert!(parse_line(1, "zoom").is_err());
    }

    #[test]
    fn errors_display_with_their_line() {
        let err = parse_line(4, "zoom").unwrap_err();
        assert_eq!(err.to_string(), "line 4: unknown command `zoom`");
    }

    #[test]
    fn script_keeps_good_lines_around_bad_ones() {
        let (commands, errors) = parse_script("resize 390\nfly\n\nnext\nremount\n");
        assert_eq!(
            commands,
            vec![
                Command::Event(Event::Resize { width: 390 }),
                Command::Event(Event::Next),
                Command::Remount,
            ]
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 2);
    }
}
