//! Headless driver for the portfolio page.
//!
//! Replays an input script against the page state and prints a frame after
//! every command that changes what would be on screen.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │       Main Thread        │
//! │  ┌────────────────────┐  │
//! │  │ AppState (page)    │  │  ← events, overlays, frames
//! │  └────────────────────┘  │
//! │          │ ▲             │
//! │   Load   │ │ Loaded /    │
//! │          ▼ │ Failed      │
//! │  ┌────────────────────┐  │
//! │  │ Loader thread      │  │  ← resource fetching
//! │  └────────────────────┘  │
//! └──────────────────────────┘
//! ```
//!
//! Loader responses are only applied on a `wait` command, so the printed
//! frames are the same on every run.
//!
//! # Usage
//!
//! ```text
//! folio [--config FILE] [--set KEY=VALUE]... [--width PX] [--cols N] [--json] [SCRIPT]
//! ```
//!
//! Without `SCRIPT` the commands are read from standard input.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration;

use folio::script::{self, Command};
use folio::ui::{render, FrameFormat};
use folio::worker::{AssetLoader, LoaderHandle, WorkerMessage};
use folio::{handle_event, Action, AppState, Config, Event, FolioError, PageHost};

/// How long `wait` blocks for a single loader response.
const LOADER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Replay input scripts against a portfolio page")]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override a configuration key (repeatable).
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,

    /// Initial viewport width in CSS pixels.
    #[arg(short, long, default_value_t = 1280)]
    width: u32,

    /// Terminal columns for ANSI frames.
    #[arg(long, default_value_t = 80)]
    cols: usize,

    /// Print frames as JSON view models, one per line.
    #[arg(long)]
    json: bool,

    /// Script file; standard input when omitted.
    script: Option<PathBuf>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))
}

/// Page host for a terminal: there is no document to scroll and no key
/// listener to register, so effects are only traced.
#[derive(Debug, Default)]
struct TerminalHost {
    scroll_suspended: Cell<bool>,
    cancel_key_listening: Cell<bool>,
}

impl PageHost for TerminalHost {
    fn suspend_scroll(&self) {
        self.scroll_suspended.set(true);
        tracing::debug!("page scroll suspended");
    }

    fn restore_scroll(&self) {
        self.scroll_suspended.set(false);
        tracing::debug!("page scroll restored");
    }

    fn listen_cancel_key(&self) {
        self.cancel_key_listening.set(true);
        tracing::debug!("listening for cancel key");
    }

    fn unlisten_cancel_key(&self) {
        self.cancel_key_listening.set(false);
        tracing::debug!("stopped listening for cancel key");
    }
}

/// Page state plus everything the driver needs to execute its actions.
struct Driver<W: Write> {
    app: AppState,
    loader: LoaderHandle,
    width: u32,
    cols: usize,
    format: FrameFormat,
    out: W,
}

impl<W: Write> Driver<W> {
    fn run(&mut self, commands: Vec<Command>) -> folio::Result<()> {
        self.apply(&Event::Mount { width: self.width })?;

        for command in commands {
            match command {
                Command::Event(event) => {
                    if let Event::Resize { width } = event {
                        self.width = width;
                    }
                    self.apply(&event)?;
                }
                Command::Remount => self.apply(&Event::Remount { width: self.width })?,
                Command::Wait => self.wait()?,
            }
        }

        Ok(())
    }

    fn apply(&mut self, event: &Event) -> folio::Result<()> {
        let (should_render, actions) = handle_event(&mut self.app, event)?;
        for action in actions {
            self.execute(action)?;
        }
        if should_render {
            self.frame()?;
        }
        Ok(())
    }

    fn execute(&mut self, action: Action) -> folio::Result<()> {
        match action {
            Action::LoadResource { index, item_id, src } => {
                tracing::debug!(index, item_id, src = %src, "requesting resource");
                self.loader.post(WorkerMessage::load(index, item_id, src))?;
            }
            Action::ScrollToSection { section } => {
                tracing::info!(section = %section, "scrolling to section");
            }
            Action::OpenContact { address } => {
                tracing::info!(address = %address, "opening mail link");
                writeln!(self.out, "mailto:{address}")?;
            }
        }
        Ok(())
    }

    fn wait(&mut self) -> folio::Result<()> {
        let _span = tracing::debug_span!("wait_for_loader", in_flight = self.loader.in_flight()).entered();

        let mut responses = self.loader.wait_idle(LOADER_TIMEOUT)?;
        responses.sort_by_key(folio::worker::WorkerResponse::index);

        let mut changed = false;
        for response in responses {
            let (should_render, actions) = handle_event(&mut self.app, &response.into_event())?;
            changed |= should_render;
            for action in actions {
                self.execute(action)?;
            }
        }
        if changed {
            self.frame()?;
        }

        let stats = self.app.preload.stats();
        tracing::debug!(
            requests = stats.requests,
            loaded = stats.loaded,
            failures = stats.failures,
            stale = stats.stale,
            "preload cache after wait"
        );
        Ok(())
    }

    fn frame(&mut self) -> folio::Result<()> {
        let frame = render(&self.app, self.cols, self.format)?;
        match self.format {
            FrameFormat::Json => writeln!(self.out, "{frame}")?,
            FrameFormat::Ansi => {
                writeln!(self.out, "{frame}")?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

fn load_config(cli: &Cli) -> folio::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let overrides: BTreeMap<String, String> = cli.overrides.iter().cloned().collect();
    config.apply_overrides(&overrides);
    Ok(config)
}

fn read_script(path: Option<&PathBuf>) -> folio::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| FolioError::Config(format!("cannot read script {}: {e}", path.display()))),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(cli: &Cli) -> folio::Result<()> {
    let config = load_config(cli)?;
    folio::observability::init_tracing(&config);

    let span = tracing::debug_span!("driver_run", width = cli.width, cols = cli.cols);
    let _guard = span.entered();

    let source = read_script(cli.script.as_ref())?;
    let (commands, errors) = script::parse_script(&source);
    for error in &errors {
        eprintln!("folio: skipping {error}");
    }
    tracing::debug!(commands = commands.len(), skipped = errors.len(), "script parsed");

    let app = folio::initialize(&config, Rc::new(TerminalHost::default()))?;
    let loader = LoaderHandle::spawn(AssetLoader::new(config.asset_root()))?;

    let mut driver = Driver {
        app,
        loader,
        width: cli.width,
        cols: cli.cols,
        format: if cli.json { FrameFormat::Json } else { FrameFormat::Ansi },
        out: io::stdout().lock(),
    };
    driver.run(commands)?;
    driver.app.unmount();

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}
