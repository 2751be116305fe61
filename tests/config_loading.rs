//! Configuration and catalog files read from disk.

use std::collections::BTreeMap;
use std::fs;
use std::rc::Rc;

use folio::catalog::load_catalog;
use folio::gallery::RecordingHost;
use folio::{handle_event, initialize, Config, Event, FolioError, NavigatorKind};

#[test]
fn config_file_then_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(
        &path,
        r#"
navigator = "wrapping"
breakpoint = 900
theme = "darkroom"
owner = "Ada Lens"
"#,
    )
    .unwrap();

    let mut config = Config::from_file(&path).unwrap();
    assert_eq!(config.navigator, NavigatorKind::Wrapping);
    assert_eq!(config.breakpoint, 900);
    assert!(config.menu_enabled);

    let overrides: BTreeMap<String, String> = [
        ("breakpoint".to_string(), "600".to_string()),
        ("menu_enabled".to_string(), "no".to_string()),
    ]
    .into();
    config.apply_overrides(&overrides);
    assert_eq!(config.breakpoint, 600);
    assert!(config.menu_enabled, "malformed boolean keeps the file value");
    assert_eq!(config.site_info().owner, "Ada Lens");
}

#[test]
fn unknown_and_mistyped_keys_are_rejected_in_files() {
    let dir = tempfile::tempdir().unwrap();

    let unknown = dir.path().join("unknown.toml");
    fs::write(&unknown, "scan_depth = 4\n").unwrap();
    assert!(matches!(Config::from_file(&unknown), Err(FolioError::Config(_))));

    let mistyped = dir.path().join("mistyped.toml");
    fs::write(&mistyped, "breakpoint = \"wide\"\n").unwrap();
    assert!(matches!(Config::from_file(&mistyped), Err(FolioError::Config(_))));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(Config::from_file(&missing), Err(FolioError::Io(_))));
}

#[test]
fn negative_swipe_threshold_in_a_file_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "swipe_threshold = -1.0\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, FolioError::Config(ref message) if message.contains("swipe_threshold")));

    fs::write(&path, "swipe_threshold = 0.0\n").unwrap();
    let config = Config::from_file(&path).unwrap();
    let mut state = initialize(&config, Rc::new(RecordingHost::new())).unwrap();
    handle_event(&mut state, &Event::Mount { width: 390 }).unwrap();
    let (changed, _) = handle_event(
        &mut state,
        &Event::DragEnd {
            offset: 0.0,
            velocity: 0.0,
        },
    )
    .unwrap();
    assert!(!changed, "a motionless release snaps back");
    assert_eq!(state.navigator.current_index(), 0);
}

#[test]
fn catalog_files_preserve_order() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("catalog.toml");
    fs::write(
        &toml_path,
        r#"
[[items]]
id = 7
src = "/images/c.jpg"
settings = "35mm"

[[items]]
id = 3
src = "/images/a.jpg"
"#,
    )
    .unwrap();

    let items = load_catalog(&toml_path).unwrap();
    let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![7, 3]);
    assert_eq!(items[1].settings, "");

    let json_path = dir.path().join("catalog.json");
    fs::write(
        &json_path,
        r#"{ "version": 1, "items": [ { "id": 2, "src": "/b.jpg", "settings": "f/2" } ] }"#,
    )
    .unwrap();
    assert_eq!(load_catalog(&json_path).unwrap()[0].settings, "f/2");
}

#[test]
fn invalid_catalogs_fail_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.json");
    fs::write(
        &path,
        r#"[ { "id": 1, "src": "/a.jpg" }, { "id": 1, "src": "/b.jpg" } ]"#,
    )
    .unwrap();

    let config = Config {
        catalog_file: Some(path.display().to_string()),
        ..Config::default()
    };
    let result = initialize(&config, Rc::new(RecordingHost::new()));
    assert!(matches!(result, Err(FolioError::Catalog(_))));

    let unsupported = dir.path().join("catalog.yaml");
    fs::write(&unsupported, "items: []\n").unwrap();
    assert!(matches!(load_catalog(&unsupported), Err(FolioError::Catalog(_))));
}

#[test]
fn configured_theme_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let theme_path = dir.path().join("sepia.toml");
    fs::write(
        &theme_path,
        r##"
name = "sepia"

[colors]
text = "#3b2f2f"
text_dim = "#7a6a5a"
heading = "#2b1d0e"
accent = "#a0522d"
border = "#c8b89a"
pending = "#b0a08a"
dot_inactive = "#d8c8aa"
overlay_fg = "#f5ecd7"
overlay_bg = "#1e1610"
section_fg = "#f5ecd7"
section_bg = "#3b2f2f"
"##,
    )
    .unwrap();

    let config = Config {
        theme_file: Some(theme_path.display().to_string()),
        ..Config::default()
    };
    let state = initialize(&config, Rc::new(RecordingHost::new())).unwrap();
    assert_eq!(state.theme.name, "sepia");
}
