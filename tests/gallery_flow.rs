//! End-to-end flows through the public API: events in, actions and frames out.

use std::rc::Rc;
use std::time::Duration;

use folio::gallery::RecordingHost;
use folio::ui::{render, FrameFormat, GalleryView};
use folio::worker::{AssetLoader, LoaderHandle, WorkerMessage};
use folio::{handle_event, initialize, Action, AppState, Config, Event, LayoutMode, Section};

fn page(config: &Config) -> (AppState, Rc<RecordingHost>) {
    let host = Rc::new(RecordingHost::new());
    let state = initialize(config, host.clone()).unwrap();
    (state, host)
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn requested(actions: &[Action]) -> Vec<usize> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::LoadResource { index, .. } => Some(*index),
            _ => None,
        })
        .collect()
}

#[test]
fn compact_carousel_warms_only_new_neighbours() {
    let (mut state, _host) = page(&Config::default());

    let (_, actions) = send(&mut state, Event::Mount { width: 390 });
    assert_eq!(state.layout(), LayoutMode::Compact);
    assert_eq!(requested(&actions), vec![0, 1, 9]);

    let (changed, actions) = send(&mut state, Event::Next);
    assert!(changed);
    assert_eq!(requested(&actions), vec![2]);

    let (changed, actions) = send(&mut state, Event::GoTo(1));
    assert!(!changed);
    assert!(actions.is_empty());
}

#[test]
fn wide_grid_requests_every_tile_once() {
    let (mut state, _host) = page(&Config::default());

    let (_, actions) = send(&mut state, Event::Mount { width: 1280 });
    assert_eq!(requested(&actions), (0..10).collect::<Vec<_>>());

    let (flipped, actions) = send(&mut state, Event::Resize { width: 390 });
    assert!(flipped);
    assert!(actions.is_empty());

    let (flipped, _) = send(&mut state, Event::Resize { width: 400 });
    assert!(!flipped);
}

#[test]
fn swipes_paginate_only_past_the_threshold() {
    let (mut state, _host) = page(&Config::default());
    send(&mut state, Event::Mount { width: 390 });

    let (changed, _) = send(&mut state, Event::DragEnd { offset: 50.0, velocity: 300.0 });
    assert!(!changed, "clamping carousel cannot go back from the first slide");

    send(&mut state, Event::GoTo(4));
    send(&mut state, Event::DragEnd { offset: 50.0, velocity: 300.0 });
    assert_eq!(state.navigator.current_index(), 3);

    send(&mut state, Event::DragEnd { offset: -50.0, velocity: -300.0 });
    assert_eq!(state.navigator.current_index(), 4);

    let (changed, _) = send(&mut state, Event::DragEnd { offset: 5.0, velocity: 10.0 });
    assert!(!changed);
    assert_eq!(state.navigator.current_index(), 4);
}

#[test]
fn wrapping_navigator_cycles_through_the_catalog() {
    let mut config = Config::default();
    config.apply_overrides(&[("navigator".to_string(), "wrapping".to_string())].into());
    let (mut state, _host) = page(&config);
    send(&mut state, Event::Mount { width: 390 });

    send(&mut state, Event::Previous);
    assert_eq!(state.navigator.current_index(), 9);
    for _ in 0..11 {
        send(&mut state, Event::Next);
    }
    assert_eq!(state.navigator.current_index(), 0);
}

#[test]
fn host_effects_stay_balanced_on_every_close_path() {
    let (mut state, host) = page(&Config::default());
    send(&mut state, Event::Mount { width: 1280 });

    send(&mut state, Event::ActivateItem(3));
    assert!(host.scroll_suspended());
    assert!(host.cancel_key_listening());
    send(&mut state, Event::CloseButton);

    send(&mut state, Event::ActivateItem(4));
    send(&mut state, Event::Backdrop);

    send(&mut state, Event::ActivateItem(5));
    send(&mut state, Event::CancelKey);

    send(&mut state, Event::ActivateItem(6));
    send(&mut state, Event::Remount { width: 1280 });
    assert!(!state.overlays.lightbox_open());

    send(&mut state, Event::ActivateItem(7));
    drop(state);

    assert_eq!(host.suspends(), 5);
    assert_eq!(host.restores(), 5);
    assert_eq!(host.listens(), 5);
    assert_eq!(host.unlistens(), 5);
}

#[test]
fn switching_lightbox_items_keeps_one_suspension() {
    let (mut state, host) = page(&Config::default());
    send(&mut state, Event::Mount { width: 1280 });

    send(&mut state, Event::ActivateItem(0));
    send(&mut state, Event::ActivateItem(2));
    assert_eq!(state.overlays.selected_index(), Some(2));
    assert_eq!(host.suspends(), 1);

    send(&mut state, Event::ActivateItem(42));
    assert_eq!(state.overlays.selected_index(), Some(2));

    send(&mut state, Event::CancelKey);
    assert!(!host.scroll_suspended());
    assert!(!host.cancel_key_listening());
}

#[test]
fn menu_closes_when_the_layout_widens() {
    let (mut state, host) = page(&Config::default());
    send(&mut state, Event::Mount { width: 390 });

    send(&mut state, Event::ToggleMenu);
    assert!(state.overlays.menu_open());
    assert!(host.scroll_suspended());

    send(&mut state, Event::Resize { width: 1024 });
    assert!(!state.overlays.menu_open());
    assert!(!host.scroll_suspended());

    let (changed, _) = send(&mut state, Event::ToggleMenu);
    assert!(!changed);
}

#[test]
fn links_close_the_menu_and_emit_navigation() {
    let (mut state, _host) = page(&Config::default());
    send(&mut state, Event::Mount { width: 390 });
    send(&mut state, Event::ToggleMenu);

    let (changed, actions) = send(&mut state, Event::FollowLink(Section::About));
    assert!(changed);
    assert_eq!(
        actions,
        vec![Action::ScrollToSection {
            section: Section::About
        }]
    );
    assert!(!state.overlays.menu_open());

    let (_, actions) = send(&mut state, Event::FollowLink(Section::Contact));
    assert_eq!(
        actions,
        vec![Action::OpenContact {
            address: "mamin.create@gmail.com".to_string()
        }]
    );
}

#[test]
fn empty_catalog_turns_interaction_into_no_ops() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("empty.json");
    std::fs::write(&catalog, "[]").unwrap();

    let config = Config {
        catalog_file: Some(catalog.display().to_string()),
        ..Config::default()
    };
    let (mut state, host) = page(&config);

    let (_, actions) = send(&mut state, Event::Mount { width: 390 });
    assert!(actions.is_empty());
    for event in [Event::Next, Event::Previous, Event::GoTo(0), Event::ActivateCurrent] {
        let (changed, actions) = send(&mut state, event);
        assert!(!changed);
        assert!(actions.is_empty());
    }
    assert_eq!(host.suspends(), 0);
    assert!(matches!(state.compute_viewmodel().gallery, GalleryView::Empty { .. }));
}

#[test]
fn loader_completions_flip_loaded_flags() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/prity2.jpg"), b"jpeg").unwrap();

    let config = Config {
        asset_root: dir.path().display().to_string(),
        ..Config::default()
    };
    let (mut state, _host) = page(&config);
    let mut loader = LoaderHandle::spawn(AssetLoader::new(config.asset_root())).unwrap();

    let (_, actions) = send(&mut state, Event::Mount { width: 390 });
    for action in actions {
        if let Action::LoadResource { index, item_id, src } = action {
            loader.post(WorkerMessage::load(index, item_id, src)).unwrap();
        }
    }

    let responses = loader.wait_idle(Duration::from_secs(5)).unwrap();
    assert_eq!(responses.len(), 3);
    for response in responses {
        send(&mut state, response.into_event());
    }

    assert!(state.preload.is_loaded(0));
    assert!(!state.preload.is_loaded(1));
    let stats = state.preload.stats();
    assert_eq!(
        (stats.requests, stats.loaded, stats.failures, stats.stale),
        (3, 1, 2, 0)
    );
    match state.compute_viewmodel().gallery {
        GalleryView::Carousel(carousel) => assert!(carousel.loaded),
        other => panic!("expected a carousel, got {other:?}"),
    }

    // A failed neighbour is asked for again when the carousel comes back to it.
    send(&mut state, Event::GoTo(5));
    let (_, actions) = send(&mut state, Event::GoTo(0));
    assert!(requested(&actions).contains(&1));
    assert!(state.preload.stats().requests > 3);
}

#[test]
fn json_frames_describe_the_open_overlay() {
    let (mut state, _host) = page(&Config::default());
    send(&mut state, Event::Mount { width: 390 });
    send(&mut state, Event::ActivateCurrent);

    let frame = render(&state, 80, FrameFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
    assert_eq!(value["layout"], "compact");
    assert_eq!(value["gallery"]["kind"], "carousel");
    assert_eq!(value["lightbox"]["index"], 0);
    assert_eq!(value["scroll_locked"], true);

    let ansi = render(&state, 60, FrameFormat::Ansi).unwrap();
    assert!(ansi.contains("esc"));
}
