use glam::DVec2;
use life_viewer::core::load_layer_tree;
use life_viewer::{
    AppCommand, AppController, AppIntent, AppState, DualViewportNotice, SurfaceSide, SyncPolicy,
    ViewerOptions,
};
use std::path::{Path, PathBuf};
use std::rc::Rc;

fn state_with_fixture() -> AppState {
    let layers = load_layer_tree(Path::new("tests/fixtures/layers.json"))
        .expect("Fixture sollte ladbar sein");
    let options = ViewerOptions {
        container_size: [800.0, 600.0],
        ..ViewerOptions::default()
    };
    AppState::with_options(options, layers)
}

fn handle(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn secondary_center(state: &AppState) -> DVec2 {
    state
        .view
        .camera_snapshot(SurfaceSide::Secondary)
        .expect("Sekundär-Surface aktiv")
        .center()
}

#[test]
fn test_open_pan_offset_close_cycle() {
    let mut controller = AppController::new();
    let mut state = state_with_fixture();

    handle(
        &mut controller,
        &mut state,
        AppIntent::DualViewportRequested {
            policy: Some(SyncPolicy::Mirrored),
        },
    );
    assert!(state.is_dual_view_active());
    let secondary = state
        .view
        .surface(SurfaceSide::Secondary)
        .expect("Sekundär-Surface aktiv");
    assert!(Rc::ptr_eq(state.view.primary.camera(), secondary.camera()));
    assert_eq!(secondary.layers().len(), 4);

    handle(
        &mut controller,
        &mut state,
        AppIntent::CameraPan {
            side: SurfaceSide::Secondary,
            delta: DVec2::new(250.0, 0.0),
        },
    );
    assert_eq!(
        state.view.primary.camera_snapshot().center(),
        secondary_center(&state)
    );

    handle(
        &mut controller,
        &mut state,
        AppIntent::SyncPolicySelected {
            policy: SyncPolicy::Offset,
        },
    );
    let primary = state.view.primary.camera_snapshot();
    let expected = primary.center() + DVec2::new(primary.span_for_width(400.0), 0.0);
    assert!((secondary_center(&state) - expected).length() < 1e-6);

    handle(
        &mut controller,
        &mut state,
        AppIntent::DualViewportCloseRequested,
    );
    assert!(!state.is_dual_view_active());
    assert_eq!(state.view.dual.active_side(), SurfaceSide::Primary);
    assert!(state.view.surface(SurfaceSide::Secondary).is_none());

    let tail: Vec<&AppCommand> = state.command_log.tail(3).collect();
    assert!(matches!(
        tail[0],
        AppCommand::SetActiveSurface {
            side: SurfaceSide::Primary
        }
    ));
    assert!(matches!(
        tail[1],
        AppCommand::ChangeSyncPolicy {
            policy: SyncPolicy::Mirrored
        }
    ));
    assert!(matches!(tail[2], AppCommand::DeactivateDualViewport));
}

#[test]
fn test_ui_receives_notices_in_order() {
    let mut controller = AppController::new();
    let mut state = state_with_fixture();

    handle(
        &mut controller,
        &mut state,
        AppIntent::DualViewportRequested { policy: None },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::ActiveSurfaceSelected {
            side: SurfaceSide::Secondary,
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::DualViewportCloseRequested,
    );

    assert_eq!(
        state.ui.drain_notices(),
        vec![
            DualViewportNotice::Initialized,
            DualViewportNotice::ActiveSurfaceChanged(SurfaceSide::Secondary),
            DualViewportNotice::ActiveSurfaceChanged(SurfaceSide::Primary),
            DualViewportNotice::Ended,
        ]
    );
}

#[test]
fn test_clicks_on_secondary_reach_host_handlers_once_per_session() {
    let mut controller = AppController::new();
    let mut state = state_with_fixture();
    let click = |side| AppIntent::MapClicked {
        side,
        coordinate: DVec2::new(42.0, 7.0),
        pixel: DVec2::new(10.0, 10.0),
    };

    for _ in 0..2 {
        handle(
            &mut controller,
            &mut state,
            AppIntent::DualViewportRequested {
                policy: Some(SyncPolicy::Offset),
            },
        );
        handle(&mut controller, &mut state, click(SurfaceSide::Secondary));
        handle(
            &mut controller,
            &mut state,
            AppIntent::DualViewportCloseRequested,
        );
    }
    handle(&mut controller, &mut state, click(SurfaceSide::Secondary));

    assert_eq!(state.view.readout.clicks.get(), 2);
    assert_eq!(
        state.view.readout.last_click.get(),
        Some(DVec2::new(42.0, 7.0))
    );
}

#[test]
fn test_toc_toggles_follow_active_surface() {
    let mut controller = AppController::new();
    let mut state = state_with_fixture();
    handle(
        &mut controller,
        &mut state,
        AppIntent::DualViewportRequested {
            policy: Some(SyncPolicy::Offset),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::ActiveSurfaceSelected {
            side: SurfaceSide::Secondary,
        },
    );

    handle(
        &mut controller,
        &mut state,
        AppIntent::LayerVisibilityToggled {
            name: "ortho".to_string(),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::OverlayAddRequested {
            name: "gps-track".to_string(),
            feature_count: 120,
        },
    );

    let secondary = state
        .view
        .surface(SurfaceSide::Secondary)
        .expect("Sekundär-Surface aktiv");
    assert!(!secondary.layer("ortho").expect("gespiegelt").is_visible());
    assert!(secondary.layer("gps-track").is_some());
    assert!(state.view.primary.layer("ortho").expect("vorhanden").is_visible());
    assert!(state.view.primary.layer("gps-track").is_none());
}

#[test]
fn test_unknown_layer_toggle_propagates_error() {
    let mut controller = AppController::new();
    let mut state = state_with_fixture();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::LayerVisibilityToggled {
            name: "does-not-exist".to_string(),
        },
    );

    assert!(result.is_err());
}

#[test]
fn test_layer_tree_intent_replaces_primary_stack() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.layer_count(), 0);

    handle(
        &mut controller,
        &mut state,
        AppIntent::LayerTreeSelected {
            path: PathBuf::from("tests/fixtures/layers.json"),
        },
    );

    assert_eq!(state.layer_count(), 4);
    assert_eq!(
        state.options.layer_tree_path.as_deref(),
        Some(Path::new("tests/fixtures/layers.json"))
    );
}

#[test]
fn test_resize_keeps_offset_adjacent() {
    let mut controller = AppController::new();
    let mut state = state_with_fixture();
    handle(
        &mut controller,
        &mut state,
        AppIntent::DualViewportRequested {
            policy: Some(SyncPolicy::Offset),
        },
    );

    handle(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [1600.0, 900.0],
        },
    );

    let primary = state.view.primary.camera_snapshot();
    let expected = primary.center() + DVec2::new(primary.span_for_width(800.0), 0.0);
    assert!((secondary_center(&state) - expected).length() < 1e-6);
}

#[test]
fn test_exit_requested_closes_view_and_detaches_host_handlers() {
    let mut controller = AppController::new();
    let mut state = state_with_fixture();
    handle(
        &mut controller,
        &mut state,
        AppIntent::DualViewportRequested {
            policy: Some(SyncPolicy::Offset),
        },
    );

    handle(&mut controller, &mut state, AppIntent::ExitRequested);
    handle(
        &mut controller,
        &mut state,
        AppIntent::MapClicked {
            side: SurfaceSide::Primary,
            coordinate: DVec2::new(1.0, 2.0),
            pixel: DVec2::new(3.0, 4.0),
        },
    );

    assert!(state.should_exit);
    assert!(!state.is_dual_view_active());
    assert_eq!(state.view.readout.clicks.get(), 0);
    assert!(matches!(
        state.command_log.tail(2).next(),
        Some(AppCommand::RequestExit)
    ));
    assert_eq!(state.command_log.total(), state.command_log.len());
}
