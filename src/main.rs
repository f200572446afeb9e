//! Life Viewer (Headless).
//!
//! Lädt Optionen und Layer-Baum, baut die Primär-Surface auf und spielt
//! einen Zyklus der Doppelansicht durch (öffnen, verschieben, Policy
//! wechseln, schließen). Die Kamerazustände werden geloggt.

use anyhow::Context;
use glam::DVec2;
use life_viewer::core::load_layer_tree;
use life_viewer::{AppController, AppIntent, AppState, SurfaceSide, SyncPolicy, ViewerOptions};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Life Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = ViewerOptions::config_path();
    let mut options = ViewerOptions::load_from_file(&config_path);
    if let Some(path) = std::env::args().nth(1) {
        options.layer_tree_path = Some(PathBuf::from(path));
    }

    let layers = match options.layer_tree_path.as_deref() {
        Some(path) => load_layer_tree(path)
            .with_context(|| format!("Layer-Baum '{}' nicht ladbar", path.display()))?,
        None => {
            log::info!("Kein Layer-Baum angegeben, starte ohne Layer");
            Vec::new()
        }
    };

    let mut state = AppState::with_options(options, layers);
    let mut controller = AppController::new();
    run_cycle(&mut controller, &mut state)?;
    controller.handle_intent(&mut state, AppIntent::ExitRequested)?;

    log::info!("{} Commands ausgeführt", state.command_log.total());
    Ok(())
}

/// Spielt einen vollständigen Zyklus der Doppelansicht durch.
fn run_cycle(controller: &mut AppController, state: &mut AppState) -> anyhow::Result<()> {
    controller.handle_intent(
        state,
        AppIntent::DualViewportRequested {
            policy: Some(SyncPolicy::Mirrored),
        },
    )?;
    log_cameras(state, "gespiegelt");

    let step = state.view.primary.camera_snapshot().span_for_width(100.0);
    controller.handle_intent(
        state,
        AppIntent::CameraPan {
            side: SurfaceSide::Primary,
            delta: DVec2::new(step, 0.0),
        },
    )?;
    log_cameras(state, "nach Verschieben");

    controller.handle_intent(
        state,
        AppIntent::SyncPolicySelected {
            policy: SyncPolicy::Offset,
        },
    )?;
    log_cameras(state, "versetzt");

    controller.handle_intent(state, AppIntent::ZoomInRequested)?;
    log_cameras(state, "nach Zoom");

    controller.handle_intent(state, AppIntent::DualViewportCloseRequested)?;
    for notice in state.ui.drain_notices() {
        log::info!("Meldung: {:?}", notice);
    }
    log::info!(
        "Synchronisation: {:?}, Primär-Kamera: {:?}",
        state.view.dual.stats(),
        state.view.primary.camera_snapshot()
    );
    Ok(())
}

fn log_cameras(state: &AppState, label: &str) {
    for side in [SurfaceSide::Primary, SurfaceSide::Secondary] {
        if let Some(camera) = state.view.camera_snapshot(side) {
            log::info!(
                "[{}] {:?}: Zentrum ({:.2}, {:.2}), Zoom {:.2}, Rotation {:.3}",
                label,
                side,
                camera.center().x,
                camera.center().y,
                camera.zoom(),
                camera.rotation()
            );
        }
    }
}
