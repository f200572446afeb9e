//! Handler für Kamera, Viewport und Zeiger-Events.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{InteractionEvent, InteractionKind, SurfaceSide};
use glam::DVec2;

/// Setzt die Kamera einer Surface auf die Startwerte zurück.
pub fn reset_camera(state: &mut AppState, side: SurfaceSide) {
    use_cases::camera::reset_camera(state, side);
}

/// Verschiebt die Kamera einer Surface.
pub fn pan(state: &mut AppState, side: SurfaceSide, delta: DVec2) {
    use_cases::camera::pan(state, side, delta);
}

/// Ändert den Zoom-Level einer Surface.
pub fn zoom(state: &mut AppState, side: SurfaceSide, delta: f64) {
    use_cases::camera::zoom_by(state, side, delta);
}

/// Setzt die Rotation einer Surface.
pub fn rotate(state: &mut AppState, side: SurfaceSide, rotation: f64) {
    use_cases::camera::rotate(state, side, rotation);
}

/// Zentriert eine Surface auf eine Kartenposition.
pub fn center(state: &mut AppState, side: SurfaceSide, center: DVec2) {
    use_cases::camera::center_on(state, side, center);
}

/// Aktualisiert die Containergröße.
pub fn set_viewport_size(state: &mut AppState, size: [f64; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verteilt ein Zeiger-Event an die Handler der Surface.
pub fn dispatch_interaction(state: &mut AppState, side: SurfaceSide, event: InteractionEvent) {
    match state.view.surface(side) {
        Some(surface) => {
            let handled = surface.dispatch(&event);
            log::debug!("{:?} auf {:?}: {} Handler", event.kind, side, handled);
            if event.kind == InteractionKind::Click {
                let candidates: Vec<&str> =
                    surface.queryable_layers().map(|layer| layer.name()).collect();
                log::debug!("Feature-Info-Kandidaten: {:?}", candidates);
            }
        }
        None => log::debug!("{:?} auf ausgeblendeter Surface {:?} verworfen", event.kind, side),
    }
}
