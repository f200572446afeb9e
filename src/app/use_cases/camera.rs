//! Use-Case-Funktionen für Kamera-Steuerung.
//!
//! Alle Schreibzugriffe laufen über `ViewState::update_camera`, damit die
//! Doppelansicht jede Änderung mitbekommt.

use crate::app::AppState;
use crate::core::SurfaceSide;
use glam::DVec2;

/// Setzt die Kamera einer Surface auf die Startwerte zurück.
pub fn reset_camera(state: &mut AppState, side: SurfaceSide) {
    let center = state.options.initial_center();
    let zoom = state.options.initial_zoom;
    state.view.update_camera(side, |camera| {
        let rotated = camera.set_rotation(0.0);
        let zoomed = camera.set_zoom(zoom);
        let moved = camera.set_center(center);
        rotated | zoomed | moved
    });
}

/// Verschiebt die Kamera einer Surface um ein Delta in Karteneinheiten.
pub fn pan(state: &mut AppState, side: SurfaceSide, delta: DVec2) {
    state.view.update_camera(side, |camera| camera.pan(delta));
}

/// Ändert den Zoom-Level einer Surface relativ (geklemmt).
pub fn zoom_by(state: &mut AppState, side: SurfaceSide, delta: f64) {
    state.view.update_camera(side, |camera| camera.zoom_by(delta));
}

/// Setzt die Rotation einer Surface.
pub fn rotate(state: &mut AppState, side: SurfaceSide, rotation: f64) {
    state
        .view
        .update_camera(side, |camera| camera.set_rotation(rotation));
}

/// Zentriert eine Surface auf eine Kartenposition.
pub fn center_on(state: &mut AppState, side: SurfaceSide, center: DVec2) {
    state
        .view
        .update_camera(side, |camera| camera.set_center(center));
}
