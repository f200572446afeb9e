//! Use-Case-Funktionen für die Größe des Kartencontainers.

use crate::app::AppState;
use crate::core::SurfaceSide;
use glam::DVec2;

/// Übernimmt eine neue Containergröße für beide Surfaces.
///
/// Unter `Offset` hängt der Versatz von der Surface-Breite ab, daher wird
/// die Sekundär-Kamera anschließend aus der Primär-Kamera neu abgeleitet.
pub fn resize(state: &mut AppState, size: [f64; 2]) {
    let size = DVec2::from_array(size);
    if state.view.primary.container_size() == size {
        return;
    }
    state.view.primary.update_size(size);
    if let Some(secondary) = state.view.dual.secondary_surface_mut() {
        secondary.update_size(size);
    }
    state
        .view
        .dual
        .camera_changed(&state.view.primary, SurfaceSide::Primary);
    log::debug!("Containergröße: {}x{}", size.x, size.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SyncPolicy;
    use approx::assert_relative_eq;

    #[test]
    fn resize_updates_primary_width() {
        let mut state = AppState::new();

        resize(&mut state, [1000.0, 500.0]);

        assert_relative_eq!(state.view.primary.width_px(), 1000.0);
    }

    #[test]
    fn resize_under_offset_recomputes_secondary_center() {
        let mut state = AppState::new();
        crate::app::use_cases::dual_viewport::activate(&mut state, SyncPolicy::Offset)
            .expect("aktivierbar");

        resize(&mut state, [2000.0, 600.0]);

        let primary = state.view.primary.camera_snapshot();
        let secondary = state
            .view
            .camera_snapshot(SurfaceSide::Secondary)
            .expect("Sekundär-Surface aktiv");
        let expected = primary.center().x + primary.resolution() * 1000.0;
        assert_relative_eq!(secondary.center().x, expected, epsilon = 1e-6);
    }
}
