//! Kamera-Änderungen und Propagation zwischen Primär- und Sekundär-Surface.

use super::state::DualViewportController;
use crate::core::sync::offset_center;
use crate::core::{CameraState, RenderSurface, SharedCamera, SurfaceSide};
use std::rc::Rc;

impl DualViewportController {
    /// Schreibt die Kamera einer Seite und meldet die Änderung.
    ///
    /// `update` liefert `true`, wenn sich etwas geändert hat; nur dann wird
    /// synchronisiert. In der Einzelansicht ist nur die Primär-Seite schreibbar.
    pub fn update_camera<F>(&mut self, primary: &RenderSurface, side: SurfaceSide, update: F) -> bool
    where
        F: FnOnce(&mut CameraState) -> bool,
    {
        let Some(camera) = self.camera_of(primary, side) else {
            return false;
        };
        let changed = update(&mut *camera.borrow_mut());
        if changed {
            self.camera_changed(primary, side);
        }
        changed
    }

    /// Kamera-Listener: wird nach jeder Kamera-Änderung einer Seite aufgerufen.
    pub fn camera_changed(&mut self, primary: &RenderSurface, side: SurfaceSide) {
        if !self.is_active() || !self.is_listening(side) {
            return;
        }
        self.synchronize(primary, side);
    }

    /// Überträgt die Kamera der Quell-Seite auf die andere Seite.
    ///
    /// Unter `Mirrored` teilen sich beide Seiten das Objekt, es gibt nichts
    /// zu tun. Unter `Offset` werden Rotation, Zoom und Zentrum (in dieser
    /// Reihenfolge) geschrieben, jeweils nur bei Abweichung.
    pub(super) fn synchronize(&mut self, primary: &RenderSurface, source: SurfaceSide) {
        let target = source.other();
        if self.guard.is_guarded(target) || self.guard.is_guarded(source) {
            self.stats.suppressed += 1;
            log::debug!("Synchronisation {:?} → {:?} unterdrückt", source, target);
            return;
        }
        let Some(secondary) = self.secondary.as_ref() else {
            return;
        };
        self.stats.passes += 1;

        let (source_surface, target_surface) = match source {
            SurfaceSide::Primary => (primary, secondary),
            SurfaceSide::Secondary => (secondary, primary),
        };
        if source_surface.shares_camera_with(target_surface) {
            return;
        }
        let source_camera = source_surface.camera_snapshot();
        let center = offset_center(&source_camera, source, source_surface.width_px());
        let target_camera = Rc::clone(target_surface.camera());

        self.guard.enter(target);
        if target_camera
            .borrow_mut()
            .set_rotation(source_camera.rotation())
        {
            self.camera_changed(primary, target);
        }
        if target_camera.borrow_mut().match_zoom(&source_camera) {
            self.camera_changed(primary, target);
        }
        if target_camera.borrow_mut().set_center(center) {
            self.camera_changed(primary, target);
        }
        self.guard.leave(target);
    }

    fn camera_of(&self, primary: &RenderSurface, side: SurfaceSide) -> Option<SharedCamera> {
        self.surface(primary, side)
            .map(|surface| Rc::clone(surface.camera()))
    }
}
