//! Übergänge der Doppelansicht: activate, change_policy, set_active_surface, deactivate.

use super::state::{DualViewportController, DualViewportError, DualViewportHost, DualViewportPhase};
use crate::core::interaction::{InteractionEvent, InteractionHandlers, InteractionKind};
use crate::core::{
    layer_mirror, CameraState, RenderSurface, SurfaceFootprint, SurfaceSide, SyncPolicy,
};
use std::rc::Rc;

impl DualViewportController {
    /// Baut die Sekundär-Surface auf und teilt die Ansicht.
    ///
    /// Ein erneuter Aufruf im aktiven Zustand ist ein No-op.
    pub fn activate(
        &mut self,
        primary: &mut RenderSurface,
        policy: SyncPolicy,
        handlers: InteractionHandlers,
        host: Box<dyn DualViewportHost>,
    ) -> Result<(), DualViewportError> {
        if self.is_active() {
            log::warn!("Doppelansicht bereits aktiv, activate ignoriert");
            return Ok(());
        }
        self.validate_targets(primary)?;

        let layers = layer_mirror::mirror(primary);
        let mut secondary = match self.secondary.take() {
            Some(mut existing) => {
                existing.replace_layers(layers);
                existing.set_camera(Rc::clone(primary.camera()));
                existing
            }
            None => RenderSurface::new(
                self.secondary_target.clone(),
                layers,
                Rc::clone(primary.camera()),
            ),
        };
        secondary.update_size(primary.container_size());

        for (kind, handler) in handlers.entries() {
            self.forwarded_keys.push(secondary.on(kind, handler));
        }
        self.attach_hover_tracking(primary, &mut secondary);

        // Ansicht teilen, bevor die Policy den Versatz aus der Breite berechnet
        primary.set_footprint(SurfaceFootprint::HALF);
        secondary.set_footprint(SurfaceFootprint::HALF);

        self.secondary = Some(secondary);
        self.active_side = SurfaceSide::Primary;
        self.hovered_side.set(SurfaceSide::Primary);
        self.phase = DualViewportPhase::Active(policy);
        self.apply_policy(primary, policy);

        self.host = Some(host);
        if let Some(host) = self.host.as_mut() {
            host.on_init();
        }

        log::info!(
            "Doppelansicht aktiviert ({:?}, {} Handler weitergeleitet)",
            policy,
            self.forwarded_keys.len()
        );
        Ok(())
    }

    /// Wechselt die Sync-Policy und leitet die Sekundär-Kamera neu ab.
    pub fn change_policy(&mut self, primary: &RenderSurface, policy: SyncPolicy) {
        if !self.is_active() {
            log::debug!("change_policy ohne aktive Doppelansicht ignoriert");
            return;
        }
        self.phase = DualViewportPhase::Active(policy);
        self.apply_policy(primary, policy);
        log::info!("Sync-Policy gewechselt: {:?}", policy);
    }

    /// Wählt die Surface, die Werkzeug-Eingaben erhält, und informiert den Host.
    pub fn set_active_surface(&mut self, side: SurfaceSide) {
        if !self.is_active() {
            log::debug!("set_active_surface ohne aktive Doppelansicht ignoriert");
            return;
        }
        self.active_side = side;
        if let Some(host) = self.host.as_mut() {
            host.on_active_surface_change(side);
        }
        log::info!("Aktive Surface: {:?}", side);
    }

    /// Schließt die Doppelansicht und stellt die Einzelansicht wieder her.
    ///
    /// Alle Handler werden abgemeldet, bevor die Sekundär-Surface vom
    /// Primär-Kamera-Objekt gelöst wird.
    pub fn deactivate(&mut self, primary: &mut RenderSurface) {
        if !self.is_active() {
            log::debug!("deactivate ohne aktive Doppelansicht ignoriert");
            return;
        }
        if let Some(host) = self.host.as_mut() {
            host.on_end();
        }

        self.camera_listeners.clear();
        self.guard.clear();

        let forwarded = std::mem::take(&mut self.forwarded_keys);
        let hover = std::mem::take(&mut self.hover_keys);
        for (side, key) in hover {
            match side {
                SurfaceSide::Primary => {
                    primary.un(key);
                }
                SurfaceSide::Secondary => {
                    if let Some(secondary) = self.secondary.as_mut() {
                        secondary.un(key);
                    }
                }
            }
        }

        primary.set_footprint(SurfaceFootprint::FULL);
        if let Some(secondary) = self.secondary.as_mut() {
            for key in forwarded {
                secondary.un(key);
            }
            // Verwaiste Surface darf die Primär-Kamera nicht mehr referenzieren
            let detached = secondary.camera_snapshot().into_shared();
            secondary.set_camera(detached);
            secondary.set_footprint(SurfaceFootprint::HIDDEN);
        }

        self.active_side = SurfaceSide::Primary;
        self.hovered_side.set(SurfaceSide::Primary);
        self.host = None;
        self.phase = DualViewportPhase::Inactive;
        log::info!("Doppelansicht geschlossen");
    }

    /// Setzt Kamera und Kamera-Listener der Sekundär-Surface gemäß Policy.
    pub(super) fn apply_policy(&mut self, primary: &RenderSurface, policy: SyncPolicy) {
        let Some(secondary) = self.secondary.as_mut() else {
            return;
        };
        match policy {
            SyncPolicy::Mirrored => {
                secondary.set_camera(Rc::clone(primary.camera()));
                self.camera_listeners.remove(&SurfaceSide::Secondary);
                self.camera_listeners.insert(SurfaceSide::Primary);
            }
            SyncPolicy::Offset => {
                let snapshot: CameraState = primary.camera_snapshot();
                let camera = self
                    .offset_camera
                    .get_or_insert_with(|| snapshot.clone().into_shared());
                *camera.borrow_mut() = snapshot;
                secondary.set_camera(Rc::clone(camera));
                self.camera_listeners.insert(SurfaceSide::Primary);
                self.camera_listeners.insert(SurfaceSide::Secondary);
                self.synchronize(primary, SurfaceSide::Primary);
            }
        }
    }

    fn validate_targets(&self, primary: &RenderSurface) -> Result<(), DualViewportError> {
        let result = if primary.target().trim().is_empty() {
            Err(DualViewportError::MissingDomTarget {
                side: SurfaceSide::Primary,
            })
        } else if self.secondary_target.trim().is_empty() {
            Err(DualViewportError::MissingDomTarget {
                side: SurfaceSide::Secondary,
            })
        } else if primary.target() == self.secondary_target {
            Err(DualViewportError::TargetConflict(
                self.secondary_target.clone(),
            ))
        } else {
            Ok(())
        };
        if let Err(err) = &result {
            log::warn!("Doppelansicht nicht aktivierbar: {}", err);
        }
        result
    }

    /// Merkt sich, über welcher Surface der Zeiger zuletzt bewegt wurde.
    fn attach_hover_tracking(&mut self, primary: &mut RenderSurface, secondary: &mut RenderSurface) {
        for (side, surface) in [
            (SurfaceSide::Primary, primary),
            (SurfaceSide::Secondary, secondary),
        ] {
            let hovered = Rc::clone(&self.hovered_side);
            let key = surface.on(
                InteractionKind::PointerMove,
                Rc::new(move |_event: &InteractionEvent| hovered.set(side)),
            );
            self.hover_keys.push((side, key));
        }
    }
}
