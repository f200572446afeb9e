//! Zustand des Doppelansicht-Controllers.

use crate::core::interaction::ListenerKey;
use crate::core::{RenderSurface, ReentrancyGuard, SharedCamera, SurfaceSide, SyncPolicy};
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

/// Rückmeldungen an den Host (Dialoge, TOC, Statusanzeige).
///
/// Alle Methoden sind optional; ungenutzte Hooks bleiben leer.
pub trait DualViewportHost {
    /// Doppelansicht wurde aufgebaut
    fn on_init(&mut self) {}

    /// Doppelansicht wird geschlossen (vor dem Abbau)
    fn on_end(&mut self) {}

    /// Die gesteuerte Surface hat gewechselt
    fn on_active_surface_change(&mut self, _side: SurfaceSide) {}
}

/// Host ohne Rückmeldungen.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl DualViewportHost for NoopHost {}

/// Konfigurationsfehler beim Aktivieren.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DualViewportError {
    /// Eine Surface hat kein auflösbares DOM-Ziel
    #[error("Surface {side:?} hat kein DOM-Ziel")]
    MissingDomTarget {
        /// Betroffene Seite
        side: SurfaceSide,
    },
    /// Beide Surfaces würden dasselbe DOM-Ziel belegen
    #[error("Primär- und Sekundär-Surface nutzen dasselbe DOM-Ziel '{0}'")]
    TargetConflict(String),
}

/// Zustandsmaschine der Doppelansicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DualViewportPhase {
    /// Einzelansicht
    #[default]
    Inactive,
    /// Doppelansicht mit gewählter Policy
    Active(SyncPolicy),
}

/// Zähler der Synchronisationsdurchläufe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncStats {
    /// Durchläufe, die über den Guard hinaus gekommen sind
    pub passes: u64,
    /// Vom Guard unterdrückte Rückweg-Aufrufe
    pub suppressed: u64,
}

/// Orchestriert Sekundär-Surface, Event-Weiterleitung und Kamera-Synchronisation.
pub struct DualViewportController {
    pub(super) phase: DualViewportPhase,
    pub(super) secondary_target: String,
    pub(super) secondary: Option<RenderSurface>,
    /// Eigene Kamera der Sekundär-Surface unter `Offset` (wird wiederverwendet)
    pub(super) offset_camera: Option<SharedCamera>,
    pub(super) active_side: SurfaceSide,
    /// Surface unter dem Mauszeiger (von den Pointer-Handlern gesetzt)
    pub(super) hovered_side: Rc<Cell<SurfaceSide>>,
    pub(super) guard: ReentrancyGuard,
    /// Seiten mit angehängtem Kamera-Listener
    pub(super) camera_listeners: HashSet<SurfaceSide>,
    /// Weitergeleitete Host-Handler auf der Sekundär-Surface
    pub(super) forwarded_keys: Vec<ListenerKey>,
    /// Eigene Pointer-Tracking-Handler je Seite
    pub(super) hover_keys: Vec<(SurfaceSide, ListenerKey)>,
    pub(super) host: Option<Box<dyn DualViewportHost>>,
    pub(super) stats: SyncStats,
}

impl DualViewportController {
    /// Erstellt einen inaktiven Controller für das gegebene Sekundär-DOM-Ziel.
    pub fn new(secondary_target: impl Into<String>) -> Self {
        Self {
            phase: DualViewportPhase::Inactive,
            secondary_target: secondary_target.into(),
            secondary: None,
            offset_camera: None,
            active_side: SurfaceSide::Primary,
            hovered_side: Rc::new(Cell::new(SurfaceSide::Primary)),
            guard: ReentrancyGuard::new(),
            camera_listeners: HashSet::new(),
            forwarded_keys: Vec::new(),
            hover_keys: Vec::new(),
            host: None,
            stats: SyncStats::default(),
        }
    }

    /// Ob die Doppelansicht aktiv ist.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, DualViewportPhase::Active(_))
    }

    /// Aktueller Zustand
    pub fn phase(&self) -> DualViewportPhase {
        self.phase
    }

    /// Aktive Policy (`None` in der Einzelansicht).
    pub fn policy(&self) -> Option<SyncPolicy> {
        match self.phase {
            DualViewportPhase::Active(policy) => Some(policy),
            DualViewportPhase::Inactive => None,
        }
    }

    /// DOM-Ziel der Sekundär-Surface
    pub fn secondary_target(&self) -> &str {
        &self.secondary_target
    }

    /// Seite, die Werkzeug-Eingaben erhält.
    pub fn active_side(&self) -> SurfaceSide {
        self.active_side
    }

    /// Seite unter dem Mauszeiger.
    pub fn hovered_side(&self) -> SurfaceSide {
        self.hovered_side.get()
    }

    /// Surface, die Werkzeug-Eingaben erhält.
    pub fn active_surface<'a>(&'a self, primary: &'a RenderSurface) -> &'a RenderSurface {
        self.surface(primary, self.active_side).unwrap_or(primary)
    }

    /// Mutable Variante von `active_surface`.
    pub fn active_surface_mut<'a>(
        &'a mut self,
        primary: &'a mut RenderSurface,
    ) -> &'a mut RenderSurface {
        match (self.active_side, self.is_active(), self.secondary.as_mut()) {
            (SurfaceSide::Secondary, true, Some(secondary)) => secondary,
            _ => primary,
        }
    }

    /// Sekundär-Surface; bleibt nach dem Schließen ausgeblendet erhalten.
    pub fn secondary_surface(&self) -> Option<&RenderSurface> {
        self.secondary.as_ref()
    }

    /// Mutable Sekundär-Surface.
    pub fn secondary_surface_mut(&mut self) -> Option<&mut RenderSurface> {
        self.secondary.as_mut()
    }

    /// Surface einer Seite; die Sekundär-Surface nur solange aktiv.
    pub fn surface<'a>(
        &'a self,
        primary: &'a RenderSurface,
        side: SurfaceSide,
    ) -> Option<&'a RenderSurface> {
        match side {
            SurfaceSide::Primary => Some(primary),
            SurfaceSide::Secondary if self.is_active() => self.secondary.as_ref(),
            SurfaceSide::Secondary => None,
        }
    }

    /// Ob auf einer Seite ein Kamera-Listener hängt.
    pub fn is_listening(&self, side: SurfaceSide) -> bool {
        self.camera_listeners.contains(&side)
    }

    /// Synchronisationszähler
    pub fn stats(&self) -> SyncStats {
        self.stats
    }
}

impl Default for DualViewportController {
    fn default() -> Self {
        Self::new(crate::shared::options::SECONDARY_TARGET)
    }
}
