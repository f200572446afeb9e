//! Sync-Policy, Surface-Seiten, Reentrancy-Guard und Versatz-Projektion.

use super::camera::CameraState;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Strategie, mit der Kamera-Änderungen zwischen den Surfaces wirken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncPolicy {
    /// Beide Surfaces teilen sich ein Kamera-Objekt
    #[default]
    Mirrored,
    /// Eigene Kamera, um eine Surface-Breite versetzt (nebeneinanderliegende Ausschnitte)
    Offset,
}

/// Seite einer Doppelansicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceSide {
    /// Linke, dauerhafte Surface
    #[default]
    Primary,
    /// Rechte, abgeleitete Surface
    Secondary,
}

impl SurfaceSide {
    /// Die jeweils andere Seite.
    pub fn other(self) -> Self {
        match self {
            SurfaceSide::Primary => SurfaceSide::Secondary,
            SurfaceSide::Secondary => SurfaceSide::Primary,
        }
    }

    /// Vorzeichen des Versatzes, wenn diese Seite die Quelle ist.
    pub fn offset_sign(self) -> f64 {
        match self {
            SurfaceSide::Primary => 1.0,
            SurfaceSide::Secondary => -1.0,
        }
    }
}

/// Markiert Surfaces, die gerade Ziel eines propagierten Schreibvorgangs sind.
///
/// Kamera-Änderungen einer markierten Surface lösen keinen neuen
/// Synchronisationsdurchlauf aus.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    guarded: HashSet<SurfaceSide>,
}

impl ReentrancyGuard {
    /// Erstellt einen leeren Guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markiert eine Surface. Liefert `false`, wenn sie schon markiert war.
    pub fn enter(&mut self, side: SurfaceSide) -> bool {
        self.guarded.insert(side)
    }

    /// Hebt die Markierung auf.
    pub fn leave(&mut self, side: SurfaceSide) {
        self.guarded.remove(&side);
    }

    /// Ob die Surface gerade markiert ist.
    pub fn is_guarded(&self, side: SurfaceSide) -> bool {
        self.guarded.contains(&side)
    }

    /// Ob irgendeine Surface markiert ist.
    pub fn is_engaged(&self) -> bool {
        !self.guarded.is_empty()
    }

    /// Entfernt alle Markierungen.
    pub fn clear(&mut self) {
        self.guarded.clear();
    }
}

/// Berechnet das Zielzentrum der Versatz-Policy.
///
/// `span = sign * resolution * width_px`; das Zentrum wird entlang der
/// Rotationsrichtung um `span` verschoben, sodass beide Ausschnitte
/// lückenlos nebeneinander liegen.
pub fn offset_center(source: &CameraState, source_side: SurfaceSide, width_px: f64) -> DVec2 {
    let span = source_side.offset_sign() * source.span_for_width(width_px);
    let rotation = source.rotation();
    source.center() + span * DVec2::new(rotation.cos(), rotation.sin())
}
