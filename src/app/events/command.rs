use crate::core::{InteractionEvent, SurfaceSide, SyncPolicy};
use crate::shared::ViewerOptions;
use glam::DVec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,

    // === Kamera & Viewport ===
    /// Kamera einer Surface auf Startwerte setzen
    ResetCamera { side: SurfaceSide },
    /// Kamera einer Surface verschieben
    PanCamera { side: SurfaceSide, delta: DVec2 },
    /// Zoom-Level einer Surface relativ ändern
    ZoomCamera { side: SurfaceSide, delta: f64 },
    /// Rotation einer Surface setzen
    RotateCamera { side: SurfaceSide, rotation: f64 },
    /// Zentrum einer Surface setzen
    CenterCamera { side: SurfaceSide, center: DVec2 },
    /// Containergröße setzen
    SetViewportSize { size: [f64; 2] },

    // === Zeiger ===
    /// Interaktions-Event an die Handler einer Surface verteilen
    DispatchInteraction {
        side: SurfaceSide,
        event: InteractionEvent,
    },

    // === Layer ===
    /// Sichtbarkeit eines Layers der aktiven Surface umschalten
    ToggleLayerVisibility { name: String },
    /// Vektor-Overlay auf der aktiven Surface anlegen
    AddVectorOverlay { name: String, feature_count: usize },
    /// Layer von der aktiven Surface entfernen
    RemoveLayer { name: String },
    /// Layer-Baum laden und als Primär-Layerstapel setzen
    LoadLayerTree { path: PathBuf },

    // === Doppelansicht ===
    /// Doppelansicht aufbauen
    ActivateDualViewport { policy: SyncPolicy },
    /// Sync-Policy wechseln
    ChangeSyncPolicy { policy: SyncPolicy },
    /// Gesteuerte Surface wechseln
    SetActiveSurface { side: SurfaceSide },
    /// Doppelansicht abbauen
    DeactivateDualViewport,

    // === Optionen ===
    /// Optionen übernehmen
    ApplyOptions { options: Box<ViewerOptions> },
}
