use crate::core::{SurfaceSide, SyncPolicy};
use crate::shared::ViewerOptions;
use glam::DVec2;
use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,

    // === Kamera & Viewport ===
    /// Kamera der aktiven Surface auf Startwerte zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen (aktive Surface)
    ZoomInRequested,
    /// Stufenweise herauszoomen (aktive Surface)
    ZoomOutRequested,
    /// Größe des Kartencontainers hat sich geändert
    ViewportResized { size: [f64; 2] },
    /// Kamera einer Surface um Delta verschieben (Karteneinheiten)
    CameraPan { side: SurfaceSide, delta: DVec2 },
    /// Zoom-Level einer Surface relativ ändern
    CameraZoom { side: SurfaceSide, delta: f64 },
    /// Rotation einer Surface setzen (Radiant)
    CameraRotate { side: SurfaceSide, rotation: f64 },
    /// Surface auf eine Kartenposition zentrieren
    CenterOnRequested { side: SurfaceSide, center: DVec2 },

    // === Zeiger ===
    /// Zeiger über einer Surface bewegt
    PointerMoved {
        side: SurfaceSide,
        coordinate: DVec2,
        pixel: DVec2,
    },
    /// Klick auf eine Surface
    MapClicked {
        side: SurfaceSide,
        coordinate: DVec2,
        pixel: DVec2,
    },

    // === Layer (TOC) ===
    /// Sichtbarkeit eines Layers der aktiven Surface umschalten
    LayerVisibilityToggled { name: String },
    /// Vektor-Overlay auf der aktiven Surface anlegen
    OverlayAddRequested { name: String, feature_count: usize },
    /// Layer von der aktiven Surface entfernen
    LayerRemoveRequested { name: String },
    /// Layer-Baum aus Datei laden
    LayerTreeSelected { path: PathBuf },

    // === Doppelansicht ===
    /// Doppelansicht öffnen (`None` = Policy aus den Optionen)
    DualViewportRequested { policy: Option<SyncPolicy> },
    /// Sync-Policy im Dialog gewählt
    SyncPolicySelected { policy: SyncPolicy },
    /// Gesteuerte Surface im Dialog gewählt
    ActiveSurfaceSelected { side: SurfaceSide },
    /// Dialog der Doppelansicht geschlossen
    DualViewportCloseRequested,

    // === Optionen ===
    /// Optionen wurden geändert
    OptionsChanged { options: Box<ViewerOptions> },
}
