//! Zentrale Konfiguration des Viewers.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{SyncPolicy, ZoomConstraints};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Kamera ──────────────────────────────────────────────────────────

/// Startzentrum (EPSG:32628, Karteneinheiten = Meter).
pub const INITIAL_CENTER: [f64; 2] = [326_834.62, 3_139_762.92];
/// Start-Zoom-Level.
pub const INITIAL_ZOOM: f64 = 15.0;
/// Minimaler Zoom-Level.
pub const MIN_ZOOM: f64 = 0.0;
/// Maximaler Zoom-Level.
pub const MAX_ZOOM: f64 = 28.0;
/// Auflösung bei Zoom 0 (Karteneinheiten pro Pixel).
pub const MAX_RESOLUTION: f64 = 156_543.033_928_041;
/// Zoom-Schritt bei Menü-Buttons / Shortcuts (in Zoom-Stufen).
pub const ZOOM_STEP: f64 = 1.0;

// ── Surfaces ────────────────────────────────────────────────────────

/// DOM-Ziel der Primär-Surface.
pub const PRIMARY_TARGET: &str = "map";
/// DOM-Ziel der Sekundär-Surface.
pub const SECONDARY_TARGET: &str = "map2";
/// Standardgröße des Kartencontainers in Pixeln.
pub const CONTAINER_SIZE: [f64; 2] = [1280.0, 720.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `life_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Startzentrum
    pub initial_center: [f64; 2],
    /// Start-Zoom-Level
    pub initial_zoom: f64,
    /// Minimaler Zoom-Level
    pub min_zoom: f64,
    /// Maximaler Zoom-Level
    pub max_zoom: f64,
    /// Auflösung bei Zoom 0
    #[serde(default = "default_max_resolution")]
    pub max_resolution: f64,
    /// Zoom-Schritt für Zoom-In/Out
    pub zoom_step: f64,

    // ── Surfaces ────────────────────────────────────────────────
    /// DOM-Ziel der Primär-Surface
    pub primary_target: String,
    /// DOM-Ziel der Sekundär-Surface
    pub secondary_target: String,
    /// Containergröße in Pixeln
    pub container_size: [f64; 2],

    // ── Doppelansicht ───────────────────────────────────────────
    /// Policy beim Öffnen der Doppelansicht
    #[serde(default)]
    pub default_sync_policy: SyncPolicy,

    // ── Layer ───────────────────────────────────────────────────
    /// Pfad zum Layer-Baum (JSON)
    #[serde(default)]
    pub layer_tree_path: Option<PathBuf>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            max_resolution: MAX_RESOLUTION,
            zoom_step: ZOOM_STEP,

            primary_target: PRIMARY_TARGET.to_string(),
            secondary_target: SECONDARY_TARGET.to_string(),
            container_size: CONTAINER_SIZE,

            default_sync_policy: SyncPolicy::Mirrored,

            layer_tree_path: None,
        }
    }
}

/// Serde-Default für `max_resolution` (Abwärtskompatibilität).
fn default_max_resolution() -> f64 {
    MAX_RESOLUTION
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt ungültige Kamera-Werte durch die Standardwerte.
    ///
    /// Zoom-Grenzen müssen endlich sein und `min_zoom <= max_zoom` erfüllen,
    /// `max_resolution` muss endlich und positiv sein. Sonst läuft
    /// `f64::clamp` in `CameraState::new` in einen Panic bzw. die Auflösung
    /// wird negativ.
    pub fn sanitized(mut self) -> Self {
        let zoom_valid = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom <= self.max_zoom;
        if !zoom_valid {
            log::warn!(
                "Ungültige Zoom-Grenzen [{}, {}], verwende [{}, {}]",
                self.min_zoom,
                self.max_zoom,
                MIN_ZOOM,
                MAX_ZOOM
            );
            self.min_zoom = MIN_ZOOM;
            self.max_zoom = MAX_ZOOM;
        }
        if !(self.max_resolution.is_finite() && self.max_resolution > 0.0) {
            log::warn!(
                "Ungültige max_resolution {}, verwende {}",
                self.max_resolution,
                MAX_RESOLUTION
            );
            self.max_resolution = MAX_RESOLUTION;
        }
        if !self.initial_zoom.is_finite() {
            log::warn!(
                "Ungültiger initial_zoom {}, verwende {}",
                self.initial_zoom,
                INITIAL_ZOOM
            );
            self.initial_zoom = INITIAL_ZOOM;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("life_viewer"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("life_viewer.toml")
    }

    /// Zoom-Grenzen für neue Kameras.
    pub fn zoom_constraints(&self) -> ZoomConstraints {
        ZoomConstraints {
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            max_resolution: self.max_resolution,
        }
    }

    /// Startzentrum als Vektor.
    pub fn initial_center(&self) -> DVec2 {
        DVec2::from_array(self.initial_center)
    }

    /// Containergröße als Vektor.
    pub fn container_size(&self) -> DVec2 {
        DVec2::from_array(self.container_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_keeps_policy() {
        let options = ViewerOptions {
            default_sync_policy: SyncPolicy::Offset,
            ..ViewerOptions::default()
        };

        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: ViewerOptions = toml::from_str(&text).expect("parsebar");

        assert_eq!(parsed, options);
        assert!(text.contains("default_sync_policy = \"offset\""));
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let text = r#"
            initial_center = [0.0, 0.0]
            initial_zoom = 3.0
            min_zoom = 1.0
            max_zoom = 20.0
            zoom_step = 0.5
            primary_target = "map"
            secondary_target = "map2"
            container_size = [800.0, 600.0]
        "#;

        let parsed: ViewerOptions = toml::from_str(text).expect("parsebar");

        assert_eq!(parsed.max_resolution, MAX_RESOLUTION);
        assert_eq!(parsed.default_sync_policy, SyncPolicy::Mirrored);
        assert!(parsed.layer_tree_path.is_none());
    }

    #[test]
    fn test_load_from_missing_file_falls_back() {
        let options = ViewerOptions::load_from_file(Path::new("/nonexistent/life_viewer.toml"));
        assert_eq!(options, ViewerOptions::default());
    }

    #[test]
    fn test_sanitized_keeps_valid_options() {
        let options = ViewerOptions {
            min_zoom: 2.0,
            max_zoom: 18.0,
            max_resolution: 1000.0,
            ..ViewerOptions::default()
        };

        assert_eq!(options.clone().sanitized(), options);
    }

    #[test]
    fn test_inverted_zoom_bounds_fall_back() {
        let options = ViewerOptions {
            min_zoom: 20.0,
            max_zoom: 5.0,
            ..ViewerOptions::default()
        }
        .sanitized();

        assert_eq!(options.min_zoom, MIN_ZOOM);
        assert_eq!(options.max_zoom, MAX_ZOOM);
    }

    #[test]
    fn test_non_finite_zoom_bounds_fall_back() {
        for (min_zoom, max_zoom) in [(f64::NAN, 10.0), (0.0, f64::NAN), (0.0, f64::INFINITY)] {
            let options = ViewerOptions {
                min_zoom,
                max_zoom,
                ..ViewerOptions::default()
            }
            .sanitized();

            assert_eq!(options.min_zoom, MIN_ZOOM);
            assert_eq!(options.max_zoom, MAX_ZOOM);
        }
    }

    #[test]
    fn test_non_positive_max_resolution_falls_back() {
        for max_resolution in [0.0, -10.0, f64::NAN] {
            let options = ViewerOptions {
                max_resolution,
                ..ViewerOptions::default()
            }
            .sanitized();

            assert_eq!(options.max_resolution, MAX_RESOLUTION);
            let resolution = options
                .zoom_constraints()
                .resolution_for_zoom(options.initial_zoom);
            assert!(resolution > 0.0);
        }
    }

    #[test]
    fn test_non_finite_initial_zoom_falls_back() {
        let options = ViewerOptions {
            initial_zoom: f64::NAN,
            ..ViewerOptions::default()
        }
        .sanitized();

        assert_eq!(options.initial_zoom, INITIAL_ZOOM);
    }

    #[test]
    fn test_load_from_file_sanitizes_inverted_bounds() {
        let path = std::env::temp_dir().join(format!(
            "life_viewer_inverted_{}.toml",
            std::process::id()
        ));
        let text = r#"
            initial_center = [0.0, 0.0]
            initial_zoom = 10.0
            min_zoom = 20.0
            max_zoom = 5.0
            max_resolution = -10.0
            zoom_step = 1.0
            primary_target = "map"
            secondary_target = "map2"
            container_size = [800.0, 600.0]
        "#;
        std::fs::write(&path, text).expect("Temp-Datei schreibbar");

        let options = ViewerOptions::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(options.min_zoom, MIN_ZOOM);
        assert_eq!(options.max_zoom, MAX_ZOOM);
        assert_eq!(options.max_resolution, MAX_RESOLUTION);
        let camera = crate::core::CameraState::new(
            options.initial_center(),
            options.initial_zoom,
            options.zoom_constraints(),
        );
        assert_eq!(camera.zoom(), 10.0);
        assert!(camera.resolution() > 0.0);
    }
}
