//! Kamera-Zustand einer Render-Surface: Zentrum, Zoom, Rotation, Auflösung.

use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Gemeinsam nutzbarer Kamera-Zustand.
///
/// Unter `SyncPolicy::Mirrored` zeigen Primär- und Sekundär-Surface auf
/// dasselbe Objekt; Identität wird mit `Rc::ptr_eq` geprüft.
pub type SharedCamera = Rc<RefCell<CameraState>>;

/// Zoom-Grenzen und Auflösungsmodell einer Kamera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConstraints {
    /// Minimaler Zoom-Level
    pub min_zoom: f64,
    /// Maximaler Zoom-Level
    pub max_zoom: f64,
    /// Auflösung (Karteneinheiten pro Pixel) bei Zoom 0
    pub max_resolution: f64,
}

impl ZoomConstraints {
    /// Auflösung für einen Zoom-Level: `max_resolution / 2^zoom`.
    pub fn resolution_for_zoom(&self, zoom: f64) -> f64 {
        self.max_resolution / zoom.exp2()
    }

    /// Zoom-Level für eine Auflösung (Umkehrung von `resolution_for_zoom`).
    pub fn zoom_for_resolution(&self, resolution: f64) -> f64 {
        (self.max_resolution / resolution).log2()
    }

    /// Begrenzt einen Zoom-Level auf `[min_zoom, max_zoom]`.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

impl Default for ZoomConstraints {
    fn default() -> Self {
        Self {
            min_zoom: crate::shared::options::MIN_ZOOM,
            max_zoom: crate::shared::options::MAX_ZOOM,
            max_resolution: crate::shared::options::MAX_RESOLUTION,
        }
    }
}

/// Kamera einer Render-Surface.
///
/// Zoom und Auflösung werden immer gemeinsam geschrieben, damit die
/// Invariante `resolution == max_resolution / 2^zoom > 0` hält.
/// Alle Setter liefern `true`, wenn sich der gespeicherte Wert geändert hat.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    center: DVec2,
    zoom: f64,
    rotation: f64,
    resolution: f64,
    constraints: ZoomConstraints,
}

impl CameraState {
    /// Erstellt eine Kamera mit Zentrum und (begrenztem) Zoom-Level.
    pub fn new(center: DVec2, zoom: f64, constraints: ZoomConstraints) -> Self {
        let zoom = constraints.clamp_zoom(zoom);
        Self {
            center,
            zoom,
            rotation: 0.0,
            resolution: constraints.resolution_for_zoom(zoom),
            constraints,
        }
    }

    /// Verpackt die Kamera als gemeinsam nutzbares Objekt.
    pub fn into_shared(self) -> SharedCamera {
        Rc::new(RefCell::new(self))
    }

    /// Zentrum in Karteneinheiten
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Zoom-Level
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Rotation in Radiant
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Karteneinheiten pro Pixel
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Zoom-Grenzen
    pub fn constraints(&self) -> ZoomConstraints {
        self.constraints
    }

    /// Setzt das Zentrum.
    pub fn set_center(&mut self, center: DVec2) -> bool {
        if self.center == center {
            return false;
        }
        self.center = center;
        true
    }

    /// Setzt den Zoom-Level (begrenzt) und leitet die Auflösung ab.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let zoom = self.constraints.clamp_zoom(zoom);
        if self.zoom == zoom {
            return false;
        }
        self.zoom = zoom;
        self.resolution = self.constraints.resolution_for_zoom(zoom);
        true
    }

    /// Setzt die Auflösung direkt; der Zoom-Level wird daraus abgeleitet.
    ///
    /// Nicht-positive Auflösungen werden ignoriert.
    pub fn set_resolution(&mut self, resolution: f64) -> bool {
        if resolution <= 0.0 || !resolution.is_finite() || self.resolution == resolution {
            return false;
        }
        let zoom = self.constraints.zoom_for_resolution(resolution);
        let clamped = self.constraints.clamp_zoom(zoom);
        if clamped != zoom {
            return self.set_zoom(clamped);
        }
        self.zoom = zoom;
        self.resolution = resolution;
        true
    }

    /// Setzt die Rotation in Radiant.
    pub fn set_rotation(&mut self, rotation: f64) -> bool {
        if self.rotation == rotation {
            return false;
        }
        self.rotation = rotation;
        true
    }

    /// Verschiebt das Zentrum um ein Delta in Karteneinheiten.
    pub fn pan(&mut self, delta: DVec2) -> bool {
        self.set_center(self.center + delta)
    }

    /// Ändert den Zoom-Level um `delta` Stufen (positiv = hinein).
    pub fn zoom_by(&mut self, delta: f64) -> bool {
        self.set_zoom(self.zoom + delta)
    }

    /// Übernimmt Zoom und Auflösung bitgenau von einer anderen Kamera.
    ///
    /// Umgeht die Neuberechnung über `exp2`, damit beide Surfaces exakt
    /// dieselbe Auflösung tragen.
    pub(crate) fn match_zoom(&mut self, other: &CameraState) -> bool {
        if self.zoom == other.zoom && self.resolution == other.resolution {
            return false;
        }
        self.zoom = other.zoom;
        self.resolution = other.resolution;
        true
    }

    /// Breite des sichtbaren Ausschnitts in Karteneinheiten.
    pub fn span_for_width(&self, width_px: f64) -> f64 {
        self.resolution * width_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn constraints() -> ZoomConstraints {
        ZoomConstraints {
            min_zoom: 0.0,
            max_zoom: 20.0,
            max_resolution: 1024.0,
        }
    }

    #[test]
    fn test_resolution_follows_zoom() {
        let mut camera = CameraState::new(DVec2::ZERO, 0.0, constraints());
        assert_relative_eq!(camera.resolution(), 1024.0);

        camera.set_zoom(3.0);
        assert_relative_eq!(camera.resolution(), 128.0);

        camera.zoom_by(1.0);
        assert_relative_eq!(camera.resolution(), 64.0);
    }

    #[test]
    fn test_resolution_is_monotonic_and_positive() {
        let c = constraints();
        let mut last = f64::MAX;
        for step in 0..=40 {
            let res = c.resolution_for_zoom(step as f64 * 0.5);
            assert!(res > 0.0);
            assert!(res < last);
            last = res;
        }
    }

    #[test]
    fn test_set_resolution_derives_zoom() {
        let mut camera = CameraState::new(DVec2::ZERO, 0.0, constraints());

        assert!(camera.set_resolution(2.0));

        assert_eq!(camera.resolution(), 2.0);
        assert_relative_eq!(camera.zoom(), 9.0);
    }

    #[test]
    fn test_set_resolution_rejects_non_positive() {
        let mut camera = CameraState::new(DVec2::ZERO, 4.0, constraints());
        let before = camera.clone();

        assert!(!camera.set_resolution(0.0));
        assert!(!camera.set_resolution(-3.0));

        assert_eq!(camera, before);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = CameraState::new(DVec2::ZERO, 50.0, constraints());
        assert_eq!(camera.zoom(), 20.0);

        camera.set_zoom(-4.0);
        assert_eq!(camera.zoom(), 0.0);
    }

    #[test]
    fn test_setters_report_changes_only() {
        let mut camera = CameraState::new(DVec2::new(1.0, 2.0), 5.0, constraints());

        assert!(!camera.set_center(DVec2::new(1.0, 2.0)));
        assert!(camera.set_center(DVec2::new(3.0, 2.0)));
        assert!(!camera.set_zoom(5.0));
        assert!(!camera.set_rotation(0.0));
        assert!(camera.set_rotation(0.5));
        assert!(!camera.pan(DVec2::ZERO));
    }

    #[test]
    fn test_match_zoom_copies_exact_pair() {
        let mut source = CameraState::new(DVec2::ZERO, 0.0, constraints());
        source.set_resolution(3.0);
        let mut target = CameraState::new(DVec2::ZERO, 1.0, constraints());

        assert!(target.match_zoom(&source));
        assert!(!target.match_zoom(&source));

        assert_eq!(target.resolution(), 3.0);
        assert_eq!(target.zoom(), source.zoom());
    }

    #[test]
    fn test_span_for_width() {
        let mut camera = CameraState::new(DVec2::ZERO, 0.0, constraints());
        camera.set_resolution(2.0);
        assert_relative_eq!(camera.span_for_width(400.0), 800.0);
    }
}
