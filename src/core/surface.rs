//! Render-Surface: ein Kartenviewport mit Layerstapel, Kamera und DOM-Ziel.

use super::camera::{CameraState, SharedCamera};
use super::interaction::{
    HandlerRegistry, InteractionEvent, InteractionHandler, InteractionKind, ListenerKey,
};
use super::layer::Layer;
use glam::DVec2;
use std::rc::Rc;

/// Fehler bei Änderungen am Layerstapel einer Surface.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// Layer-Namen sind innerhalb einer Surface eindeutig
    #[error("Layer '{0}' existiert bereits auf dieser Surface")]
    DuplicateLayerName(String),
    /// Kein Layer mit diesem Namen
    #[error("Layer '{0}' nicht gefunden")]
    UnknownLayer(String),
}

/// Platzbedarf der Surface im Kartencontainer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFootprint {
    /// Anteil an der Containerbreite (1.0 = volle Breite)
    pub width_fraction: f64,
    /// Ob das DOM-Element sichtbar ist
    pub visible: bool,
}

impl SurfaceFootprint {
    /// Volle Breite, sichtbar (Einzelansicht).
    pub const FULL: Self = Self {
        width_fraction: 1.0,
        visible: true,
    };
    /// Halbe Breite, sichtbar (Doppelansicht).
    pub const HALF: Self = Self {
        width_fraction: 0.5,
        visible: true,
    };
    /// Halbe Breite, ausgeblendet (Sekundär-Surface nach dem Schließen).
    pub const HIDDEN: Self = Self {
        width_fraction: 0.5,
        visible: false,
    };
}

/// Unabhängiger Kartenviewport.
pub struct RenderSurface {
    target: String,
    layers: Vec<Layer>,
    camera: SharedCamera,
    handlers: HandlerRegistry,
    footprint: SurfaceFootprint,
    container_size: DVec2,
}

impl RenderSurface {
    /// Erstellt eine Surface auf einem DOM-Ziel mit Layerstapel und Kamera.
    pub fn new(target: impl Into<String>, layers: Vec<Layer>, camera: SharedCamera) -> Self {
        Self {
            target: target.into(),
            layers,
            camera,
            handlers: HandlerRegistry::new(),
            footprint: SurfaceFootprint::FULL,
            container_size: DVec2::ZERO,
        }
    }

    /// DOM-Ziel-ID (dient zugleich als Identität der Surface)
    pub fn target(&self) -> &str {
        &self.target
    }

    // ── Kamera ──────────────────────────────────────────────────

    /// Aktuelle Kamera (ggf. mit einer anderen Surface geteilt).
    pub fn camera(&self) -> &SharedCamera {
        &self.camera
    }

    /// Setzt die Kamera (eigenes oder geteiltes Objekt).
    pub fn set_camera(&mut self, camera: SharedCamera) {
        self.camera = camera;
    }

    /// Kopie des aktuellen Kamera-Zustands.
    pub fn camera_snapshot(&self) -> CameraState {
        self.camera.borrow().clone()
    }

    /// Gibt `true` zurück, wenn beide Surfaces dasselbe Kamera-Objekt nutzen.
    pub fn shares_camera_with(&self, other: &RenderSurface) -> bool {
        Rc::ptr_eq(&self.camera, &other.camera)
    }

    // ── Layer ───────────────────────────────────────────────────

    /// Layerstapel in Zeichenreihenfolge (unten nach oben).
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Ersetzt den kompletten Layerstapel.
    pub fn replace_layers(&mut self, layers: Vec<Layer>) {
        self.layers = layers;
    }

    /// Sucht einen Layer per Name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name() == name)
    }

    /// Legt einen Layer oben auf den Stapel.
    pub fn add_layer(&mut self, layer: Layer) -> Result<(), SurfaceError> {
        if self.layer(layer.name()).is_some() {
            return Err(SurfaceError::DuplicateLayerName(layer.name().to_string()));
        }
        self.layers.push(layer);
        Ok(())
    }

    /// Entfernt einen Layer per Name und gibt ihn zurück.
    pub fn remove_layer(&mut self, name: &str) -> Result<Layer, SurfaceError> {
        let index = self
            .layers
            .iter()
            .position(|layer| layer.name() == name)
            .ok_or_else(|| SurfaceError::UnknownLayer(name.to_string()))?;
        Ok(self.layers.remove(index))
    }

    /// Setzt die Sichtbarkeit eines Layers.
    pub fn set_layer_visible(&mut self, name: &str, visible: bool) -> Result<(), SurfaceError> {
        let layer = self.layer_mut(name)?;
        layer.set_visible(visible);
        Ok(())
    }

    /// Schaltet die Sichtbarkeit eines Layers um und liefert den neuen Wert.
    pub fn toggle_layer_visibility(&mut self, name: &str) -> Result<bool, SurfaceError> {
        let layer = self.layer_mut(name)?;
        let visible = !layer.is_visible();
        layer.set_visible(visible);
        Ok(visible)
    }

    /// Sichtbare, abfragbare Layer (Kandidaten für Feature-Info).
    pub fn queryable_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|layer| layer.is_queryable())
    }

    fn layer_mut(&mut self, name: &str) -> Result<&mut Layer, SurfaceError> {
        self.layers
            .iter_mut()
            .find(|layer| layer.name() == name)
            .ok_or_else(|| SurfaceError::UnknownLayer(name.to_string()))
    }

    // ── Interaktion ─────────────────────────────────────────────

    /// Registriert einen Interaktions-Handler.
    pub fn on(&mut self, kind: InteractionKind, handler: InteractionHandler) -> ListenerKey {
        self.handlers.register(kind, handler)
    }

    /// Meldet einen Interaktions-Handler ab.
    pub fn un(&mut self, key: ListenerKey) -> bool {
        self.handlers.unregister(key)
    }

    /// Leitet ein Event an alle passenden Handler weiter.
    pub fn dispatch(&self, event: &InteractionEvent) -> usize {
        self.handlers.dispatch(event)
    }

    /// Registrierte Handler (read-only)
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    // ── Größe ───────────────────────────────────────────────────

    /// Aktueller Platzbedarf im Container.
    pub fn footprint(&self) -> SurfaceFootprint {
        self.footprint
    }

    /// Ändert den Platzbedarf (Breitenanteil, Sichtbarkeit).
    pub fn set_footprint(&mut self, footprint: SurfaceFootprint) {
        self.footprint = footprint;
    }

    /// Größenänderung des Kartencontainers in Pixeln.
    pub fn update_size(&mut self, container_size: DVec2) {
        self.container_size = container_size;
    }

    /// Containergröße in Pixeln
    pub fn container_size(&self) -> DVec2 {
        self.container_size
    }

    /// Effektive Größe der Surface in Pixeln.
    pub fn size(&self) -> DVec2 {
        DVec2::new(
            self.container_size.x * self.footprint.width_fraction,
            self.container_size.y,
        )
    }

    /// Effektive Breite in Pixeln.
    pub fn width_px(&self) -> f64 {
        self.size().x
    }
}
