//! Layer-Typen des Layerstapels: entfernte WMS-Layer und lokale Vektor-Overlays.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Parameter einer WMS-Quelle (z.B. `LAYERS`, `FORMAT`, `TILED`).
///
/// Reihenfolge bleibt erhalten, damit gespiegelte Quellen identische
/// Anfragen erzeugen.
pub type SourceParams = IndexMap<String, serde_json::Value>;

/// Art der entfernten Quelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceKind {
    /// Gekachelte WMS-Quelle
    #[default]
    TileWms,
    /// Einzelbild-WMS-Quelle
    ImageWms,
}

/// Entfernte, parametrisierte Bild-/Kachelquelle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TileSource {
    /// Art der Quelle
    pub kind: SourceKind,
    /// Basis-URL des Dienstes (`None` = Konfiguration unvollständig)
    pub url: Option<String>,
    /// Anfrage-Parameter
    pub params: SourceParams,
}

/// Layer mit entfernter Quelle (WMS-Kacheln oder WMS-Einzelbild).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiledLayer {
    /// Eindeutiger Name innerhalb einer Surface
    pub name: String,
    /// Anzeigename (nur für TOC/Dialoge)
    pub title: String,
    /// Ob der Layer Feature-Info-Abfragen beantwortet
    pub queryable: bool,
    /// Sichtbarkeit
    pub visible: bool,
    /// Deckkraft (0.0 = transparent, 1.0 = opak)
    pub opacity: f64,
    /// Entfernte Quelle
    pub source: TileSource,
}

impl TiledLayer {
    /// Erstellt einen sichtbaren, opaken Kachel-Layer.
    pub fn new(name: impl Into<String>, title: impl Into<String>, source: TileSource) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            queryable: false,
            visible: true,
            opacity: 1.0,
            source,
        }
    }
}

/// Lokal gehaltenes Vektor-Overlay (z.B. aus KML/GeoJSON geladen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorLayer {
    /// Eindeutiger Name innerhalb einer Surface (meist Dateiname)
    pub name: String,
    /// Optionaler Anzeigename
    pub title: Option<String>,
    /// Sichtbarkeit
    pub visible: bool,
    /// Anzahl geladener Features
    pub feature_count: usize,
}

impl VectorLayer {
    /// Erstellt ein sichtbares Overlay.
    pub fn new(name: impl Into<String>, feature_count: usize) -> Self {
        Self {
            name: name.into(),
            title: None,
            visible: true,
            feature_count,
        }
    }
}

/// Ein Eintrag im Layerstapel einer Render-Surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Layer {
    /// Entfernte Quelle, wird in die Sekundär-Surface gespiegelt
    Tiled(TiledLayer),
    /// Lokales Overlay, wird nicht gespiegelt
    Vector(VectorLayer),
}

impl Layer {
    /// Identitätsschlüssel des Layers.
    pub fn name(&self) -> &str {
        match self {
            Layer::Tiled(layer) => &layer.name,
            Layer::Vector(layer) => &layer.name,
        }
    }

    /// Anzeigename; Vektor-Overlays ohne Titel zeigen ihren Namen.
    pub fn title(&self) -> &str {
        match self {
            Layer::Tiled(layer) => &layer.title,
            Layer::Vector(layer) => layer.title.as_deref().unwrap_or(&layer.name),
        }
    }

    /// Sichtbarkeit
    pub fn is_visible(&self) -> bool {
        match self {
            Layer::Tiled(layer) => layer.visible,
            Layer::Vector(layer) => layer.visible,
        }
    }

    /// Setzt die Sichtbarkeit.
    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Layer::Tiled(layer) => layer.visible = visible,
            Layer::Vector(layer) => layer.visible = visible,
        }
    }

    /// Ob der Layer für Feature-Info-Abfragen in Frage kommt (sichtbar + queryable).
    pub fn is_queryable(&self) -> bool {
        matches!(self, Layer::Tiled(layer) if layer.queryable && layer.visible)
    }
}
