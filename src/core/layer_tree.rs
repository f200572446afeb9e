//! Einlesen des Layer-Baums (JSON) in einen Layerstapel.
//!
//! Format: Liste von Einträgen mit `type` = `TileLayer`, `ImageLayer`,
//! `group` oder `folder`. Gruppen und Ordner enthalten weitere Einträge in
//! `nodes`. Der erste Eintrag der Datei liegt oben im Stapel.

use super::layer::{Layer, SourceKind, SourceParams, TileSource, TiledLayer};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Fehler beim Parsen des Layer-Baums.
#[derive(Debug, thiserror::Error)]
pub enum LayerTreeError {
    /// Ungültiges JSON oder falsche Struktur
    #[error("Layer-Baum ungültig: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct TreeNode {
    #[serde(rename = "type")]
    kind: String,
    name: Option<String>,
    title: Option<String>,
    #[serde(default)]
    queryable: bool,
    #[serde(default = "default_visible")]
    visible: bool,
    opacity: Option<f64>,
    source: Option<TreeSource>,
    #[serde(default)]
    nodes: Vec<TreeNode>,
}

#[derive(Debug, Deserialize)]
struct TreeSource {
    url: Option<String>,
    #[serde(default)]
    params: SourceParams,
}

fn default_visible() -> bool {
    true
}

/// Parst einen Layer-Baum und liefert den Stapel in Zeichenreihenfolge (unten → oben).
///
/// Unbekannte Eintragstypen, Layer ohne Namen und doppelte Namen werden
/// mit Warnung übersprungen.
pub fn parse_layer_tree(json: &str) -> Result<Vec<Layer>, LayerTreeError> {
    let nodes: Vec<TreeNode> = serde_json::from_str(json)?;

    let mut flat = Vec::new();
    flatten(nodes, &mut flat);

    let mut seen = HashSet::new();
    let mut layers: Vec<Layer> = flat
        .into_iter()
        .filter(|layer| {
            let fresh = seen.insert(layer.name.clone());
            if !fresh {
                log::warn!("Doppelter Layer-Name '{}' übersprungen", layer.name);
            }
            fresh
        })
        .map(Layer::Tiled)
        .collect();
    // Datei-Reihenfolge ist oben → unten
    layers.reverse();
    Ok(layers)
}

/// Liest und parst eine Layer-Baum-Datei.
pub fn load_layer_tree(path: &Path) -> anyhow::Result<Vec<Layer>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Layer-Baum nicht lesbar: {}", path.display()))?;
    let layers = parse_layer_tree(&content)
        .with_context(|| format!("Layer-Baum fehlerhaft: {}", path.display()))?;
    log::info!("{} Layer geladen aus: {}", layers.len(), path.display());
    Ok(layers)
}

/// Tiefensuche in Datei-Reihenfolge.
fn flatten(nodes: Vec<TreeNode>, out: &mut Vec<TiledLayer>) {
    for node in nodes {
        let kind = match node.kind.as_str() {
            "TileLayer" => SourceKind::TileWms,
            "ImageLayer" => SourceKind::ImageWms,
            "group" | "folder" => {
                flatten(node.nodes, out);
                continue;
            }
            other => {
                log::warn!("Unbekannter Layer-Typ '{}' übersprungen", other);
                continue;
            }
        };
        if let Some(layer) = to_tiled(node, kind) {
            out.push(layer);
        }
    }
}

fn to_tiled(node: TreeNode, kind: SourceKind) -> Option<TiledLayer> {
    let Some(name) = node.name else {
        log::warn!("Layer ohne Namen übersprungen (Titel: {:?})", node.title);
        return None;
    };
    let (url, params) = match node.source {
        Some(source) => (source.url, source.params),
        None => (None, SourceParams::new()),
    };
    Some(TiledLayer {
        title: node.title.unwrap_or_else(|| name.clone()),
        name,
        queryable: node.queryable,
        visible: node.visible,
        opacity: node.opacity.unwrap_or(1.0),
        source: TileSource { kind, url, params },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"[
        {"type": "TileLayer", "name": "top", "title": "Oben", "queryable": true,
         "source": {"url": "https://wms.example/a", "params": {"LAYERS": "a", "TILED": true}}},
        {"type": "folder", "name": "f", "title": "Ordner", "nodes": [
            {"type": "ImageLayer", "name": "img", "title": "Bild", "visible": false, "opacity": 0.5,
             "source": {"url": "https://wms.example/b", "params": {"LAYERS": "b"}}},
            {"type": "group", "name": "g", "nodes": [
                {"type": "TileLayer", "name": "deep", "title": "Tief",
                 "source": {"url": "https://wms.example/c"}}
            ]}
        ]},
        {"type": "TileLayer", "name": "bottom", "title": "Unten",
         "source": {"url": "https://wms.example/d"}}
    ]"#;

    #[test]
    fn test_parse_orders_bottom_to_top() {
        let layers = parse_layer_tree(TREE).expect("gültiger Baum");

        let names: Vec<&str> = layers.iter().map(Layer::name).collect();
        assert_eq!(names, vec!["bottom", "deep", "img", "top"]);
    }

    #[test]
    fn test_parse_reads_fields() {
        let layers = parse_layer_tree(TREE).expect("gültiger Baum");

        let Layer::Tiled(img) = &layers[2] else {
            panic!("Tiled-Layer erwartet");
        };
        assert_eq!(img.source.kind, SourceKind::ImageWms);
        assert!(!img.visible);
        assert_eq!(img.opacity, 0.5);

        let Layer::Tiled(top) = &layers[3] else {
            panic!("Tiled-Layer erwartet");
        };
        assert!(top.queryable);
        assert_eq!(top.source.params.get("TILED"), Some(&serde_json::json!(true)));
        let keys: Vec<&str> = top.source.params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["LAYERS", "TILED"]);
    }

    #[test]
    fn test_parse_skips_unknown_nameless_and_duplicates() {
        let json = r#"[
            {"type": "VectorLayer", "name": "v"},
            {"type": "TileLayer", "title": "ohne Namen"},
            {"type": "TileLayer", "name": "a"},
            {"type": "TileLayer", "name": "a"}
        ]"#;

        let layers = parse_layer_tree(json).expect("gültiger Baum");

        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].title(), "a");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_layer_tree(r#"{"type": "TileLayer"}"#).is_err());
    }
}
