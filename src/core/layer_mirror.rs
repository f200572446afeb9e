//! Spiegelt den Layerstapel einer Surface für eine zweite Surface.
//!
//! Nur Layer mit entfernter Quelle werden übernommen; lokale Vektor-Overlays
//! bleiben auf der Quell-Surface.

use super::layer::{Layer, TiledLayer};
use super::surface::RenderSurface;

/// Baut einen neuen Layerstapel aus den Tiled-Layern der Quell-Surface.
///
/// Reihenfolge (unten nach oben) und Sichtbarkeit bleiben erhalten. Layer
/// ohne Quell-URL werden trotzdem gespiegelt und zeigen dann eben nichts an.
pub fn mirror(source: &RenderSurface) -> Vec<Layer> {
    let mirrored: Vec<Layer> = source
        .layers()
        .iter()
        .filter_map(|layer| match layer {
            Layer::Tiled(tiled) => Some(Layer::Tiled(mirror_tiled(tiled))),
            Layer::Vector(_) => None,
        })
        .collect();

    log::debug!(
        "Layer gespiegelt: {} von {} (Quelle '{}')",
        mirrored.len(),
        source.layers().len(),
        source.target()
    );
    mirrored
}

fn mirror_tiled(layer: &TiledLayer) -> TiledLayer {
    if layer.source.url.is_none() {
        log::warn!("Layer '{}' hat keine Quell-URL", layer.name);
    }
    TiledLayer {
        name: layer.name.clone(),
        title: layer.title.clone(),
        queryable: layer.queryable,
        visible: layer.visible,
        opacity: layer.opacity,
        source: layer.source.clone(),
    }
}
