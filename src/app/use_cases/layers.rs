//! Use-Case-Funktionen für den Layerstapel (TOC).
//!
//! Sichtbarkeit und Overlays wirken immer auf die aktive Surface.

use crate::app::AppState;
use crate::core::{layer_mirror, load_layer_tree, Layer, VectorLayer};
use anyhow::Context;
use std::path::PathBuf;

/// Schaltet die Sichtbarkeit eines Layers der aktiven Surface um.
pub fn toggle_visibility(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    let visible = state
        .view
        .active_surface_mut()
        .toggle_layer_visibility(name)
        .with_context(|| format!("Sichtbarkeit von '{}' nicht änderbar", name))?;
    log::info!(
        "Layer '{}' auf {:?}: {}",
        name,
        state.view.dual.active_side(),
        if visible { "sichtbar" } else { "ausgeblendet" }
    );
    Ok(())
}

/// Legt ein Vektor-Overlay auf der aktiven Surface an.
pub fn add_overlay(state: &mut AppState, name: String, feature_count: usize) -> anyhow::Result<()> {
    let overlay = Layer::Vector(VectorLayer::new(name.clone(), feature_count));
    state
        .view
        .active_surface_mut()
        .add_layer(overlay)
        .with_context(|| format!("Overlay '{}' nicht hinzugefügt", name))?;
    log::info!("Overlay '{}' mit {} Features hinzugefügt", name, feature_count);
    Ok(())
}

/// Entfernt einen Layer von der aktiven Surface.
pub fn remove_layer(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    state
        .view
        .active_surface_mut()
        .remove_layer(name)
        .with_context(|| format!("Layer '{}' nicht entfernt", name))?;
    log::info!("Layer '{}' entfernt", name);
    Ok(())
}

/// Lädt einen Layer-Baum und ersetzt den Layerstapel der Primär-Surface.
///
/// Bei geöffneter Doppelansicht wird die Sekundär-Surface neu gespiegelt.
pub fn load_tree(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let layers = load_layer_tree(&path)?;
    let count = layers.len();
    state.view.primary.replace_layers(layers);
    if state.view.dual.is_active() {
        let mirrored = layer_mirror::mirror(&state.view.primary);
        if let Some(secondary) = state.view.dual.secondary_surface_mut() {
            secondary.replace_layers(mirrored);
        }
    }
    state.options.layer_tree_path = Some(path);
    state.ui.status_message = Some(format!("{} Layer geladen", count));
    Ok(())
}
