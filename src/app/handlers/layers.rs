//! Handler für Layer-Sichtbarkeit, Overlays und Layer-Baum.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Schaltet die Sichtbarkeit eines Layers der aktiven Surface um.
pub fn toggle_visibility(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    use_cases::layers::toggle_visibility(state, name)
}

/// Legt ein Vektor-Overlay auf der aktiven Surface an.
pub fn add_overlay(state: &mut AppState, name: String, feature_count: usize) -> anyhow::Result<()> {
    use_cases::layers::add_overlay(state, name, feature_count)
}

/// Entfernt einen Layer von der aktiven Surface.
pub fn remove(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    use_cases::layers::remove_layer(state, name)
}

/// Lädt einen Layer-Baum und propagiert Fehler an den Aufrufer.
pub fn load_tree(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::layers::load_tree(state, path)
}
