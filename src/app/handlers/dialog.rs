//! Handler für Anwendungssteuerung und Optionen.

use crate::app::AppState;
use crate::shared::ViewerOptions;
use std::path::Path;

/// Markiert die Anwendung zum Beenden und räumt die Ansicht ab.
pub fn request_exit(state: &mut AppState) {
    let detached = state.view.shutdown();
    log::info!("Beenden angefordert, {} Host-Handler abgemeldet", detached);
    state.should_exit = true;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Zoom-Grenzen bestehender Kameras bleiben unverändert; sie gelten erst für
/// neu erzeugte Kameras.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) -> anyhow::Result<()> {
    apply_options_at(state, options, &ViewerOptions::config_path())
}

fn apply_options_at(
    state: &mut AppState,
    options: ViewerOptions,
    path: &Path,
) -> anyhow::Result<()> {
    state.options = options.sanitized();
    state.options.save_to_file(path)
}
