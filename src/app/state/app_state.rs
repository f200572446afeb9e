use crate::app::CommandLog;
use crate::core::Layer;
use crate::shared::ViewerOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// View-State (Surfaces, Doppelansicht)
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardoptionen und ohne Layer
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default(), Vec::new())
    }

    /// Erstellt einen App-State aus Optionen und einem initialen Layerstapel.
    ///
    /// Ungültige Kamera-Optionen werden vorher auf Standardwerte gesetzt.
    pub fn with_options(options: ViewerOptions, layers: Vec<Layer>) -> Self {
        let options = options.sanitized();
        Self {
            view: ViewState::from_options(&options, layers),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Layer der aktiven Surface zurück (für UI-Anzeige)
    pub fn layer_count(&self) -> usize {
        self.view.active_surface().layers().len()
    }

    /// Ob die Doppelansicht geöffnet ist
    pub fn is_dual_view_active(&self) -> bool {
        self.view.dual.is_active()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
