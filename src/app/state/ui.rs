use crate::app::notices::{ChannelHost, DualViewportNotice, NoticeQueue};

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Meldungen der Doppelansicht (Dialog, TOC, Statuszeile)
    pub notices: NoticeQueue,
    /// Zuletzt angezeigte Statusmeldung
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            notices: NoticeQueue::new(),
            status_message: None,
        }
    }

    /// Host für die Doppelansicht, der in die Meldungs-Queue schreibt.
    pub fn notice_host(&self) -> ChannelHost {
        self.notices.host()
    }

    /// Entnimmt alle offenen Meldungen der Doppelansicht.
    pub fn drain_notices(&self) -> Vec<DualViewportNotice> {
        self.notices.drain()
    }
}
