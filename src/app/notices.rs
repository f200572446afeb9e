//! Rückmeldungen der Doppelansicht an die UI über einen Kanal.
//!
//! Der Controller ruft die Host-Hooks synchron auf; die UI liest die
//! Meldungen im nächsten Frame aus.

use crate::app::dual_viewport::DualViewportHost;
use crate::core::SurfaceSide;
use std::sync::mpsc;

/// Meldung der Doppelansicht an die UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DualViewportNotice {
    /// Doppelansicht aufgebaut
    Initialized,
    /// Doppelansicht geschlossen
    Ended,
    /// Gesteuerte Surface gewechselt (TOC muss Sichtbarkeiten neu lesen)
    ActiveSurfaceChanged(SurfaceSide),
}

/// Host-Implementierung, die alle Hooks als `DualViewportNotice` versendet.
pub struct ChannelHost {
    sender: mpsc::Sender<DualViewportNotice>,
}

impl ChannelHost {
    /// Erstellt einen Host auf dem gegebenen Sender.
    pub fn new(sender: mpsc::Sender<DualViewportNotice>) -> Self {
        Self { sender }
    }

    fn send(&self, notice: DualViewportNotice) {
        if self.sender.send(notice).is_err() {
            log::debug!("Keine UI mehr für Meldung {:?}", notice);
        }
    }
}

impl DualViewportHost for ChannelHost {
    fn on_init(&mut self) {
        self.send(DualViewportNotice::Initialized);
    }

    fn on_end(&mut self) {
        self.send(DualViewportNotice::Ended);
    }

    fn on_active_surface_change(&mut self, side: SurfaceSide) {
        self.send(DualViewportNotice::ActiveSurfaceChanged(side));
    }
}

/// Empfangsseite der Meldungen (Teil des UI-Zustands).
pub struct NoticeQueue {
    sender: mpsc::Sender<DualViewportNotice>,
    receiver: mpsc::Receiver<DualViewportNotice>,
}

impl NoticeQueue {
    /// Erstellt eine leere Queue.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Host, der in diese Queue schreibt.
    pub fn host(&self) -> ChannelHost {
        ChannelHost::new(self.sender.clone())
    }

    /// Entnimmt alle bisher eingegangenen Meldungen.
    pub fn drain(&self) -> Vec<DualViewportNotice> {
        self.receiver.try_iter().collect()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}
