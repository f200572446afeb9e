//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod dual_viewport;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod notices;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Surfaces, Doppelansicht, UI).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use dual_viewport::{
    DualViewportController, DualViewportError, DualViewportHost, DualViewportPhase, NoopHost,
    SyncStats,
};
pub use events::{AppCommand, AppIntent};
pub use notices::{ChannelHost, DualViewportNotice, NoticeQueue};
pub use state::{AppState, PointerReadout, UiState, ViewState};
