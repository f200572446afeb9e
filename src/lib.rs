//! Life Viewer Library.
//! Kartenviewer-Kern mit Doppelansicht, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DualViewportController, DualViewportError,
    DualViewportHost, DualViewportNotice, UiState, ViewState,
};
pub use core::{
    CameraState, InteractionEvent, InteractionHandlers, Layer, RenderSurface, SharedCamera,
    SurfaceSide, SyncPolicy, ZoomConstraints,
};
pub use core::{parse_layer_tree, LayerTreeError, SurfaceError};
pub use shared::ViewerOptions;
