//! Core-Domänentypen: Kamera, Layer, Render-Surface, Layer-Spiegelung, Sync-Policy.

pub mod camera;
pub mod interaction;
pub mod layer;
pub mod layer_mirror;
pub mod layer_tree;
pub mod surface;
pub mod sync;

pub use camera::{CameraState, SharedCamera, ZoomConstraints};
pub use interaction::{
    InteractionEvent, InteractionHandler, InteractionHandlers, InteractionKind, ListenerKey,
};
pub use layer::{Layer, SourceKind, SourceParams, TileSource, TiledLayer, VectorLayer};
pub use layer_tree::{load_layer_tree, parse_layer_tree, LayerTreeError};
pub use surface::{RenderSurface, SurfaceError, SurfaceFootprint};
pub use sync::{ReentrancyGuard, SurfaceSide, SyncPolicy};
