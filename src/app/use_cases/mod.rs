//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod dual_viewport;
pub mod layers;
pub mod viewport;
