//! Geteilte Typen für schichtübergreifende Verträge (Konfiguration).

pub mod options;

pub use options::ViewerOptions;
pub use options::{PRIMARY_TARGET, SECONDARY_TARGET};
