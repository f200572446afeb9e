//! Doppelansicht: leitet aus der Primär-Surface eine zweite Surface ab und
//! hält beide Kameras synchron.
//!
//! **Mirrored:** Beide Surfaces teilen sich ein Kamera-Objekt, jede Änderung
//! ist sofort auf beiden Seiten sichtbar.
//! **Offset:** Die Sekundär-Surface hat eine eigene Kamera, die um genau eine
//! Surface-Breite versetzt nachgeführt wird (nebeneinanderliegende Ausschnitte).
//!
//! Propagierte Schreibvorgänge markieren ihr Ziel im `ReentrancyGuard`, damit
//! die dadurch ausgelöste Kamera-Änderung keinen Rückweg-Durchlauf startet.
//!
//! Aufgeteilt in:
//! - `state`: Controller-Struct, Host-Trait, Fehler, Zugriffsmethoden
//! - `lifecycle`: activate, change_policy, set_active_surface, deactivate
//! - `sync`: Kamera-Änderungen und Propagation

mod lifecycle;
mod state;
mod sync;

pub use state::{
    DualViewportController, DualViewportError, DualViewportHost, DualViewportPhase, NoopHost,
    SyncStats,
};
