//! Handler für die Doppelansicht.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{SurfaceSide, SyncPolicy};

/// Öffnet die Doppelansicht.
pub fn activate(state: &mut AppState, policy: SyncPolicy) -> anyhow::Result<()> {
    use_cases::dual_viewport::activate(state, policy)
}

/// Wechselt die Sync-Policy.
pub fn change_policy(state: &mut AppState, policy: SyncPolicy) {
    use_cases::dual_viewport::change_policy(state, policy);
}

/// Wechselt die gesteuerte Surface.
pub fn set_active_surface(state: &mut AppState, side: SurfaceSide) {
    use_cases::dual_viewport::set_active_surface(state, side);
}

/// Schließt die Doppelansicht.
pub fn deactivate(state: &mut AppState) {
    use_cases::dual_viewport::deactivate(state);
}
