//! Use-Case-Funktionen für die Doppelansicht.

use crate::app::AppState;
use crate::core::{SurfaceSide, SyncPolicy};

/// Öffnet die Doppelansicht mit den Host-Handlern und dem Meldungs-Host der UI.
pub fn activate(state: &mut AppState, policy: SyncPolicy) -> anyhow::Result<()> {
    let host = Box::new(state.ui.notice_host());
    let handlers = state.view.interaction.clone();
    state
        .view
        .dual
        .activate(&mut state.view.primary, policy, handlers, host)?;
    state.ui.status_message = Some(format!("Doppelansicht ({})", policy_label(policy)));
    Ok(())
}

/// Wechselt die Sync-Policy der geöffneten Doppelansicht.
pub fn change_policy(state: &mut AppState, policy: SyncPolicy) {
    state.view.dual.change_policy(&state.view.primary, policy);
    if state.view.dual.is_active() {
        state.ui.status_message = Some(format!("Doppelansicht ({})", policy_label(policy)));
    }
}

/// Wählt die Surface, auf die TOC und Werkzeuge wirken.
pub fn set_active_surface(state: &mut AppState, side: SurfaceSide) {
    state.view.dual.set_active_surface(side);
}

/// Schließt die Doppelansicht.
pub fn deactivate(state: &mut AppState) {
    if !state.view.dual.is_active() {
        return;
    }
    state.view.dual.deactivate(&mut state.view.primary);
    state.ui.status_message = None;
}

fn policy_label(policy: SyncPolicy) -> &'static str {
    match policy {
        SyncPolicy::Mirrored => "gespiegelt",
        SyncPolicy::Offset => "versetzt",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notices::DualViewportNotice;
    use std::rc::Rc;

    #[test]
    fn activate_notifies_ui_and_shares_camera() {
        let mut state = AppState::new();

        activate(&mut state, SyncPolicy::Mirrored).expect("aktivierbar");

        assert_eq!(state.ui.drain_notices(), vec![DualViewportNotice::Initialized]);
        let secondary = state
            .view
            .surface(SurfaceSide::Secondary)
            .expect("Sekundär-Surface aktiv");
        assert!(Rc::ptr_eq(
            state.view.primary.camera(),
            secondary.camera()
        ));
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn activate_with_conflicting_targets_fails() {
        let mut options = crate::shared::ViewerOptions::default();
        options.secondary_target = options.primary_target.clone();
        let mut state = AppState::with_options(options, Vec::new());

        let result = activate(&mut state, SyncPolicy::Mirrored);

        assert!(result.is_err());
        assert!(!state.view.dual.is_active());
        assert!(state.ui.drain_notices().is_empty());
    }

    #[test]
    fn set_active_surface_reports_to_ui() {
        let mut state = AppState::new();
        activate(&mut state, SyncPolicy::Mirrored).expect("aktivierbar");
        state.ui.drain_notices();

        set_active_surface(&mut state, SurfaceSide::Secondary);

        assert_eq!(
            state.ui.drain_notices(),
            vec![DualViewportNotice::ActiveSurfaceChanged(
                SurfaceSide::Secondary
            )]
        );
        assert_eq!(state.view.dual.active_side(), SurfaceSide::Secondary);
    }

    #[test]
    fn deactivate_clears_status_and_reports_end() {
        let mut state = AppState::new();
        activate(&mut state, SyncPolicy::Offset).expect("aktivierbar");
        state.ui.drain_notices();

        deactivate(&mut state);

        assert_eq!(state.ui.drain_notices(), vec![DualViewportNotice::Ended]);
        assert!(state.ui.status_message.is_none());
        assert!(!state.view.dual.is_active());
    }
}
