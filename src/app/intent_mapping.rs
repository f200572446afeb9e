//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{InteractionEvent, SurfaceSide, SyncPolicy};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let active_side = state.view.dual.active_side();
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera { side: active_side }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            side: active_side,
            delta: state.options.zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            side: active_side,
            delta: -state.options.zoom_step,
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { side, delta } => vec![AppCommand::PanCamera { side, delta }],
        AppIntent::CameraZoom { side, delta } => vec![AppCommand::ZoomCamera { side, delta }],
        AppIntent::CameraRotate { side, rotation } => {
            vec![AppCommand::RotateCamera { side, rotation }]
        }
        AppIntent::CenterOnRequested { side, center } => {
            vec![AppCommand::CenterCamera { side, center }]
        }

        AppIntent::PointerMoved {
            side,
            coordinate,
            pixel,
        } => dispatch_if_visible(state, side, InteractionEvent::pointer_move(coordinate, pixel)),
        AppIntent::MapClicked {
            side,
            coordinate,
            pixel,
        } => dispatch_if_visible(state, side, InteractionEvent::click(coordinate, pixel)),

        AppIntent::LayerVisibilityToggled { name } => {
            vec![AppCommand::ToggleLayerVisibility { name }]
        }
        AppIntent::OverlayAddRequested {
            name,
            feature_count,
        } => vec![AppCommand::AddVectorOverlay {
            name,
            feature_count,
        }],
        AppIntent::LayerRemoveRequested { name } => vec![AppCommand::RemoveLayer { name }],
        AppIntent::LayerTreeSelected { path } => vec![AppCommand::LoadLayerTree { path }],

        AppIntent::DualViewportRequested { policy } => vec![AppCommand::ActivateDualViewport {
            policy: policy.unwrap_or(state.options.default_sync_policy),
        }],
        AppIntent::SyncPolicySelected { policy } => vec![AppCommand::ChangeSyncPolicy { policy }],
        AppIntent::ActiveSurfaceSelected { side } => vec![AppCommand::SetActiveSurface { side }],
        AppIntent::DualViewportCloseRequested => {
            if !state.view.dual.is_active() {
                return Vec::new();
            }
            // Dialog-Reset vor dem Abbau: Primär steuern, Kamera wieder teilen
            vec![
                AppCommand::SetActiveSurface {
                    side: SurfaceSide::Primary,
                },
                AppCommand::ChangeSyncPolicy {
                    policy: SyncPolicy::Mirrored,
                },
                AppCommand::DeactivateDualViewport,
            ]
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Events auf einer nicht sichtbaren Surface werden verworfen.
fn dispatch_if_visible(
    state: &AppState,
    side: SurfaceSide,
    event: InteractionEvent,
) -> Vec<AppCommand> {
    match state.view.surface(side) {
        Some(_) => vec![AppCommand::DispatchInteraction { side, event }],
        None => Vec::new(),
    }
}
