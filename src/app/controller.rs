//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::ResetCamera { side } => handlers::view::reset_camera(state, side),
            AppCommand::PanCamera { side, delta } => handlers::view::pan(state, side, delta),
            AppCommand::ZoomCamera { side, delta } => handlers::view::zoom(state, side, delta),
            AppCommand::RotateCamera { side, rotation } => {
                handlers::view::rotate(state, side, rotation)
            }
            AppCommand::CenterCamera { side, center } => {
                handlers::view::center(state, side, center)
            }
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::DispatchInteraction { side, event } => {
                handlers::view::dispatch_interaction(state, side, event)
            }

            // === Layer ===
            AppCommand::ToggleLayerVisibility { name } => {
                handlers::layers::toggle_visibility(state, &name)?
            }
            AppCommand::AddVectorOverlay {
                name,
                feature_count,
            } => handlers::layers::add_overlay(state, name, feature_count)?,
            AppCommand::RemoveLayer { name } => handlers::layers::remove(state, &name)?,
            AppCommand::LoadLayerTree { path } => handlers::layers::load_tree(state, path)?,

            // === Doppelansicht ===
            AppCommand::ActivateDualViewport { policy } => {
                handlers::dual_viewport::activate(state, policy)?
            }
            AppCommand::ChangeSyncPolicy { policy } => {
                handlers::dual_viewport::change_policy(state, policy)
            }
            AppCommand::SetActiveSurface { side } => {
                handlers::dual_viewport::set_active_surface(state, side)
            }
            AppCommand::DeactivateDualViewport => handlers::dual_viewport::deactivate(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, *options)?,
        }

        Ok(())
    }
}
