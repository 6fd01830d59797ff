//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::ArmScene;

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
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
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
            // === Arm ===
            AppCommand::ApplyArmConfiguration { segments, angles } => {
                handlers::arm::apply_configuration(state, segments, angles)?
            }
            AppCommand::SettleArm => handlers::arm::settle(state),
            AppCommand::ClearTrace => handlers::arm::clear_trace(state),
            AppCommand::ResetArm => handlers::arm::reset(state),

            // === Anzeige ===
            AppCommand::ToggleTraceVisibility => handlers::view::toggle_trace(state),
            AppCommand::ToggleWorkspaceVisibility => handlers::view::toggle_workspace(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Arm-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> ArmScene {
        render_scene::build(state)
    }
}
