//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ArmInputChanged { segments, angles } => {
            // Unveränderte Eingabe: nur ausstehende Deltas abbauen, sonst kein Command
            let configuration = state.arm.configuration();
            if configuration.segments() == segments.as_slice()
                && configuration.angles() == angles.as_slice()
            {
                if state.arm.is_moving() {
                    vec![AppCommand::SettleArm]
                } else {
                    Vec::new()
                }
            } else {
                vec![AppCommand::ApplyArmConfiguration { segments, angles }]
            }
        }
        AppIntent::ClearTraceRequested => vec![AppCommand::ClearTrace],
        AppIntent::ToggleTraceRequested => vec![AppCommand::ToggleTraceVisibility],
        AppIntent::ToggleWorkspaceRequested => vec![AppCommand::ToggleWorkspaceVisibility],
        AppIntent::ResetArmRequested => vec![AppCommand::ResetArm, AppCommand::ClearTrace],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
