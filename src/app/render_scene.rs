//! Builder für Arm-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::ArmScene;

/// Baut eine ArmScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> ArmScene {
    ArmScene {
        joints: state.arm.pose().joint_positions().to_vec(),
        trace: state.arm.trace().points().collect(),
        metrics: state.arm.reach_metrics(),
        show_trace: state.view.show_trace,
        show_workspace: state.view.show_workspace,
        options: state.options.clone(),
    }
}
