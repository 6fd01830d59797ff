//! Robot-Arm-Simulator Library.
//! App-, Shared- und UI-Schicht als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use robot_arm_engine::{ArmConfiguration, ArmModel, InvalidConfiguration, Pose, ReachMetrics};
pub use shared::{ArmPreset, ArmScene, ColorPalette, SimulatorOptions};
