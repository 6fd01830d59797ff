//! Robot-Arm-Engine.
//!
//! Rechenkern des Simulators: Vorwärtskinematik einer planaren Gelenkkette,
//! Reichweiten-Metriken, Spur-Puffer für den Endeffektor und ein
//! zustandsbehaftetes Arm-Modell für die UI-Schicht.

pub mod arm;
pub mod core;
pub mod tracker;

pub use arm::{ArmModel, JointInfo};
pub use crate::core::{
    ArmConfiguration, InvalidConfiguration, Pose, ReachMetrics, compute_pose, max_reach,
    min_reach, workspace_area,
};
pub use tracker::{TraceBuffer, angular_deltas};
