//! Core-Typen: Konfiguration, Pose, Kinematik und Reichweiten-Metriken.

pub mod configuration;
pub mod error;
pub mod kinematics;
pub mod metrics;

pub use configuration::ArmConfiguration;
pub use error::InvalidConfiguration;
pub use kinematics::{Pose, compute_pose};
pub use metrics::{ReachMetrics, max_reach, min_reach, workspace_area};
