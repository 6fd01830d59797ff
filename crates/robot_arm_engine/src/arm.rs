//! Zustandsbehaftetes Arm-Modell für die Shell.
//!
//! Hält die letzte gültige Konfiguration samt Pose, Spur und Gelenk-Deltas.
//! Ungültige Updates werden abgelehnt, der vorherige Zustand bleibt erhalten.

use glam::DVec2;

use crate::core::{ArmConfiguration, InvalidConfiguration, Pose, ReachMetrics};
use crate::tracker::{TraceBuffer, angular_deltas};

/// Anzeige-Informationen zu einem einzelnen Gelenk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointInfo {
    /// Position des Gelenks
    pub position: DVec2,
    /// Relativer Winkel in Grad (0 für den Endeffektor)
    pub angle: f64,
    /// Winkeländerung seit dem letzten Update (0 für den Endeffektor)
    pub velocity: f64,
}

/// Arm mit festem Basispunkt, aktueller Pose und Endeffektor-Spur.
#[derive(Debug, Clone)]
pub struct ArmModel {
    base: DVec2,
    configuration: ArmConfiguration,
    pose: Pose,
    trace: TraceBuffer,
    joint_velocities: Vec<f64>,
}

impl ArmModel {
    /// Erstellt das Modell und zeichnet den ersten Spurpunkt auf.
    pub fn new(
        base: DVec2,
        configuration: ArmConfiguration,
        trace_capacity: usize,
        trace_min_spacing: f64,
    ) -> Self {
        let pose = configuration.pose(base);
        let mut trace = TraceBuffer::new(trace_capacity, trace_min_spacing);
        trace.record_sample(pose.end_effector());
        let joint_velocities = vec![0.0; configuration.joint_count()];

        Self {
            base,
            configuration,
            pose,
            trace,
            joint_velocities,
        }
    }

    /// Übernimmt neue Segmentlängen und Winkel.
    ///
    /// Bei ungültiger Eingabe bleibt der gesamte Zustand unverändert.
    pub fn update(
        &mut self,
        segments: Vec<f64>,
        angles: Vec<f64>,
    ) -> Result<(), InvalidConfiguration> {
        let configuration = match ArmConfiguration::new(segments, angles) {
            Ok(configuration) => configuration,
            Err(e) => {
                log::warn!("Arm-Update abgelehnt, behalte letzte Konfiguration: {e}");
                return Err(e);
            }
        };

        // Bei geänderter Gliederzahl gibt es keinen sinnvollen Vorgänger
        self.joint_velocities =
            angular_deltas(self.configuration.angles(), configuration.angles())
                .unwrap_or_else(|_| vec![0.0; configuration.joint_count()]);

        self.configuration = configuration;
        self.recompute();
        Ok(())
    }

    /// Frame ohne Winkeländerung: alle Deltas fallen auf 0.
    ///
    /// Pose und Spur bleiben unverändert, da sich die Konfiguration nicht ändert.
    pub fn settle(&mut self) {
        self.joint_velocities.fill(0.0);
    }

    /// Ob seit dem letzten Update noch Winkeländerungen anstehen.
    pub fn is_moving(&self) -> bool {
        self.joint_velocities.iter().any(|delta| *delta != 0.0)
    }

    /// Leert die Endeffektor-Spur.
    pub fn clear_trace(&mut self) {
        log::debug!("Spur geleert ({} Punkte verworfen)", self.trace.len());
        self.trace.clear();
    }

    fn recompute(&mut self) {
        self.pose = self.configuration.pose(self.base);
        self.trace.record_sample(self.pose.end_effector());
    }

    pub fn base(&self) -> DVec2 {
        self.base
    }

    /// Letzte gültige Konfiguration
    pub fn configuration(&self) -> &ArmConfiguration {
        &self.configuration
    }

    /// Aktuelle Pose
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Aufgezeichnete Endeffektor-Spur
    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    /// Winkeländerungen pro Gelenk seit dem letzten Update
    pub fn joint_velocities(&self) -> &[f64] {
        &self.joint_velocities
    }

    /// Reichweiten-Metriken der aktuellen Segmentlängen
    pub fn reach_metrics(&self) -> ReachMetrics {
        self.configuration.reach_metrics()
    }

    /// Informationen zu Gelenk `index` (0..=N), `None` außerhalb der Kette.
    pub fn joint_info(&self, index: usize) -> Option<JointInfo> {
        let position = self.pose.joint(index)?;
        Some(JointInfo {
            position,
            angle: self.configuration.angles().get(index).copied().unwrap_or(0.0),
            velocity: self.joint_velocities.get(index).copied().unwrap_or(0.0),
        })
    }
}
