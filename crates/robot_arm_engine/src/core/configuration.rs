//! Validierte Arm-Konfiguration (Segmentlängen + relative Gelenkwinkel).

use glam::DVec2;

use super::kinematics::{self, Pose};
use super::metrics::{self, ReachMetrics};
use super::InvalidConfiguration;

/// Unveränderliche, validierte Konfiguration einer planaren Gelenkkette.
///
/// Garantiert `segments.len() == angles.len() >= 1` und endliche,
/// nicht negative Segmentlängen. Winkel sind in Grad
/// angegeben und relativ zur kumulierten Orientierung aller vorherigen
/// Glieder; sie werden nicht auf [0, 360) normalisiert.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmConfiguration {
    segments: Vec<f64>,
    angles: Vec<f64>,
}

impl ArmConfiguration {
    /// Erstellt eine Konfiguration und lehnt ungleich lange oder leere Ketten
    /// sowie negative oder nicht endliche Segmentlängen ab.
    pub fn new(segments: Vec<f64>, angles: Vec<f64>) -> Result<Self, InvalidConfiguration> {
        InvalidConfiguration::check_lengths(segments.len(), angles.len())?;
        InvalidConfiguration::check_segment_lengths(&segments)?;
        Ok(Self { segments, angles })
    }

    /// Gestreckter Arm: alle Winkel 0.
    pub fn straight(segments: Vec<f64>) -> Result<Self, InvalidConfiguration> {
        let angles = vec![0.0; segments.len()];
        Self::new(segments, angles)
    }

    /// Kette aus genau einem Glied mit Winkel 0.
    ///
    /// Negative oder nicht endliche Längen werden auf 0 gesetzt.
    pub fn single_segment(length: f64) -> Self {
        let length = if length.is_finite() { length.max(0.0) } else { 0.0 };
        Self {
            segments: vec![length],
            angles: vec![0.0],
        }
    }

    /// Segmentlängen in Kettenreihenfolge
    pub fn segments(&self) -> &[f64] {
        &self.segments
    }

    /// Relative Gelenkwinkel in Grad
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Anzahl der Glieder (N)
    pub fn joint_count(&self) -> usize {
        self.segments.len()
    }

    /// Berechnet die Pose für einen festen Basispunkt.
    pub fn pose(&self, base: DVec2) -> Pose {
        kinematics::chain_positions(base, &self.segments, &self.angles)
    }

    /// Reichweiten-Metriken der Segmentlängen.
    pub fn reach_metrics(&self) -> ReachMetrics {
        metrics::reach_metrics_unchecked(&self.segments)
    }
}
