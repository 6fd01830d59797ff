//! Vorwärtskinematik einer planaren Gelenkkette.

use glam::DVec2;

use super::InvalidConfiguration;

/// Gelenkpositionen einer berechneten Pose.
///
/// Index 0 ist immer exakt der Basispunkt, Index i (1..=N) die Position
/// nach Glied i. Der letzte Eintrag ist der Endeffektor.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    joint_positions: Vec<DVec2>,
}

impl Pose {
    /// Alle N+1 Gelenkpositionen inklusive Basis
    pub fn joint_positions(&self) -> &[DVec2] {
        &self.joint_positions
    }

    /// Basispunkt (Index 0)
    pub fn base(&self) -> DVec2 {
        self.joint_positions[0]
    }

    /// Endeffektor-Position (letzter Eintrag)
    pub fn end_effector(&self) -> DVec2 {
        self.joint_positions[self.joint_positions.len() - 1]
    }

    /// Gelenkposition an Index `index`, falls vorhanden.
    pub fn joint(&self, index: usize) -> Option<DVec2> {
        self.joint_positions.get(index).copied()
    }

    /// Anzahl der Gelenkpositionen (N+1)
    pub fn len(&self) -> usize {
        self.joint_positions.len()
    }

    /// Eine Pose enthält immer mindestens die Basis.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Start-/Endpunkt jedes Glieds in Kettenreihenfolge (für Linien-Rendering).
    pub fn segment_lines(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.joint_positions.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Berechnet die Pose aus Basispunkt, Segmentlängen und relativen Winkeln (Grad).
///
/// Reine Funktion: gleiche Eingaben liefern bitgleiche Ergebnisse.
/// Ungleich lange oder leere Sequenzen werden abgelehnt, nie gekürzt oder aufgefüllt.
pub fn compute_pose(
    base: DVec2,
    segments: &[f64],
    angles: &[f64],
) -> Result<Pose, InvalidConfiguration> {
    InvalidConfiguration::check_lengths(segments.len(), angles.len())?;
    Ok(chain_positions(base, segments, angles))
}

/// Kettenberechnung ohne Validierung; Aufrufer garantiert gleiche Längen.
pub(crate) fn chain_positions(base: DVec2, segments: &[f64], angles: &[f64]) -> Pose {
    let mut joint_positions = Vec::with_capacity(segments.len() + 1);
    joint_positions.push(base);

    let mut cumulative = 0.0_f64;
    let mut current = base;
    for (&length, &angle) in segments.iter().zip(angles) {
        cumulative += angle.to_radians();
        let (sin, cos) = cumulative.sin_cos();
        current += length * DVec2::new(cos, sin);
        joint_positions.push(current);
    }

    Pose { joint_positions }
}
