//! Winkel-Deltas zwischen zwei aufeinanderfolgenden Updates.

use crate::core::InvalidConfiguration;

/// Differenz `current[i] − previous[i]` pro Gelenk (Grad).
///
/// Nur für die kosmetische "Velocity"-Anzeige: weder über die Zeit
/// integriert noch begrenzt.
pub fn angular_deltas(
    previous: &[f64],
    current: &[f64],
) -> Result<Vec<f64>, InvalidConfiguration> {
    if previous.len() != current.len() {
        return Err(InvalidConfiguration::AngleCountChanged {
            previous: previous.len(),
            current: current.len(),
        });
    }

    Ok(current
        .iter()
        .zip(previous)
        .map(|(now, before)| now - before)
        .collect())
}
