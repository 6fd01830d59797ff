//! Reichweiten- und Arbeitsraum-Metriken (reine Funktionen der Segmentlängen).
//!
//! Nur für nicht negative, endliche Längen definiert; alles andere wird mit
//! `InvalidConfiguration` abgelehnt.

use std::f64::consts::PI;

use super::InvalidConfiguration;

/// Abgeleitete Kennzahlen des Arbeitsraums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReachMetrics {
    /// Radius des äußeren Arbeitsraum-Kreises (voll gestreckt)
    pub max_reach: f64,
    /// Radius des inneren Arbeitsraum-Kreises (maximal eingefaltet)
    pub min_reach: f64,
    /// Fläche des Kreisrings zwischen beiden Radien
    pub workspace_area: f64,
}

/// Summe aller Segmentlängen.
pub fn max_reach(segments: &[f64]) -> Result<f64, InvalidConfiguration> {
    validate_segments(segments)?;
    Ok(sum(segments))
}

/// Innerer Radius: `|längstes − Σ übrige|`, 0 bei nur einem Segment.
///
/// Bei mehreren gleich langen Maxima zählt das erste Vorkommen als längstes.
pub fn min_reach(segments: &[f64]) -> Result<f64, InvalidConfiguration> {
    validate_segments(segments)?;
    Ok(min_reach_unchecked(segments))
}

/// Kreisringfläche `π · (max² − min²)`.
pub fn workspace_area(segments: &[f64]) -> Result<f64, InvalidConfiguration> {
    validate_segments(segments)?;
    Ok(reach_metrics_unchecked(segments).workspace_area)
}

/// Aufrufer garantiert eine nicht leere Kette mit gültigen Längen.
pub(crate) fn reach_metrics_unchecked(segments: &[f64]) -> ReachMetrics {
    let max_reach = sum(segments);
    let min_reach = min_reach_unchecked(segments);
    debug_assert!(
        min_reach <= max_reach,
        "min_reach ({min_reach}) > max_reach ({max_reach})"
    );
    ReachMetrics {
        max_reach,
        min_reach,
        workspace_area: PI * (max_reach * max_reach - min_reach * min_reach),
    }
}

fn min_reach_unchecked(segments: &[f64]) -> f64 {
    if segments.len() <= 1 {
        return 0.0;
    }

    // Striktes `>` hält das erste Vorkommen bei Gleichstand
    let mut longest_index = 0;
    for (index, &length) in segments.iter().enumerate().skip(1) {
        if length > segments[longest_index] {
            longest_index = index;
        }
    }

    let others: f64 = segments
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != longest_index)
        .map(|(_, &length)| length)
        .sum();

    (segments[longest_index] - others).abs()
}

fn sum(segments: &[f64]) -> f64 {
    segments.iter().sum()
}

fn validate_segments(segments: &[f64]) -> Result<(), InvalidConfiguration> {
    if segments.is_empty() {
        return Err(InvalidConfiguration::EmptyChain);
    }
    InvalidConfiguration::check_segment_lengths(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_straight_arm_metrics() {
        let segments = [100.0, 80.0, 60.0];
        assert_relative_eq!(max_reach(&segments).unwrap(), 240.0);
        assert_relative_eq!(min_reach(&segments).unwrap(), 40.0);
        assert_relative_eq!(
            workspace_area(&segments).unwrap(),
            PI * (240.0 * 240.0 - 40.0 * 40.0)
        );
        assert_relative_eq!(workspace_area(&segments).unwrap(), 175_929.188, epsilon = 1e-3);
    }

    #[test]
    fn test_single_segment_has_zero_min_reach() {
        assert_eq!(min_reach(&[50.0]).unwrap(), 0.0);
        assert_relative_eq!(workspace_area(&[50.0]).unwrap(), PI * 2500.0);
    }

    #[test]
    fn test_longest_segment_not_first() {
        // längstes = 200, übrige = 30 + 20
        assert_relative_eq!(min_reach(&[30.0, 200.0, 20.0]).unwrap(), 150.0);
    }

    #[test]
    fn test_tied_maxima_remove_one_instance() {
        assert_relative_eq!(min_reach(&[80.0, 80.0]).unwrap(), 0.0);
        assert_relative_eq!(min_reach(&[80.0, 80.0, 10.0]).unwrap(), 10.0);
    }

    #[test]
    fn test_folding_chain_reaches_origin() {
        // längstes kürzer als Rest → |100 − 140| = 40
        let metrics = reach_metrics_unchecked(&[100.0, 80.0, 60.0]);
        assert!(metrics.min_reach <= metrics.max_reach);
        assert!(metrics.workspace_area > 0.0);
    }

    #[test]
    fn test_empty_segments_are_rejected() {
        assert_eq!(max_reach(&[]), Err(InvalidConfiguration::EmptyChain));
        assert_eq!(min_reach(&[]), Err(InvalidConfiguration::EmptyChain));
        assert_eq!(workspace_area(&[]), Err(InvalidConfiguration::EmptyChain));
    }

    #[test]
    fn test_negative_segments_are_rejected() {
        let expected = Err(InvalidConfiguration::InvalidSegmentLength {
            index: 0,
            length: -50.0,
        });
        let segments = [-50.0; 4];
        assert_eq!(max_reach(&segments), expected);
        assert_eq!(min_reach(&segments), expected);
        assert_eq!(workspace_area(&segments), expected);
    }

    #[test]
    fn test_max_reach_is_monotonic_per_segment() {
        let base = [40.0, 25.0, 60.0, 5.0];
        let reference = max_reach(&base).unwrap();
        for index in 0..base.len() {
            for step in [0.0, 0.5, 10.0, 1000.0] {
                let mut grown = base;
                grown[index] += step;
                assert!(max_reach(&grown).unwrap() >= reference);
            }
        }
    }
}
