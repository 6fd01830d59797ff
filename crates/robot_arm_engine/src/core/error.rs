//! Fehlertypen des Rechenkerns.

use thiserror::Error;

/// Abgelehnte Arm-Konfiguration.
///
/// Degenerierte Geometrie (Segmentlänge 0, alle Winkel 0) ist gültig und
/// erzeugt nie diesen Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidConfiguration {
    /// Anzahl Segmente und Anzahl Winkel unterscheiden sich
    #[error("ungültige Konfiguration: {segments} Segmente, aber {angles} Winkel")]
    LengthMismatch { segments: usize, angles: usize },
    /// Kette ohne ein einziges Segment
    #[error("ungültige Konfiguration: Kette ohne Segmente")]
    EmptyChain,
    /// Negative oder nicht endliche Segmentlänge
    #[error("ungültige Konfiguration: Segment {index} hat Länge {length}")]
    InvalidSegmentLength { index: usize, length: f64 },
    /// Gliederzahl zwischen zwei Winkel-Updates verändert
    #[error("Winkelanzahl geändert: vorher {previous}, jetzt {current}")]
    AngleCountChanged { previous: usize, current: usize },
}

impl InvalidConfiguration {
    /// Prüft, ob zwei Sequenzen gleich lang und nicht leer sind.
    pub(crate) fn check_lengths(segments: usize, angles: usize) -> Result<(), Self> {
        if segments != angles {
            return Err(Self::LengthMismatch { segments, angles });
        }
        if segments == 0 {
            return Err(Self::EmptyChain);
        }
        Ok(())
    }

    /// Prüft, ob alle Segmentlängen endlich und nicht negativ sind.
    pub(crate) fn check_segment_lengths(segments: &[f64]) -> Result<(), Self> {
        match segments
            .iter()
            .position(|length| !(length.is_finite() && *length >= 0.0))
        {
            Some(index) => Err(Self::InvalidSegmentLength {
                index,
                length: segments[index],
            }),
            None => Ok(()),
        }
    }
}
