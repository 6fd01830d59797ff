//! Begrenzter FIFO-Puffer für die Endeffektor-Spur.

use std::collections::VecDeque;

use glam::DVec2;

/// Standard-Kapazität der Spur (Anzahl Punkte).
pub const DEFAULT_TRACE_CAPACITY: usize = 500;
/// Standard-Mindestabstand zum letzten Spurpunkt (Welteinheiten).
pub const DEFAULT_TRACE_MIN_SPACING: f64 = 2.0;

/// Ringpuffer der zuletzt aufgezeichneten Endeffektor-Positionen.
///
/// Ein Punkt wird nur übernommen, wenn der Puffer leer ist oder der Abstand
/// zum zuletzt gespeicherten Punkt `min_spacing` übersteigt. Bei Überlauf
/// fällt der älteste Punkt heraus.
#[derive(Debug, Clone)]
pub struct TraceBuffer {
    points: VecDeque<DVec2>,
    capacity: usize,
    min_spacing: f64,
}

impl TraceBuffer {
    /// Erstellt einen leeren Puffer. Kapazität 0 wird auf 1 angehoben.
    pub fn new(capacity: usize, min_spacing: f64) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            min_spacing,
        }
    }

    /// Zeichnet einen Punkt auf, falls er weit genug vom letzten entfernt ist.
    ///
    /// Gibt `true` zurück, wenn der Punkt übernommen wurde.
    pub fn record_sample(&mut self, point: DVec2) -> bool {
        let accepted = match self.points.back() {
            None => true,
            Some(last) => last.distance(point) > self.min_spacing,
        };
        if !accepted {
            return false;
        }

        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
        true
    }

    /// Leert den Puffer vollständig.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Punkte vom ältesten zum neuesten
    pub fn points(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    /// Zuletzt gespeicherter Punkt
    pub fn last(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn min_spacing(&self) -> f64 {
        self.min_spacing
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRACE_CAPACITY, DEFAULT_TRACE_MIN_SPACING)
    }
}
