//! Hilfszustand für die Visualisierung: Endeffektor-Spur und Gelenk-Deltas.

pub mod trace;
pub mod velocity;

pub use trace::TraceBuffer;
pub use velocity::angular_deltas;
