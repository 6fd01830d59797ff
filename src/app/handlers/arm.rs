//! Handler für Arm-Konfiguration, Spur und Reset.

use anyhow::Context;

use crate::app::AppState;

/// Übernimmt neue Segmentlängen und Winkel.
///
/// Ungültige Eingaben werden als Fehler gemeldet; das Arm-Modell behält
/// dabei seine letzte gültige Konfiguration.
pub fn apply_configuration(
    state: &mut AppState,
    segments: Vec<f64>,
    angles: Vec<f64>,
) -> anyhow::Result<()> {
    state
        .arm
        .update(segments, angles)
        .context("Arm-Konfiguration konnte nicht übernommen werden")
}

/// Setzt die Gelenk-Deltas nach einem Frame ohne Winkeländerung auf 0.
pub fn settle(state: &mut AppState) {
    state.arm.settle();
}

/// Leert die Endeffektor-Spur.
pub fn clear_trace(state: &mut AppState) {
    state.arm.clear_trace();
}

/// Setzt Slider und Arm auf die Preset-Startwerte zurück.
pub fn reset(state: &mut AppState) {
    state.ui = crate::app::UiState::new(&state.options);
    state.arm = AppState::build_arm(&state.options, &state.ui);
    log::info!(
        "Arm zurückgesetzt ({:?}, {} Glieder)",
        state.options.preset,
        state.segment_count()
    );
}
