//! Handler für Overlays und Anwendungssteuerung.

use crate::app::AppState;

/// Schaltet die Sichtbarkeit der Endeffektor-Spur um.
pub fn toggle_trace(state: &mut AppState) {
    state.view.show_trace = !state.view.show_trace;
    log::debug!("Spur sichtbar: {}", state.view.show_trace);
}

/// Schaltet die Sichtbarkeit der Arbeitsraum-Kreise um.
pub fn toggle_workspace(state: &mut AppState) {
    state.view.show_workspace = !state.view.show_workspace;
    log::debug!("Arbeitsraum sichtbar: {}", state.view.show_workspace);
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
