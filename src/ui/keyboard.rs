//! Keyboard-Shortcuts.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// T = Spur umschalten, W = Arbeitsraum umschalten, C = Spur leeren,
/// R = Arm zurücksetzen, Escape = Beenden.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Slider-Werteingabe hat Vorrang vor Shortcuts
    if ctx.wants_keyboard_input() {
        return events;
    }

    let (key_t, key_w, key_c, key_r, key_escape) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::T),
            i.key_pressed(egui::Key::W),
            i.key_pressed(egui::Key::C),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_t {
        events.push(AppIntent::ToggleTraceRequested);
    }
    if key_w {
        events.push(AppIntent::ToggleWorkspaceRequested);
    }
    if key_c {
        events.push(AppIntent::ClearTraceRequested);
    }
    if key_r {
        events.push(AppIntent::ResetArmRequested);
    }
    if key_escape {
        events.push(AppIntent::ExitRequested);
    }

    events
}
