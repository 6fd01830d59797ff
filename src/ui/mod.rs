//! UI-Komponenten: Bedienpanel, Keyboard-Shortcuts und Arm-Viewport.
//!
//! Panels geben `AppIntent`s zurück statt den State direkt zu mutieren;
//! einzige Ausnahme sind die Slider-Werte in `UiState`.

pub mod controls;
mod keyboard;
pub mod viewport;

pub use controls::render_control_panel;
pub use keyboard::collect_keyboard_intents;
pub use viewport::render_arm_viewport;

/// Wandelt eine RGB-Farbe aus den Optionen in eine egui-Farbe.
pub(crate) fn color32(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Hellere Variante einer Farbe für Highlights (Glieder, Gelenke).
pub(crate) fn highlight(rgb: [u8; 3]) -> egui::Color32 {
    let [r, g, b] = rgb.map(|c| c.saturating_add(40));
    egui::Color32::from_rgb(r, g, b)
}
