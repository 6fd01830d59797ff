use crate::shared::SimulatorOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Endeffektor-Spur anzeigen
    pub show_trace: bool,
    /// Arbeitsraum-Kreise anzeigen
    pub show_workspace: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand mit den Overlay-Vorgaben des Presets.
    pub fn new(options: &SimulatorOptions) -> Self {
        let overlays = options.preset.overlays_visible();
        Self {
            show_trace: overlays,
            show_workspace: overlays,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&SimulatorOptions::default())
    }
}
