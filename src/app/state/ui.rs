use crate::shared::SimulatorOptions;

/// UI-bezogener Anwendungszustand (Slider-Werte)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Aktuelle Slider-Werte der Segmentlängen
    pub segment_values: Vec<f64>,
    /// Aktuelle Slider-Werte der Gelenkwinkel (Grad)
    pub angle_values: Vec<f64>,
}

impl UiState {
    /// Slider-Startwerte aus dem Preset, begrenzt auf die Slider-Bereiche.
    pub fn new(options: &SimulatorOptions) -> Self {
        let segment_values: Vec<f64> = options
            .preset
            .initial_segments()
            .into_iter()
            .map(|length| options.clamp_segment_length(length))
            .collect();
        let angle_values = vec![options.clamp_angle(0.0); segment_values.len()];

        Self {
            segment_values,
            angle_values,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(&SimulatorOptions::default())
    }
}
