use glam::DVec2;
use robot_arm_engine::{ArmConfiguration, ArmModel};

use crate::app::CommandLog;
use crate::shared::SimulatorOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Arm-Modell mit letzter gültiger Konfiguration, Pose und Spur
    pub arm: ArmModel,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Start-Optionen (Preset, Farben, Slider-Bereiche)
    pub options: SimulatorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(SimulatorOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen
    pub fn with_options(options: SimulatorOptions) -> Self {
        let ui = UiState::new(&options);
        let view = ViewState::new(&options);
        let arm = Self::build_arm(&options, &ui);

        Self {
            arm,
            view,
            ui,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Baut ein frisches Arm-Modell aus den Slider-Startwerten.
    pub fn build_arm(options: &SimulatorOptions, ui: &UiState) -> ArmModel {
        let configuration =
            ArmConfiguration::new(ui.segment_values.clone(), ui.angle_values.clone())
                .unwrap_or_else(|e| {
                    log::warn!("Preset-Konfiguration ungültig, verwende Einzelsegment: {e}");
                    ArmConfiguration::single_segment(options.segment_length_floor())
                });

        ArmModel::new(
            Self::arm_base(options),
            configuration,
            options.trace_capacity,
            options.trace_min_spacing,
        )
    }

    /// Basispunkt in Weltkoordinaten (Ursprung = Viewport-Mitte, y nach unten).
    pub fn arm_base(options: &SimulatorOptions) -> DVec2 {
        let [offset_x, offset_y] = options.preset.base_offset();
        DVec2::new(offset_x, offset_y)
    }

    /// Anzahl der Armglieder (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.arm.configuration().joint_count()
    }

    /// Anzahl der Spurpunkte (für UI-Anzeige)
    pub fn trace_point_count(&self) -> usize {
        self.arm.trace().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
