//! Zentrale Konfiguration für den Robot-Arm-Simulator.
//!
//! `SimulatorOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Slider ──────────────────────────────────────────────────────────

/// Minimale Segmentlänge der Längen-Slider.
pub const SEGMENT_LENGTH_MIN: f64 = 20.0;
/// Minimaler Gelenkwinkel (Grad).
pub const ANGLE_MIN: f64 = -180.0;
/// Maximaler Gelenkwinkel (Grad).
pub const ANGLE_MAX: f64 = 180.0;
/// Nachkommastellen der Slider-Werte.
pub const SLIDER_DECIMALS: usize = 1;

// ── Spur ────────────────────────────────────────────────────────────

/// Maximale Anzahl Spurpunkte.
pub const TRACE_CAPACITY: usize = 500;
/// Mindestabstand neuer Spurpunkte zum letzten Spurpunkt (Pixel).
pub const TRACE_MIN_SPACING: f64 = 2.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Ziel-Bildrate der Neuzeichnung.
pub const TARGET_FPS: u32 = 60;
/// Farbe der Endeffektor-Spur (RGB).
pub const TRACE_COLOR: [u8; 3] = [255, 255, 100];
/// Farbe der Arbeitsraum-Kreise (RGB).
pub const WORKSPACE_COLOR: [u8; 3] = [40, 40, 40];
/// Linienstärke der Armglieder (Pixel).
pub const ARM_WIDTH: f32 = 12.0;
/// Linienstärke der Spur (Pixel).
pub const TRACE_WIDTH: f32 = 2.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Farbschema einer Arm-Variante (RGB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub background: [u8; 3],
    pub panel: [u8; 3],
    pub arm: [u8; 3],
    pub joint: [u8; 3],
    pub end_effector: [u8; 3],
    pub trace: [u8; 3],
    pub workspace: [u8; 3],
}

/// Farbschema der Basic-Variante.
pub const BASIC_PALETTE: ColorPalette = ColorPalette {
    background: [20, 25, 40],
    panel: [40, 45, 60],
    arm: [100, 150, 255],
    joint: [255, 100, 100],
    end_effector: [100, 255, 100],
    trace: TRACE_COLOR,
    workspace: WORKSPACE_COLOR,
};

/// Farbschema der Advanced-Variante.
pub const ADVANCED_PALETTE: ColorPalette = ColorPalette {
    background: [15, 20, 35],
    panel: [30, 35, 50],
    arm: [70, 130, 255],
    joint: [255, 80, 80],
    end_effector: [80, 255, 80],
    trace: TRACE_COLOR,
    workspace: WORKSPACE_COLOR,
};

// ── Presets ─────────────────────────────────────────────────────────

/// Vordefinierte Arm-Varianten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmPreset {
    /// Drei Glieder, ohne Spur- und Arbeitsraum-Overlay
    Basic,
    /// Vier Glieder mit Spur und Arbeitsraum-Overlay
    #[default]
    Advanced,
}

impl ArmPreset {
    /// Start-Segmentlängen des Presets
    pub fn initial_segments(self) -> Vec<f64> {
        match self {
            Self::Basic => vec![100.0, 80.0, 60.0],
            Self::Advanced => vec![120.0, 100.0, 80.0, 60.0],
        }
    }

    /// Maximale Segmentlänge der Längen-Slider
    pub fn segment_length_max(self) -> f64 {
        match self {
            Self::Basic => 150.0,
            Self::Advanced => 200.0,
        }
    }

    /// Versatz der Arm-Basis zur Viewport-Mitte (Weltkoordinaten = Pixel)
    pub fn base_offset(self) -> [f64; 2] {
        match self {
            Self::Basic => [0.0, 0.0],
            Self::Advanced => [100.0, 0.0],
        }
    }

    /// Ob Spur und Arbeitsraum beim Start sichtbar sind
    pub fn overlays_visible(self) -> bool {
        matches!(self, Self::Advanced)
    }

    /// Standard-Farbschema der Variante
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Basic => BASIC_PALETTE,
            Self::Advanced => ADVANCED_PALETTE,
        }
    }

    /// Fenstergröße der Variante [Breite, Höhe]
    pub fn window_size(self) -> [f32; 2] {
        match self {
            Self::Basic => [1200.0, 800.0],
            Self::Advanced => [1400.0, 900.0],
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einlesbaren Simulator-Optionen.
/// Wird als `robot_arm_simulator.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulatorOptions {
    /// Arm-Variante (Gliederzahl, Slider-Bereich, Overlays)
    pub preset: ArmPreset,

    // ── Slider ──────────────────────────────────────────────────
    /// Minimale Segmentlänge
    pub segment_length_min: f64,
    /// Minimaler Gelenkwinkel (Grad)
    pub angle_min: f64,
    /// Maximaler Gelenkwinkel (Grad)
    pub angle_max: f64,
    /// Nachkommastellen der Slider
    pub slider_decimals: usize,

    // ── Spur ────────────────────────────────────────────────────
    /// Maximale Anzahl Spurpunkte
    pub trace_capacity: usize,
    /// Mindestabstand neuer Spurpunkte
    pub trace_min_spacing: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Ziel-Bildrate
    pub target_fps: u32,
    // Farben überschreiben einzeln das Farbschema des Presets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_color: Option<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_color: Option<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_color: Option<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_effector_color: Option<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_color: Option<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_color: Option<[u8; 3]>,
    /// Linienstärke der Armglieder
    pub arm_width: f32,
    /// Linienstärke der Spur
    pub trace_width: f32,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            preset: ArmPreset::default(),

            segment_length_min: SEGMENT_LENGTH_MIN,
            angle_min: ANGLE_MIN,
            angle_max: ANGLE_MAX,
            slider_decimals: SLIDER_DECIMALS,

            trace_capacity: TRACE_CAPACITY,
            trace_min_spacing: TRACE_MIN_SPACING,

            target_fps: TARGET_FPS,
            background_color: None,
            panel_color: None,
            arm_color: None,
            joint_color: None,
            end_effector_color: None,
            trace_color: None,
            workspace_color: None,
            arm_width: ARM_WIDTH,
            trace_width: TRACE_WIDTH,
        }
    }
}

impl SimulatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String; fehlende Felder erhalten Standardwerte.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("robot_arm_simulator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("robot_arm_simulator.toml")
    }

    /// Maximale Segmentlänge laut Preset.
    pub fn segment_length_max(&self) -> f64 {
        self.preset.segment_length_max()
    }

    /// Untere Slider-Grenze der Segmentlängen, nie negativ.
    pub fn segment_length_floor(&self) -> f64 {
        self.segment_length_min.max(0.0)
    }

    /// Begrenzt eine Segmentlänge auf den Slider-Bereich.
    pub fn clamp_segment_length(&self, length: f64) -> f64 {
        let min = self.segment_length_floor();
        length.clamp(min, self.segment_length_max().max(min))
    }

    /// Farbschema des Presets mit den in der Datei gesetzten Farben.
    pub fn palette(&self) -> ColorPalette {
        let preset = self.preset.palette();
        ColorPalette {
            background: self.background_color.unwrap_or(preset.background),
            panel: self.panel_color.unwrap_or(preset.panel),
            arm: self.arm_color.unwrap_or(preset.arm),
            joint: self.joint_color.unwrap_or(preset.joint),
            end_effector: self.end_effector_color.unwrap_or(preset.end_effector),
            trace: self.trace_color.unwrap_or(preset.trace),
            workspace: self.workspace_color.unwrap_or(preset.workspace),
        }
    }

    /// Begrenzt einen Gelenkwinkel auf den Slider-Bereich.
    pub fn clamp_angle(&self, angle: f64) -> f64 {
        angle.clamp(self.angle_min, self.angle_max.max(self.angle_min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let opts = SimulatorOptions::from_toml(
            r#"
            preset = "basic"
            trace_capacity = 120
            "#,
        )
        .expect("TOML sollte parsen");

        assert_eq!(opts.preset, ArmPreset::Basic);
        assert_eq!(opts.trace_capacity, 120);
        assert_eq!(opts.trace_min_spacing, TRACE_MIN_SPACING);
        assert_eq!(opts.palette(), BASIC_PALETTE);
    }

    #[test]
    fn palette_follows_preset_and_file_overrides() {
        assert_eq!(SimulatorOptions::default().palette(), ADVANCED_PALETTE);

        let opts = SimulatorOptions::from_toml(
            r#"
            preset = "basic"
            arm_color = [1, 2, 3]
            "#,
        )
        .expect("TOML sollte parsen");

        let palette = opts.palette();
        assert_eq!(palette.arm, [1, 2, 3]);
        assert_eq!(palette.background, [20, 25, 40]);
        assert_eq!(palette.panel, [40, 45, 60]);
        assert_eq!(palette.joint, [255, 100, 100]);
        assert_eq!(palette.end_effector, [100, 255, 100]);
    }

    #[test]
    fn negative_segment_minimum_is_floored_at_zero() {
        let opts = SimulatorOptions::from_toml("segment_length_min = -50.0")
            .expect("TOML sollte parsen");
        assert_eq!(opts.segment_length_floor(), 0.0);
        assert_eq!(opts.clamp_segment_length(-80.0), 0.0);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(SimulatorOptions::from_toml("preset = 7").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let opts = SimulatorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/robot_arm_simulator.toml",
        ));
        assert_eq!(opts, SimulatorOptions::default());
    }

    #[test]
    fn presets_define_chain_length_and_overlays() {
        assert_eq!(ArmPreset::Basic.initial_segments().len(), 3);
        assert_eq!(ArmPreset::Advanced.initial_segments().len(), 4);
        assert!(!ArmPreset::Basic.overlays_visible());
    }

    #[test]
    fn clamping_uses_preset_maximum() {
        let mut opts = SimulatorOptions::default();
        assert_eq!(opts.clamp_segment_length(500.0), 200.0);
        opts.preset = ArmPreset::Basic;
        assert_eq!(opts.clamp_segment_length(500.0), 150.0);
        assert_eq!(opts.clamp_segment_length(1.0), SEGMENT_LENGTH_MIN);
        assert_eq!(opts.clamp_angle(-720.0), ANGLE_MIN);
    }
}
