//! Arm-Szene als expliziter Übergabevertrag zwischen App und UI-Zeichenlogik.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use glam::DVec2;
use robot_arm_engine::ReachMetrics;

use super::options::SimulatorOptions;

/// Read-only Daten für einen Frame, in Viewport-Koordinaten (Pixel).
#[derive(Debug, Clone)]
pub struct ArmScene {
    /// Gelenkpositionen inklusive Basis (Index 0) und Endeffektor (letzter Index)
    pub joints: Vec<DVec2>,
    /// Aufgezeichnete Endeffektor-Spur, älteste zuerst
    pub trace: Vec<DVec2>,
    /// Reichweiten-Metriken der aktuellen Konfiguration
    pub metrics: ReachMetrics,
    /// Spur zeichnen
    pub show_trace: bool,
    /// Arbeitsraum-Kreise zeichnen
    pub show_workspace: bool,
    /// Farben und Linienstärken
    pub options: SimulatorOptions,
}

impl ArmScene {
    /// Basispunkt des Arms
    pub fn base(&self) -> DVec2 {
        self.joints[0]
    }

    /// Endeffektor-Position
    pub fn end_effector(&self) -> DVec2 {
        self.joints[self.joints.len() - 1]
    }

    /// Ob die Spur als Polylinie gezeichnet werden kann.
    pub fn has_trace_line(&self) -> bool {
        self.show_trace && self.trace.len() > 1
    }

    /// Innerer Arbeitsraum-Kreis nur bei positivem Radius.
    pub fn has_inner_workspace_circle(&self) -> bool {
        self.show_workspace && self.metrics.min_reach > 0.0
    }
}
