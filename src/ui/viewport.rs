//! Arm-Viewport: zeichnet die ArmScene mit dem egui-Painter.
//!
//! Weltkoordinaten entsprechen Pixeln, Ursprung ist die Viewport-Mitte,
//! y wächst nach unten.

use glam::DVec2;

use super::{color32, highlight};
use crate::shared::ArmScene;

const JOINT_RADIUS: f32 = 10.0;
const END_EFFECTOR_RADIUS: f32 = 15.0;
const WORKSPACE_STROKE: f32 = 2.0;

/// Rendert den Viewport mit Arbeitsraum, Spur, Armgliedern und Gelenken.
pub fn render_arm_viewport(ctx: &egui::Context, scene: &ArmScene) {
    let frame = egui::Frame::NONE.fill(color32(scene.options.palette().background));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let origin = response.rect.center();

        draw_workspace(&painter, scene, origin);
        draw_trace(&painter, scene, origin);
        draw_arm(&painter, scene, origin);
    });
}

/// Rechnet einen Weltpunkt in Bildschirmkoordinaten um.
pub fn to_screen(origin: egui::Pos2, point: DVec2) -> egui::Pos2 {
    origin + egui::vec2(point.x as f32, point.y as f32)
}

fn draw_workspace(painter: &egui::Painter, scene: &ArmScene, origin: egui::Pos2) {
    if !scene.show_workspace {
        return;
    }
    let center = to_screen(origin, scene.base());
    let stroke = egui::Stroke::new(WORKSPACE_STROKE, color32(scene.options.palette().workspace));

    painter.circle_stroke(center, scene.metrics.max_reach as f32, stroke);
    if scene.has_inner_workspace_circle() {
        painter.circle_stroke(center, scene.metrics.min_reach as f32, stroke);
    }
}

fn draw_trace(painter: &egui::Painter, scene: &ArmScene, origin: egui::Pos2) {
    if !scene.has_trace_line() {
        return;
    }
    let points: Vec<egui::Pos2> = scene
        .trace
        .iter()
        .map(|point| to_screen(origin, *point))
        .collect();
    let stroke = egui::Stroke::new(
        scene.options.trace_width,
        color32(scene.options.palette().trace),
    );
    painter.add(egui::Shape::line(points, stroke));
}

fn draw_arm(painter: &egui::Painter, scene: &ArmScene, origin: egui::Pos2) {
    let arm_width = scene.options.arm_width;
    let colors = scene.options.palette();
    let outer = egui::Stroke::new(arm_width, color32(colors.arm));
    let inner = egui::Stroke::new(arm_width * 2.0 / 3.0, highlight(colors.arm));

    for pair in scene.joints.windows(2) {
        let segment = [to_screen(origin, pair[0]), to_screen(origin, pair[1])];
        painter.line_segment(segment, outer);
        painter.line_segment(segment, inner);
    }

    // Gelenke inkl. Basis, nummeriert; der Endeffektor folgt separat
    let joint_count = scene.joints.len() - 1;
    for (index, joint) in scene.joints.iter().enumerate() {
        let center = to_screen(origin, *joint);
        painter.circle_filled(center, JOINT_RADIUS, color32(colors.joint));
        painter.circle_filled(center, JOINT_RADIUS - 2.0, highlight(colors.joint));

        if index < joint_count {
            painter.text(
                center - egui::vec2(0.0, 2.0 * JOINT_RADIUS),
                egui::Align2::CENTER_CENTER,
                (index + 1).to_string(),
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
        }
    }

    let tip = to_screen(origin, scene.end_effector());
    painter.circle_filled(tip, END_EFFECTOR_RADIUS, color32(colors.end_effector));
    painter.circle_filled(tip, END_EFFECTOR_RADIUS - 3.0, highlight(colors.end_effector));
}
