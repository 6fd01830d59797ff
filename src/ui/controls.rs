//! Bedienpanel (linke Seitenleiste): Slider, Buttons, Info-Block.

use crate::app::{AppIntent, AppState};
use crate::shared::SimulatorOptions;

/// Rendert das Bedienpanel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let panel_color = state.options.palette().panel;
    let panel_frame = egui::Frame::side_top_panel(&ctx.style()).fill(super::color32(panel_color));

    egui::SidePanel::left("control_panel")
        .default_width(300.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Robot Arm Simulator");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                // Slider-Werte jeden Frame, auch unverändert
                render_sliders(ui, &state.options, &mut state.ui);
                events.push(AppIntent::ArmInputChanged {
                    segments: state.ui.segment_values.clone(),
                    angles: state.ui.angle_values.clone(),
                });

                ui.separator();
                render_buttons(ui, state, &mut events);

                ui.separator();
                render_info(ui, state);

                ui.separator();
                render_controls_help(ui);
            });
        });

    events
}

/// Slider für Segmentlängen und Gelenkwinkel; schreibt direkt in `UiState`.
fn render_sliders(
    ui: &mut egui::Ui,
    options: &SimulatorOptions,
    values: &mut crate::app::UiState,
) {
    let step = 10f64.powi(-(options.slider_decimals as i32));
    let length_min = options.segment_length_floor();
    let length_max = options.segment_length_max().max(length_min);
    let angle_max = options.angle_max.max(options.angle_min);

    ui.label("Segmentlängen");
    for (index, value) in values.segment_values.iter_mut().enumerate() {
        let slider = egui::Slider::new(value, length_min..=length_max)
            .text(format!("Segment {} Length", index + 1))
            .fixed_decimals(options.slider_decimals)
            .step_by(step);
        ui.add(slider);
    }

    ui.add_space(8.0);
    ui.label("Gelenkwinkel");
    for (index, value) in values.angle_values.iter_mut().enumerate() {
        let slider = egui::Slider::new(value, options.angle_min..=angle_max)
            .text(format!("Joint {} Angle", index + 1))
            .suffix("°")
            .fixed_decimals(options.slider_decimals)
            .step_by(step);
        ui.add(slider);
    }
}

fn render_buttons(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        if ui.button("Clear Trace").clicked() {
            events.push(AppIntent::ClearTraceRequested);
        }
        if ui.button("Reset").clicked() {
            events.push(AppIntent::ResetArmRequested);
        }
    });

    let mut show_trace = state.view.show_trace;
    if ui.checkbox(&mut show_trace, "Spur anzeigen (T)").changed() {
        events.push(AppIntent::ToggleTraceRequested);
    }
    let mut show_workspace = state.view.show_workspace;
    if ui
        .checkbox(&mut show_workspace, "Arbeitsraum anzeigen (W)")
        .changed()
    {
        events.push(AppIntent::ToggleWorkspaceRequested);
    }
}

fn render_info(ui: &mut egui::Ui, state: &AppState) {
    let end = state.arm.pose().end_effector();
    let metrics = state.arm.reach_metrics();

    ui.label(format!("End Effector: ({:.1}, {:.1})", end.x, end.y));
    ui.label(format!("Max Reach: {:.1}", metrics.max_reach));
    ui.label(format!("Min Reach: {:.1}", metrics.min_reach));
    ui.label(format!("Workspace: {:.0} px²", metrics.workspace_area));
    ui.label(format!("Segments: {}", state.segment_count()));
    ui.label(format!("Trace Points: {}", state.trace_point_count()));

    ui.add_space(4.0);
    for index in 0..state.segment_count() {
        if let Some(info) = state.arm.joint_info(index) {
            ui.label(format!(
                "Joint {}: {:.1}° (Δ {:+.1}°)",
                index + 1,
                info.angle,
                info.velocity
            ));
        }
    }
}

fn render_controls_help(ui: &mut egui::Ui) {
    ui.label("Controls:");
    let help = egui::Color32::from_gray(180);
    for line in [
        "T - Toggle trace",
        "W - Toggle workspace",
        "C - Clear trace",
        "R - Reset arm",
    ] {
        ui.label(egui::RichText::new(line).small().color(help));
    }
}
