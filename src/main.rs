//! Robot-Arm-Simulator.
//!
//! Interaktive Visualisierung eines planaren Roboterarms mit egui:
//! Slider für Segmentlängen und Gelenkwinkel, Endeffektor-Spur und Arbeitsraum.

use eframe::egui;
use robot_arm_simulator::{ui, AppController, AppIntent, AppState, SimulatorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Robot-Arm-Simulator v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SimulatorOptions::config_path();
        let simulator_options = SimulatorOptions::load_from_file(&config_path);
        let window_size = simulator_options.preset.window_size();

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(window_size)
                .with_title("2D Robotic Arm Simulator"),
            ..Default::default()
        };

        eframe::run_native(
            "Robot-Arm-Simulator",
            options,
            Box::new(|_cc| Ok(Box::new(SimulatorApp::new(simulator_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SimulatorApp {
    state: AppState,
    controller: AppController,
}

impl SimulatorApp {
    fn new(options: SimulatorOptions) -> Self {
        let state = AppState::with_options(options);
        log::info!(
            "Preset {:?} mit {} Gliedern geladen",
            state.options.preset,
            state.segment_count()
        );

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for SimulatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        let scene = self.controller.build_render_scene(&self.state);
        ui::render_arm_viewport(ctx, &scene);

        let fps = f64::from(self.state.options.target_fps.max(1));
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(1.0 / fps));
    }
}

impl SimulatorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        // Panel zuerst, sonst überschreiben alte Slider-Werte einen Reset per Taste
        let mut events = ui::render_control_panel(ctx, &mut self.state);
        events.extend(ui::collect_keyboard_intents(ctx));
        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
