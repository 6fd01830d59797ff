use robot_arm_simulator::{
    AppCommand, AppController, AppIntent, AppState, ArmPreset, InvalidConfiguration,
    SimulatorOptions,
};

fn advanced_state() -> AppState {
    AppState::with_options(SimulatorOptions::default())
}

#[test]
fn test_arm_input_changed_updates_pose_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = advanced_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ArmInputChanged {
                segments: vec![120.0, 100.0, 80.0, 60.0],
                angles: vec![90.0, 0.0, 0.0, 0.0],
            },
        )
        .expect("gültige Eingabe sollte übernommen werden");

    let tip = state.arm.pose().end_effector();
    assert!((tip.x - 100.0).abs() < 1e-9);
    assert!((tip.y - 360.0).abs() < 1e-9);
    assert_eq!(state.arm.joint_velocities(), &[90.0, 0.0, 0.0, 0.0]);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::ApplyArmConfiguration { angles, .. } => assert_eq!(angles[0], 90.0),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_invalid_arm_input_is_rejected_and_last_pose_kept() {
    let mut controller = AppController::new();
    let mut state = advanced_state();
    let pose_before = state.arm.pose().clone();

    let err = controller
        .handle_intent(
            &mut state,
            AppIntent::ArmInputChanged {
                segments: vec![120.0, 100.0],
                angles: vec![0.0, 0.0, 0.0],
            },
        )
        .expect_err("ungleich lange Eingabe muss abgelehnt werden");

    assert_eq!(
        err.downcast_ref::<InvalidConfiguration>(),
        Some(&InvalidConfiguration::LengthMismatch {
            segments: 2,
            angles: 3
        })
    );
    assert_eq!(state.arm.pose(), &pose_before);
    assert_eq!(state.segment_count(), 4);
}

#[test]
fn test_sweep_records_trace_and_clear_empties_it() {
    let mut controller = AppController::new();
    let mut state = advanced_state();

    for step in 1..=10 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ArmInputChanged {
                    segments: vec![120.0, 100.0, 80.0, 60.0],
                    angles: vec![step as f64 * 5.0, 0.0, 0.0, 0.0],
                },
            )
            .expect("gültige Eingabe");
    }
    assert_eq!(state.trace_point_count(), 11);

    controller
        .handle_intent(&mut state, AppIntent::ClearTraceRequested)
        .expect("ClearTrace sollte ohne Fehler durchlaufen");
    assert_eq!(state.trace_point_count(), 0);
}

#[test]
fn test_toggles_flip_overlay_visibility() {
    let mut controller = AppController::new();
    let mut state = advanced_state();
    assert!(state.view.show_trace);
    assert!(state.view.show_workspace);

    controller
        .handle_intent(&mut state, AppIntent::ToggleTraceRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ToggleWorkspaceRequested)
        .unwrap();

    assert!(!state.view.show_trace);
    assert!(!state.view.show_workspace);

    let scene = controller.build_render_scene(&state);
    assert!(!scene.has_trace_line());
    assert!(!scene.has_inner_workspace_circle());
}

#[test]
fn test_reset_restores_preset_and_clears_trace() {
    let mut controller = AppController::new();
    let options = SimulatorOptions {
        preset: ArmPreset::Basic,
        ..SimulatorOptions::default()
    };
    let mut state = AppState::with_options(options);

    state.ui.angle_values = vec![45.0, -30.0, 10.0];
    let intent = AppIntent::ArmInputChanged {
        segments: state.ui.segment_values.clone(),
        angles: state.ui.angle_values.clone(),
    };
    controller.handle_intent(&mut state, intent).unwrap();

    controller
        .handle_intent(&mut state, AppIntent::ResetArmRequested)
        .expect("Reset sollte ohne Fehler durchlaufen");

    assert_eq!(state.ui.angle_values, vec![0.0, 0.0, 0.0]);
    assert_eq!(state.arm.configuration().segments(), &[100.0, 80.0, 60.0]);
    assert_eq!(state.trace_point_count(), 0);

    assert!(matches!(
        state.command_log.entries(),
        [.., AppCommand::ResetArm, AppCommand::ClearTrace]
    ));
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = advanced_state();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
}

#[test]
fn test_idle_frames_settle_joint_velocities() {
    let mut controller = AppController::new();
    let mut state = advanced_state();
    let segments = vec![120.0, 100.0, 80.0, 60.0];
    let angles = vec![10.0, 0.0, 0.0, 0.0];

    controller
        .handle_intent(
            &mut state,
            AppIntent::ArmInputChanged {
                segments: segments.clone(),
                angles: angles.clone(),
            },
        )
        .expect("gültige Eingabe");
    assert_eq!(state.arm.joint_velocities(), &[10.0, 0.0, 0.0, 0.0]);
    let trace_after_move = state.trace_point_count();

    // Slider losgelassen: das Panel liefert weiter dieselben Werte pro Frame
    for _ in 0..60 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ArmInputChanged {
                    segments: segments.clone(),
                    angles: angles.clone(),
                },
            )
            .expect("unveränderte Eingabe");
    }

    assert_eq!(state.arm.joint_velocities(), &[0.0, 0.0, 0.0, 0.0]);
    assert_eq!(state.trace_point_count(), trace_after_move);
    assert_eq!(state.arm.configuration().angles(), angles.as_slice());

    // Nur der erste ruhende Frame erzeugt einen Command
    let settles = state
        .command_log
        .entries()
        .iter()
        .filter(|command| matches!(command, AppCommand::SettleArm))
        .count();
    assert_eq!(settles, 1);
}

#[test]
fn test_negative_segment_lengths_are_rejected_without_panic() {
    let mut controller = AppController::new();
    let mut state = advanced_state();

    let err = controller
        .handle_intent(
            &mut state,
            AppIntent::ArmInputChanged {
                segments: vec![-50.0; 4],
                angles: vec![0.0; 4],
            },
        )
        .expect_err("negative Segmentlängen müssen abgelehnt werden");

    assert_eq!(
        err.downcast_ref::<InvalidConfiguration>(),
        Some(&InvalidConfiguration::InvalidSegmentLength {
            index: 0,
            length: -50.0
        })
    );

    // Metriken und Szene bleiben für den Frame abrufbar
    let metrics = state.arm.reach_metrics();
    assert_eq!(metrics.max_reach, 360.0);
    assert_eq!(metrics.min_reach, 120.0);
    let scene = controller.build_render_scene(&state);
    assert!(scene.has_inner_workspace_circle());
}

#[test]
fn test_negative_minimum_in_options_never_builds_invalid_arm() {
    let options = SimulatorOptions::from_toml("segment_length_min = -50.0")
        .expect("TOML sollte parsen");
    let state = AppState::with_options(options);

    assert!(state
        .ui
        .segment_values
        .iter()
        .all(|length| *length >= 0.0));
    assert!(state.arm.reach_metrics().min_reach <= state.arm.reach_metrics().max_reach);
}

#[test]
fn test_unchanged_input_is_not_logged() {
    let mut controller = AppController::new();
    let mut state = advanced_state();

    let intent = AppIntent::ArmInputChanged {
        segments: state.ui.segment_values.clone(),
        angles: state.ui.angle_values.clone(),
    };
    controller.handle_intent(&mut state, intent).unwrap();

    assert!(state.command_log.is_empty());
}
