use recipe_radar::{
    format_clock, segment, start_cooking, CookingSession, Difficulty, EngineConfig, EngineError,
    Recipe, Step, StepStatus, TimerState,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn steps(timers: &[u32]) -> Vec<Step> {
    timers
        .iter()
        .enumerate()
        .map(|(i, t)| Step::new(format!("Do thing {}", i + 1), *t))
        .collect()
}

fn recipe_with_instructions(instructions: &str) -> Recipe {
    Recipe {
        id: "53049".to_string(),
        name: "Apam balik".to_string(),
        instructions: instructions.to_string(),
        ingredients: Vec::new(),
        cook_time_minutes: 30,
        difficulty: Difficulty::Medium,
        cuisine: "malaysian".to_string(),
        category: Some("Dessert".to_string()),
    }
}

#[test]
fn test_recipe_without_instructions_has_no_session() {
    init_logger();
    let recipe = recipe_with_instructions("  \r\n \r\n");
    let result = start_cooking(&recipe, &EngineConfig::default());
    assert!(matches!(result, Err(EngineError::NoInstructions)));
}

#[test]
fn test_full_walkthrough() {
    init_logger();
    let recipe = recipe_with_instructions(
        "1. Mix milk, oil and egg together.\r\n2. Sift flour, baking powder and salt into the mixture.\r\n3. Cook in a pan.",
    );
    let mut session = start_cooking(&recipe, &EngineConfig::default()).unwrap();
    assert_eq!(session.len(), 3);
    assert_eq!(session.current_step().text, "Mix milk, oil and egg together.");

    session.toggle_timer();
    for _ in 0..30 {
        session.tick();
    }
    assert_eq!(session.timer_state(), TimerState::Expired);
    session.toggle_step_completion(0).unwrap();

    assert!(session.next_step());
    assert_eq!(session.timer_state(), TimerState::Idle);
    assert_eq!(session.step_status(0), StepStatus::Completed);
    assert_eq!(session.step_status(1), StepStatus::Current);
    assert_eq!(session.step_status(2), StepStatus::Pending);

    session.go_to_step(2).unwrap();
    session.toggle_step_completion(2).unwrap();
    assert_eq!(session.progress_percent(), 100.0);

    assert_eq!(session.exit(), 2);
}

#[test]
fn test_index_stays_in_range_under_any_navigation() {
    let mut session = CookingSession::start(steps(&[30, 30, 30])).unwrap();
    let len = session.len();

    // Deterministic mix of moves, including invalid jumps
    for i in 0..200usize {
        match i % 7 {
            0 | 3 => {
                session.next_step();
            }
            1 | 5 => {
                session.previous_step();
            }
            2 => {
                let _ = session.go_to_step(i % 5);
            }
            4 => {
                assert!(session.go_to_step(len + i).is_err());
            }
            _ => {
                session.next_step();
                session.next_step();
            }
        }
        assert!(session.current_index() < len);
    }
}

#[test]
fn test_zero_length_timer_expires_on_first_tick() {
    let mut session = CookingSession::start(steps(&[0])).unwrap();

    session.toggle_timer();
    assert!(session.timer_running());
    session.toggle_timer();
    assert!(session.timer_running());
    assert_eq!(session.timer_remaining_seconds(), 0);

    session.tick();
    assert!(!session.timer_running());
    assert_eq!(session.timer_remaining_seconds(), 0);
}

#[test]
fn test_tick_while_stopped_is_ignored() {
    let mut session = CookingSession::start(steps(&[45])).unwrap();
    session.tick();
    session.tick();
    assert_eq!(session.timer_remaining_seconds(), 0);
    assert_eq!(session.timer_state(), TimerState::Idle);

    session.reset_timer();
    session.tick();
    assert_eq!(session.timer_remaining_seconds(), 45);
}

#[test]
fn test_switching_steps_never_carries_a_countdown() {
    let mut session = CookingSession::start(steps(&[60, 90])).unwrap();
    session.toggle_timer();
    session.tick();
    session.go_to_step(1).unwrap();
    session.tick();

    assert!(!session.timer_running());
    assert_eq!(session.timer_remaining_seconds(), 0);

    session.toggle_timer();
    assert_eq!(session.timer_remaining_seconds(), 90);
}

#[test]
fn test_completion_is_independent_of_navigation_and_timer() {
    let mut session = CookingSession::start(steps(&[30, 30])).unwrap();
    session.toggle_timer();
    session.toggle_step_completion(1).unwrap();

    assert!(session.timer_running());
    assert_eq!(session.current_index(), 0);
    assert!(session.is_completed(1));

    let err = session.toggle_step_completion(2).unwrap_err();
    assert_eq!(err.to_string(), "Step 2 is out of range for a recipe with 2 steps");
}

#[test]
fn test_restart_begins_clean() {
    let walkthrough = segment("- Boil\n- Drain");
    let mut session = CookingSession::start(walkthrough.clone()).unwrap();
    session.next_step();
    session.toggle_step_completion(0).unwrap();
    session.toggle_timer();
    session.exit();

    let session = CookingSession::start(walkthrough).unwrap();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.completed().count(), 0);
    assert!(!session.timer_running());
}

#[test]
fn test_snapshot_serializes_for_presentation() {
    let mut session = CookingSession::start(steps(&[75, 30])).unwrap();
    session.toggle_timer();
    session.tick();

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["current_index"], 0);
    assert_eq!(json["timer_remaining_seconds"], 74);
    assert_eq!(json["timer_state"], "running");
    assert_eq!(json["progress_percent"], 50.0);
    assert_eq!(format_clock(session.timer_display_seconds()), "1:14");
}
