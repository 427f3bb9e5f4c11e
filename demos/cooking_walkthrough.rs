//! Walk through a recipe in cooking mode with a synthetic clock
//!
//! Run with `RUST_LOG=debug cargo run --example cooking_walkthrough` to see
//! the engine's log output.

use recipe_radar::{format_clock, CookingSession, EngineConfig, Segmenter};

const INSTRUCTIONS: &str = "1. Put the flour, eggs, milk, 1 tbsp oil and a pinch of salt into a bowl.\r\n\
2. Whisk to a smooth batter.\r\n\
3. Set aside for 30 mins to rest if you have time.\r\n\
4. Set a medium frying pan over a medium heat and carefully wipe it with some oiled kitchen paper.\r\n\
5. When hot, cook your pancakes for 1 min on each side until golden.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = EngineConfig::load()?;
    let steps = Segmenter::new(&config.segmenter).segment(INSTRUCTIONS);
    let mut session = CookingSession::start(steps)?;

    loop {
        let step = session.current_step();
        println!(
            "Step {} of {} ({:.0}%): {}",
            session.current_index() + 1,
            session.len(),
            session.progress_percent(),
            step.text
        );

        session.toggle_timer();
        while session.timer_running() {
            session.tick();
        }
        println!(
            "  timer {} -> {:?}",
            format_clock(step_estimate(&session)),
            session.timer_state()
        );

        session.toggle_step_completion(session.current_index())?;
        if !session.next_step() {
            break;
        }
    }

    let completed = session.exit();
    println!("Done, {} steps completed", completed);
    Ok(())
}

fn step_estimate(session: &CookingSession) -> u32 {
    session.current_step().timer_seconds
}
