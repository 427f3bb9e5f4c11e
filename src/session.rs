//! Cooking mode: step-by-step navigation with a per-step countdown.
//!
//! The session never schedules time itself. An external driver calls
//! [`CookingSession::tick`] once per elapsed second while the timer runs.

use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::EngineError;
use crate::model::Step;

/// Countdown state of the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Not started for this step
    Idle,
    Running,
    /// Stopped with time left
    Paused,
    /// Counted down to zero
    Expired,
}

/// How a step appears in the steps overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Current,
    Completed,
    Pending,
}

/// Serializable view of a session after an operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub steps: Vec<Step>,
    pub current_index: usize,
    pub completed: Vec<usize>,
    pub timer_remaining_seconds: u32,
    pub timer_running: bool,
    pub timer_state: TimerState,
    pub progress_percent: f64,
}

/// Interactive walkthrough of a recipe's steps
#[derive(Debug, Clone)]
pub struct CookingSession {
    steps: Vec<Step>,
    current_index: usize,
    completed: BTreeSet<usize>,
    timer_remaining_seconds: u32,
    timer_running: bool,
    timer_expired: bool,
}

impl CookingSession {
    /// Enter cooking mode at the first step with an idle timer.
    ///
    /// An empty step list is rejected with [`EngineError::NoInstructions`].
    pub fn start(steps: Vec<Step>) -> Result<Self, EngineError> {
        if steps.is_empty() {
            return Err(EngineError::NoInstructions);
        }

        info!("Starting cooking session with {} steps", steps.len());
        Ok(CookingSession {
            steps,
            current_index: 0,
            completed: BTreeSet::new(),
            timer_remaining_seconds: 0,
            timer_running: false,
            timer_expired: false,
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a session cannot be started without steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current_index]
    }

    pub fn timer_remaining_seconds(&self) -> u32 {
        self.timer_remaining_seconds
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    /// Jump to step `index`, resetting the timer to idle.
    pub fn go_to_step(&mut self, index: usize) -> Result<(), EngineError> {
        self.check_index(index)?;
        self.current_index = index;
        self.reset_to_idle();
        debug!("Moved to step {}", index + 1);
        Ok(())
    }

    /// Advance one step. Returns false at the last step.
    pub fn next_step(&mut self) -> bool {
        if self.current_index + 1 >= self.steps.len() {
            return false;
        }
        self.current_index += 1;
        self.reset_to_idle();
        true
    }

    /// Go back one step. Returns false at the first step.
    pub fn previous_step(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.reset_to_idle();
        true
    }

    /// Pause or resume a countdown in progress, or start a fresh one from the
    /// current step's estimate.
    pub fn toggle_timer(&mut self) {
        self.timer_expired = false;
        if self.timer_remaining_seconds > 0 {
            self.timer_running = !self.timer_running;
        } else {
            self.timer_remaining_seconds = self.current_step().timer_seconds;
            self.timer_running = true;
        }
    }

    /// Stop the countdown and restore the current step's full estimate.
    pub fn reset_timer(&mut self) {
        self.timer_running = false;
        self.timer_expired = false;
        self.timer_remaining_seconds = self.current_step().timer_seconds;
    }

    /// Advance the countdown by one second. Ignored while the timer is stopped.
    pub fn tick(&mut self) {
        if !self.timer_running {
            return;
        }

        if self.timer_remaining_seconds <= 1 {
            self.timer_remaining_seconds = 0;
            self.timer_running = false;
            self.timer_expired = true;
            debug!("Timer for step {} expired", self.current_index + 1);
        } else {
            self.timer_remaining_seconds -= 1;
        }
    }

    /// Mark step `index` done, or undo that mark.
    pub fn toggle_step_completion(&mut self, index: usize) -> Result<(), EngineError> {
        self.check_index(index)?;
        if !self.completed.remove(&index) {
            self.completed.insert(index);
        }
        Ok(())
    }

    pub fn timer_state(&self) -> TimerState {
        if self.timer_running {
            TimerState::Running
        } else if self.timer_expired {
            TimerState::Expired
        } else if self.timer_remaining_seconds > 0 {
            TimerState::Paused
        } else {
            TimerState::Idle
        }
    }

    /// Seconds to show on the timer face: the countdown, or the estimate
    /// when nothing is counting down.
    pub fn timer_display_seconds(&self) -> u32 {
        if self.timer_remaining_seconds > 0 {
            self.timer_remaining_seconds
        } else {
            self.current_step().timer_seconds
        }
    }

    pub fn progress_percent(&self) -> f64 {
        (self.current_index + 1) as f64 / self.steps.len() as f64 * 100.0
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        if index == self.current_index {
            StepStatus::Current
        } else if self.completed.contains(&index) {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            steps: self.steps.clone(),
            current_index: self.current_index,
            completed: self.completed.iter().copied().collect(),
            timer_remaining_seconds: self.timer_remaining_seconds,
            timer_running: self.timer_running,
            timer_state: self.timer_state(),
            progress_percent: self.progress_percent(),
        }
    }

    /// Leave cooking mode. Returns how many steps were marked complete.
    pub fn exit(self) -> usize {
        info!(
            "Leaving cooking session ({}/{} steps completed)",
            self.completed.len(),
            self.steps.len()
        );
        self.completed.len()
    }

    fn reset_to_idle(&mut self) {
        self.timer_running = false;
        self.timer_remaining_seconds = 0;
        self.timer_expired = false;
    }

    fn check_index(&self, index: usize) -> Result<(), EngineError> {
        if index < self.steps.len() {
            Ok(())
        } else {
            warn!(
                "Rejected step {} for a session with {} steps",
                index,
                self.steps.len()
            );
            Err(EngineError::StepOutOfRange {
                index,
                len: self.steps.len(),
            })
        }
    }
}

/// Format seconds as `m:ss` for timer faces.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(timers: &[u32]) -> CookingSession {
        let steps = timers
            .iter()
            .enumerate()
            .map(|(i, t)| Step::new(format!("Step {}", i + 1), *t))
            .collect();
        CookingSession::start(steps).unwrap()
    }

    #[test]
    fn test_start_rejects_empty_steps() {
        assert!(matches!(
            CookingSession::start(Vec::new()),
            Err(EngineError::NoInstructions)
        ));
    }

    #[test]
    fn test_start_is_clean() {
        let s = session(&[30, 60]);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.timer_remaining_seconds(), 0);
        assert!(!s.timer_running());
        assert_eq!(s.completed().count(), 0);
        assert_eq!(s.timer_state(), TimerState::Idle);
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut s = session(&[30, 60]);
        assert!(!s.previous_step());
        assert_eq!(s.current_index(), 0);
        assert!(s.next_step());
        assert!(!s.next_step());
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn test_go_to_step_out_of_range() {
        let mut s = session(&[30]);
        let err = s.go_to_step(1).unwrap_err();
        assert!(matches!(err, EngineError::StepOutOfRange { index: 1, len: 1 }));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_toggle_timer_pauses_and_resumes() {
        let mut s = session(&[60]);
        s.toggle_timer();
        assert_eq!(s.timer_remaining_seconds(), 60);
        assert_eq!(s.timer_state(), TimerState::Running);

        s.tick();
        s.toggle_timer();
        assert_eq!(s.timer_state(), TimerState::Paused);
        s.tick();
        assert_eq!(s.timer_remaining_seconds(), 59);

        s.toggle_timer();
        assert!(s.timer_running());
        assert_eq!(s.timer_remaining_seconds(), 59);
    }

    #[test]
    fn test_reset_timer_restores_estimate() {
        let mut s = session(&[90]);
        s.toggle_timer();
        s.tick();
        s.tick();
        s.reset_timer();
        assert!(!s.timer_running());
        assert_eq!(s.timer_remaining_seconds(), 90);
        assert_eq!(s.timer_state(), TimerState::Paused);
    }

    #[test]
    fn test_countdown_expires() {
        let mut s = session(&[2]);
        s.toggle_timer();
        s.tick();
        assert_eq!(s.timer_remaining_seconds(), 1);
        s.tick();
        assert_eq!(s.timer_remaining_seconds(), 0);
        assert!(!s.timer_running());
        assert_eq!(s.timer_state(), TimerState::Expired);

        s.tick();
        assert_eq!(s.timer_remaining_seconds(), 0);
    }

    #[test]
    fn test_navigation_drops_running_timer() {
        let mut s = session(&[30, 60]);
        s.toggle_timer();
        s.tick();
        assert!(s.next_step());
        assert!(!s.timer_running());
        assert_eq!(s.timer_remaining_seconds(), 0);
        assert_eq!(s.timer_display_seconds(), 60);
    }

    #[test]
    fn test_step_status_prefers_current() {
        let mut s = session(&[30, 30, 30]);
        s.toggle_step_completion(0).unwrap();
        s.toggle_step_completion(2).unwrap();
        s.toggle_step_completion(2).unwrap();
        assert_eq!(s.step_status(0), StepStatus::Current);
        s.next_step();
        assert_eq!(s.step_status(0), StepStatus::Completed);
        assert_eq!(s.step_status(2), StepStatus::Pending);
        assert!(s.toggle_step_completion(3).is_err());
    }

    #[test]
    fn test_progress_and_snapshot() {
        let mut s = session(&[30, 30, 30, 30]);
        s.go_to_step(1).unwrap();
        let snapshot = s.snapshot();
        assert_eq!(snapshot.progress_percent, 50.0);
        assert_eq!(snapshot.current_index, 1);
        assert_eq!(snapshot.timer_state, TimerState::Idle);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(600), "10:00");
    }
}
