use std::time::Duration;

/// A cancellable one-shot task that fires once its quiet period has elapsed
/// without being rescheduled.
///
/// Time is passed in by the caller (seconds, as in `egui::InputState::time`),
/// so tests can step it by hand.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(quiet_period: f64) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// (Re)start the quiet period at `now`, replacing any pending deadline
    pub fn schedule(&mut self, now: f64) {
        self.deadline = Some(now + self.quiet_period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first poll at or after the deadline
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending task fires, for scheduling a wake-up
    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.deadline
            .map(|deadline| Duration::from_secs_f64((deadline - now).max(0.0)))
    }
}
