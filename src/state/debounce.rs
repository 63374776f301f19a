//! Restartable one-shot deadline.
//!
//! The event loop owns no timers: it asks for [`DebounceTimer::deadline`] to
//! bound its poll timeout and calls [`DebounceTimer::fire_if_due`] each tick.

use std::time::{Duration, Instant};

/// A quiet-period timer that re-arms on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Create a disarmed timer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Pending deadline, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True while armed.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire once if the deadline has passed. A fired timer is disarmed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(200);

    #[test]
    fn new_timer_is_disarmed() {
        let mut timer = DebounceTimer::new(DELAY);
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(Instant::now()));
    }

    #[test]
    fn fires_only_after_delay() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.arm(start);

        assert!(!timer.fire_if_due(start + Duration::from_millis(199)));
        assert!(timer.fire_if_due(start + DELAY));
    }

    #[test]
    fn fires_at_most_once() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.arm(start);

        assert!(timer.fire_if_due(start + DELAY));
        assert!(!timer.fire_if_due(start + DELAY * 2));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearming_pushes_deadline_back() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.arm(start);
        timer.arm(start + Duration::from_millis(150));

        assert!(!timer.fire_if_due(start + DELAY));
        assert_eq!(
            timer.deadline(),
            Some(start + Duration::from_millis(350))
        );
    }

    #[test]
    fn cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.arm(start);
        timer.cancel();

        assert!(!timer.fire_if_due(start + DELAY * 10));
    }
}
