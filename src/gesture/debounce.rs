// Cooldown gate between emitted actions
use std::time::{Duration, Instant};

/// Enforces a minimum interval between emitted actions.
///
/// Only invoked for candidate actions: ticks where the classifier decides
/// nothing never touch the cooldown, so the interval is measured against
/// actual emissions.
pub struct Debouncer {
    cooldown: Duration,
    last_action: Option<Instant>,
}

impl Debouncer {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_action: None,
        }
    }

    /// Returns true and records `now` as the last-action time if the
    /// cooldown has elapsed (or no action was ever recorded); otherwise
    /// returns false and leaves state untouched.
    pub fn try_consume(&mut self, now: Instant) -> bool {
        let ready = match self.last_action {
            None => true,
            Some(last) => now.duration_since(last) >= self.cooldown,
        };
        if ready {
            self.last_action = Some(now);
        }
        ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_action_passes() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        assert!(debouncer.try_consume(Instant::now()));
    }

    #[test]
    fn second_action_within_cooldown_is_blocked() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let t0 = Instant::now();
        assert!(debouncer.try_consume(t0));
        assert!(!debouncer.try_consume(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn action_after_cooldown_passes() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let t0 = Instant::now();
        assert!(debouncer.try_consume(t0));
        assert!(debouncer.try_consume(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn failed_consume_leaves_state_unchanged() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let t0 = Instant::now();
        assert!(debouncer.try_consume(t0));
        // Blocked attempts must not push the window forward.
        assert!(!debouncer.try_consume(t0 + Duration::from_millis(200)));
        assert!(debouncer.try_consume(t0 + Duration::from_millis(350)));
    }
}
