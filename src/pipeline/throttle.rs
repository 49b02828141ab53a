use std::time::{Duration, Instant};

/// Decides whether an incoming frame triggers a full classification pass.
///
/// The evaluators and angle thresholds are tuned for near-1fps human-motion
/// cadence; frames arriving faster than the interval only refresh overlay
/// geometry.
#[derive(Debug)]
pub struct EvalThrottle {
    interval: Duration,
    last_eval: Option<Instant>,
}

impl EvalThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_eval: None,
        }
    }

    /// Returns true when a full evaluation is due, resetting the clock.
    pub fn should_evaluate(&mut self, now: Instant) -> bool {
        let due = match self.last_eval {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        };
        if due {
            self.last_eval = Some(now);
        }
        due
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_always_due() {
        let mut throttle = EvalThrottle::new(Duration::from_millis(800));
        assert!(throttle.should_evaluate(Instant::now()));
    }

    #[test]
    fn frames_inside_interval_are_skipped() {
        let mut throttle = EvalThrottle::new(Duration::from_millis(800));
        let start = Instant::now();
        assert!(throttle.should_evaluate(start));
        assert!(!throttle.should_evaluate(start + Duration::from_millis(300)));
        assert!(!throttle.should_evaluate(start + Duration::from_millis(799)));
    }

    #[test]
    fn frame_at_exact_interval_boundary_is_due() {
        let mut throttle = EvalThrottle::new(Duration::from_millis(800));
        let start = Instant::now();
        assert!(throttle.should_evaluate(start));
        assert!(throttle.should_evaluate(start + Duration::from_millis(800)));
    }

    #[test]
    fn clock_resets_on_each_due_frame() {
        let mut throttle = EvalThrottle::new(Duration::from_millis(800));
        let start = Instant::now();
        assert!(throttle.should_evaluate(start));
        assert!(throttle.should_evaluate(start + Duration::from_millis(900)));
        // 900 + 700 is past the original start but not the reset clock.
        assert!(!throttle.should_evaluate(start + Duration::from_millis(1600)));
        assert!(throttle.should_evaluate(start + Duration::from_millis(1700)));
    }
}
