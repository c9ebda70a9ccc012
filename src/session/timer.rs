use std::time::{Duration, Instant};

/// Per-question time limit. Armed when a question is shown, cancelled when
/// the player answers, and polled on every tick. A zero limit never fires.
#[derive(Clone, Debug)]
pub struct Countdown {
    limit: Duration,
    deadline: Option<Instant>,
}

impl Countdown {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        if self.limit.is_zero() {
            self.deadline = None;
        } else {
            self.deadline = Some(now + self.limit);
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per arming, on the first poll at or past the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or_default()
    }

    /// Fraction of the limit still left, in `0.0..=1.0`.
    pub fn remaining_ratio(&self, now: Instant) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f64() / self.limit.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(Duration::from_secs(40));
        countdown.arm(t0);

        assert!(!countdown.poll(t0 + Duration::from_secs(39)));
        assert!(countdown.poll(t0 + Duration::from_secs(40)));
        assert!(!countdown.poll(t0 + Duration::from_secs(41)));
        assert!(!countdown.is_armed());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(Duration::from_secs(5));
        countdown.arm(t0);
        countdown.cancel();
        assert!(!countdown.poll(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_rearm_restarts_the_limit() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(Duration::from_secs(5));
        countdown.arm(t0);
        countdown.arm(t0 + Duration::from_secs(4));
        assert!(!countdown.poll(t0 + Duration::from_secs(6)));
        assert!(countdown.poll(t0 + Duration::from_secs(9)));
    }

    #[test]
    fn test_remaining_ratio() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(Duration::from_secs(10));
        assert_eq!(countdown.remaining_ratio(t0), 0.0);
        countdown.arm(t0);
        assert!((countdown.remaining_ratio(t0) - 1.0).abs() < 1e-9);
        assert!((countdown.remaining_ratio(t0 + Duration::from_secs(5)) - 0.5).abs() < 1e-9);
        assert_eq!(countdown.remaining_ratio(t0 + Duration::from_secs(20)), 0.0);
    }

    #[test]
    fn test_zero_limit_never_fires() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(Duration::ZERO);
        countdown.arm(t0);
        assert!(!countdown.is_armed());
        assert!(!countdown.poll(t0 + Duration::from_secs(3600)));
    }
}
