use std::{
    thread,
    time::{Duration, Instant},
};

/// Throttles a loop to at most a given number of ticks per second.
///
/// Each call to [`pace`](Pacer::pace) sleeps until the next tick deadline,
/// then pushes the deadline forward by one period. If the loop falls behind,
/// the deadline resynchronizes to the present instead of accumulating debt,
/// so a slow stretch is not followed by a burst of unthrottled ticks.
///
/// This is a scheduling hint to keep a render surface responsive, not a
/// correctness constraint: simulated time advances by `dt` per tick no
/// matter how the wall clock moves. A non-finite or non-positive rate
/// disables pacing entirely.
#[derive(Debug)]
pub struct Pacer {
    period: Duration,
    deadline: Instant,
}

impl Pacer {
    /// Creates a pacer limiting a loop to `ticks_per_second`.
    #[must_use]
    pub fn new(ticks_per_second: f64) -> Self {
        let period = if ticks_per_second.is_finite() && ticks_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / ticks_per_second)
        } else {
            Duration::ZERO
        };
        Self {
            period,
            deadline: Instant::now(),
        }
    }

    /// Returns true when this pacer never sleeps.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.period.is_zero()
    }

    /// Blocks until the next tick deadline.
    pub fn pace(&mut self) {
        if self.period.is_zero() {
            return;
        }
        let now = Instant::now();
        if self.deadline > now {
            thread::sleep(self.deadline - now);
            self.deadline += self.period;
        } else {
            self.deadline = now + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paces_to_at_most_the_configured_rate() {
        let mut pacer = Pacer::new(200.0);
        let start = Instant::now();
        for _ in 0..5 {
            pacer.pace();
        }
        // 5 ticks at 200/s leave at least 4 full 5 ms periods between them.
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn infinite_rate_disables_pacing() {
        let mut pacer = Pacer::new(f64::INFINITY);
        assert!(pacer.is_disabled());
        let start = Instant::now();
        for _ in 0..10_000 {
            pacer.pace();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn non_positive_rate_disables_pacing() {
        assert!(Pacer::new(0.0).is_disabled());
        assert!(Pacer::new(-60.0).is_disabled());
        assert!(Pacer::new(f64::NAN).is_disabled());
    }
}
