use std::time::{Duration, Instant};

/// Fixed-period clock for the game loop. The caller passes `now` in, so the
/// ticker itself never sleeps or reads the time.
pub struct Ticker {
    period: Duration,
    next_tick: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Ticker { period, next_tick: now + period }
    }

    /// True at most once per period. After a stall the schedule restarts from
    /// `now` rather than firing a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }

        self.next_tick += self.period;
        if self.next_tick <= now {
            self.next_tick = now + self.period;
        }
        true
    }

    pub fn time_left(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    pub fn restart(&mut self, now: Instant) {
        self.next_tick = now + self.period;
    }
}
