use super::PulseSource;
use std::time::{Duration, Instant};

/*
 * Clock
 * Periodic pulse: two granted pulses are never closer than `period` but may
 * be further apart when the source is polled late, missed edges are not
 * caught up. A zero period grants every query.
 */
#[derive(Debug, Clone)]
pub struct Clock {
    period: Duration,
    last_pulse: Option<Instant>,
}

impl Clock {
    pub fn new(period: Duration) -> Clock {
        Clock {
            period,
            last_pulse: None,
        }
    }

    pub fn always() -> Clock {
        Clock::new(Duration::ZERO)
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl PulseSource for Clock {
    fn value(&mut self) -> bool {
        if self.period.is_zero() {
            return true;
        }
        let now = Instant::now();
        match self.last_pulse {
            Some(last) if now.duration_since(last) < self.period => false,
            _ => {
                self.last_pulse = Some(now);
                true
            }
        }
    }
}
