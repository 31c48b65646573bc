use chrono::{DateTime, Utc};

/// Source of "now" for elapsed-time calculations
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the host environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
