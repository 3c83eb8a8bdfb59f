use chrono::{NaiveDate, Utc};

/// Source of "today" for month resolution and highlighting. Injected so the
/// grid stays deterministic under test.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation; dates are taken in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
