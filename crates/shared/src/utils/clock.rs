use chrono::{NaiveDateTime, SubsecRound, Utc};
use std::sync::Arc;

pub type DynClock = Arc<dyn Clock + Send + Sync>;

/// Source of "now" for record timestamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// UTC wall clock, truncated to microseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc().trunc_subsecs(6)
    }
}
