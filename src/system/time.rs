//! Wall clock for the header
//!
//! There is no RTC backup or time sync, so the clock starts from the build
//! time embedded by `build.rs` and counts uptime on top of it.

use chrono::{DateTime, NaiveDateTime};
use embassy_time::Instant;

/// Local offset from UTC in seconds
pub const TIMEZONE: i64 = 3_600;

/// Wall time anchored to an uptime instant
pub struct Clock {
    /// Local time at `instant`
    reference: NaiveDateTime,
    /// Uptime when `reference` was valid
    instant: Instant,
}

impl Clock {
    /// Anchor the clock at `epoch` (UTC seconds) now, shifted to local time.
    pub fn from_epoch(epoch: i64) -> Self {
        let reference = DateTime::from_timestamp(epoch + TIMEZONE, 0)
            .map(|utc| utc.naive_utc())
            .unwrap_or_default();

        Self {
            reference,
            instant: Instant::now(),
        }
    }

    /// Current local time
    pub fn now(&self) -> NaiveDateTime {
        let since = Instant::now().duration_since(self.instant);
        self.reference + chrono::Duration::milliseconds(since.as_millis() as i64)
    }
}
