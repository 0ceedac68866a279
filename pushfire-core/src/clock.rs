//! Source of the current UTC time.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::ClockError;

/// Reports the current UTC time as Unix seconds.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in seconds.
    fn unix_now(&self) -> Result<i64, ClockError>;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_now(&self) -> Result<i64, ClockError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ClockError(e.to_string()))?;
        i64::try_from(since_epoch.as_secs()).map_err(|e| ClockError(e.to_string()))
    }
}

/// A clock stopped at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_now(&self) -> Result<i64, ClockError> {
        Ok(self.0)
    }
}
