//! Timestamp-based id generation (`column-1718000000000`).
//!
//! Two calls within the same millisecond would collide, so the generator
//! remembers the last value it handed out and bumps past it.

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

/// Current time as milliseconds since Unix epoch.
fn now_ms() -> u64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    u64::try_from(dur.as_millis()).unwrap_or(u64::MAX)
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, prefix: &str) -> String {
        self.next_at(prefix, now_ms())
    }

    pub(crate) fn next_at(&mut self, prefix: &str, now: u64) -> String {
        let value = if now > self.last { now } else { self.last + 1 };
        self.last = value;
        format!("{prefix}-{value}")
    }
}
