//! Unit tests for the task context.

mod service_tests;
mod subscription_tests;

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock returning a preset instant, for deterministic ordering tests.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses an RFC 3339 timestamp for fixture data.
pub fn instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}
