//! # Result Composer
//!
//! Builds the one-line summary returned to the caller:
//!
//! ```text
//! Bob Smith updated 5 price(s) on 2026-01-12 14:30:45
//! ```
//!
//! The timestamp is the current instant in the configured reference zone,
//! rendered without an offset.

use crate::operations::OperationKind;
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Layout of the summary timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current instant.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Wall-clock time of `instant` in `zone`, offset dropped.
pub fn civil_time(instant: DateTime<Utc>, zone: Tz) -> NaiveDateTime {
    instant.with_timezone(&zone).naive_local()
}

/// `"<name> <verb> <count> <noun> on <YYYY-MM-DD HH:MM:SS>"`
pub fn compose(user_name: &str, rows_affected: i64, kind: OperationKind, at: NaiveDateTime) -> String {
    let descriptor = kind.descriptor();
    format!(
        "{} {} {} {} on {}",
        user_name,
        descriptor.verb,
        rows_affected,
        descriptor.noun,
        at.format(TIMESTAMP_FORMAT)
    )
}
