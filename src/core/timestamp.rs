//! Date and elapsed-time prefix tokens

use chrono::{DateTime, Local, TimeZone};
use std::time::{Duration, Instant};

/// strftime pattern for the date token: `2025-01-08 10:30:45.123`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format a wall-clock time as `[YYYY-MM-DD HH:MM:SS.mmm]`
#[must_use]
pub fn date_token<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("[{}]", datetime.format(DATE_FORMAT))
}

/// Date token for the current local time
#[must_use]
pub fn now_token() -> String {
    date_token(&Local::now())
}

/// Format an elapsed duration as `[+S.sssS]`, e.g. `[+0.100s]`
#[must_use]
pub fn elapsed_token(elapsed: Duration) -> String {
    format!("[+{:.3}s]", elapsed.as_secs_f64())
}

/// Time since the previous qualifying call, recording `now` as the new baseline.
///
/// The first call uses `now` as its own baseline and reports zero.
pub fn advance(last: &mut Option<Instant>, now: Instant) -> Duration {
    let baseline = last.replace(now).unwrap_or(now);
    now.saturating_duration_since(baseline)
}
