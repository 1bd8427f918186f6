//! Day-offset time codec.
//!
//! Schedule times are written as `"<day>.<hour>:<minute>"`, where `day`
//! counts midnight rollovers from the start of the operating day
//! (`"1.00:30"` is half past midnight of the following night). Internally
//! they are handled as a linear count of minutes.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

static DAY_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d{1,2}):(\d{1,2})$").expect("valid day-time regex"));

/// Parse `"<day>.<HH>:<MM>"` into minutes from day 0, 00:00.
///
/// Hours and minutes may be written with one or two digits. A missing
/// separator, a signed or non-numeric fragment, an hour outside `0..=23` or
/// a minute outside `0..=59` are rejected.
pub fn parse_day_time(t: &str) -> AppResult<i64> {
    let caps = DAY_TIME_RE
        .captures(t)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

    let field = |i: usize| -> AppResult<i64> {
        caps[i]
            .parse::<i64>()
            .map_err(|_| AppError::InvalidTime(t.to_string()))
    };

    let day = field(1)?;
    let hour = field(2)?;
    let minute = field(3)?;

    if hour > 23 {
        return Err(AppError::InvalidTime(format!("{t} (hour out of range)")));
    }
    if minute > 59 {
        return Err(AppError::InvalidTime(format!("{t} (minute out of range)")));
    }

    day.checked_mul(MINUTES_PER_DAY)
        .and_then(|m| m.checked_add(hour * MINUTES_PER_HOUR + minute))
        .ok_or_else(|| AppError::InvalidTime(format!("{t} (day out of range)")))
}

/// Format a minute count back to the canonical `"<day>.<HH>:<MM>"` form.
pub fn format_day_time(minutes: i64) -> AppResult<String> {
    if minutes < 0 {
        return Err(AppError::InvalidTime(format!(
            "negative minute count: {minutes}"
        )));
    }

    let day = minutes / MINUTES_PER_DAY;
    let rest = minutes % MINUTES_PER_DAY;

    Ok(format!(
        "{}.{:02}:{:02}",
        day,
        rest / MINUTES_PER_HOUR,
        rest % MINUTES_PER_HOUR
    ))
}

/// Strict ordering: equal times are not "before" each other.
pub fn is_before(t1: &str, t2: &str) -> AppResult<bool> {
    Ok(parse_day_time(t1)? < parse_day_time(t2)?)
}

/// Zero-padded canonical form of a valid time (`"1.8:5"` → `"1.08:05"`).
pub fn canonical_day_time(t: &str) -> AppResult<String> {
    format_day_time(parse_day_time(t)?)
}
