use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a user mention (`<@123>` or `<@!123>`) into a user id.
///
/// # Returns
/// - `Some(u64)` - The mentioned user's id
/// - `None` - The token is not a user mention
pub fn parse_user_mention(token: &str) -> Option<u64> {
    let inner = token.strip_prefix("<@")?.strip_suffix('>')?;
    let inner = inner.strip_prefix('!').unwrap_or(inner);
    inner.parse().ok()
}

/// Parses a role mention (`<@&123>`) into a role id.
///
/// # Returns
/// - `Some(u64)` - The mentioned role's id
/// - `None` - The token is not a role mention
pub fn parse_role_mention(token: &str) -> Option<u64> {
    token
        .strip_prefix("<@&")?
        .strip_suffix('>')?
        .parse()
        .ok()
}

/// Accepted input formats for event start times, tried in order.
///
/// Day-first forms come before month-first so unambiguous day-first input
/// is never read as month-first; month-first still catches dates like
/// `12/31/2030` that day-first cannot parse.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a start-time string into a UTC timestamp.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Successfully parsed timestamp
/// - `None` - No accepted format matched
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Parses a `HH:MM` or `HH:MM:SS` duration string.
///
/// Minutes and seconds must be below 60; hours are left to the caller's range
/// checks, except values too large to represent, which are rejected.
///
/// # Returns
/// - `Some(Duration)` - Successfully parsed duration
/// - `None` - The string is not a valid duration
pub fn parse_duration(value: &str) -> Option<Duration> {
    let parts: Vec<&str> = value.trim().split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }

    let hours: i64 = parts[0].parse().ok()?;
    let minutes: i64 = parts[1].parse().ok()?;
    let seconds: i64 = parts.get(2).map_or(Some(0), |s| s.parse().ok())?;

    if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return None;
    }

    let total_seconds = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60)?
        .checked_add(seconds)?;

    Duration::try_seconds(total_seconds)
}

/// Formats a duration as `HH:MM:SS`, the same shape `parse_duration` accepts.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes();
    format!("{:02}:{:02}:00", total_minutes / 60, total_minutes % 60)
}

/// Formats a duration as readable text, e.g. `2 hours and 30 minutes`.
pub fn humanize_duration(duration: Duration) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;

    match (hours, minutes) {
        (0, m) => format!("{} minute{}", m, plural(m)),
        (h, 0) => format!("{} hour{}", h, plural(h)),
        (h, m) => format!(
            "{} hour{} and {} minute{}",
            h,
            plural(h),
            m,
            plural(m)
        ),
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
