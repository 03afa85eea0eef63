use crate::core::{PassList, PassWindow};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Timestamp layout used in the report, e.g. `Mon Oct 19 2026 10:00:00 GMT-0700`.
///
/// A JavaScript `Date` string would also append the zone name, such as
/// ` (Pacific Daylight Time)`. chrono's `Local` only knows the UTC offset, so
/// the report stops at `GMT-0700`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

pub fn format_pass_line<Tz>(printed_at: &DateTime<Tz>, pass: &PassWindow) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let duration = match (pass.duration(), pass.raw().get("duration")) {
        (Some(seconds), _) => seconds.to_string(),
        (None, Some(raw)) if !raw.is_null() => raw.to_string(),
        _ => "unknown".to_string(),
    };
    format!(
        "Next pass at {} for {} seconds.",
        printed_at.format(TIMESTAMP_FORMAT),
        duration
    )
}

/// One line per pass, all stamped with the same `printed_at` time.
pub fn render_report<Tz>(printed_at: &DateTime<Tz>, passes: &PassList) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    passes
        .iter()
        .map(|pass| format_pass_line(printed_at, pass))
        .collect()
}
