//! Pattern rendering and timezone labeling for resolved instants.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;

use crate::error::Result;
use crate::resolve::{resolve_client, ResolvedInstant};
use crate::zone::ZoneSpec;

/// Default display pattern for stored timestamps.
pub const FORMAT_DEFAULT: &str = "%Y-%m-%d %H:%M:%S";

/// Long-form pattern used on admin screens.
pub const FORMAT_ADMIN: &str = "%b %d, %Y %I:%M:%S %p";

pub(crate) const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Render `instant` under its display zone, optionally appending a
/// human-readable timezone label.
///
/// Rendering is total: recognized `%`-tokens substitute, everything else
/// passes through unchanged. An empty render suppresses the label.
pub fn format_instant(instant: &ResolvedInstant, pattern: &str, append_zone_label: bool) -> String {
    let mut out = render_pattern(instant.datetime(), pattern);
    if append_zone_label && !out.is_empty() {
        if let Some(label) = zone_label(instant) {
            out.push_str(&label);
        }
    }
    out
}

/// Client-side resolve + render, the usual display entry point.
pub fn client_string<F>(
    expr: Option<&str>,
    spec: &ZoneSpec,
    system_tz: Option<&str>,
    pattern: &str,
    append_zone_label: bool,
    session_offset: F,
) -> Result<String>
where
    F: FnOnce() -> Option<i64>,
{
    let instant = resolve_client(expr, spec, system_tz, session_offset)?;
    Ok(format_instant(&instant, pattern, append_zone_label))
}

/// The parenthesized zone annotation, chosen by how the zone was given:
/// the resolved canonical name when unspecified, a `UTC±h.h` offset for
/// numeric specs, the name verbatim for named specs.
fn zone_label(instant: &ResolvedInstant) -> Option<String> {
    match instant.spec() {
        ZoneSpec::Unspecified => {
            let name = instant.zone_name();
            if name.is_empty() {
                None
            } else {
                Some(format!(" ({name})"))
            }
        }
        ZoneSpec::OffsetSeconds(seconds) => {
            Some(format!(" (UTC{:+.1})", *seconds as f64 / 3600.0))
        }
        ZoneSpec::Named(name) => Some(format!(" ({name})")),
    }
}

/// Substitute `%`-tokens against the instant. Unknown sequences and plain
/// characters pass through; `%%` is a literal percent.
fn render_pattern(dt: &DateTime<Tz>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('Y') => out.push_str(&format!("{:04}", dt.year())),
            Some('y') => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
            Some('m') => out.push_str(&format!("{:02}", dt.month())),
            Some('b') => out.push_str(&MONTHS[dt.month0() as usize][..3]),
            Some('B') => out.push_str(MONTHS[dt.month0() as usize]),
            Some('d') => out.push_str(&format!("{:02}", dt.day())),
            Some('e') => out.push_str(&format!("{:2}", dt.day())),
            Some('H') => out.push_str(&format!("{:02}", dt.hour())),
            Some('I') => {
                let (_, hour) = dt.hour12();
                out.push_str(&format!("{hour:02}"));
            }
            Some('M') => out.push_str(&format!("{:02}", dt.minute())),
            Some('S') => out.push_str(&format!("{:02}", dt.second())),
            Some('p') => out.push_str(if dt.hour12().0 { "PM" } else { "AM" }),
            Some('a') => {
                out.push_str(&WEEKDAYS[dt.weekday().num_days_from_monday() as usize][..3])
            }
            Some('A') => out.push_str(WEEKDAYS[dt.weekday().num_days_from_monday() as usize]),
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}
