//! Interval computation between two resolved instants.

use serde::Serialize;

use crate::error::Result;
use crate::resolve::resolve_server;
use crate::zone::ZoneSpec;

/// Default template for rendered intervals.
pub const DIFF_TEMPLATE: &str = "%a days %H:%i:%s";

/// Signed total and absolute component breakdown between two instants.
///
/// Components carry days, hours, minutes, and seconds only; months and years
/// are a humanizer concern.
#[derive(Debug, Clone, Serialize)]
pub struct IntervalParts {
    /// Total seconds, negative when `to` precedes `from`.
    pub total_seconds: i64,
    /// Whole days of the absolute distance.
    pub days: i64,
    /// Hours remainder (0-23).
    pub hours: i64,
    /// Minutes remainder (0-59).
    pub minutes: i64,
    /// Seconds remainder (0-59).
    pub seconds: i64,
}

impl IntervalParts {
    /// Decompose the distance between two epoch readings.
    pub fn between(from_epoch: i64, to_epoch: i64) -> Self {
        let total_seconds = to_epoch - from_epoch;
        let abs = total_seconds.unsigned_abs();

        let days = (abs / 86400) as i64;
        let remainder = abs % 86400;
        let hours = (remainder / 3600) as i64;
        let remainder = remainder % 3600;
        let minutes = (remainder / 60) as i64;
        let seconds = (remainder % 60) as i64;

        Self {
            total_seconds,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Substitute the breakdown into `template`: `%a` whole days, `%H`/`%i`/
    /// `%s` zero-padded remainders, `%%` literal. Unknown sequences pass
    /// through.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 8);
        let mut chars = template.chars();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some('a') => out.push_str(&self.days.to_string()),
                Some('H') => out.push_str(&format!("{:02}", self.hours)),
                Some('i') => out.push_str(&format!("{:02}", self.minutes)),
                Some('s') => out.push_str(&format!("{:02}", self.seconds)),
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
}

/// Render the interval between two server-side expressions. Both ends resolve
/// against UTC, so the zone cancels out of the subtraction.
pub fn diff(from: Option<&str>, to: Option<&str>, template: Option<&str>) -> Result<String> {
    let from = resolve_server(from, &ZoneSpec::Unspecified, None)?;
    let to = resolve_server(to, &ZoneSpec::Unspecified, None)?;
    let parts = IntervalParts::between(from.epoch(), to.epoch());
    Ok(parts.render(template.unwrap_or(DIFF_TEMPLATE)))
}
