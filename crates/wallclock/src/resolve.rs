//! Resolution of time expressions against server and client timezones.
//!
//! Stored instants are canonical in one server timezone; a caller may express
//! a zone as a named identifier, a raw offset in seconds, or not at all (see
//! [`ZoneSpec`]). [`resolve_server`] leads everything back to the server zone
//! for storage and arithmetic; [`resolve_client`] produces the caller's
//! perceived local time for display.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{Result, WallclockError};
use crate::zone::ZoneSpec;

/// Canonical wall-clock pattern for stored timestamps.
pub const EXPR_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder some stored rows carry instead of a real timestamp. Resolves
/// to epoch 0, never to an underflowed date.
pub const ZERO_DATE: &str = "0000-00-00 00:00:00";

/// An absolute point in time tagged with the zone it should display in.
///
/// The epoch value is the instant itself; the display zone and the
/// originating [`ZoneSpec`] are rendering metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedInstant {
    local: DateTime<Tz>,
    spec: ZoneSpec,
}

impl ResolvedInstant {
    fn new(local: DateTime<Tz>, spec: ZoneSpec) -> Self {
        Self { local, spec }
    }

    /// Epoch seconds of the resolved instant.
    pub fn epoch(&self) -> i64 {
        self.local.timestamp()
    }

    /// The instant under its display zone.
    pub fn datetime(&self) -> &DateTime<Tz> {
        &self.local
    }

    /// Canonical name of the display zone, e.g. `"Europe/Kiev"`.
    pub fn zone_name(&self) -> &'static str {
        self.local.timezone().name()
    }

    /// How the zone was given when this instant was resolved.
    pub fn spec(&self) -> &ZoneSpec {
        &self.spec
    }
}

/// Resolve a time expression to the server zone.
///
/// The expression parses in the named zone when one was given, otherwise in
/// the server default (fallback `"UTC"`). A nonzero numeric spec shifts the
/// instant by that many seconds. A named spec that differs from the server
/// default is converted back to it, so the result always displays in the
/// server zone.
pub fn resolve_server(
    expr: Option<&str>,
    spec: &ZoneSpec,
    system_tz: Option<&str>,
) -> Result<ResolvedInstant> {
    let default_name = system_default(system_tz);
    let parse_name = match spec {
        ZoneSpec::Named(name) => name.as_str(),
        _ => default_name,
    };
    let mut local = parse_expr(expr, parse_zone(parse_name)?)?;

    if let ZoneSpec::OffsetSeconds(shift) = spec {
        if *shift != 0 {
            local = local + Duration::seconds(*shift);
        }
    }
    if parse_name != default_name {
        local = local.with_timezone(&parse_zone(default_name)?);
    }

    Ok(ResolvedInstant::new(local, spec.clone()))
}

/// Resolve a time expression to the caller's perceived local time.
///
/// The expression always parses in the server zone. A named spec converts the
/// display zone; the time shift comes from the session lookup when no spec
/// was given, or from the numeric spec itself. A nonzero shift is applied
/// after the zone conversion. The session lookup runs at most once, and only
/// for [`ZoneSpec::Unspecified`].
pub fn resolve_client<F>(
    expr: Option<&str>,
    spec: &ZoneSpec,
    system_tz: Option<&str>,
    session_offset: F,
) -> Result<ResolvedInstant>
where
    F: FnOnce() -> Option<i64>,
{
    let system = parse_zone(system_default(system_tz))?;
    let mut local = parse_expr(expr, system)?;

    if let ZoneSpec::Named(name) = spec {
        local = local.with_timezone(&parse_zone(name)?);
    }

    let shift = match spec {
        ZoneSpec::Unspecified => session_offset(),
        ZoneSpec::OffsetSeconds(seconds) => Some(*seconds),
        ZoneSpec::Named(_) => None,
    };
    if let Some(shift) = shift {
        if shift != 0 {
            local = local + Duration::seconds(shift);
        }
    }

    Ok(ResolvedInstant::new(local, spec.clone()))
}

/// Epoch seconds of [`resolve_server`].
pub fn server_epoch(expr: Option<&str>, spec: &ZoneSpec, system_tz: Option<&str>) -> Result<i64> {
    Ok(resolve_server(expr, spec, system_tz)?.epoch())
}

/// [`resolve_server`] rendered with a format pattern.
pub fn server_string(
    expr: Option<&str>,
    spec: &ZoneSpec,
    system_tz: Option<&str>,
    pattern: &str,
) -> Result<String> {
    let instant = resolve_server(expr, spec, system_tz)?;
    Ok(crate::format::format_instant(&instant, pattern, false))
}

/// Epoch seconds of [`resolve_client`].
pub fn client_epoch<F>(
    expr: Option<&str>,
    spec: &ZoneSpec,
    system_tz: Option<&str>,
    session_offset: F,
) -> Result<i64>
where
    F: FnOnce() -> Option<i64>,
{
    Ok(resolve_client(expr, spec, system_tz, session_offset)?.epoch())
}

/// Server default zone name, falling back to UTC when unset or empty.
fn system_default(system_tz: Option<&str>) -> &str {
    match system_tz {
        Some(name) if !name.is_empty() => name,
        _ => "UTC",
    }
}

/// Parse an IANA timezone name into `Tz`.
fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| WallclockError::InvalidTimezone(format!("'{name}'")))
}

/// Parse a time expression as wall-clock time in `tz`.
///
/// `None`, empty, and `"now"` mean the current instant. The zero-date
/// placeholder maps to epoch 0. Written forms: the canonical pattern, a bare
/// date (midnight), or an RFC 3339 passthrough.
fn parse_expr(expr: Option<&str>, tz: Tz) -> Result<DateTime<Tz>> {
    let raw = match expr {
        None => return Ok(Utc::now().with_timezone(&tz)),
        Some(raw) => raw.trim(),
    };
    if raw.is_empty() || raw == "now" {
        return Ok(Utc::now().with_timezone(&tz));
    }
    if raw == ZERO_DATE {
        return Ok(DateTime::<Utc>::UNIX_EPOCH.with_timezone(&tz));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, EXPR_PATTERN) {
        return from_wall_clock(naive, tz, raw);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return from_wall_clock(naive, tz, raw);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&tz));
    }
    Err(WallclockError::InvalidExpression(format!("'{raw}'")))
}

/// Attach a zone to a wall-clock reading. Ambiguous readings (DST fold) take
/// the earlier instant; nonexistent readings (DST gap) are an error.
fn from_wall_clock(naive: NaiveDateTime, tz: Tz, raw: &str) -> Result<DateTime<Tz>> {
    use chrono::TimeZone;

    tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        WallclockError::InvalidExpression(format!("nonexistent local time '{raw}'"))
    })
}
