//! # wallclock
//!
//! Client-timezone resolution, display formatting, and relative-time
//! phrasing for server-stored instants.
//!
//! A web application stores instants against one canonical server timezone
//! but presents them adjusted to whatever the client supplied: a named zone
//! identifier, a raw offset in seconds, or nothing at all (a per-session
//! default). The raw parameter is classified once at the boundary into a
//! [`ZoneSpec`]; every later step is a pure function of its inputs plus, at
//! most, the wall clock and an injected session read.
//!
//! ## Modules
//!
//! - [`zone`] — raw timezone parameter → [`ZoneSpec`] classification
//! - [`resolve`] — time expression + [`ZoneSpec`] → resolved instant, in the
//!   server or the client direction
//! - [`format`] — pattern rendering with optional timezone labels
//! - [`interval`] — component breakdown between two instants
//! - [`since`] — elapsed time → "3 days ago" phrases in two languages
//! - [`lists`] — month and year-range option lists
//! - [`error`] — error types

pub mod error;
pub mod format;
pub mod interval;
pub mod lists;
pub mod resolve;
pub mod since;
pub mod zone;

pub use error::WallclockError;
pub use format::{client_string, format_instant, FORMAT_ADMIN, FORMAT_DEFAULT};
pub use interval::{diff, IntervalParts, DIFF_TEMPLATE};
pub use lists::{list_months, list_years, YearOrder};
pub use resolve::{
    client_epoch, resolve_client, resolve_server, server_epoch, server_string, ResolvedInstant,
    EXPR_PATTERN, ZERO_DATE,
};
pub use since::{time_since, time_since_at, time_since_in, Language};
pub use zone::ZoneSpec;
