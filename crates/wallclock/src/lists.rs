//! Month and year enumerators for select-style option lists.

use chrono::{Datelike, Utc};

use crate::format::MONTHS;

/// Year emission order for [`list_years`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearOrder {
    #[default]
    Ascending,
    Descending,
}

/// `(value, label)` pairs for the twelve months, optionally preceded by a
/// blank pair for placeholder options.
pub fn list_months(empty_first: bool) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(12 + usize::from(empty_first));
    if empty_first {
        out.push((String::new(), String::new()));
    }
    for (index, name) in MONTHS.iter().enumerate() {
        out.push(((index + 1).to_string(), (*name).to_string()));
    }
    out
}

/// `(value, label)` pairs for an inclusive year range. `end` defaults to the
/// current year.
pub fn list_years(
    start: i32,
    end: Option<i32>,
    empty_first: bool,
    order: YearOrder,
) -> Vec<(String, String)> {
    let end = end.unwrap_or_else(|| Utc::now().year());
    let mut out = Vec::new();
    if empty_first {
        out.push((String::new(), String::new()));
    }
    let mut years: Vec<i32> = (start..=end).collect();
    if order == YearOrder::Descending {
        years.reverse();
    }
    for year in years {
        out.push((year.to_string(), year.to_string()));
    }
    out
}
