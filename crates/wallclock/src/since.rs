//! Relative-time phrasing: a stored timestamp to a short "3 days ago" line.

use chrono::Utc;

use crate::resolve::server_epoch;
use crate::zone::ZoneSpec;

const YEAR: i64 = 31_536_000;
const MONTH: i64 = 2_628_000;
const WEEK: i64 = 604_800;
const DAY: i64 = 86_400;
const HOUR: i64 = 3_600;
const MINUTE: i64 = 60;

/// Label language for humanized phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// "time ago" phrase for a stored expression, in English.
pub fn time_since(was: Option<&str>) -> String {
    time_since_in(was, Language::English)
}

/// "time ago" phrase for a stored expression.
///
/// Absent and future inputs read `"just now"`. Never fails: an unreadable
/// expression counts as one second ago.
pub fn time_since_in(was: Option<&str>, lang: Language) -> String {
    time_since_at(was, Utc::now().timestamp(), lang)
}

/// Anchored core of [`time_since_in`]; `now` is the current UTC epoch.
pub fn time_since_at(was: Option<&str>, now: i64, lang: Language) -> String {
    let Some(raw) = was else {
        return "just now".to_string();
    };
    let elapsed = match server_epoch(Some(raw), &ZoneSpec::Unspecified, None) {
        Ok(was_epoch) if was_epoch < now => now - was_epoch,
        Ok(_) => return "just now".to_string(),
        Err(_) => 1,
    };
    match build_spans(elapsed, lang).into_iter().next() {
        Some(first) => format!("{first} ago"),
        None => "just now".to_string(),
    }
}

/// Greedy bucket decomposition, largest unit first.
///
/// Zero counts are never listed, and a unit's remainder is consumed only when
/// that unit's visibility window saw a nonzero count: months through minutes
/// each look at a fixed window of neighbors (days at months/weeks/days, hours
/// at days/hours, and so on). The caller reads only the first entry; the rest
/// of the list is still built the same way.
fn build_spans(elapsed: i64, lang: Language) -> Vec<String> {
    let mut spans = Vec::new();
    let mut seconds = elapsed;

    let years = seconds / YEAR;
    if years > 0 {
        spans.push(phrase(years, Unit::Year, lang));
    }
    seconds -= years * YEAR;

    let months = seconds / MONTH;
    if years > 0 || months > 0 {
        if months > 0 {
            spans.push(phrase(months, Unit::Month, lang));
        }
        seconds -= months * MONTH;
    }

    let weeks = seconds / WEEK;
    if years > 0 || months > 0 || weeks > 0 {
        if weeks > 0 {
            spans.push(phrase(weeks, Unit::Week, lang));
        }
        seconds -= weeks * WEEK;
    }

    let days = seconds / DAY;
    if months > 0 || weeks > 0 || days > 0 {
        if days > 0 {
            spans.push(phrase(days, Unit::Day, lang));
        }
        seconds -= days * DAY;
    }

    let hours = seconds / HOUR;
    if days > 0 || hours > 0 {
        if hours > 0 {
            spans.push(phrase(hours, Unit::Hour, lang));
        }
        seconds -= hours * HOUR;
    }

    let minutes = seconds / MINUTE;
    if days > 0 || hours > 0 || minutes > 0 {
        if minutes > 0 {
            spans.push(phrase(minutes, Unit::Minute, lang));
        }
        seconds -= minutes * MINUTE;
    }

    if spans.is_empty() {
        spans.push(phrase(seconds, Unit::Second, lang));
    }
    spans
}

fn phrase(amount: i64, unit: Unit, lang: Language) -> String {
    format!("{amount} {}", unit_label(amount, unit, lang))
}

/// Pick the pluralized label for `amount` of `unit`.
///
/// English picks the singular form whenever `amount % 10 == 1` (11 included).
/// Russian picks one/many/few with the teen test on the literal amount.
fn unit_label(amount: i64, unit: Unit, lang: Language) -> &'static str {
    let forms = unit_forms(unit, lang);
    match lang {
        Language::English => {
            if amount % 10 == 1 {
                forms[0]
            } else {
                forms[1]
            }
        }
        Language::Russian => {
            let m = amount % 10;
            if (m > 4 && m < 10) || (amount > 10 && amount < 20) {
                forms[1]
            } else if m > 1 && m < 5 {
                forms[2]
            } else if m == 1 {
                forms[0]
            } else {
                forms[1]
            }
        }
    }
}

/// Label forms per unit: English `[one, other]`, Russian `[one, many, few]`.
fn unit_forms(unit: Unit, lang: Language) -> &'static [&'static str] {
    match (lang, unit) {
        (Language::English, Unit::Year) => &["year", "years"],
        (Language::English, Unit::Month) => &["month", "months"],
        (Language::English, Unit::Week) => &["week", "weeks"],
        (Language::English, Unit::Day) => &["day", "days"],
        (Language::English, Unit::Hour) => &["hour", "hours"],
        (Language::English, Unit::Minute) => &["minute", "minutes"],
        (Language::English, Unit::Second) => &["second", "seconds"],
        (Language::Russian, Unit::Year) => &["год", "лет", "года"],
        (Language::Russian, Unit::Month) => &["месяц", "месяцев", "месяца"],
        (Language::Russian, Unit::Week) => &["неделю", "недель", "недели"],
        (Language::Russian, Unit::Day) => &["день", "дней", "дня"],
        (Language::Russian, Unit::Hour) => &["час", "часов", "часа"],
        (Language::Russian, Unit::Minute) => &["минута", "минут", "минуты"],
        (Language::Russian, Unit::Second) => &["секунда", "секунд", "секунды"],
    }
}
