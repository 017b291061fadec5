//! Normalizes raw booking records into canonical `[start, end)` intervals.
//!
//! Modern records already carry timestamps and pass through untouched: an
//! operator may have manually stretched or shrunk the interval, so the
//! duration is never recomputed on the fast path. Legacy records carry a
//! weekday-name + day-of-month date label and an HH:MM time label; those are
//! matched against the next [`UPCOMING_WINDOW_DAYS`] calendar dates in the
//! tenant's zone, and the end is derived from the service duration.
//!
//! All timestamps are produced in the tenant's fixed zone and returned as
//! UTC instants — never the zone of the machine running the resolver.

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::booking::{BookingRecord, Interval, LegacyRecord};
use crate::catalog::ServiceCatalog;
use crate::error::ResolutionError;
use crate::shifts::parse_hhmm;

/// How many days ahead of `today` (inclusive) a legacy date label may refer
/// to. Labels outside the window resolve to
/// [`ResolutionError::UnknownDate`]; the resolver never guesses a fallback
/// date for exhausted or older labels.
pub const UPCOMING_WINDOW_DAYS: u32 = 14;

/// Weekday display names accepted in legacy date labels, matched after
/// normalization (zero-width non-joiners and inner spaces stripped,
/// lowercased). Persian names are the primary form; English names cover
/// operator-entered data.
const WEEKDAY_NAMES: &[(&str, Weekday)] = &[
    ("شنبه", Weekday::Sat),
    ("یکشنبه", Weekday::Sun),
    ("دوشنبه", Weekday::Mon),
    ("سهشنبه", Weekday::Tue),
    ("چهارشنبه", Weekday::Wed),
    ("پنجشنبه", Weekday::Thu),
    ("جمعه", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
];

/// Resolve a booking record to its canonical interval.
///
/// `today` anchors the upcoming-dates window for legacy labels and is
/// supplied by the caller — the core never reads the wall clock.
///
/// # Errors
///
/// Legacy records fail with [`ResolutionError::UnknownDate`] when the date
/// label matches no date in the window, or [`ResolutionError::InvalidTime`]
/// when the time label is not an in-range HH:MM pair. Canonical records
/// never fail here; degenerate stored intervals are caught downstream by the
/// conflict detector.
pub fn resolve_interval(
    record: &BookingRecord,
    catalog: &ServiceCatalog,
    today: NaiveDate,
    tz: Tz,
) -> Result<Interval, ResolutionError> {
    match record {
        BookingRecord::Canonical(canonical) => Ok(Interval {
            start: canonical.start,
            end: canonical.end,
        }),
        BookingRecord::Legacy(legacy) => resolve_legacy(legacy, catalog, today, tz),
    }
}

fn resolve_legacy(
    record: &LegacyRecord,
    catalog: &ServiceCatalog,
    today: NaiveDate,
    tz: Tz,
) -> Result<Interval, ResolutionError> {
    let date = match_upcoming_date(&record.date_label, today)?;
    let minute_of_day = parse_hhmm(&record.time_label)
        .ok_or_else(|| ResolutionError::InvalidTime(record.time_label.clone()))?;

    let start_local = tz
        .with_ymd_and_hms(
            date.year(),
            date.month(),
            date.day(),
            u32::from(minute_of_day / 60),
            u32::from(minute_of_day % 60),
            0,
        )
        .earliest()
        // A label inside a DST gap has no local representation.
        .ok_or_else(|| ResolutionError::InvalidTime(record.time_label.clone()))?;

    let start = start_local.with_timezone(&Utc);
    let duration_minutes = catalog.duration_for(&record.service);
    let interval = Interval {
        start,
        end: start + Duration::minutes(i64::from(duration_minutes)),
    };
    tracing::debug!(
        booking = %record.id,
        date_label = %record.date_label,
        start = %interval.start,
        duration_minutes,
        "legacy record normalized"
    );
    Ok(interval)
}

/// Match a `weekday-name day-of-month` label against the upcoming window
/// starting at `today`.
fn match_upcoming_date(label: &str, today: NaiveDate) -> Result<NaiveDate, ResolutionError> {
    let unknown = || ResolutionError::UnknownDate(label.to_string());

    let mut tokens: Vec<&str> = label.split_whitespace().collect();
    let day_token = tokens.pop().ok_or_else(unknown)?;
    if tokens.is_empty() {
        return Err(unknown());
    }
    let day: u32 = day_token.parse().map_err(|_| unknown())?;
    if !(1..=31).contains(&day) {
        return Err(unknown());
    }

    let name = normalize_weekday_name(&tokens.concat());
    let weekday = WEEKDAY_NAMES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, weekday)| *weekday)
        .ok_or_else(unknown)?;

    for offset in 0..UPCOMING_WINDOW_DAYS {
        let date = today + Duration::days(i64::from(offset));
        if date.weekday() == weekday && date.day() == day {
            return Ok(date);
        }
    }
    Err(unknown())
}

/// Strip zero-width non-joiners (Persian compound weekday names are written
/// with or without them) and lowercase ASCII.
fn normalize_weekday_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\u{200c}')
        .collect::<String>()
        .to_lowercase()
}
