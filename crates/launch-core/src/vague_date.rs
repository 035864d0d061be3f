//! Vague Date format parser.
//!
//! Parses launch dates in the Vague Date format used by the GCAT launch
//! catalogs and converts them to a target timezone. The format has three
//! precision tiers – seconds, minute, and date-only – plus optional trailing
//! uncertainty (`?`) and schedule (`s`) markers that carry no timing
//! information.
//!
//! Format specification:
//! https://planet4589.org/space/gcat/web/intro/vague.html

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::Result;
use crate::models::{OutputMode, ParsedMoment};
use crate::time_utils::resolve_timezone;

/// Datetime grammars tried in order of decreasing precision.
///
/// HMS form first (`2017 May 25 0420:00`), then hour-minute (`0420`).
const DATETIME_FORMATS: &[&str] = &["%Y %b %d %H%M:%S", "%Y %b %d %H%M"];

/// Date-only grammar (`2017 May 25`); midnight UTC implied.
const DATE_FORMAT: &str = "%Y %b %d";

// ── Marker stripping ──────────────────────────────────────────────────────────

/// Strip trailing uncertainty (`?`) and schedule (`s`) markers.
///
/// The markers indicate uncertainty but we still parse to the best precision
/// available. Stripping is idempotent: any run of trailing markers is
/// removed, in any order.
fn strip_markers(raw: &str) -> &str {
    raw.trim().trim_end_matches(['?', 's']).trim_end()
}

// ── Precision cascade ─────────────────────────────────────────────────────────

/// Try each grammar in order, returning the first match as a naive UTC value.
fn parse_cascade(clean: &str) -> Option<NaiveDateTime> {
    if clean.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(clean, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(clean, DATE_FORMAT)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

// ── Single-element parsing ────────────────────────────────────────────────────

/// Parse one Vague Date string into an instant in `tz`.
///
/// The raw value is interpreted as UTC (the format's defined epoch
/// reference) and then converted. Returns `None` when no grammar matches
/// after marker stripping.
pub fn parse_vague_datetime(raw: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let naive = parse_cascade(strip_markers(raw))?;
    Some(Utc.from_utc_datetime(&naive).with_timezone(&tz))
}

/// Parse one Vague Date string into a [`ParsedMoment`] in the requested
/// output mode.
///
/// In [`OutputMode::Date`] the time-of-day is discarded only after timezone
/// conversion: a UTC instant near midnight may fall on a different local
/// calendar date than its UTC date.
pub fn parse_vague_date(raw: &str, tz: Tz, mode: OutputMode) -> Option<ParsedMoment> {
    let local = parse_vague_datetime(raw, tz)?;
    Some(match mode {
        OutputMode::DateTime => ParsedMoment::DateTime(local),
        OutputMode::Date => ParsedMoment::Date(local.date_naive()),
    })
}

// ── Batch entry point ─────────────────────────────────────────────────────────

/// Parse a batch of Vague Date strings into `tz`.
///
/// Per-element failures surface as `None` in the corresponding output slot
/// and never abort the batch; the only error is an unrecognised timezone
/// name, raised before any element is examined.
pub fn parse_vague_dates<S: AsRef<str>>(
    dates: &[S],
    tz_name: &str,
    mode: OutputMode,
) -> Result<Vec<Option<ParsedMoment>>> {
    let tz = resolve_timezone(tz_name)?;
    Ok(dates
        .iter()
        .map(|raw| parse_vague_date(raw.as_ref(), tz, mode))
        .collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use crate::error::LaunchError;

    fn utc_dt(raw: &str) -> DateTime<Tz> {
        parse_vague_datetime(raw, Tz::UTC).unwrap()
    }

    // ── Precision cascade ─────────────────────────────────────────────────────

    #[test]
    fn test_parse_seconds_format() {
        let dt = utc_dt("2017 May 25 0420:00");
        assert_eq!(dt.year(), 2017);
        assert_eq!(dt.month(), 5);
        assert_eq!(dt.day(), 25);
        assert_eq!(dt.hour(), 4);
        assert_eq!(dt.minute(), 20);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn test_parse_minute_format() {
        let dt = utc_dt("2018 Jan 21 0137");
        assert_eq!(dt.hour(), 1);
        assert_eq!(dt.minute(), 37);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn test_parse_date_only_implies_midnight() {
        let dt = utc_dt("2017 May 25");
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
        assert_eq!(dt.second(), 0);
        assert_eq!(dt.day(), 25);
    }

    #[test]
    fn test_parse_single_digit_day() {
        let dt = utc_dt("2019 Dec 6 0818:49");
        assert_eq!(dt.day(), 6);
        assert_eq!(dt.hour(), 8);
    }

    // ── Marker stripping ──────────────────────────────────────────────────────

    #[test]
    fn test_markers_do_not_change_parse_result() {
        let plain = utc_dt("2017 May 25 0420:00");
        assert_eq!(utc_dt("2017 May 25 0420:00?"), plain);
        assert_eq!(utc_dt("2017 May 25 0420:00s"), plain);
        assert_eq!(utc_dt("2017 May 25 0420:00?s"), plain);
        assert_eq!(utc_dt("2017 May 25 0420:00s?"), plain);
        assert_eq!(utc_dt("2017 May 25 0420:00??"), plain);
    }

    #[test]
    fn test_markers_on_date_only() {
        assert_eq!(utc_dt("2020 Jun 13?"), utc_dt("2020 Jun 13"));
    }

    #[test]
    fn test_marker_only_input_is_unparseable() {
        assert!(parse_vague_datetime("??s", Tz::UTC).is_none());
        assert!(parse_vague_datetime("s", Tz::UTC).is_none());
    }

    // ── Unparseable input ─────────────────────────────────────────────────────

    #[test]
    fn test_garbage_returns_none() {
        assert!(parse_vague_datetime("garbage", Tz::UTC).is_none());
        assert!(parse_vague_datetime("", Tz::UTC).is_none());
        assert!(parse_vague_datetime("2017-05-25", Tz::UTC).is_none());
    }

    #[test]
    fn test_unknown_month_abbreviation_returns_none() {
        assert!(parse_vague_datetime("2017 Mai 25", Tz::UTC).is_none());
        assert!(parse_vague_datetime("2017 Mayy 25", Tz::UTC).is_none());
    }

    #[test]
    fn test_year_month_only_is_unparseable() {
        // Coarser Vague Date tiers are outside the three supported grammars.
        assert!(parse_vague_datetime("2017 May", Tz::UTC).is_none());
        assert!(parse_vague_datetime("2017", Tz::UTC).is_none());
    }

    // ── Timezone conversion ───────────────────────────────────────────────────

    #[test]
    fn test_utc_round_trip() {
        let dt = utc_dt("2017 May 25 0420:00");
        assert_eq!(dt.to_rfc3339(), "2017-05-25T04:20:00+00:00");
    }

    #[test]
    fn test_conversion_to_eastern() {
        // 04:20 UTC is 00:20 EDT (UTC-4) on the same date.
        let dt = parse_vague_datetime("2017 May 25 0420:00", Tz::America__New_York).unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 20);
        assert_eq!(dt.day(), 25);
        assert_eq!(dt.offset().to_string(), "EDT");
    }

    #[test]
    fn test_date_mode_truncates_after_conversion() {
        // 01:37 UTC on Jan 21 is still Jan 20 in New York (UTC-5 in winter),
        // so the local calendar date must be the 20th, not the 21st.
        let moment = parse_vague_date(
            "2018 Jan 21 0137",
            Tz::America__New_York,
            OutputMode::Date,
        )
        .unwrap();
        assert_eq!(
            moment.local_date(),
            NaiveDate::from_ymd_opt(2018, 1, 20).unwrap()
        );
    }

    #[test]
    fn test_datetime_mode_keeps_time_of_day() {
        let moment =
            parse_vague_date("2017 May 25 0420:00", Tz::UTC, OutputMode::DateTime).unwrap();
        assert!(moment.datetime().is_some());
    }

    // ── Batch parsing ─────────────────────────────────────────────────────────

    #[test]
    fn test_batch_preserves_order_and_nulls() {
        let raw = ["2017 May 25 0420:00", "garbage", "2018 Jan 21 0137"];
        let parsed = parse_vague_dates(&raw, "UTC", OutputMode::DateTime).unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(parsed[0].is_some());
        assert!(parsed[1].is_none());
        assert!(parsed[2].is_some());
    }

    #[test]
    fn test_batch_empty_input() {
        let parsed = parse_vague_dates::<&str>(&[], "UTC", OutputMode::Date).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_batch_unknown_timezone_is_error() {
        let raw = ["2017 May 25"];
        let err = parse_vague_dates(&raw, "Mars/Olympus", OutputMode::Date).unwrap_err();
        assert!(matches!(err, LaunchError::UnknownTimezone(_)));
    }
}
