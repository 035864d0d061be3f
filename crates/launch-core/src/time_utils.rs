use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::{LaunchError, Result};

// ── System timezone detection ─────────────────────────────────────────────────

/// Detect the IANA timezone name of the running system.
///
/// Uses the `iana-time-zone` crate directly – no subprocess calls.
/// Falls back to `"UTC"` if detection fails.
pub fn system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

// ── Timezone resolution ───────────────────────────────────────────────────────

/// Resolve an IANA timezone name to a [`Tz`].
///
/// Unlike detection failure, an unrecognised name here is a caller error:
/// silently falling back would shift every parsed instant, so this returns
/// [`LaunchError::UnknownTimezone`] instead.
pub fn resolve_timezone(tz_name: &str) -> Result<Tz> {
    tz_name
        .parse::<Tz>()
        .map_err(|_| LaunchError::UnknownTimezone(tz_name.to_string()))
}

// ── Local midnight ────────────────────────────────────────────────────────────

/// The instant at local midnight of `date` in `tz`.
///
/// Midnight can be ambiguous or nonexistent under DST transitions: ambiguous
/// midnights take the earlier offset; a skipped midnight falls back to
/// interpreting the naive value as UTC.
pub fn local_midnight(tz: Tz, date: NaiveDate) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            warn!(
                "local midnight {} does not exist in {}; using UTC interpretation",
                date, tz
            );
            tz.from_utc_datetime(&naive)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
