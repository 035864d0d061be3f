use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::LaunchError;

/// Determines what the Vague Date parser emits for each resolved element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Full timezone-aware instants.
    DateTime,
    /// Calendar dates in the target timezone (time-of-day discarded after
    /// timezone conversion).
    Date,
}

/// A successfully parsed Vague Date value.
///
/// Which variant is produced depends on the requested [`OutputMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedMoment {
    /// A timezone-aware instant.
    DateTime(DateTime<Tz>),
    /// A calendar date local to the target timezone.
    Date(NaiveDate),
}

impl ParsedMoment {
    /// The underlying instant, if this moment retained time-of-day.
    pub fn datetime(&self) -> Option<DateTime<Tz>> {
        match self {
            ParsedMoment::DateTime(dt) => Some(*dt),
            ParsedMoment::Date(_) => None,
        }
    }

    /// The calendar date in the target timezone, for either variant.
    pub fn local_date(&self) -> NaiveDate {
        match self {
            ParsedMoment::DateTime(dt) => dt.date_naive(),
            ParsedMoment::Date(d) => *d,
        }
    }
}

/// A single launch read from the catalog.
///
/// The aggregator only looks at `launch_date`; the remaining fields are
/// carried through for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchRecord {
    /// Catalog flight identifier (e.g. `"2017-F05"`).
    pub flight_id: String,
    /// Mission / vehicle name.
    pub flight: String,
    /// Launch instant in the analysis timezone.
    pub launch_date: DateTime<Tz>,
}

/// Calendar bucket size used for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Month,
    Quarter,
    Year,
}

impl Granularity {
    /// The lowercase name accepted by [`FromStr`](std::str::FromStr).
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
        }
    }

    /// First calendar day of the period containing `date`.
    ///
    /// Month → day 1; quarter → day 1 of Jan/Apr/Jul/Oct; year → Jan 1.
    pub fn truncate(&self, date: NaiveDate) -> NaiveDate {
        let start_month = match self {
            Granularity::Month => date.month(),
            Granularity::Quarter => (date.month() - 1) / 3 * 3 + 1,
            Granularity::Year => 1,
        };
        // Day 1 exists in every month, so the fallback is unreachable.
        date.with_day(1)
            .and_then(|d| d.with_month(start_month))
            .unwrap_or(date)
    }

    /// Human-readable label for the period starting at `period_start`.
    ///
    /// Month → `"2018-01"`, quarter → `"2018Q1"`, year → `"2018"`.
    pub fn label(&self, period_start: NaiveDate) -> String {
        match self {
            Granularity::Month => period_start.format("%Y-%m").to_string(),
            Granularity::Quarter => format!(
                "{}Q{}",
                period_start.year(),
                (period_start.month() - 1) / 3 + 1
            ),
            Granularity::Year => period_start.format("%Y").to_string(),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Granularity {
    type Err = LaunchError;

    /// Parse a granularity name, rejecting anything outside the fixed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(Granularity::Month),
            "quarter" => Ok(Granularity::Quarter),
            "year" => Ok(Granularity::Year),
            other => Err(LaunchError::InvalidGranularity(other.to_string())),
        }
    }
}

/// One row of aggregation output: a calendar period and the cumulative
/// number of launches up to and including it.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodBucket {
    /// Local midnight of the period's first day, in the record timezone.
    pub period_start: DateTime<Tz>,
    /// Display label, e.g. `"2018Q1"`, `"2018-01"`, `"2018"`.
    pub label: String,
    /// Running launch total from the earliest bucket through this one.
    pub cumulative_count: u64,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
