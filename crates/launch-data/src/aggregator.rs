//! Cumulative launch aggregation over calendar periods.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use launch_core::models::{Granularity, LaunchRecord, PeriodBucket};
use launch_core::time_utils::local_midnight;

// ── Cumulative aggregation ────────────────────────────────────────────────────

/// Bucket `records` into calendar periods and compute cumulative counts.
///
/// Optional bounds are inclusive calendar dates, localized into the record
/// column's timezone before comparison: the start bound cuts at local
/// midnight of that day, the end bound at local midnight of the *next* day
/// minus one microsecond, so every launch on the end date is included
/// regardless of sub-second precision.
///
/// Buckets are ordered ascending by period start. Periods with no launches
/// are not synthesized, so consecutive buckets may have calendar gaps; the
/// cumulative count is monotonically non-decreasing either way. Empty input,
/// or a range that filters out every record, yields an empty vector.
pub fn cumulative_launches_by_period(
    records: &[LaunchRecord],
    granularity: Granularity,
    start_bound: Option<NaiveDate>,
    end_bound: Option<NaiveDate>,
) -> Vec<PeriodBucket> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    // Records all share one analysis timezone; bounds are localized into it.
    let tz = first.launch_date.timezone();

    let lower = start_bound.map(|date| local_midnight(tz, date));
    let upper = end_bound
        .and_then(|date| date.succ_opt())
        .map(|next_day| local_midnight(tz, next_day) - Duration::microseconds(1));

    // BTreeMap keys on the truncated local date, giving numeric period
    // ordering for free (no lexicographic label sorting).
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        if lower.is_some_and(|bound| record.launch_date < bound) {
            continue;
        }
        if upper.is_some_and(|bound| record.launch_date > bound) {
            continue;
        }
        let period = granularity.truncate(record.launch_date.date_naive());
        *counts.entry(period).or_insert(0) += 1;
    }

    let mut running = 0u64;
    counts
        .into_iter()
        .map(|(period, count)| {
            running += count;
            PeriodBucket {
                period_start: local_midnight(tz, period),
                label: granularity.label(period),
                cumulative_count: running,
            }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
