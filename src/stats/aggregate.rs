use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Datelike, Utc};

use crate::models::{DailyStat, MonthlyStat, PeriodStat, StatsResponse, Visit};

// total + distinct-fingerprint counts for one bucket
#[derive(Default)]
struct Tally {
    total: u64,
    fingerprints: HashSet<String>,
}

impl Tally {
    fn add(&mut self, visit: &Visit) {
        self.total += 1;
        self.fingerprints.insert(visit.fingerprint.clone());
    }

    fn unique(&self) -> u64 {
        self.fingerprints.len() as u64
    }

    fn as_period_stat(&self) -> PeriodStat {
        PeriodStat {
            total: self.total,
            unique: self.unique(),
        }
    }
}

/// Fold the visit log into the full stats summary. `now` anchors the
/// calendar periods; callers pass `Utc::now()`, tests pass a fixed instant.
#[must_use]
pub fn compute_stats(visits: &[Visit], now: DateTime<Utc>) -> StatsResponse {
    let today = now.date_naive();
    let this_week = today.iso_week();

    let mut overall = Tally::default();
    let mut periods: BTreeMap<&str, Tally> = BTreeMap::new();
    let mut daily: BTreeMap<String, Tally> = BTreeMap::new();
    let mut monthly: BTreeMap<String, Tally> = BTreeMap::new();

    for visit in visits {
        overall.add(visit);

        let date = visit.timestamp.date_naive();
        if date == today {
            periods.entry("today").or_default().add(visit);
        }
        if date.iso_week() == this_week {
            periods.entry("thisWeek").or_default().add(visit);
        }
        if date.year() == today.year() && date.month() == today.month() {
            periods.entry("thisMonth").or_default().add(visit);
        }
        if date.year() == today.year() {
            periods.entry("thisYear").or_default().add(visit);
        }

        daily
            .entry(date.format("%Y-%m-%d").to_string())
            .or_default()
            .add(visit);
        monthly
            .entry(date.format("%Y-%m").to_string())
            .or_default()
            .add(visit);
    }

    StatsResponse {
        total_visitors: overall.total,
        unique_visitors: overall.unique(),
        period_stats: periods
            .into_iter()
            .map(|(name, tally)| (name.to_string(), tally.as_period_stat()))
            .collect(),
        // BTreeMap keys are lexicographic, which for zero-padded dates is
        // chronological, so both series come out ascending
        daily_stats: daily
            .into_iter()
            .map(|(date, tally)| DailyStat {
                date,
                total: tally.total,
                unique: tally.unique(),
            })
            .collect(),
        monthly_stats: monthly
            .into_iter()
            .map(|(month, tally)| MonthlyStat {
                month,
                total: tally.total,
                unique: tally.unique(),
            })
            .collect(),
    }
}
