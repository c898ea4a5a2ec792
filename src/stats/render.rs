use std::collections::BTreeMap;

use crate::models::{DailyStat, MonthlyStat, PeriodStat, StatsResponse};

/// What the beacon shows instead of the stats tables when the fetch or the
/// parse fails. Kept as one fixed fragment so the page never renders a
/// half-built table.
pub const STATS_ERROR_HTML: &str = r#"<p class="stats-error">Failed to load visitor statistics.</p>"#;

// the helpers below are pure string builders; the embedding page drops the
// result into its `analytics-data` container untouched. All interpolated
// values are collector-produced dates and counters, never raw client input.

pub trait TimeSeriesEntry {
    fn key(&self) -> &str;
    fn total(&self) -> u64;
    fn unique(&self) -> u64;
}

impl TimeSeriesEntry for DailyStat {
    fn key(&self) -> &str {
        &self.date
    }
    fn total(&self) -> u64 {
        self.total
    }
    fn unique(&self) -> u64 {
        self.unique
    }
}

impl TimeSeriesEntry for MonthlyStat {
    fn key(&self) -> &str {
        &self.month
    }
    fn total(&self) -> u64 {
        self.total
    }
    fn unique(&self) -> u64 {
        self.unique
    }
}

#[must_use]
pub fn render_stats(stats: &StatsResponse) -> String {
    let mut html = String::new();
    html.push_str(&summary_section(stats));
    html.push_str(&period_table(&stats.period_stats));
    html.push_str(&time_series_table("Daily Visitors", "Date", &stats.daily_stats));
    html.push_str(&time_series_table(
        "Monthly Visitors",
        "Month",
        &stats.monthly_stats,
    ));
    html
}

#[must_use]
pub fn summary_section(stats: &StatsResponse) -> String {
    format!(
        "<section class=\"stats-summary\">\
         <p>Total visitors: <strong>{}</strong></p>\
         <p>Unique visitors: <strong>{}</strong></p>\
         </section>",
        stats.total_visitors, stats.unique_visitors
    )
}

/// Period breakdown table; an empty map renders as nothing at all.
#[must_use]
pub fn period_table(periods: &BTreeMap<String, PeriodStat>) -> String {
    if periods.is_empty() {
        return String::new();
    }

    let rows: String = periods
        .iter()
        .map(|(name, stat)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                name, stat.total, stat.unique
            )
        })
        .collect();

    format!(
        "<section class=\"stats-periods\"><h3>Visitors by Period</h3>\
         <table><thead><tr><th>Period</th><th>Total</th><th>Unique</th></tr></thead>\
         <tbody>{rows}</tbody></table></section>"
    )
}

/// Daily/monthly series table; an empty series renders as nothing at all.
#[must_use]
pub fn time_series_table<E: TimeSeriesEntry>(title: &str, key_header: &str, entries: &[E]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                entry.key(),
                entry.total(),
                entry.unique()
            )
        })
        .collect();

    format!(
        "<section class=\"stats-series\"><h3>{title}</h3>\
         <table><thead><tr><th>{key_header}</th><th>Total</th><th>Unique</th></tr></thead>\
         <tbody>{rows}</tbody></table></section>"
    )
}
