use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The aggregate summary served by GET /get. Sections the collector has no
/// data for come back empty and render as nothing client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub total_visitors: u64,
    #[serde(default)]
    pub unique_visitors: u64,
    #[serde(default)]
    pub period_stats: BTreeMap<String, PeriodStat>,
    #[serde(default)]
    pub daily_stats: Vec<DailyStat>,
    #[serde(default)]
    pub monthly_stats: Vec<MonthlyStat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStat {
    pub total: u64,
    pub unique: u64,
}

// date is "YYYY-MM-DD"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: String,
    pub total: u64,
    pub unique: u64,
}

// month is "YYYY-MM"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub month: String,
    pub total: u64,
    pub unique: u64,
}
