use serde::{Deserialize, Serialize};

/// One point of the dashboard trend: a day's derived numbers plus its
/// presentational label (weekday name or day-of-month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub score: u32,
    pub prayer_count: u32,
    pub dua_count: u32,
}

/// All-time tallies across every stored day, never window-limited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_prayers: u32,
    pub total_duas: u32,
}
