use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{DailyLog, PrayerTiming, SeriesPoint, Totals};
use crate::stats::window::{trailing_dates, Window};

/// Highest possible day score: three early prayers plus all six duas.
/// Used to scale bars and sparklines.
pub const MAX_DAY_SCORE: u32 = 60;

/// A day's derived score: timing points per slot plus 5 per distinct dua.
/// Never persisted — always recomputed from the log.
pub fn score_of(log: &DailyLog) -> u32 {
    let prayer_points: u32 = log.prayers.timings().iter().map(|t| t.points()).sum();
    prayer_points + 5 * log.dua_count()
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One point per date of the window, oldest first. Dates with no stored log
/// appear as zeros so the chart keeps a continuous axis.
pub fn build_series(
    logs: &BTreeMap<String, DailyLog>,
    today: NaiveDate,
    window: Window,
) -> Vec<SeriesPoint> {
    let mut dates = trailing_dates(today, window.days());
    dates.reverse();

    dates
        .into_iter()
        .map(|date| {
            let key = date_key(date);
            match logs.get(&key) {
                Some(log) => SeriesPoint {
                    label: window.label_for(date),
                    score: score_of(log),
                    prayer_count: log.prayer_count(),
                    dua_count: log.dua_count(),
                },
                None => SeriesPoint {
                    label: window.label_for(date),
                    score: 0,
                    prayer_count: 0,
                    dua_count: 0,
                },
            }
        })
        .collect()
}

/// All-time tallies across every stored entry, not limited to any window.
pub fn totals(logs: &BTreeMap<String, DailyLog>) -> Totals {
    logs.values().fold(Totals::default(), |acc, log| Totals {
        total_prayers: acc.total_prayers + log.prayer_count(),
        total_duas: acc.total_duas + log.dua_count(),
    })
}

/// How many prayed slots in the window fall into each timing bucket.
/// Buckets with a zero count are omitted.
pub fn quality_breakdown(
    logs: &BTreeMap<String, DailyLog>,
    today: NaiveDate,
    window: Window,
) -> BTreeMap<PrayerTiming, u32> {
    let mut counts = BTreeMap::new();
    for date in trailing_dates(today, window.days()) {
        if let Some(log) = logs.get(&date_key(date)) {
            for timing in log.prayers.timings() {
                if timing.is_prayed() {
                    *counts.entry(timing).or_insert(0) += 1;
                }
            }
        }
    }
    counts
}
