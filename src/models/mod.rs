pub mod log;
pub mod series;

pub use log::{DailyLog, Dua, PrayerRecord, PrayerSlot, PrayerTiming};
pub use series::{SeriesPoint, Totals};
