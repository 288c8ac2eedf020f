pub mod engine;
pub mod window;

pub use engine::{build_series, quality_breakdown, score_of, totals, MAX_DAY_SCORE};
pub use window::{trailing_dates, Window};
