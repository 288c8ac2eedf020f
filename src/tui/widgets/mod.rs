pub mod breakdown;
pub mod duas;
pub mod header;
pub mod motivation;
pub mod prayers;
pub mod scorecard;
pub mod statusbar;
pub mod totals;
pub mod trend;
