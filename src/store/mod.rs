pub mod logs;

pub use logs::LogStore;
