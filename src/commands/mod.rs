//! Command implementations

pub mod show;
pub mod simple;
pub mod stats;
pub mod words;

pub use show::run_show;
pub use simple::run_simple;
pub use stats::{DayStats, StatsResult, print_stats_result, run_stats};
pub use words::run_words;
