//! Climate statistics: the streaming aggregation and its reduction.

pub mod aggregator;
pub mod day;
pub mod dew_point;
pub mod month;
pub mod reduce;
pub mod stats;
pub mod storm;
pub mod wind;
pub mod window;

pub use aggregator::{Aggregation, Aggregator};
pub use reduce::{reduce, ClimateSummary, MonthSummary};
pub use wind::WindSector;
