pub mod observation;
pub mod units;

pub use observation::{Observation, RawRecord};
