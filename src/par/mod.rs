//! Serialises climate summaries to the CLIGEN `.par` file format.

pub mod station;
pub mod writer;

pub use station::StationInfo;
pub use writer::save_par;
