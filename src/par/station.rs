//! Station metadata for the report header. None of it can be derived from the
//! observations, so the defaults usually need editing by hand.

use std::path::Path;

pub const DEFAULT_ID: &str = "000000 0";
pub const DEFAULT_LATITUDE: f64 = 46.73;
pub const DEFAULT_LONGITUDE: f64 = -117.00;
pub const DEFAULT_STATION_TYPE: u8 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    pub name: String,
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Feet.
    pub elevation: f64,
    /// CLIGEN station type, 1-4.
    pub station_type: u8,
}

impl Default for StationInfo {
    fn default() -> Self {
        StationInfo {
            name: String::new(),
            id: DEFAULT_ID.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            elevation: 0.0,
            station_type: DEFAULT_STATION_TYPE,
        }
    }
}

/// Station name from an input file name: the stem, upper-cased.
pub fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_name_station_from_file() {
        assert_eq!(name_from_path(Path::new("data/sotonera.csv")), "SOTONERA");
        assert_eq!(name_from_path(Path::new("moscow.u.of.i.csv")), "MOSCOW.U.OF.I");
        assert_eq!(name_from_path(Path::new("")), "");
    }
}
