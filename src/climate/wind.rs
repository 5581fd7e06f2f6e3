//! Sixteen point compass sectors.

use std::fmt;

const SECTOR_WIDTH: f64 = 22.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindSector {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl WindSector {
    /// All sectors in compass order, starting at north.
    pub const ALL: [WindSector; 16] = [
        WindSector::N,
        WindSector::NNE,
        WindSector::NE,
        WindSector::ENE,
        WindSector::E,
        WindSector::ESE,
        WindSector::SE,
        WindSector::SSE,
        WindSector::S,
        WindSector::SSW,
        WindSector::SW,
        WindSector::WSW,
        WindSector::W,
        WindSector::WNW,
        WindSector::NW,
        WindSector::NNW,
    ];

    /// Classifies a bearing. Each sector is the half-open arc
    /// `[centre - 11.25, centre + 11.25)`; both 0 and 360 are north.
    /// Bearings outside `[0, 360]` have no sector.
    pub fn from_degrees(deg: f64) -> Option<Self> {
        if !(0.0..=360.0).contains(&deg) {
            return None;
        }
        let idx = ((deg + SECTOR_WIDTH / 2.0) / SECTOR_WIDTH).floor() as usize % 16;

        Some(Self::ALL[idx])
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            WindSector::N => "N",
            WindSector::NNE => "NNE",
            WindSector::NE => "NE",
            WindSector::ENE => "ENE",
            WindSector::E => "E",
            WindSector::ESE => "ESE",
            WindSector::SE => "SE",
            WindSector::SSE => "SSE",
            WindSector::S => "S",
            WindSector::SSW => "SSW",
            WindSector::SW => "SW",
            WindSector::WSW => "WSW",
            WindSector::W => "W",
            WindSector::WNW => "WNW",
            WindSector::NW => "NW",
            WindSector::NNW => "NNW",
        }
    }
}

impl fmt::Display for WindSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// -- Tests -------------------------------------------------------------------
