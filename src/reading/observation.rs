//! A single 15 minute reading, before and after unit normalisation.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::units::{celsius_to_fahrenheit, mm_to_inches, parse_cell, watts_to_langleys};

const TIMESTAMP_FORMATS: [&str; 3] = ["%m/%d/%Y %H:%M", "%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, Default, Deserialize)]
/// One CSV row exactly as it appears in the input file.
///
/// Units: °C, %, W/m², m/s, mm, degrees from north.
pub struct RawRecord {
    #[serde(default)]
    pub datetime: String,
    #[serde(default)]
    pub temp: String,
    #[serde(default)]
    pub humid: String,
    #[serde(default)]
    pub srad: String,
    #[serde(default)]
    pub ws: String,
    #[serde(default)]
    pub prcp: String,
    #[serde(default)]
    pub wdir: String,
}

#[derive(Debug, Clone, PartialEq)]
/// A normalised reading. Temperature in °F, radiation in langleys,
/// precipitation in inches; wind speed stays in m/s.
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub radiation: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub precipitation: f64,
}

impl Observation {
    /// Normalises a raw row. Returns `None` for a skip row: one without a usable
    /// timestamp or precipitation value.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let timestamp = parse_timestamp(&raw.datetime)?;
        let precipitation = parse_cell(&raw.prcp).filter(|p| *p >= 0.0)?;

        Some(Observation {
            timestamp,
            temperature: parse_cell(&raw.temp).map(celsius_to_fahrenheit),
            humidity: parse_cell(&raw.humid),
            radiation: parse_cell(&raw.srad).map(watts_to_langleys),
            wind_speed: parse_cell(&raw.ws),
            wind_direction: parse_cell(&raw.wdir),
            precipitation: mm_to_inches(precipitation),
        })
    }
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

// -- Tests -------------------------------------------------------------------
