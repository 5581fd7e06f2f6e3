//! Per-month sample collections, filled during the streaming pass.

use super::{
    day::{ClosedDay, DayKind},
    wind::WindSector,
};

/// Wind speed at or below this (m/s) counts as calm.
pub const CALM_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
/// The variables of one observation, filed under its wind sector.
pub struct SectorSample {
    pub sector: WindSector,
    pub temperature: Option<f64>,
    pub precipitation: f64,
    pub humidity: Option<f64>,
    pub radiation: Option<f64>,
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct MonthRecord {
    /// Daily totals of wet days that followed a wet day.
    pub wet_after_wet: Vec<f64>,
    /// Daily totals of wet days that followed a dry day.
    pub wet_after_dry: Vec<f64>,
    pub dry: Vec<f64>,
    pub max_temps: Vec<f64>,
    pub min_temps: Vec<f64>,
    pub radiation: Vec<f64>,
    pub dew_points: Vec<f64>,
    pub time_to_peak: Vec<f64>,
    /// Daily 30 minute maxima as hourly rates.
    pub half_hour_max: Vec<f64>,
    pub calm: usize,
    pub windy: usize,
    pub sector_samples: Vec<SectorSample>,
}

impl MonthRecord {
    pub fn add_day(&mut self, day: &ClosedDay) {
        let totals = match day.kind {
            DayKind::WetAfterWet => &mut self.wet_after_wet,
            DayKind::WetAfterDry => &mut self.wet_after_dry,
            DayKind::Dry => &mut self.dry,
        };
        totals.push(day.total_precipitation);

        self.max_temps.extend(day.max_temp);
        self.min_temps.extend(day.min_temp);
        self.radiation.extend(day.mean_radiation);
        if day.half_hour_max > 0.0 {
            self.half_hour_max.push(day.half_hour_max / 0.5);
        }
    }

    pub fn add_wind_speed(&mut self, speed: f64) {
        if speed <= CALM_THRESHOLD {
            self.calm += 1;
        } else {
            self.windy += 1;
        }
    }

    pub fn day_count(&self) -> usize {
        self.wet_after_wet.len() + self.wet_after_dry.len() + self.dry.len()
    }

    /// Totals of every wet day, whatever preceded it.
    pub fn wet_day_totals(&self) -> Vec<f64> {
        self.wet_after_wet
            .iter()
            .chain(&self.wet_after_dry)
            .copied()
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
/// Twelve records, January first.
pub struct Months([MonthRecord; 12]);

impl Months {
    /// The record for `month` (1-12).
    pub fn get_mut(&mut self, month: u32) -> &mut MonthRecord {
        &mut self.0[(month as usize).clamp(1, 12) - 1]
    }

    pub fn get(&self, month: u32) -> &MonthRecord {
        &self.0[(month as usize).clamp(1, 12) - 1]
    }

    pub fn into_records(self) -> [MonthRecord; 12] {
        self.0
    }
}

// -- Tests -------------------------------------------------------------------
