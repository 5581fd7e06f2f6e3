//! End-of-stream reduction of the monthly collections into report values.

use anyhow::Result;
use futures::future::join_all;
use tokio::task;

use super::{
    aggregator::Aggregation,
    month::{MonthRecord, SectorSample},
    stats::{mean, percentage, proportion, Moments},
    wind::WindSector,
};

#[derive(Debug, Clone, Default, PartialEq)]
/// Statistics for the observations of one month that fell in one wind sector.
pub struct SectorSummary {
    /// Share of the month's sector-classified observations, percent.
    pub frequency: Option<f64>,
    pub temperature: Option<Moments>,
    pub precipitation: Option<Moments>,
    pub humidity: Option<Moments>,
    pub radiation: Option<Moments>,
    pub wind_speed: Option<Moments>,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Every parameter for one calendar month. `None` means no data.
pub struct MonthSummary {
    /// Daily totals of wet days.
    pub precipitation: Option<Moments>,
    pub p_wet_wet: Option<f64>,
    pub p_wet_dry: Option<f64>,
    pub max_temp: Option<Moments>,
    pub min_temp: Option<Moments>,
    pub radiation: Option<Moments>,
    pub half_hour_max: Option<f64>,
    pub dew_point: Option<f64>,
    pub time_to_peak: Option<f64>,
    /// Indexed by `WindSector::index`.
    pub sectors: Vec<SectorSummary>,
    pub calm: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ClimateSummary {
    /// January first.
    pub months: Vec<MonthSummary>,
    pub half_hour_record: f64,
    pub six_hour_record: f64,
    pub day_count: usize,
}

impl ClimateSummary {
    /// Whole years covered, allowing a few missing days a year.
    pub fn years(&self) -> usize {
        self.day_count / 360
    }
}

/// Reduces each month on its own blocking task.
pub async fn reduce(aggregation: Aggregation) -> Result<ClimateSummary> {
    let tasks: Vec<_> = aggregation
        .months
        .into_records()
        .into_iter()
        .map(|record| task::spawn_blocking(move || reduce_month(&record)))
        .collect();

    let mut months = Vec::with_capacity(12);
    for result in join_all(tasks).await {
        months.push(result?);
    }

    Ok(ClimateSummary {
        months,
        half_hour_record: aggregation.half_hour_record,
        six_hour_record: aggregation.six_hour_record,
        day_count: aggregation.day_count,
    })
}

pub fn reduce_month(record: &MonthRecord) -> MonthSummary {
    let days = record.day_count();

    MonthSummary {
        precipitation: Moments::from_samples(&record.wet_day_totals()),
        p_wet_wet: proportion(record.wet_after_wet.len(), days),
        p_wet_dry: proportion(record.wet_after_dry.len(), days),
        max_temp: Moments::from_samples(&record.max_temps),
        min_temp: Moments::from_samples(&record.min_temps),
        radiation: Moments::from_samples(&record.radiation),
        half_hour_max: mean(&record.half_hour_max),
        dew_point: mean(&record.dew_points),
        time_to_peak: mean(&record.time_to_peak),
        sectors: reduce_sectors(&record.sector_samples),
        calm: percentage(record.calm, record.calm + record.windy),
    }
}

fn reduce_sectors(samples: &[SectorSample]) -> Vec<SectorSummary> {
    WindSector::ALL
        .iter()
        .map(|&sector| {
            let in_sector: Vec<&SectorSample> =
                samples.iter().filter(|s| s.sector == sector).collect();

            SectorSummary {
                frequency: percentage(in_sector.len(), samples.len()),
                temperature: moments_of(&in_sector, |s| s.temperature),
                precipitation: moments_of(&in_sector, |s| Some(s.precipitation)),
                humidity: moments_of(&in_sector, |s| s.humidity),
                radiation: moments_of(&in_sector, |s| s.radiation),
                wind_speed: moments_of(&in_sector, |s| s.wind_speed),
            }
        })
        .collect()
}

fn moments_of<F>(samples: &[&SectorSample], field: F) -> Option<Moments>
where
    F: Fn(&SectorSample) -> Option<f64>,
{
    let values: Vec<f64> = samples.iter().filter_map(|&s| field(s)).collect();

    Moments::from_samples(&values)
}

// -- Tests -------------------------------------------------------------------
