//! The single forward pass over a station's observations.

use chrono::Datelike;

use crate::reading::Observation;

use super::{
    day::{ClosedDay, DailyAggregator},
    dew_point::dew_point_fahrenheit,
    month::{Months, SectorSample},
    storm::{StormEvent, StormTracker},
    window::IntensityRecords,
    wind::WindSector,
};

#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    storm: StormTracker,
    intensity: IntensityRecords,
    days: DailyAggregator,
    months: Months,
    day_count: usize,
    observations: usize,
    skipped: usize,
    storms: usize,
}

#[derive(Debug, Clone)]
/// Everything collected once the stream is exhausted.
pub struct Aggregation {
    pub months: Months,
    /// Largest 30 minute depth, inches.
    pub half_hour_record: f64,
    /// Largest 6 hour depth, inches.
    pub six_hour_record: f64,
    pub day_count: usize,
    pub observations: usize,
    pub skipped: usize,
    pub storms: usize,
}

impl Aggregator {
    /// Feeds a row that had no usable timestamp or precipitation.
    pub fn skip(&mut self) {
        self.storm.skip();
        self.intensity.push(0.0);
        self.skipped += 1;
    }

    pub fn observe(&mut self, obs: &Observation) {
        let month = obs.timestamp.month();
        self.observations += 1;

        let half_hour = self.intensity.push(obs.precipitation);
        if let Some(day) = self.days.observe(obs, half_hour) {
            self.file_day(&day);
        }

        if let Some(StormEvent::Closed { time_to_peak }) = self.storm.observe(obs.precipitation) {
            self.storms += 1;
            self.months.get_mut(month).time_to_peak.extend(time_to_peak);
        }

        let record = self.months.get_mut(month);

        if let Some(speed) = obs.wind_speed {
            record.add_wind_speed(speed);
        }

        if let (Some(temp), Some(humidity)) = (obs.temperature, obs.humidity) {
            record.dew_points.extend(dew_point_fahrenheit(temp, humidity));
        }

        if let Some(sector) = obs.wind_direction.and_then(WindSector::from_degrees) {
            record.sector_samples.push(SectorSample {
                sector,
                temperature: obs.temperature,
                precipitation: obs.precipitation,
                humidity: obs.humidity,
                radiation: obs.radiation,
                wind_speed: obs.wind_speed,
            });
        }
    }

    pub fn finish(mut self) -> Aggregation {
        if let Some(day) = self.days.finish() {
            self.file_day(&day);
        }

        Aggregation {
            months: self.months,
            half_hour_record: self.intensity.half_hour_record(),
            six_hour_record: self.intensity.six_hour_record(),
            day_count: self.day_count,
            observations: self.observations,
            skipped: self.skipped,
            storms: self.storms,
        }
    }

    fn file_day(&mut self, day: &ClosedDay) {
        // Filed under the closed day's own month, not the month of the day that closed it
        self.months.get_mut(day.date.month()).add_day(day);
        self.day_count += 1;
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use chrono::{Duration, NaiveDate, NaiveDateTime};

    use super::*;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2010, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn obs(timestamp: NaiveDateTime, precipitation: f64) -> Observation {
        Observation {
            timestamp,
            temperature: Some(50.0),
            humidity: Some(60.0),
            radiation: Some(10.0),
            wind_speed: Some(2.0),
            wind_direction: Some(90.0),
            precipitation,
        }
    }

    /// Steps through `samples` at 15 minute intervals.
    fn run(samples: &[f64]) -> Aggregation {
        let mut aggregator = Aggregator::default();
        for (i, &p) in samples.iter().enumerate() {
            aggregator.observe(&obs(start() + Duration::minutes(15 * i as i64), p));
        }

        aggregator.finish()
    }

    #[test]
    fn should_record_storm_time_to_peak() {
        let aggregation = run(&[0.0, 0.1, 0.3, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let january = aggregation.months.get(1);

        assert_eq!(aggregation.storms, 1);
        assert_eq!(january.time_to_peak, vec![0.5]);
    }

    #[test]
    fn should_drop_single_sample_storm() {
        let aggregation = run(&[0.0, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0]);

        assert_eq!(aggregation.storms, 1);
        assert!(aggregation.months.get(1).time_to_peak.is_empty());
    }

    #[test]
    fn should_track_station_records() {
        let aggregation = run(&[0.1, 0.2, 0.05, 0.0]);

        assert!((aggregation.half_hour_record - 0.3).abs() < 1e-12);
        assert!((aggregation.six_hour_record - 0.35).abs() < 1e-12);
    }

    #[test]
    fn should_collect_per_observation_samples() {
        let aggregation = run(&[0.0; 8]);
        let january = aggregation.months.get(1);

        assert_eq!(aggregation.observations, 8);
        assert_eq!(aggregation.day_count, 1);
        assert_eq!(january.windy, 8);
        assert_eq!(january.dew_points.len(), 8);
        assert_eq!(january.sector_samples.len(), 8);
        assert!(january
            .sector_samples
            .iter()
            .all(|s| s.sector == WindSector::E));
    }

    #[test]
    fn should_advance_windows_on_skip() {
        let mut aggregator = Aggregator::default();
        aggregator.observe(&obs(start(), 0.2));
        aggregator.skip();
        aggregator.skip();
        let aggregation = aggregator.finish();

        assert_eq!(aggregation.skipped, 2);
        assert_eq!(aggregation.observations, 1);
        assert!(aggregation.months.get(1).dew_points.len() == 1);
    }

    #[test]
    fn should_file_days_under_their_own_month() {
        let mut aggregator = Aggregator::default();
        let jan_31 = NaiveDate::from_ymd_opt(2010, 1, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        aggregator.observe(&obs(jan_31, 0.4));
        aggregator.observe(&obs(jan_31 + Duration::days(1), 0.0));
        let aggregation = aggregator.finish();

        assert_eq!(aggregation.months.get(1).wet_after_dry, vec![0.4]);
        assert_eq!(aggregation.months.get(2).dry, vec![0.0]);
    }
}
