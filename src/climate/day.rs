//! Calendar-day bookkeeping and wet/dry classification.

use chrono::NaiveDate;

use crate::reading::Observation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    WetAfterWet,
    WetAfterDry,
    /// Dry, whatever the day before was.
    Dry,
}

impl DayKind {
    fn classify(total: f64, previous_total: f64) -> Self {
        match (total > 0.0, previous_total > 0.0) {
            (true, true) => DayKind::WetAfterWet,
            (true, false) => DayKind::WetAfterDry,
            (false, _) => DayKind::Dry,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A finished day, ready to be filed under its month.
pub struct ClosedDay {
    pub date: NaiveDate,
    pub total_precipitation: f64,
    pub kind: DayKind,
    /// Rounded to whole degrees, halves away from zero.
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub mean_radiation: Option<f64>,
    /// Largest 30 minute depth ending on this day.
    pub half_hour_max: f64,
}

#[derive(Debug, Clone)]
struct DayRecord {
    date: NaiveDate,
    precipitation: Vec<f64>,
    max_temp: Option<f64>,
    min_temp: Option<f64>,
    radiation: Vec<f64>,
    half_hour_max: f64,
}

impl DayRecord {
    fn new(date: NaiveDate) -> Self {
        DayRecord {
            date,
            precipitation: Vec::new(),
            max_temp: None,
            min_temp: None,
            radiation: Vec::new(),
            half_hour_max: 0.0,
        }
    }

    fn add(&mut self, obs: &Observation, half_hour: f64) {
        self.precipitation.push(obs.precipitation);

        if let Some(temp) = obs.temperature {
            self.max_temp = Some(self.max_temp.map_or(temp, |t| t.max(temp)));
            self.min_temp = Some(self.min_temp.map_or(temp, |t| t.min(temp)));
        }
        if let Some(radiation) = obs.radiation {
            self.radiation.push(radiation);
        }
        self.half_hour_max = self.half_hour_max.max(half_hour);
    }
}

#[derive(Debug, Clone, Default)]
pub struct DailyAggregator {
    current: Option<DayRecord>,
    previous_total: f64,
}

impl DailyAggregator {
    /// Adds a valid observation, closing the open day first if the date has
    /// moved on.
    pub fn observe(&mut self, obs: &Observation, half_hour: f64) -> Option<ClosedDay> {
        let date = obs.timestamp.date();
        let closed = match &self.current {
            Some(day) if day.date == date => None,
            _ => self.close(),
        };

        self.current
            .get_or_insert_with(|| DayRecord::new(date))
            .add(obs, half_hour);

        closed
    }

    /// Closes whatever day is still open at the end of the stream.
    pub fn finish(&mut self) -> Option<ClosedDay> {
        self.close()
    }

    fn close(&mut self) -> Option<ClosedDay> {
        let day = self.current.take()?;
        let total: f64 = day.precipitation.iter().sum();
        let kind = DayKind::classify(total, self.previous_total);
        self.previous_total = total;

        let mean_radiation = (!day.radiation.is_empty())
            .then(|| day.radiation.iter().sum::<f64>() / day.radiation.len() as f64);

        Some(ClosedDay {
            date: day.date,
            total_precipitation: total,
            kind,
            max_temp: day.max_temp.map(f64::round),
            min_temp: day.min_temp.map(f64::round),
            mean_radiation,
            half_hour_max: day.half_hour_max,
        })
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use chrono::NaiveDateTime;

    use super::*;

    fn obs(ts: &str, precipitation: f64, temperature: Option<f64>) -> Observation {
        Observation {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap(),
            temperature,
            humidity: None,
            radiation: temperature.map(|t| t * 10.0),
            wind_speed: None,
            wind_direction: None,
            precipitation,
        }
    }

    #[test]
    fn should_close_day_on_rollover() {
        let mut days = DailyAggregator::default();

        assert!(days.observe(&obs("2010-01-01 00:00", 0.1, Some(30.2)), 0.1).is_none());
        assert!(days.observe(&obs("2010-01-01 12:00", 0.2, Some(41.6)), 0.3).is_none());
        let closed = days.observe(&obs("2010-01-02 00:00", 0.0, Some(35.0)), 0.2).unwrap();

        assert_eq!(closed.date, NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert!((closed.total_precipitation - 0.3).abs() < 1e-12);
        assert_eq!(closed.kind, DayKind::WetAfterDry);
        assert_eq!(closed.max_temp, Some(42.0));
        assert_eq!(closed.min_temp, Some(30.0));
        assert!((closed.mean_radiation.unwrap() - 359.0).abs() < 1e-9);
        assert!((closed.half_hour_max - 0.3).abs() < 1e-12);
    }

    #[test]
    fn should_round_half_degrees_up() {
        let mut days = DailyAggregator::default();
        days.observe(&obs("2010-01-01 00:00", 0.0, Some(36.5)), 0.0);
        days.observe(&obs("2010-01-01 06:00", 0.0, Some(-2.5)), 0.0);
        let closed = days.finish().unwrap();

        assert_eq!(closed.max_temp, Some(37.0));
        assert_eq!(closed.min_temp, Some(-3.0));
    }

    #[test]
    fn should_classify_sequence() {
        let mut days = DailyAggregator::default();
        let mut kinds = Vec::new();
        for (ts, p) in [
            ("2010-01-01 00:00", 0.0),
            ("2010-01-02 00:00", 0.5),
            ("2010-01-03 00:00", 0.3),
            ("2010-01-04 00:00", 0.0),
        ] {
            kinds.extend(days.observe(&obs(ts, p, None), p).map(|d| d.kind));
        }
        kinds.extend(days.finish().map(|d| d.kind));

        assert_eq!(
            kinds,
            vec![DayKind::Dry, DayKind::WetAfterDry, DayKind::WetAfterWet, DayKind::Dry]
        );
    }

    #[test]
    fn should_separate_same_day_number_in_different_months() {
        let mut days = DailyAggregator::default();
        days.observe(&obs("2010-01-05 23:45", 0.0, None), 0.0);
        let closed = days.observe(&obs("2010-02-05 00:00", 0.0, None), 0.0);

        assert!(closed.is_some());
    }

    #[test]
    fn should_leave_missing_values_unavailable() {
        let mut days = DailyAggregator::default();
        days.observe(&obs("2010-01-01 00:00", 0.0, None), 0.0);
        let closed = days.finish().unwrap();

        assert_eq!(closed.max_temp, None);
        assert_eq!(closed.min_temp, None);
        assert_eq!(closed.mean_radiation, None);
        assert!(days.finish().is_none());
    }
}
