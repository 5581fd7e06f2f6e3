//! Fixed length precipitation windows, newest sample first.

use std::collections::VecDeque;

/// 2 hours of 15 minute samples.
pub const TWO_HOUR: usize = 8;
/// 6 hours of 15 minute samples.
pub const SIX_HOUR: usize = 24;
/// 30 minutes of 15 minute samples.
pub const HALF_HOUR: usize = 2;

#[derive(Debug, Clone)]
pub struct MovingWindow {
    slots: VecDeque<f64>,
}

impl MovingWindow {
    /// A window of `len` zeroed slots.
    pub fn new(len: usize) -> Self {
        MovingWindow {
            slots: std::iter::repeat(0.0).take(len).collect(),
        }
    }

    /// Inserts the newest sample and evicts the oldest, returning it.
    pub fn push(&mut self, value: f64) -> f64 {
        self.slots.push_front(value);
        self.slots.pop_back().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn newest(&self) -> f64 {
        self.slots.front().copied().unwrap_or_default()
    }

    pub fn sum(&self) -> f64 {
        self.slots.iter().sum()
    }

    /// Sum of the `n` most recent samples.
    pub fn recent_sum(&self, n: usize) -> f64 {
        self.slots.iter().take(n).sum()
    }

    pub fn max(&self) -> f64 {
        self.slots.iter().copied().fold(f64::MIN, f64::max)
    }

    /// Zeroes every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|v| *v = 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.slots.iter()
    }
}

#[derive(Debug, Clone)]
/// The 30 minute and 6 hour windows and their all-time maxima (TP5, TP6).
pub struct IntensityRecords {
    half_hour: MovingWindow,
    six_hour: MovingWindow,
    half_hour_record: f64,
    six_hour_record: f64,
}

impl Default for IntensityRecords {
    fn default() -> Self {
        IntensityRecords {
            half_hour: MovingWindow::new(HALF_HOUR),
            six_hour: MovingWindow::new(SIX_HOUR),
            half_hour_record: 0.0,
            six_hour_record: 0.0,
        }
    }
}

impl IntensityRecords {
    /// Advances both windows and returns the current 30 minute depth.
    pub fn push(&mut self, precipitation: f64) -> f64 {
        self.half_hour.push(precipitation);
        self.six_hour.push(precipitation);

        let half_hour = self.half_hour.sum();
        self.half_hour_record = self.half_hour_record.max(half_hour);
        self.six_hour_record = self.six_hour_record.max(self.six_hour.sum());

        half_hour
    }

    /// Largest 30 minute depth seen in the stream.
    pub fn half_hour_record(&self) -> f64 {
        self.half_hour_record
    }

    /// Largest 6 hour depth seen in the stream.
    pub fn six_hour_record(&self) -> f64 {
        self.six_hour_record
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_keep_length_constant() {
        for len in [HALF_HOUR, TWO_HOUR, SIX_HOUR] {
            let mut window = MovingWindow::new(len);
            for i in 0..100 {
                window.push(i as f64);
                assert_eq!(window.len(), len);
            }
        }
    }

    #[test]
    fn should_hold_most_recent_samples_newest_first() {
        let mut window = MovingWindow::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            window.push(v);
        }
        let values: Vec<f64> = window.iter().copied().collect();

        assert_eq!(values, vec![4.0, 3.0, 2.0]);
        assert_eq!(window.newest(), 4.0);
        assert_eq!(window.sum(), 9.0);
        assert_eq!(window.recent_sum(2), 7.0);
        assert_eq!(window.max(), 4.0);
    }

    #[test]
    fn should_evict_oldest() {
        let mut window = MovingWindow::new(2);
        window.push(1.0);
        window.push(2.0);

        assert_eq!(window.push(3.0), 1.0);
    }

    #[test]
    fn should_clear_without_shrinking() {
        let mut window = MovingWindow::new(TWO_HOUR);
        window.push(0.5);
        window.clear();

        assert_eq!(window.len(), TWO_HOUR);
        assert_eq!(window.sum(), 0.0);
    }

    #[test]
    fn should_track_intensity_records() {
        let mut records = IntensityRecords::default();
        for p in [0.1, 0.2, 0.0, 0.05] {
            records.push(p);
        }

        assert!((records.half_hour_record() - 0.3).abs() < 1e-12);
        assert!((records.six_hour_record() - 0.35).abs() < 1e-12);
    }
}
