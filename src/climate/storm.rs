//! Storm detection over the 2 hour window.
//!
//! A storm starts when a sample follows a dry step and exceeds everything in
//! the window. It ends once the latest hour is dry while the window still
//! holds rain. At the end, the time to peak is reported as a fraction of the
//! storm's duration.
//!
//! "Follows a dry step" means the newest slot, read before the new sample is
//! inserted, is dry. The oldest (about to be evicted) slot is not consulted.

use super::window::{MovingWindow, TWO_HOUR};

/// Dry samples needed to close a storm (1 hour).
const LULL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StormEvent {
    Onset,
    /// `time_to_peak` is `None` when the storm lasted a single step, or when
    /// skipped readings inside the lull leave no measurable duration.
    Closed { time_to_peak: Option<f64> },
}

#[derive(Debug, Clone)]
pub struct StormTracker {
    window: MovingWindow,
    /// Steps since the last reset.
    elapsed: u32,
    /// Value of `elapsed` when `peak` was reached.
    peak_at: u32,
    peak: f64,
}

impl Default for StormTracker {
    fn default() -> Self {
        StormTracker {
            window: MovingWindow::new(TWO_HOUR),
            elapsed: 0,
            peak_at: 0,
            peak: 0.0,
        }
    }
}

impl StormTracker {
    /// Feeds one valid sample.
    pub fn observe(&mut self, precipitation: f64) -> Option<StormEvent> {
        let mut event = None;

        if precipitation > self.window.max() && self.window.newest() <= 0.0 {
            self.reset();
            event = Some(StormEvent::Onset);
        }

        self.window.push(precipitation);

        let window_max = self.window.max();
        if window_max > self.peak {
            self.peak = window_max;
            self.peak_at = self.elapsed;
        }

        if self.window.recent_sum(LULL) == 0.0 && self.window.sum() != 0.0 {
            let duration = self.elapsed as i64 - LULL as i64;
            let time_to_peak = (duration > 0).then(|| self.peak_at as f64 / duration as f64);

            self.reset();
            self.window.clear();
            event = Some(StormEvent::Closed { time_to_peak });
        }

        self.elapsed += 1;

        event
    }

    /// Feeds a skipped reading. The window advances but nothing else does.
    pub fn skip(&mut self) {
        self.window.push(0.0);
    }

    fn reset(&mut self) {
        self.elapsed = 0;
        self.peak_at = 0;
        self.peak = 0.0;
    }
}

// -- Tests -------------------------------------------------------------------
