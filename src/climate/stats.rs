//! Summary statistics used for every monthly parameter.

/// Spreads below this, relative to the mean, count as zero.
const SPREAD_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Pearson's second skewness coefficient, `3 * (mean - median) / std_dev`.
    pub skew: f64,
}

impl Moments {
    /// `None` for an empty sample.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mean = mean(samples)?;
        let median = median(samples)?;

        // Equal samples can still leave a rounding-sized spread; treat them as symmetric
        let identical = samples.iter().all(|v| *v == samples[0]);
        let std_dev = if identical { 0.0 } else { std_dev(samples, mean) };
        let skew = if std_dev > SPREAD_EPSILON * mean.abs().max(1.0) {
            3.0 * (mean - median) / std_dev
        } else {
            0.0
        };

        Some(Moments {
            mean,
            std_dev,
            skew,
        })
    }
}

pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn std_dev(samples: &[f64], mean: f64) -> f64 {
    let variance =
        samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / samples.len() as f64;

    variance.sqrt()
}

/// `part / whole * 100`, or `None` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 * 100.0 / whole as f64)
}

/// `part / whole`, or `None` when `whole` is zero.
pub fn proportion(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64)
}

// -- Tests -------------------------------------------------------------------
