//! Dew point from air temperature and relative humidity (Magnus form,
//! Alduchov & Eskridge coefficients).

use crate::reading::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};

const A: f64 = 17.625;
const B: f64 = 243.04;

/// Dew point in °C from temperature in °C and relative humidity in percent.
///
/// Returns `None` where the log term is undefined (humidity ≤ 0) or the result
/// is not finite.
pub fn dew_point_celsius(temp: f64, humidity: f64) -> Option<f64> {
    if humidity <= 0.0 {
        return None;
    }
    let ln_h = (humidity / 100.0).ln();
    let gamma = A * temp / (B + temp);
    let dew = B * (ln_h + gamma) / (A - ln_h - gamma);

    Some(dew).filter(|d| d.is_finite())
}

/// Dew point in °F from temperature in °F.
pub fn dew_point_fahrenheit(temp: f64, humidity: f64) -> Option<f64> {
    dew_point_celsius(fahrenheit_to_celsius(temp), humidity).map(celsius_to_fahrenheit)
}

// -- Tests -------------------------------------------------------------------
