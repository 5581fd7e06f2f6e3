//! Conversions from station units to the units CLIGEN expects.

const MM_PER_INCH: f64 = 25.4;
const WATTS_PER_LANGLEY: f64 = 0.484583;

/// Millimetres to inches.
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 1.8 + 32.0
}

/// Degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) / 1.8
}

/// W/m² averaged over an interval to langleys.
pub fn watts_to_langleys(w: f64) -> f64 {
    w / WATTS_PER_LANGLEY
}

/// Parses a cell, treating blanks and garbage as unavailable.
pub fn parse_cell(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// -- Tests -------------------------------------------------------------------
