// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Distance, rate and pace formatting in the configured unit system.

use crate::config::MeasurementSystem;

/// Convert meters to the display unit, rounded to two decimals.
pub fn convert_distance(meters: f64, units: MeasurementSystem) -> f64 {
    (meters * units.factor() * 100.0).round() / 100.0
}

/// Format a distance in meters, e.g. `6.21 mi`.
pub fn format_distance(meters: f64, units: MeasurementSystem) -> String {
    format!("{:.2} {}", convert_distance(meters, units), units.unit())
}

/// Average speed over `moving_time`, formatted as e.g. `6.21/h`.
///
/// A zero moving time is treated as one second.
pub fn format_rate(meters: f64, moving_time: u64, units: MeasurementSystem) -> String {
    let per_hour = meters * 3600.0 / moving_time.max(1) as f64;
    let distance = format_distance(per_hour, units);
    let value = distance
        .strip_suffix(units.unit())
        .unwrap_or(&distance)
        .trim_end();
    format!("{}/h", value)
}

/// Seconds per display unit, or 0 when distance or time is zero.
pub fn calculate_pace(meters: f64, moving_time: u64, units: MeasurementSystem) -> f64 {
    let distance = meters * units.factor();
    if distance <= 0.0 || moving_time == 0 {
        return 0.0;
    }
    moving_time as f64 / distance
}

/// Format a pace in seconds per unit as `M:SS/unit`.
pub fn format_pace(seconds_per_unit: f64, units: MeasurementSystem) -> String {
    let total = if seconds_per_unit.is_finite() && seconds_per_unit > 0.0 {
        seconds_per_unit.round() as u64
    } else {
        0
    };
    format!("{}:{:02}/{}", total / 60, total % 60, units.unit())
}
