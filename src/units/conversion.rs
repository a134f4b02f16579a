//! Metric to target-unit conversions.
//!
//! The logger always reports in metric units: temperature in °C, wind speed in
//! m/s, pressure in mb, rain in mm and mm/h, distance in km. Every function
//! takes the metric value and returns it rounded in the requested system.

use crate::units::UnitSystem;

const MM_TO_IN: f64 = 0.0393700787;
const MB_TO_INHG: f64 = 0.0295299801647;
const MS_TO_MPH: f64 = 2.2369362921;
const KM_TO_MI: f64 = 0.621371192;

const FEELS_LIKE_HIGH_CELSIUS: f64 = 26.666666667;
const FEELS_LIKE_LOW_CELSIUS: f64 = 10.0;
const FEELS_LIKE_HIGH_FAHRENHEIT: f64 = 80.0;
const FEELS_LIKE_LOW_FAHRENHEIT: f64 = 50.0;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn temperature(celsius: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(celsius * 9.0 / 5.0 + 32.0, 1),
        UnitSystem::Metric => round_to(celsius, 1),
    }
}

/// Accumulated rain, mm to in. Inches keep 2 decimals, millimetres 1.
pub fn volume(mm: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(mm * MM_TO_IN, 2),
        UnitSystem::Metric => round_to(mm, 1),
    }
}

pub fn rate(mm_per_hour: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(mm_per_hour * MM_TO_IN, 2),
        UnitSystem::Metric => round_to(mm_per_hour, 2),
    }
}

pub fn pressure(mb: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(mb * MB_TO_INHG, 3),
        UnitSystem::Metric => round_to(mb, 1),
    }
}

pub fn speed(meters_per_second: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(meters_per_second * MS_TO_MPH, 1),
        UnitSystem::Metric => round_to(meters_per_second, 1),
    }
}

pub fn distance(km: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(km * KM_TO_MI, 1),
        UnitSystem::Metric => round_to(km, 0),
    }
}

/// Pick heat index above the high threshold, wind chill below the low one,
/// otherwise the temperature itself.
///
/// All three inputs must already be in `unit_system`; the thresholds are
/// chosen to match.
pub fn feels_like(
    temperature: f64,
    heat_index: f64,
    wind_chill: f64,
    unit_system: UnitSystem,
) -> f64 {
    let (high, low) = match unit_system {
        UnitSystem::Imperial => (FEELS_LIKE_HIGH_FAHRENHEIT, FEELS_LIKE_LOW_FAHRENHEIT),
        UnitSystem::Metric => (FEELS_LIKE_HIGH_CELSIUS, FEELS_LIKE_LOW_CELSIUS),
    };

    if temperature > high {
        heat_index
    } else if temperature < low {
        wind_chill
    } else {
        temperature
    }
}

pub fn temperature_to_metric(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to((value - 32.0) * 5.0 / 9.0, 1),
        UnitSystem::Metric => round_to(value, 1),
    }
}

pub fn speed_to_metric(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(value / MS_TO_MPH, 1),
        UnitSystem::Metric => round_to(value, 1),
    }
}

pub fn pressure_to_metric(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(value / MB_TO_INHG, 1),
        UnitSystem::Metric => round_to(value, 1),
    }
}

pub fn rate_to_metric(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => round_to(value / MM_TO_IN, 2),
        UnitSystem::Metric => round_to(value, 2),
    }
}
