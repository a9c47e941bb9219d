//! Temperature conversion
//!
//! Temperature scales differ by an offset as well as a scale factor, so they
//! cannot share the factor-table path. Every conversion goes through Celsius.

use crate::types::*;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit reading at 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Express a temperature reading in degrees Celsius
pub fn to_celsius(unit: TemperatureUnit, value: f64) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
    }
}

/// Express a Celsius reading on another scale
pub fn from_celsius(unit: TemperatureUnit, celsius: f64) -> f64 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
    }
}

/// Convert a reading between any two temperature scales.
///
/// Converting a scale to itself returns `value` unchanged.
pub fn convert_temperature(
    unit_from: TemperatureUnit,
    unit_to: TemperatureUnit,
    value: f64,
) -> f64 {
    if unit_from == unit_to {
        return value;
    }
    from_celsius(unit_to, to_celsius(unit_from, value))
}

/// Same as [`convert_temperature`] for unit names.
///
/// Both names are checked before anything is computed.
pub fn convert_temperature_named(
    unit_from: &str,
    unit_to: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let from: TemperatureUnit = unit_from.parse()?;
    let to: TemperatureUnit = unit_to.parse()?;
    Ok(convert_temperature(from, to, value))
}
