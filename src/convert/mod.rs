//! Conversion dispatcher
//!
//! Picks the strategy for a category: temperature goes through the affine
//! converter, everything else through the ratio converter over its factor
//! table. Units and value are validated before any arithmetic.

pub mod ratio;
pub mod temperature;

pub use ratio::convert_ratio;
pub use temperature::{convert_temperature, convert_temperature_named};

use tracing::{debug, warn};

use crate::tables::{self, list_units};
use crate::types::*;

/// Convert `value` from `unit_from` to `unit_to` within `category`.
///
/// # Errors
/// * `InvalidValue` if `value` is NaN or infinite
/// * `UnknownUnit` if either unit does not belong to `category`
/// * `NonFiniteResult` if the converted value overflows
pub fn convert(
    category: Category,
    unit_from: &str,
    unit_to: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        warn!(%category, value, "rejected non-finite input");
        return Err(ConversionError::InvalidValue(value));
    }

    let result = match category {
        Category::Temperature => convert_temperature_named(unit_from, unit_to, value),
        Category::Length | Category::Area | Category::Volume | Category::Weight => {
            convert_ratio(tables::lookup(category)?, unit_from, unit_to, value)
        }
    }
    .inspect_err(|e| warn!(%category, unit_from, unit_to, "{e}"))?;

    if !result.is_finite() {
        warn!(%category, unit_from, unit_to, value, "conversion overflowed");
        return Err(ConversionError::NonFiniteResult {
            value: result,
            unit: unit_to.to_string(),
        });
    }

    debug!(%category, unit_from, unit_to, value, result, "converted");
    Ok(result)
}

/// [`convert`] for a category given by name, e.g. straight from user input
pub fn convert_named(
    category: &str,
    unit_from: &str,
    unit_to: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    convert(category.parse()?, unit_from, unit_to, value)
}

/// Run a request and tag the result with its target unit
pub fn convert_request(request: &ConversionRequest) -> Result<Measurement, ConversionError> {
    convert(
        request.category,
        &request.unit_from,
        &request.unit_to,
        request.value,
    )
    .map(|result| request.target(result))
}

/// Convert `value` into every unit of `category`, in display order.
///
/// Fails as a whole if any single conversion fails.
pub fn convert_all(
    category: Category,
    unit_from: &str,
    value: f64,
) -> Result<Vec<Measurement>, ConversionError> {
    list_units(category)
        .into_iter()
        .map(|unit| {
            let result = convert(category, unit_from, &unit, value)?;
            Ok(Measurement::new(result, unit))
        })
        .collect()
}
