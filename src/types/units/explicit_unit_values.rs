use serde::{Deserialize, Serialize};

use super::Category;

/// A value tagged with the name of its unit
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
}

impl Measurement {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// A single conversion to perform.
///
/// Unit names are matched case-insensitively against the category's units.
/// Requests carry no state between conversions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub unit_from: String,
    pub unit_to: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(
        category: Category,
        unit_from: impl Into<String>,
        unit_to: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            category,
            unit_from: unit_from.into(),
            unit_to: unit_to.into(),
            value,
        }
    }

    /// The input side of the request as a measurement
    pub fn source(&self) -> Measurement {
        Measurement::new(self.value, self.unit_from.clone())
    }

    /// Tag a computed result with the target unit
    pub fn target(&self, result: f64) -> Measurement {
        Measurement::new(result, self.unit_to.clone())
    }
}
