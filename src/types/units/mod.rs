mod display;
mod explicit_unit_values;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::{error::ConversionError, normalize_unit_name};

pub use display::{DisplayConversion, DisplayValue};
pub use explicit_unit_values::{ConversionRequest, Measurement};

/// A measurement domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Temperature,
    Area,
    Volume,
    Weight,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Temperature,
        Category::Area,
        Category::Volume,
        Category::Weight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Temperature => "temperature",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Weight => "weight",
        }
    }

    /// Whether conversions in this category are pure ratios over a factor table.
    ///
    /// Temperature is the only affine category.
    pub fn is_ratio_based(self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_unit_name(s);
        Category::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| ConversionError::UnknownCategory(s.trim().to_string()))
    }
}

/// Temperature scales understood by the temperature converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Fahrenheit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Kelvin => "kelvin",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_unit_name(s);
        TemperatureUnit::ALL
            .into_iter()
            .find(|u| u.name() == normalized)
            .ok_or_else(|| ConversionError::unknown_unit(Category::Temperature, s))
    }
}
