use crate::types::units::Category;

/// Errors returned by the conversion engine.
///
/// Every error is reported to the immediate caller; nothing is retried and
/// no partial result accompanies an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit { category: Category, unit: String },

    #[error("Invalid value: {0} (expected a finite number)")]
    InvalidValue(f64),

    #[error("Result is not a finite number: {value} {unit}")]
    NonFiniteResult { value: f64, unit: String },
}

impl ConversionError {
    pub(crate) fn unknown_unit(category: Category, unit: &str) -> Self {
        Self::UnknownUnit {
            category,
            unit: unit.to_string(),
        }
    }
}
