use crate::tables::FactorTable;
use crate::types::*;

/// Convert between two units of a ratio-based category.
///
/// Both factors count units per reference unit, so the value is taken into
/// the reference unit by dividing by the source factor and out of it by
/// multiplying by the target factor. The two factors are combined first so
/// that large values do not overflow in the reference unit.
///
/// Converting a unit to itself returns `value` unchanged.
pub fn convert_ratio(
    table: &FactorTable,
    unit_from: &str,
    unit_to: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let (from_name, from_factor) = table.get(unit_from)?;
    let (to_name, to_factor) = table.get(unit_to)?;

    if from_name == to_name {
        return Ok(value);
    }

    Ok(value * (to_factor / from_factor))
}
