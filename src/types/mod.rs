pub mod error;
pub mod units;

pub use error::ConversionError;
pub use units::*;

/// Canonical spelling of a unit or category name.
///
/// Lower-cases, treats underscores as spaces and collapses runs of
/// whitespace, so `"Light_Year"` and `" light  year "` both become
/// `"light year"`.
pub fn normalize_unit_name(name: &str) -> String {
    name.to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_name() {
        assert_eq!(normalize_unit_name("Meter"), "meter");
        assert_eq!(normalize_unit_name("  US   Fluid Ounce "), "us fluid ounce");
        assert_eq!(normalize_unit_name("light_year"), "light year");
        assert_eq!(normalize_unit_name(""), "");
    }
}
