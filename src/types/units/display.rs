use std::fmt;

use super::Measurement;

/// Plain decimal for ordinary magnitudes, scientific notation for the
/// extremes (light years in nanometers, atomic mass units in tons).
#[derive(Debug, Clone, Copy)]
pub struct DisplayValue(pub f64);

#[derive(Debug)]
pub struct DisplayConversion<'a> {
    pub from: &'a Measurement,
    pub to: &'a Measurement,
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if self.0 == 0.0 || !self.0.is_finite() || (1e-4..1e15).contains(&magnitude) {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{:e}", self.0)
        }
    }
}

impl fmt::Display for DisplayConversion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            DisplayValue(self.from.value),
            self.from.unit,
            DisplayValue(self.to.value),
            self.to.unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_plain() {
        assert_eq!(DisplayValue(32.0).to_string(), "32");
        assert_eq!(DisplayValue(-40.5).to_string(), "-40.5");
        assert_eq!(DisplayValue(0.0).to_string(), "0");
    }

    #[test]
    fn test_display_value_scientific() {
        assert_eq!(DisplayValue(1.057e-25).to_string(), "1.057e-25");
        assert_eq!(DisplayValue(2.5e20).to_string(), "2.5e20");
    }

    #[test]
    fn test_display_conversion() {
        let from = Measurement::new(1000.0, "meter");
        let to = Measurement::new(1.0, "kilometer");
        let shown = DisplayConversion { from: &from, to: &to }.to_string();
        assert_eq!(shown, "1000 meter = 1 kilometer");
    }
}
