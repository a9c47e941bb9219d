//! Factor table registry
//!
//! Maps every ratio-based category to a static table of
//! `unit name -> factor`, where the factor is how many of that unit make up
//! one reference unit of the category. Names are normalised to lower case
//! when the tables are built and lookups normalise their input the same way.
//!
//! Temperature has no factor table: its scales differ by an offset as well
//! as a scale, see [`crate::convert::temperature`].

mod builtin;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::*;

/// Factor table for one ratio-based category
#[derive(Debug)]
pub struct FactorTable {
    category: Category,
    /// Canonical name and factor, in display order
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl FactorTable {
    fn build(category: Category, raw: &[(&str, f64)]) -> Self {
        let mut entries = Vec::with_capacity(raw.len());
        let mut index = HashMap::with_capacity(raw.len());

        for &(name, factor) in raw {
            debug_assert!(factor.is_finite() && factor > 0.0, "bad factor for {name}");
            let name = normalize_unit_name(name);
            let previous = index.insert(name.clone(), entries.len());
            debug_assert!(previous.is_none(), "duplicate {category} unit {name}");
            entries.push((name, factor));
        }

        Self {
            category,
            entries,
            index,
        }
    }

    /// Canonical spelling and factor of a unit
    pub fn get(&self, unit: &str) -> Result<(&str, f64), ConversionError> {
        self.index
            .get(&normalize_unit_name(unit))
            .map(|&i| {
                let (name, factor) = &self.entries[i];
                (name.as_str(), *factor)
            })
            .ok_or_else(|| ConversionError::unknown_unit(self.category, unit))
    }

    /// Canonical names and factors in display order
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, factor)| (name.as_str(), *factor))
    }
}

struct Registry {
    length: FactorTable,
    area: FactorTable,
    volume: FactorTable,
    weight: FactorTable,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry {
    length: FactorTable::build(Category::Length, &builtin::LENGTH),
    area: FactorTable::build(Category::Area, &builtin::AREA),
    volume: FactorTable::build(Category::Volume, &builtin::VOLUME),
    weight: FactorTable::build(Category::Weight, &builtin::WEIGHT),
});

/// Factor table of a ratio-based category.
///
/// Temperature is not in the registry and yields `UnknownCategory`.
pub fn lookup(category: Category) -> Result<&'static FactorTable, ConversionError> {
    let registry = &*REGISTRY;
    match category {
        Category::Length => Ok(&registry.length),
        Category::Area => Ok(&registry.area),
        Category::Volume => Ok(&registry.volume),
        Category::Weight => Ok(&registry.weight),
        Category::Temperature => Err(ConversionError::UnknownCategory(category.to_string())),
    }
}

/// Factor table by category name
pub fn lookup_named(category: &str) -> Result<&'static FactorTable, ConversionError> {
    lookup(category.parse()?)
}

/// Supported categories in menu order
pub fn list_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}

/// Unit names of a category in display order
pub fn list_units(category: Category) -> Vec<String> {
    if !category.is_ratio_based() {
        return TemperatureUnit::ALL
            .iter()
            .map(|u| u.name().to_string())
            .collect();
    }
    lookup(category)
        .map(|table| table.entries().map(|(name, _)| name.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// How many `to` units make up one `from` unit according to the tables
    fn table_ratio(category: Category, from: &str, to: &str) -> f64 {
        let table = lookup(category).unwrap();
        table.get(to).unwrap().1 / table.get(from).unwrap().1
    }

    #[test]
    fn test_unit_counts() {
        assert_eq!(list_units(Category::Length).len(), 11);
        assert_eq!(list_units(Category::Area).len(), 7);
        assert_eq!(list_units(Category::Volume).len(), 23);
        assert_eq!(list_units(Category::Weight).len(), 10);
        assert_eq!(list_units(Category::Temperature).len(), 3);
    }

    #[test]
    fn test_all_factors_positive_and_finite() {
        for category in Category::ALL.into_iter().filter(|c| c.is_ratio_based()) {
            for (unit, factor) in lookup(category).unwrap().entries() {
                assert!(factor.is_finite() && factor > 0.0, "{category}/{unit}: {factor}");
            }
        }
    }

    #[test]
    fn test_each_table_has_reference_unit() {
        for category in Category::ALL.into_iter().filter(|c| c.is_ratio_based()) {
            let references = lookup(category)
                .unwrap()
                .entries()
                .filter(|&(_, factor)| factor == 1.0)
                .count();
            assert!(references >= 1, "{category} has no reference unit");
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = lookup(Category::Length).unwrap();
        assert_eq!(table.get("Light Year").unwrap().0, "light year");
        assert_eq!(table.get("KILOMETER").unwrap().0, "kilometer");
        assert!(table.get("parsec").is_err());
    }

    #[test]
    fn test_unknown_unit() {
        let err = lookup(Category::Length).unwrap().get("parsec").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                category: Category::Length,
                unit: "parsec".into()
            }
        );
    }

    #[test]
    fn test_temperature_not_in_registry() {
        assert!(matches!(
            lookup(Category::Temperature),
            Err(ConversionError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_lookup_named() {
        let volume = lookup_named("Volume").unwrap();
        assert!(std::ptr::eq(volume, lookup(Category::Volume).unwrap()));
        assert_eq!(
            lookup_named("pressure").unwrap_err(),
            ConversionError::UnknownCategory("pressure".into())
        );
    }

    #[test]
    fn test_list_order() {
        assert_eq!(
            list_categories(),
            vec![
                Category::Length,
                Category::Temperature,
                Category::Area,
                Category::Volume,
                Category::Weight
            ]
        );
        assert_eq!(
            list_units(Category::Temperature),
            vec!["celsius", "kelvin", "fahrenheit"]
        );

        let length = list_units(Category::Length);
        assert_eq!(length.first().map(String::as_str), Some("nanometer"));
        assert_eq!(length.last().map(String::as_str), Some("light year"));
    }

    /// Compare a table ratio against an independently computed one
    fn check(category: Category, from: &str, to: &str, expected: f64) {
        assert_relative_eq!(table_ratio(category, from, to), expected, max_relative = 1e-5);
    }

    #[test]
    fn test_length_factors_match_uom() {
        use uom::si::f64::Length;
        use uom::si::length::{foot, inch, kilometer, light_year, meter, mile, yard};

        let m = Length::new::<meter>(1.0);
        check(Category::Length, "meter", "inch", m.get::<inch>());
        check(Category::Length, "meter", "foot", m.get::<foot>());
        check(Category::Length, "meter", "yard", m.get::<yard>());
        check(Category::Length, "meter", "mile", m.get::<mile>());
        check(Category::Length, "meter", "kilometer", m.get::<kilometer>());
        check(Category::Length, "meter", "light year", m.get::<light_year>());
    }

    #[test]
    fn test_area_factors_match_uom() {
        use uom::si::area::{
            acre, hectare, square_kilometer, square_meter, square_mile, square_millimeter,
        };
        use uom::si::f64::Area;

        let m2 = Area::new::<square_meter>(1.0);
        check(Category::Area, "square meter", "square millimeter", m2.get::<square_millimeter>());
        check(Category::Area, "square meter", "acre", m2.get::<acre>());
        check(Category::Area, "square meter", "hectare", m2.get::<hectare>());
        check(Category::Area, "square meter", "square kilometer", m2.get::<square_kilometer>());
        check(Category::Area, "square meter", "square mile", m2.get::<square_mile>());
    }

    #[test]
    fn test_area_units_against_reference_unit() {
        // One of each unit expressed in square millimeters
        check(Category::Area, "hectare", "square millimeter", 1e10);
        check(Category::Area, "acre", "square millimeter", 4_046_856_422.4);
        check(Category::Area, "square mile", "square millimeter", 2.589_988_110_336e12);
    }

    #[test]
    fn test_volume_factors_match_uom() {
        use uom::si::f64::Volume;
        use uom::si::volume::{
            cubic_foot, cubic_inch, cubic_kilometer, cubic_meter, cubic_mile, gallon, liter,
        };

        let l = Volume::new::<liter>(1.0);
        check(Category::Volume, "liter", "cubic meter", l.get::<cubic_meter>());
        check(Category::Volume, "liter", "cubic kilometer", l.get::<cubic_kilometer>());
        check(Category::Volume, "liter", "cubic mile", l.get::<cubic_mile>());
        check(Category::Volume, "liter", "cubic inch", l.get::<cubic_inch>());
        check(Category::Volume, "liter", "cubic foot", l.get::<cubic_foot>());
        check(Category::Volume, "liter", "us gallon", l.get::<gallon>());
    }

    #[test]
    fn test_weight_factors_match_uom() {
        use uom::si::f64::Mass;
        use uom::si::mass::{gram, kilogram, megagram, ounce, pound, ton_long, ton_short};

        let kg = Mass::new::<kilogram>(1.0);
        check(Category::Weight, "kilogram", "gram", kg.get::<gram>());
        check(Category::Weight, "kilogram", "ounce", kg.get::<ounce>());
        check(Category::Weight, "kilogram", "pound", kg.get::<pound>());
        check(Category::Weight, "kilogram", "short ton", kg.get::<ton_short>());
        check(Category::Weight, "kilogram", "long ton", kg.get::<ton_long>());
        check(Category::Weight, "kilogram", "metric ton", kg.get::<megagram>());
    }
}
