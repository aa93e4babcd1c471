//! Unit catalog - predefined units organized by dimension
//!
//! Each dimension module declares its units as exact decimal literals
//! (`mantissa * 10^exponent`), exposes one accessor function per unit,
//! and an extension trait wrapping amounts into quantities:
//!
//! ```
//! use measura_units::catalog::mass::{self, MassExt};
//!
//! let weight = 14i64.pound();
//! let stones = weight.convert_to(&mass::stone()).unwrap();
//! assert_eq!(stones.amount().to_i64(), Some(1));
//! ```

use std::collections::HashMap;
use std::num::NonZeroU64;
use std::sync::LazyLock;
use tracing::{debug, warn};
use measura_core::Number;
use crate::{Dimension, Unit, UnitError};

/// Declares a dimension's unit table, accessor functions and extension trait
macro_rules! unit_table {
    (
        $(#[$ext_meta:meta])*
        trait $ext:ident for $dimension:expr;
        $( $konst:ident, $func:ident => ($name:literal, $symbol:literal, $mantissa:literal, $exponent:literal); )+
    ) => {
        $(
            pub const $konst: UnitDef = UnitDef::new($dimension, $name, $symbol, $mantissa, $exponent);
        )+

        /// Every unit of this dimension
        pub const ALL: &[UnitDef] = &[$($konst),+];

        $(
            #[doc = concat!("The ", $name, " (`", $symbol, "`)")]
            pub fn $func() -> Unit {
                $konst.unit()
            }
        )+

        $(#[$ext_meta])*
        pub trait $ext: Sized {
            $(
                #[doc = concat!("This amount, in ", $name, " (`", $symbol, "`)")]
                fn $func(self) -> Quantity;
            )+
        }

        impl<T: Into<Number>> $ext for T {
            $(
                fn $func(self) -> Quantity {
                    Quantity::new(self, $func())
                }
            )+
        }
    };
}

pub mod mass;
pub mod length;
pub mod volume;

/// Decimal literals beyond this exponent are refused at compile time
const MAX_LITERAL_EXPONENT: i32 = 64;

/// Process-wide catalog holding every predefined unit
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::standard);

/// A catalog table entry with an exact, strictly positive ratio
///
/// `UnitDef::new` is a `const fn`: a zero mantissa in a table is a
/// compile error, so every catalog unit satisfies `ratio > 0`.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub dimension: Dimension,
    pub name: &'static str,
    pub symbol: &'static str,
    mantissa: NonZeroU64,
    exponent: i32,
}

impl UnitDef {
    pub const fn new(
        dimension: Dimension,
        name: &'static str,
        symbol: &'static str,
        mantissa: u64,
        exponent: i32,
    ) -> Self {
        let mantissa = match NonZeroU64::new(mantissa) {
            Some(m) => m,
            None => panic!("unit ratio must be greater than zero"),
        };
        assert!(
            exponent >= -MAX_LITERAL_EXPONENT && exponent <= MAX_LITERAL_EXPONENT,
            "unit ratio exponent out of range"
        );

        UnitDef { dimension, name, symbol, mantissa, exponent }
    }

    /// The exact ratio to the dimension's base unit
    pub fn ratio(&self) -> Number {
        Number::from_parts(self.mantissa.get(), self.exponent)
    }

    /// Build the unit
    pub fn unit(&self) -> Unit {
        Unit::from_literal(self.dimension, self.name, self.symbol, self.mantissa, self.exponent)
    }
}

/// Registry of units, looked up by symbol or name
#[derive(Debug, Default)]
pub struct UnitCatalog {
    units: Vec<Unit>,
    /// symbol -> indices into `units` (case-sensitive: "mg" is not "Mg")
    symbols: HashMap<String, Vec<usize>>,
    /// lowercase name -> indices into `units`
    names: HashMap<String, Vec<usize>>,
}

impl UnitCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every predefined table registered
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register_defs(mass::ALL);
        catalog.register_defs(length::ALL);
        catalog.register_defs(volume::ALL);
        debug!(units = catalog.len(), "unit catalog initialised");
        catalog
    }

    /// Register every entry of a table
    pub fn register_defs(&mut self, defs: &[UnitDef]) {
        for def in defs {
            self.register(def.unit());
        }
    }

    /// Register a unit; a second unit with the same symbol in the
    /// same dimension is rejected and `false` is returned
    pub fn register(&mut self, unit: Unit) -> bool {
        if let Some(existing) = self.find_symbol(unit.dimension(), unit.symbol()) {
            warn!(
                symbol = unit.symbol(),
                dimension = %unit.dimension(),
                existing = existing.name(),
                rejected = unit.name(),
                "duplicate unit symbol rejected"
            );
            return false;
        }

        let index = self.units.len();
        self.symbols.entry(unit.symbol().to_string()).or_default().push(index);
        self.names.entry(unit.name().to_lowercase()).or_default().push(index);
        self.units.push(unit);
        true
    }

    /// Units matching a key, symbol matches first
    fn candidates(&self, key: &str) -> Vec<&Unit> {
        let key = key.trim();
        let by_symbol = self.symbols.get(key).into_iter().flatten();
        let by_name = self.names.get(&key.to_lowercase()).into_iter().flatten();
        by_symbol.chain(by_name).map(|&i| &self.units[i]).collect()
    }

    fn find_symbol(&self, dimension: Dimension, symbol: &str) -> Option<&Unit> {
        self.symbols
            .get(symbol)?
            .iter()
            .map(|&i| &self.units[i])
            .find(|u| u.dimension() == dimension)
    }

    /// Get a unit by symbol or name
    pub fn get(&self, key: &str) -> Option<&Unit> {
        self.candidates(key).into_iter().next()
    }

    /// Get a unit by symbol or name within one dimension
    pub fn get_in(&self, dimension: Dimension, key: &str) -> Option<&Unit> {
        self.candidates(key).into_iter().find(|u| u.dimension() == dimension)
    }

    /// Like `get`, failing with `UnknownUnit`
    pub fn lookup(&self, key: &str) -> Result<&Unit, UnitError> {
        self.get(key).ok_or_else(|| UnitError::UnknownUnit(key.trim().to_string()))
    }

    /// All units of a dimension, in registration order
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&Unit> {
        self.units.iter().filter(|u| u.dimension() == dimension).collect()
    }

    /// The registered base unit of a dimension
    pub fn base_unit(&self, dimension: Dimension) -> Option<&Unit> {
        self.find_symbol(dimension, dimension.base_symbol())
    }

    /// All unit symbols, in registration order
    pub fn symbols(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.symbol()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn amounts() -> Vec<Number> {
        ["0", "1", "14", "-3.5", "1/3", "0.000001", "123456789.987654321"]
            .into_iter()
            .map(|s| Number::from_str(s).unwrap())
            .collect()
    }

    #[test]
    fn test_catalog_has_every_table() {
        let expected = mass::ALL.len() + length::ALL.len() + volume::ALL.len();
        assert_eq!(CATALOG.len(), expected);
    }

    #[test]
    fn test_symbols_unique_per_dimension() {
        for dimension in Dimension::ALL {
            let units = CATALOG.by_dimension(dimension);
            let symbols: HashSet<&str> = units.iter().map(|u| u.symbol()).collect();
            assert_eq!(symbols.len(), units.len(), "duplicate symbol in {}", dimension);
        }
    }

    #[test]
    fn test_every_ratio_positive() {
        for unit in CATALOG.iter() {
            assert!(unit.ratio().is_positive(), "{} has ratio {}", unit.name(), unit.ratio());
        }
    }

    #[test]
    fn test_round_trip_through_base() {
        for unit in CATALOG.iter() {
            for a in amounts() {
                assert_eq!(unit.convert_from_base(&unit.convert_to_base(&a)), a, "{} {}", a, unit);
            }
        }
    }

    #[test]
    fn test_identity_conversion() {
        for unit in CATALOG.iter() {
            for a in amounts() {
                assert_eq!(Unit::convert(&a, unit, unit).unwrap(), a, "{} {}", a, unit);
            }
        }
    }

    #[test]
    fn test_symmetric_conversion() {
        for dimension in Dimension::ALL {
            let units = CATALOG.by_dimension(dimension);
            for from in &units {
                for to in &units {
                    for a in amounts() {
                        let there = Unit::convert(&a, from, to).unwrap();
                        let back = Unit::convert(&there, to, from).unwrap();
                        assert_eq!(back, a, "{} {} -> {} -> back", a, from, to);
                    }
                }
            }
        }
    }

    #[test]
    fn test_cross_dimension_conversion_fails() {
        for from in CATALOG.iter() {
            for to in CATALOG.iter().filter(|u| u.dimension() != from.dimension()) {
                assert!(matches!(
                    Unit::convert(&Number::one(), from, to),
                    Err(UnitError::IncompatibleDimension { .. })
                ));
            }
        }
    }

    #[test]
    fn test_every_dimension_has_base_unit() {
        for dimension in Dimension::ALL {
            let base = CATALOG.base_unit(dimension).unwrap();
            assert!(base.is_base());
            assert_eq!(base.dimension(), dimension);
        }
    }

    #[test]
    fn test_get_by_symbol_and_name() {
        let by_symbol = CATALOG.get("lb").unwrap();
        let by_name = CATALOG.get("Pound").unwrap();
        assert_eq!(by_symbol, by_name);
        assert_eq!(by_symbol.name(), "pound");
    }

    #[test]
    fn test_get_in_dimension() {
        assert!(CATALOG.get_in(Dimension::Length, "m").is_some());
        assert!(CATALOG.get_in(Dimension::Mass, "m").is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        let err = CATALOG.lookup("furlong").unwrap_err();
        assert_eq!(err, UnitError::UnknownUnit("furlong".to_string()));
    }

    #[test]
    fn test_register_rejects_duplicate_symbol() {
        let mut catalog = UnitCatalog::new();
        assert!(catalog.register(mass::pound()));

        let impostor = Unit::new(Dimension::Mass, "librae", "lb", Number::from_i64(1)).unwrap();
        assert!(!catalog.register(impostor));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("lb").unwrap().name(), "pound");
    }

    #[test]
    fn test_register_allows_symbol_in_other_dimension() {
        let mut catalog = UnitCatalog::new();
        assert!(catalog.register(length::metre()));
        let mass_m = Unit::new(Dimension::Mass, "mystery", "m", Number::from_i64(2)).unwrap();
        assert!(catalog.register(mass_m));
        assert_eq!(catalog.get_in(Dimension::Mass, "m").unwrap().name(), "mystery");
    }

    #[test]
    fn test_unit_def_ratio_matches_unit() {
        for def in mass::ALL.iter().chain(length::ALL).chain(volume::ALL) {
            assert_eq!(&def.ratio(), def.unit().ratio());
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = UnitCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.base_unit(Dimension::Mass).is_none());
    }
}
