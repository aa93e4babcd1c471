//! Measura Units - Units of measure with exact conversion
//!
//! Every unit knows one exact ratio: how many base units make up one of
//! it. Converting between two units of the same dimension goes through
//! the base unit, so no table of pairwise factors is needed.
//!
//! Dimensions:
//! - Mass (kg, g, t, lb, oz, st, cwt, etc.)
//! - Length (m, km, cm, mi, yd, ft, in, etc.)
//! - Volume (l, ml, m³, gal, pt, fl oz, etc.)
//!
//! ```
//! use measura_core::Number;
//! use measura_units::{Unit, CATALOG};
//!
//! let ton = CATALOG.lookup("ton").unwrap();
//! let cwt = CATALOG.lookup("cwt").unwrap();
//! let converted = Unit::convert(&Number::one(), ton, cwt).unwrap();
//! assert_eq!(converted, Number::from_i64(20));
//! ```

mod dimension;
mod unit;
mod quantity;
pub mod catalog;

pub use dimension::Dimension;
pub use unit::{Unit, UnitError};
pub use quantity::Quantity;
pub use catalog::{UnitCatalog, UnitDef, CATALOG};
pub use catalog::mass::MassExt;
pub use catalog::length::LengthExt;
pub use catalog::volume::VolumeExt;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Dimension, Quantity, Unit, UnitError, CATALOG};
    pub use crate::{LengthExt, MassExt, VolumeExt};
    pub use measura_core::Number;
}
