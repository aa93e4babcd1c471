//! Unit representation with exact conversion ratios

use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroU64;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::debug;
use measura_core::{Number, NumberError};
use crate::Dimension;

/// A unit of measure within one dimension
///
/// `ratio` is the number of base-unit amounts in one amount of this unit
/// (a pound has ratio 0.45359237 in the kilogram-based mass dimension).
/// Units are immutable; every conversion routes through the base unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "UnitRepr", into = "UnitRepr")]
pub struct Unit {
    dimension: Dimension,
    name: String,
    symbol: String,
    ratio: Number,
    /// `1 / ratio`, fixed at construction so conversion from base cannot fail
    inverse: Number,
}

impl Unit {
    /// Create a unit; fails with `InvalidRatio` unless `ratio > 0`
    pub fn new(dimension: Dimension, name: &str, symbol: &str, ratio: Number) -> Result<Self, UnitError> {
        if !ratio.is_positive() {
            return Err(UnitError::InvalidRatio {
                symbol: symbol.to_string(),
                ratio,
            });
        }
        let inverse = ratio.recip()?;

        Ok(Unit {
            dimension,
            name: name.to_string(),
            symbol: symbol.to_string(),
            ratio,
            inverse,
        })
    }

    /// Build a unit from a decimal literal `mantissa * 10^exponent`
    pub(crate) fn from_literal(
        dimension: Dimension,
        name: &str,
        symbol: &str,
        mantissa: NonZeroU64,
        exponent: i32,
    ) -> Self {
        let ratio = Number::from_parts(mantissa.get(), exponent);
        let inverse = Number::from_parts(1, -exponent).div_nonzero(mantissa);

        Unit {
            dimension,
            name: name.to_string(),
            symbol: symbol.to_string(),
            ratio,
            inverse,
        }
    }

    /// The base unit (ratio 1) of a dimension
    pub fn base(dimension: Dimension) -> Self {
        Unit::from_literal(
            dimension,
            dimension.base_name(),
            dimension.base_symbol(),
            NonZeroU64::MIN,
            0,
        )
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn ratio(&self) -> &Number {
        &self.ratio
    }

    /// Check if this is the base unit of its dimension (ratio 1)
    pub fn is_base(&self) -> bool {
        self.ratio == Number::one()
    }

    // ========== Conversion ==========

    /// Convert an amount of this unit into the base unit: `amount * ratio`
    pub fn convert_to_base(&self, amount: &Number) -> Number {
        amount.mul(&self.ratio)
    }

    /// Convert an amount of the base unit into this unit: `amount / ratio`
    pub fn convert_from_base(&self, amount: &Number) -> Number {
        amount.mul(&self.inverse)
    }

    /// Convert `amount` expressed in `from` into `to`, via the base unit
    pub fn convert(amount: &Number, from: &Unit, to: &Unit) -> Result<Number, UnitError> {
        if !from.is_convertible(to) {
            return Err(UnitError::IncompatibleDimension {
                from: from.symbol.clone(),
                to: to.symbol.clone(),
                from_dim: from.dimension,
                to_dim: to.dimension,
            });
        }

        let base = from.convert_to_base(amount);
        let converted = to.convert_from_base(&base);
        debug!(%amount, from = %from, to = %to, %converted, "converted");
        Ok(converted)
    }

    /// Convert `amount` of this unit into `to`
    pub fn convert_to(&self, amount: &Number, to: &Unit) -> Result<Number, UnitError> {
        Unit::convert(amount, self, to)
    }

    /// Convert `amount` of `from` into this unit
    pub fn convert_from(&self, amount: &Number, from: &Unit) -> Result<Number, UnitError> {
        Unit::convert(amount, from, self)
    }

    // ========== Comparison ==========

    /// Check if two units share a dimension and can be converted
    pub fn is_convertible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Same dimension and same symbol; the name is not compared
    pub fn equals(&self, other: &Unit) -> bool {
        self.is_convertible(other) && self.symbol == other.symbol
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must hash exactly the fields `equals` compares
        self.dimension.hash(state);
        self.symbol.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// Serialized form; deserialization re-validates through `Unit::new`
#[derive(Serialize, Deserialize)]
struct UnitRepr {
    dimension: Dimension,
    name: String,
    symbol: String,
    ratio: Number,
}

impl TryFrom<UnitRepr> for Unit {
    type Error = UnitError;

    fn try_from(repr: UnitRepr) -> Result<Self, Self::Error> {
        Unit::new(repr.dimension, &repr.name, &repr.symbol, repr.ratio)
    }
}

impl From<Unit> for UnitRepr {
    fn from(unit: Unit) -> Self {
        UnitRepr {
            dimension: unit.dimension,
            name: unit.name,
            symbol: unit.symbol,
            ratio: unit.ratio,
        }
    }
}

/// Errors that can occur while building or converting units
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Ratio was zero or negative
    #[error("invalid ratio {ratio} for unit '{symbol}': ratio must be greater than zero")]
    InvalidRatio { symbol: String, ratio: Number },

    /// Units belong to different dimensions
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimension {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    /// No unit with this symbol or name
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Numeric error during conversion
    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}
