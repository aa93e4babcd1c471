//! Quantity type - an amount with an associated unit

use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};
use measura_core::Number;
use crate::{Unit, UnitError};
use crate::catalog::CATALOG;

/// An amount of some unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    amount: Number,
    unit: Unit,
}

impl Quantity {
    /// Create a new quantity
    pub fn new(amount: impl Into<Number>, unit: Unit) -> Self {
        Quantity { amount: amount.into(), unit }
    }

    pub fn amount(&self) -> &Number {
        &self.amount
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Check if two quantities have the same dimension
    pub fn is_convertible(&self, other: &Quantity) -> bool {
        self.unit.is_convertible(&other.unit)
    }

    /// Convert to another unit
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, UnitError> {
        let amount = self.unit.convert_to(&self.amount, target)?;
        Ok(Quantity::new(amount, target.clone()))
    }

    /// The amount expressed in the base unit of this dimension
    pub fn base_amount(&self) -> Number {
        self.unit.convert_to_base(&self.amount)
    }

    /// Express this quantity in the base unit of its dimension
    pub fn to_base(&self) -> Quantity {
        let dimension = self.unit.dimension();
        let base = CATALOG
            .base_unit(dimension)
            .cloned()
            .unwrap_or_else(|| Unit::base(dimension));
        Quantity::new(self.base_amount(), base)
    }

    /// Add two quantities; the result is in this quantity's unit
    pub fn add(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let converted = other.convert_to(&self.unit)?;
        Ok(Quantity::new(self.amount.add(&converted.amount), self.unit.clone()))
    }

    /// Subtract two quantities; the result is in this quantity's unit
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let converted = other.convert_to(&self.unit)?;
        Ok(Quantity::new(self.amount.sub(&converted.amount), self.unit.clone()))
    }

    /// Multiply the amount by a scalar
    pub fn scale(&self, factor: &Number) -> Quantity {
        Quantity::new(self.amount.mul(factor), self.unit.clone())
    }

    /// Divide the amount by a scalar
    pub fn checked_div(&self, divisor: &Number) -> Result<Quantity, UnitError> {
        let amount = self.amount.checked_div(divisor)?;
        Ok(Quantity::new(amount, self.unit.clone()))
    }

    /// Compare by base amount; fails across dimensions
    pub fn compare(&self, other: &Quantity) -> Result<Ordering, UnitError> {
        let converted = other.convert_to(&self.unit)?;
        Ok(self.amount.cmp(&converted.amount))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        // Compare base amounts for equality
        if !self.is_convertible(other) {
            return false;
        }
        self.base_amount() == other.base_amount()
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_convertible(other) {
            return None;
        }
        Some(self.base_amount().cmp(&other.base_amount()))
    }
}
