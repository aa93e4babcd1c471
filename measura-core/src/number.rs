//! Exact rational numbers using dashu
//!
//! Uses dashu-ratio (RBig) so that unit ratios such as 45359237/100000000
//! and amounts derived from them are represented without rounding.
//! Decimal literals are read with dashu-float's DBig parser and converted
//! losslessly. Every arithmetic operation is exact; rounding only happens
//! when a value is rendered with a fixed number of decimal places.

use std::fmt;
use std::num::NonZeroU64;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use dashu_base::Approximation;
use dashu_float::DBig;
use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow: exponent {0} is out of range")]
    Overflow(i64),
}

/// Largest decimal exponent accepted in scientific notation. Plain
/// decimals may go further, up to one power of ten per input character.
const MAX_EXPONENT: usize = 65_536;

/// Exact rational number
///
/// Built on dashu-ratio's RBig. Values are always kept in lowest terms,
/// so equality, ordering and hashing are by exact value.
#[derive(Debug, Clone)]
pub struct Number {
    inner: RBig,
}

impl Number {
    // ========== Construction ==========

    /// Zero
    pub fn zero() -> Self {
        Self { inner: RBig::ZERO }
    }

    /// One
    pub fn one() -> Self {
        Self { inner: RBig::ONE }
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self { inner: RBig::from(IBig::from(n)) }
    }

    /// Create from a fraction `num / den`
    pub fn from_ratio(num: i64, den: u64) -> Result<Self, NumberError> {
        if den == 0 {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self { inner: RBig::from_parts(IBig::from(num), UBig::from(den)) })
    }

    /// Create from decimal parts: `mantissa * 10^exponent`
    ///
    /// `from_parts(45359237, -8)` is exactly 0.45359237.
    pub fn from_parts(mantissa: impl Into<IBig>, exponent: i32) -> Self {
        let mantissa: IBig = mantissa.into();
        let scale = pow10(exponent.unsigned_abs() as usize);
        let inner = if exponent >= 0 {
            RBig::from(mantissa * IBig::from(scale))
        } else {
            RBig::from_parts(mantissa, scale)
        };
        Self { inner }
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }

    /// Check if strictly negative
    pub fn is_negative(&self) -> bool {
        self.inner < RBig::ZERO
    }

    /// Check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.inner > RBig::ZERO
    }

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        *self.inner.denominator() == UBig::ONE
    }

    // ========== Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Division by a non-zero integer, which cannot fail
    pub fn div_nonzero(&self, divisor: NonZeroU64) -> Self {
        Self { inner: &self.inner / RBig::from(UBig::from(divisor.get())) }
    }

    /// Reciprocal `1 / self`
    pub fn recip(&self) -> Result<Self, NumberError> {
        Self::one().checked_div(self)
    }

    /// Negation
    pub fn neg(&self) -> Self {
        Self { inner: -self.inner.clone() }
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    // ========== Conversion ==========

    /// Try to convert to i64 (only for integers in range)
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        i64::try_from(self.inner.numerator().clone()).ok()
    }

    /// Nearest f64 (may lose precision)
    pub fn to_f64(&self) -> f64 {
        match self.inner.to_f64() {
            Approximation::Exact(v) => v,
            Approximation::Inexact(v, _) => v,
        }
    }

    // ========== Display ==========

    /// Render as decimal string with a fixed number of places
    ///
    /// Rounds half away from zero.
    pub fn as_decimal(&self, places: u32) -> String {
        let places = places as usize;
        let scaled = (&self.inner * RBig::from(pow10(places))).round();
        let decimal = DBig::from_parts(scaled, -(places as isize));
        format!("{:.*}", places, decimal)
    }

    /// Number of decimal places needed to write this value exactly,
    /// or None if its decimal expansion repeats
    pub fn exact_places(&self) -> Option<u32> {
        let two = UBig::from(2u8);
        let five = UBig::from(5u8);
        let mut rest = self.inner.denominator().clone();
        let (mut twos, mut fives) = (0u32, 0u32);

        while &rest % &two == UBig::ZERO {
            rest = &rest / &two;
            twos += 1;
        }
        while &rest % &five == UBig::ZERO {
            rest = &rest / &five;
            fives += 1;
        }

        (rest == UBig::ONE).then_some(twos.max(fives))
    }
}

fn pow10(exp: usize) -> UBig {
    UBig::from(10u8).pow(exp)
}

/// Parse one decimal literal: "42", "-0.5", ".25", "6479891e-11"
fn parse_decimal(s: &str) -> Result<Number, NumberError> {
    let err = || NumberError::ParseError(s.to_string());

    let decimal: DBig = s.parse().map_err(|_| err())?;
    let exponent = decimal.repr().exponent();
    if exponent.unsigned_abs() > MAX_EXPONENT.max(s.len()) {
        return Err(NumberError::Overflow(exponent as i64));
    }

    let inner = RBig::try_from(decimal).map_err(|_| err())?;
    Ok(Number { inner })
}

// ========== Trait Implementations ==========

impl FromStr for Number {
    type Err = NumberError;

    /// Supports: "123", "-3.14", "1.5e10", "45359237/100000000"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumberError::ParseError(s.to_string()));
        }

        if let Some((num, den)) = s.split_once('/') {
            let num = parse_decimal(num.trim())?;
            let den = parse_decimal(den.trim())?;
            return num.checked_div(&den);
        }

        parse_decimal(s)
    }
}

/// Exact rendering: plain decimal when it terminates, `num/den` otherwise
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exact_places() {
            Some(places) => f.write_str(&self.as_decimal(places)),
            None => write!(f, "{}/{}", self.inner.numerator(), self.inner.denominator()),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::from_i64(i64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Self::from_i64(i64::from(n))
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self { inner: RBig::from(IBig::from(n)) }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // RBig is always in lowest terms
        self.inner.numerator().hash(state);
        self.inner.denominator().hash(state);
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}
