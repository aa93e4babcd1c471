//! Measura Core - Fundamental types
//!
//! This crate provides the exact arithmetic shared by the Measura crates:
//! - `Number`: exact rational numbers for amounts and unit ratios
//! - `NumberError`: parse and arithmetic failures

mod number;

pub use number::{Number, NumberError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, NumberError};
}
