//! Mass units, base unit kilogram
//!
//! Imperial ratios follow the international pound of exactly
//! 0.45359237 kg; every other imperial unit is a whole multiple
//! or fraction of it.

use measura_core::Number;
use crate::{Dimension, Quantity, Unit};
use super::UnitDef;

unit_table! {
    /// Wrap an amount into a mass quantity: `14i64.pound()`
    trait MassExt for Dimension::Mass;

    // Metric
    TONNE, tonne => ("tonne", "t", 1000, 0);
    KILOGRAM, kilogram => ("kilogram", "kg", 1, 0);
    GRAM, gram => ("gram", "g", 1, -3);
    MILLIGRAM, milligram => ("milligram", "mg", 1, -6);
    MICROGRAM, microgram => ("microgram", "µg", 1, -9);

    // Imperial
    TON, ton => ("ton", "ton", 10160469088, -7);
    HUNDREDWEIGHT, hundredweight => ("hundredweight", "cwt", 5080234544, -8);
    QUARTER, quarter => ("quarter", "qtr", 1270058636, -8);
    STONE, stone => ("stone", "st", 635029318, -8);
    POUND, pound => ("pound", "lb", 45359237, -8);
    OUNCE, ounce => ("ounce", "oz", 28349523125, -12);
    DRACHM, drachm => ("drachm", "dr", 17718451953125, -16);
    GRAIN, grain => ("grain", "gr", 6479891, -11);
}
