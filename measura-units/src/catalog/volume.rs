//! Volume units, base unit litre
//!
//! Imperial measures derive from the gallon of exactly 4.54609 litres.

use measura_core::Number;
use crate::{Dimension, Quantity, Unit};
use super::UnitDef;

unit_table! {
    /// Wrap an amount into a volume quantity: `2i64.pint()`
    trait VolumeExt for Dimension::Volume;

    CUBIC_METRE, cubic_metre => ("cubic metre", "m³", 1000, 0);
    LITRE, litre => ("litre", "l", 1, 0);
    DECILITRE, decilitre => ("decilitre", "dl", 1, -1);
    CENTILITRE, centilitre => ("centilitre", "cl", 1, -2);
    MILLILITRE, millilitre => ("millilitre", "ml", 1, -3);

    GALLON, gallon => ("gallon", "gal", 454609, -5);
    QUART, quart => ("quart", "qt", 11365225, -7);
    PINT, pint => ("pint", "pt", 56826125, -8);
    GILL, gill => ("gill", "gi", 1420653125, -10);
    FLUID_OUNCE, fluid_ounce => ("fluid ounce", "fl oz", 284130625, -10);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imperial_chain() {
        let one = Number::one();
        assert_eq!(gallon().convert_to(&one, &quart()).unwrap(), Number::from_i64(4));
        assert_eq!(quart().convert_to(&one, &pint()).unwrap(), Number::from_i64(2));
        assert_eq!(pint().convert_to(&one, &gill()).unwrap(), Number::from_i64(4));
        assert_eq!(gill().convert_to(&one, &fluid_ounce()).unwrap(), Number::from_i64(5));
    }

    #[test]
    fn test_metric_chain() {
        let one = Number::one();
        assert_eq!(cubic_metre().convert_to(&one, &litre()).unwrap(), Number::from_i64(1000));
        assert_eq!(litre().convert_to(&one, &millilitre()).unwrap(), Number::from_i64(1000));
        assert_eq!(decilitre().convert_to(&one, &centilitre()).unwrap(), Number::from_i64(10));
    }

    #[test]
    fn test_pint_in_millilitres() {
        let ml = pint().convert_to(&Number::one(), &millilitre()).unwrap();
        assert_eq!(ml.to_string(), "568.26125");
    }

    #[test]
    fn test_ext_trait() {
        let q = 2i64.pint();
        let gal = q.convert_to(&gallon()).unwrap();
        assert_eq!(gal.amount().to_string(), "0.25");
    }
}
