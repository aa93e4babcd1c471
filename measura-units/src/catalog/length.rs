//! Length units, base unit metre

use measura_core::Number;
use crate::{Dimension, Quantity, Unit};
use super::UnitDef;

unit_table! {
    /// Wrap an amount into a length quantity: `3i64.foot()`
    trait LengthExt for Dimension::Length;

    KILOMETRE, kilometre => ("kilometre", "km", 1000, 0);
    METRE, metre => ("metre", "m", 1, 0);
    CENTIMETRE, centimetre => ("centimetre", "cm", 1, -2);
    MILLIMETRE, millimetre => ("millimetre", "mm", 1, -3);

    MILE, mile => ("mile", "mi", 1609344, -3);
    YARD, yard => ("yard", "yd", 9144, -4);
    FOOT, foot => ("foot", "ft", 3048, -4);
    INCH, inch => ("inch", "in", 254, -4);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitError;
    use crate::catalog::volume;

    #[test]
    fn test_imperial_chain() {
        let one = Number::one();
        assert_eq!(mile().convert_to(&one, &yard()).unwrap(), Number::from_i64(1760));
        assert_eq!(yard().convert_to(&one, &foot()).unwrap(), Number::from_i64(3));
        assert_eq!(foot().convert_to(&one, &inch()).unwrap(), Number::from_i64(12));
    }

    #[test]
    fn test_inch_in_centimetres() {
        let cm = inch().convert_to(&Number::one(), &centimetre()).unwrap();
        assert_eq!(cm.to_string(), "2.54");
    }

    #[test]
    fn test_kilometre_to_mile_repeats() {
        // 1 km = 1000 / 1609.344 mi, which has no terminating decimal form
        let mi = kilometre().convert_to(&Number::one(), &mile()).unwrap();
        assert_eq!(mi.exact_places(), None);
        assert_eq!(mi.as_decimal(6), "0.621371");
        assert_eq!(kilometre().convert_from(&mi, &mile()).unwrap(), Number::one());
    }

    #[test]
    fn test_length_to_volume_fails() {
        let err = metre().convert_to(&Number::one(), &volume::litre()).unwrap_err();
        assert!(matches!(err, UnitError::IncompatibleDimension { .. }));
    }

    #[test]
    fn test_ext_trait() {
        let q = 3i64.foot();
        assert_eq!(q.to_base().amount().to_string(), "0.9144");
    }
}
