//! Dimension tags
//!
//! Every unit carries an explicit dimension. Two units can only be
//! converted into each other when their tags are equal.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Mass, base unit kilogram
    Mass,
    /// Length, base unit metre
    Length,
    /// Volume, base unit litre
    Volume,
}

impl Dimension {
    /// Every known dimension
    pub const ALL: [Dimension; 3] = [Dimension::Mass, Dimension::Length, Dimension::Volume];

    /// Lowercase name (e.g. "mass")
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Mass => "mass",
            Dimension::Length => "length",
            Dimension::Volume => "volume",
        }
    }

    /// Symbol of the unit whose ratio is 1 in this dimension
    pub fn base_symbol(&self) -> &'static str {
        match self {
            Dimension::Mass => "kg",
            Dimension::Length => "m",
            Dimension::Volume => "l",
        }
    }

    /// Name of the unit whose ratio is 1 in this dimension
    pub fn base_name(&self) -> &'static str {
        match self {
            Dimension::Mass => "kilogram",
            Dimension::Length => "metre",
            Dimension::Volume => "litre",
        }
    }

    /// Look up a dimension by name, ignoring case
    pub fn from_name(name: &str) -> Option<Dimension> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::Mass), "mass");
        assert_eq!(format!("{}", Dimension::Volume), "volume");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Dimension::from_name("Length"), Some(Dimension::Length));
        assert_eq!(Dimension::from_name(" mass "), Some(Dimension::Mass));
        assert_eq!(Dimension::from_name("time"), None);
    }

    #[test]
    fn test_tags_are_distinct() {
        assert_ne!(Dimension::Mass, Dimension::Length);
        assert_ne!(Dimension::Length, Dimension::Volume);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Dimension::Length).unwrap();
        assert_eq!(json, "\"length\"");
        let back: Dimension = serde_json::from_str("\"volume\"").unwrap();
        assert_eq!(back, Dimension::Volume);
    }
}
