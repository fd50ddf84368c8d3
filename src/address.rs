use serde::{Deserialize, Serialize};
use std::fmt;

/// Country code given to every address captured by the wizard.
pub const DEFAULT_COUNTRY: &str = "GB";

/// Postal address of an actor on the LPA.
///
/// Equality is structural, so comparing a submitted address with the stored
/// one is enough to tell whether anything changed.
#[derive(Debug, Deserialize, Serialize, Clone, Default, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    /// First line, usually house number or name and street.
    pub line1: String,
    #[serde(default)]
    /// Optional second line.
    pub line2: String,
    #[serde(default)]
    /// Optional third line, often a dependent locality.
    pub line3: String,
    #[serde(default)]
    /// Post town.
    pub town_or_city: String,
    // UK postcodes are alphanumeric, keep them as text
    #[serde(default)]
    /// Postcode, upper-cased when entered by hand.
    pub postcode: String,
    #[serde(default)]
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

impl Address {
    /// True when none of the postal lines are set. Country alone does not
    /// make an address.
    pub fn is_empty(&self) -> bool {
        self.lines().next().is_none()
    }

    /// Encodes the address for the `select-address` form field.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes a `select-address` value. Returns `None` for blank or
    /// malformed input.
    pub fn decode(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }

        serde_json::from_str(value).ok()
    }

    fn lines(&self) -> impl Iterator<Item = &str> {
        [
            self.line1.as_str(),
            self.line2.as_str(),
            self.line3.as_str(),
            self.town_or_city.as_str(),
            self.postcode.as_str(),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Address {
        Address {
            line1: "a".into(),
            line2: "b".into(),
            line3: "c".into(),
            town_or_city: "d".into(),
            postcode: "E".into(),
            country: "GB".into(),
        }
    }

    #[test]
    fn encode_decode() {
        let address = full();
        assert_eq!(Some(address.clone()), Address::decode(&address.encode()));
    }

    #[test]
    fn decode_blank() {
        assert_eq!(None, Address::decode(""));
    }

    #[test]
    fn decode_garbage() {
        assert_eq!(None, Address::decode("not an address"));
    }

    #[test]
    fn display_skips_blank_lines() {
        let address = Address {
            line1: "1 Road Way".into(),
            town_or_city: "Townville".into(),
            postcode: "NG1 1AA".into(),
            country: "GB".into(),
            ..Default::default()
        };
        assert_eq!("1 Road Way, Townville, NG1 1AA", address.to_string());
    }

    #[test]
    fn empty() {
        assert!(Address::default().is_empty());
        assert!(Address {
            country: "GB".into(),
            ..Default::default()
        }
        .is_empty());
        assert!(!full().is_empty());
    }
}
