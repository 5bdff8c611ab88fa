//! Type-safe SKU type classification.
//!
//! The backend represents the medicine type as a lowercase string
//! (`allopathy`, `otc`, `fmcg`). This enum provides compile-time safety
//! for the known values while the record types stay tolerant of anything
//! else the server might send.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Medicine SKU type as classified by the catalog backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkuType {
    /// Conventional (allopathic) medicine.
    Allopathy,
    /// Over-the-counter medicine.
    Otc,
    /// Fast-moving consumer goods sold alongside medicines.
    Fmcg,
}

/// Error returned when a string does not name a known SKU type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown SKU type: {0:?}")]
pub struct ParseSkuTypeError(pub String);

impl SkuType {
    /// All SKU types, in the order the add form offers them.
    pub const ALL: [SkuType; 3] = [SkuType::Allopathy, SkuType::Otc, SkuType::Fmcg];

    /// Returns the wire string used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkuType::Allopathy => "allopathy",
            SkuType::Otc => "otc",
            SkuType::Fmcg => "fmcg",
        }
    }
}

impl fmt::Display for SkuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkuType {
    type Err = ParseSkuTypeError;

    /// Parse a SKU type string (case-insensitive, surrounding whitespace
    /// ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allopathy" => Ok(SkuType::Allopathy),
            "otc" => Ok(SkuType::Otc),
            "fmcg" => Ok(SkuType::Fmcg),
            _ => Err(ParseSkuTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values_case_insensitively() {
        assert_eq!("allopathy".parse::<SkuType>().unwrap(), SkuType::Allopathy);
        assert_eq!("OTC".parse::<SkuType>().unwrap(), SkuType::Otc);
        assert_eq!(" Fmcg ".parse::<SkuType>().unwrap(), SkuType::Fmcg);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("ayurvedic".parse::<SkuType>().is_err());
        assert!("".parse::<SkuType>().is_err());
    }

    #[test]
    fn display_matches_wire_format() {
        for sku in SkuType::ALL {
            assert_eq!(sku.to_string(), sku.as_str());
            assert_eq!(sku.as_str().parse::<SkuType>().unwrap(), sku);
        }
    }

    #[test]
    fn serde_uses_lowercase_strings() {
        assert_eq!(
            serde_json::to_string(&SkuType::Allopathy).unwrap(),
            "\"allopathy\""
        );
        let parsed: SkuType = serde_json::from_str("\"fmcg\"").unwrap();
        assert_eq!(parsed, SkuType::Fmcg);
    }
}
