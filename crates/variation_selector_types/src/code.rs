//! Newtypes for the identifiers used throughout a product document.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The code of an attribute, e.g. `color` or `size`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeCode(String);

impl AttributeCode {
    /// Create a new attribute code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AttributeCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for AttributeCode {
    fn from(s: String) -> Self {
        AttributeCode(s)
    }
}

impl From<&str> for AttributeCode {
    fn from(s: &str) -> Self {
        AttributeCode(s.to_string())
    }
}

/// The marketplace code of a product or variant. Unique within a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketplaceCode(String);

impl MarketplaceCode {
    /// Create a new marketplace code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketplaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for MarketplaceCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for MarketplaceCode {
    fn from(s: String) -> Self {
        MarketplaceCode(s)
    }
}

impl From<&str> for MarketplaceCode {
    fn from(s: &str) -> Self {
        MarketplaceCode(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(AttributeCode::from("color"), 1);
        assert_eq!(map.get("color"), Some(&1));
        assert_eq!(map.get("size"), None);
    }

    #[test]
    fn test_transparent_serde() {
        let code: MarketplaceCode = serde_json::from_str(r#""red-S""#).unwrap();
        assert_eq!(code.as_str(), "red-S");
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""red-S""#);
    }
}
