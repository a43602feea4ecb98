//! Attributes and their raw values.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::code::AttributeCode;

/// The canonical textual form of an attribute's raw value.
///
/// Product documents spell raw values as strings, numbers or booleans. They
/// are all stored as text so that `42` and `"42"` name the same value. Floats
/// keep a fractional part (`40.0` is `"40.0"`), but other spellings such as
/// `40.00` or `4e1` are not preserved. An empty raw value counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RawValue(String);

impl RawValue {
    /// Create a new raw value from its textual form
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the textual form of the value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the value is missing (empty)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue(s)
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_untagged::UntaggedEnumVisitor::new()
            .string(|s| Ok(RawValue::from(s)))
            .bool(|b| Ok(RawValue(b.to_string())))
            .i64(|i| Ok(RawValue(i.to_string())))
            .u64(|u| Ok(RawValue(u.to_string())))
            // `{:?}` keeps the fraction of whole floats, `40.0` stays "40.0"
            .f64(|f| Ok(RawValue(format!("{f:?}"))))
            .unit(|| Ok(RawValue::default()))
            .deserialize(deserializer)
    }
}

/// A single attribute of a variant, e.g. `color = red`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// The attribute code (`color`)
    pub code: AttributeCode,
    /// The display label of the value (`Red`)
    pub label: String,
    /// The display label of the attribute itself (`Color`)
    pub code_label: String,
    /// The raw value (`red`), used as the identity of the value
    pub raw_value: RawValue,
    /// The unit the value is measured in, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
}

impl Attribute {
    /// Create an attribute whose labels default to the code and the raw value
    pub fn new(code: impl Into<AttributeCode>, raw_value: impl Into<RawValue>) -> Self {
        let code = code.into();
        let raw_value = raw_value.into();
        Self {
            label: raw_value.to_string(),
            code_label: code.to_string(),
            code,
            raw_value,
            unit_code: None,
        }
    }

    /// Set the display label of the value
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the display label of the attribute
    pub fn with_code_label(mut self, code_label: impl Into<String>) -> Self {
        self.code_label = code_label.into();
        self
    }

    /// Set the unit code
    pub fn with_unit_code(mut self, unit_code: impl Into<String>) -> Self {
        self.unit_code = Some(unit_code.into());
        self
    }

    /// Returns true if the attribute carries a non-empty raw value
    pub fn has_value(&self) -> bool {
        !self.raw_value.is_empty()
    }
}
