//! The variant selection model handed to storefront templates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attribute::RawValue;
use crate::code::{AttributeCode, MarketplaceCode};

/// How an option relates to the currently active variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    /// The option is part of the active variant
    Active,
    /// Choosing the option leads to a variant that keeps all other current
    /// choices
    Match,
    /// The value exists, but not combined with the other current choices
    NoMatch,
}

impl fmt::Display for OptionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionState::Active => write!(f, "active"),
            OptionState::Match => write!(f, "match"),
            OptionState::NoMatch => write!(f, "no_match"),
        }
    }
}

/// A raw value together with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub raw_value: RawValue,
    pub label: String,
}

impl LabeledValue {
    pub fn new(raw_value: impl Into<RawValue>, label: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            label: label.into(),
        }
    }
}

/// The values of another attribute that stay reachable once an option is
/// chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherAttributeRestriction {
    pub code: AttributeCode,
    pub available_values: Vec<LabeledValue>,
}

impl OtherAttributeRestriction {
    /// The labels of the reachable values, in order
    pub fn labels(&self) -> Vec<&str> {
        self.available_values
            .iter()
            .map(|value| value.label.as_str())
            .collect()
    }
}

/// One value of one variation attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOption {
    pub label: String,
    pub raw_value: RawValue,
    pub state: OptionState,
    /// The variant a shopper lands on when choosing this option
    pub variant_marketplace_code: MarketplaceCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
    #[serde(default)]
    pub other_attributes_restrictions: Vec<OtherAttributeRestriction>,
}

impl SelectionOption {
    /// The restriction for another attribute, if any
    pub fn restriction(&self, code: &str) -> Option<&OtherAttributeRestriction> {
        self.other_attributes_restrictions
            .iter()
            .find(|restriction| restriction.code.as_str() == code)
    }
}

/// All options of one variation attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationSelection {
    pub code: AttributeCode,
    pub label: String,
    pub options: Vec<SelectionOption>,
}

impl VariationSelection {
    /// The option with the given raw value
    pub fn option(&self, raw_value: &str) -> Option<&SelectionOption> {
        self.options
            .iter()
            .find(|option| option.raw_value.as_str() == raw_value)
    }

    /// The option that belongs to the active variant, if any
    pub fn active_option(&self) -> Option<&SelectionOption> {
        self.options
            .iter()
            .find(|option| option.state == OptionState::Active)
    }
}

/// One attribute value of a [`VariantMatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingAttribute {
    pub code: AttributeCode,
    pub value: LabeledValue,
}

/// A variant together with the attribute values that fully describe it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantMatch {
    pub variant_marketplace_code: MarketplaceCode,
    pub attributes: Vec<MatchingAttribute>,
}

/// Both views of the variant selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionModel {
    pub selections: Vec<VariationSelection>,
    pub variant_matches: Vec<VariantMatch>,
}

impl SelectionModel {
    /// Returns true if there is nothing to choose from
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
