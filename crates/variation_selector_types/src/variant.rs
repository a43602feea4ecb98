//! Variants of a configurable product.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, RawValue};
use crate::code::{AttributeCode, MarketplaceCode};

/// A concrete, purchasable instantiation of a configurable product.
///
/// Attributes keep the order in which they appear in the product document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VariantDocument")]
pub struct Variant {
    /// The identifier of the variant, unique within its product
    pub marketplace_code: MarketplaceCode,
    /// The attributes of the variant, keyed by attribute code
    pub attributes: IndexMap<AttributeCode, Attribute>,
}

impl Variant {
    /// Create a variant without attributes
    pub fn new(marketplace_code: impl Into<MarketplaceCode>) -> Self {
        Self {
            marketplace_code: marketplace_code.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Add (or replace) an attribute
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute.code.clone(), attribute);
        self
    }

    /// Get an attribute by code
    pub fn attribute(&self, code: &str) -> Option<&Attribute> {
        self.attributes.get(code)
    }

    /// Get the raw value of an attribute, if the attribute is present
    pub fn value(&self, code: &str) -> Option<&RawValue> {
        self.attribute(code).map(|attribute| &attribute.raw_value)
    }
}

/// The on-disk form of an attribute inside a variant. Everything but the raw
/// value may be omitted; an inline `code` must equal the map key.
#[derive(Debug, Deserialize)]
struct AttributeDocument {
    #[serde(default)]
    code: Option<AttributeCode>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    code_label: Option<String>,
    #[serde(default)]
    raw_value: RawValue,
    #[serde(default)]
    unit_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VariantDocument {
    marketplace_code: MarketplaceCode,
    #[serde(default)]
    attributes: IndexMap<AttributeCode, AttributeDocument>,
}

impl TryFrom<VariantDocument> for Variant {
    type Error = String;

    fn try_from(document: VariantDocument) -> Result<Self, Self::Error> {
        let attributes = document
            .attributes
            .into_iter()
            .map(|(key, attribute)| {
                if let Some(code) = &attribute.code
                    && code != &key
                {
                    return Err(format!(
                        "attribute '{key}' of variant {} declares code '{code}'",
                        document.marketplace_code
                    ));
                }

                let mut resolved = Attribute::new(key.clone(), attribute.raw_value);
                if let Some(label) = attribute.label {
                    resolved.label = label;
                }
                if let Some(code_label) = attribute.code_label {
                    resolved.code_label = code_label;
                }
                resolved.unit_code = attribute.unit_code;
                Ok((key, resolved))
            })
            .collect::<Result<IndexMap<_, _>, String>>()?;

        Ok(Variant {
            marketplace_code: document.marketplace_code,
            attributes,
        })
    }
}
