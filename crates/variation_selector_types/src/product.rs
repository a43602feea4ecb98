//! The product kinds a catalog hands out.

use serde::{Deserialize, Serialize};

use crate::code::{AttributeCode, MarketplaceCode};
use crate::variant::Variant;

/// A product as delivered by the catalog.
///
/// Only the two configurable kinds have variants to choose from; simple and
/// bundle products never produce a variation selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Product {
    /// A product that is sold as-is
    Simple(SimpleProduct),
    /// A configurable product without a chosen variant
    Configurable(ConfigurableProduct),
    /// A configurable product where one variant is currently chosen
    ConfigurableWithActiveVariant(ConfigurableWithActiveVariant),
    /// A product sold as a fixed set of other products
    Bundle(BundleProduct),
}

/// A product without variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleProduct {
    pub marketplace_code: MarketplaceCode,
    #[serde(default)]
    pub name: String,
}

/// A bundle of other products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleProduct {
    pub marketplace_code: MarketplaceCode,
    #[serde(default)]
    pub name: String,
    /// The marketplace codes of the bundled products
    #[serde(default)]
    pub bundled_marketplace_codes: Vec<MarketplaceCode>,
}

/// A product that is only sold through one of its variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableProduct {
    pub marketplace_code: MarketplaceCode,
    #[serde(default)]
    pub name: String,
    /// The attributes a shopper chooses from, in display order
    pub variation_attribute_codes: Vec<AttributeCode>,
    /// All variants of the product
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl ConfigurableProduct {
    /// Find a variant by its marketplace code
    pub fn variant(&self, marketplace_code: &str) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|variant| variant.marketplace_code.as_str() == marketplace_code)
    }
}

/// A configurable product together with the variant that is currently chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableWithActiveVariant {
    #[serde(flatten)]
    pub configurable: ConfigurableProduct,
    /// The marketplace code of the chosen variant
    pub active_variant_marketplace_code: MarketplaceCode,
}

impl ConfigurableWithActiveVariant {
    /// The active variant, if it exists among the product's variants
    pub fn active_variant(&self) -> Option<&Variant> {
        self.configurable
            .variant(self.active_variant_marketplace_code.as_str())
    }
}

/// Everything the variant selection needs from a product.
#[derive(Debug, Clone, Copy)]
pub struct SelectionInput<'a> {
    pub variants: &'a [Variant],
    pub variation_attribute_codes: &'a [AttributeCode],
    pub active_variant: Option<&'a MarketplaceCode>,
}

impl<'a> SelectionInput<'a> {
    /// Selection input for a configurable product without an active variant
    pub fn new(variants: &'a [Variant], variation_attribute_codes: &'a [AttributeCode]) -> Self {
        Self {
            variants,
            variation_attribute_codes,
            active_variant: None,
        }
    }

    /// Set the active variant
    pub fn with_active_variant(mut self, active_variant: Option<&'a MarketplaceCode>) -> Self {
        self.active_variant = active_variant;
        self
    }
}

impl Product {
    /// The marketplace code of the product itself
    pub fn marketplace_code(&self) -> &MarketplaceCode {
        match self {
            Product::Simple(product) => &product.marketplace_code,
            Product::Configurable(product) => &product.marketplace_code,
            Product::ConfigurableWithActiveVariant(product) => {
                &product.configurable.marketplace_code
            }
            Product::Bundle(product) => &product.marketplace_code,
        }
    }

    /// The configurable part of the product, if it has one
    pub fn configurable(&self) -> Option<&ConfigurableProduct> {
        match self {
            Product::Configurable(product) => Some(product),
            Product::ConfigurableWithActiveVariant(product) => Some(&product.configurable),
            Product::Simple(_) | Product::Bundle(_) => None,
        }
    }

    /// The input of the variant selection, or `None` for products that have
    /// nothing to choose from
    pub fn selection_input(&self) -> Option<SelectionInput<'_>> {
        match self {
            Product::Configurable(product) => Some(SelectionInput::new(
                &product.variants,
                &product.variation_attribute_codes,
            )),
            Product::ConfigurableWithActiveVariant(product) => Some(
                SelectionInput::new(
                    &product.configurable.variants,
                    &product.configurable.variation_attribute_codes,
                )
                .with_active_variant(Some(&product.active_variant_marketplace_code)),
            ),
            Product::Simple(_) | Product::Bundle(_) => None,
        }
    }

    /// Replace the active variant. Passing `None` turns the product back into
    /// a bare configurable. Products without variants are returned unchanged.
    pub fn with_active_variant(self, active_variant: Option<MarketplaceCode>) -> Self {
        let configurable = match self {
            Product::Configurable(product) => product,
            Product::ConfigurableWithActiveVariant(product) => product.configurable,
            other => return other,
        };
        match active_variant {
            Some(active_variant_marketplace_code) => {
                Product::ConfigurableWithActiveVariant(ConfigurableWithActiveVariant {
                    configurable,
                    active_variant_marketplace_code,
                })
            }
            None => Product::Configurable(configurable),
        }
    }
}
