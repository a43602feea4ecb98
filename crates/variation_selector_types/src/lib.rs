//! # variation_selector_types
//!
//! The data model of the variation selector: products as a catalog delivers
//! them, their variants and attributes, and the selection model that is
//! computed from them.
//!
//! Product documents are plain YAML (or JSON):
//!
//! ```yaml
//! type: configurable
//! marketplace_code: shirt
//! variation_attribute_codes: [color, size]
//! variants:
//!   - marketplace_code: red-S
//!     attributes:
//!       color: { raw_value: red, label: Red, code_label: Color }
//!       size: { raw_value: S, code_label: Size }
//! ```

pub mod attribute;
pub mod code;
pub mod product;
pub mod selection;
pub mod variant;

pub use attribute::{Attribute, RawValue};
pub use code::{AttributeCode, MarketplaceCode};
pub use product::{
    BundleProduct, ConfigurableProduct, ConfigurableWithActiveVariant, Product, SelectionInput,
    SimpleProduct,
};
pub use selection::{
    LabeledValue, MatchingAttribute, OptionState, OtherAttributeRestriction, SelectionModel,
    SelectionOption, VariantMatch, VariationSelection,
};
pub use variant::Variant;
