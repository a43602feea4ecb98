//! Reading single attributes off a variant

use variation_selector_types::{Attribute, LabeledValue, RawValue, Variant};

/// The attribute `code` of `variant`, if the variant carries a value for it
pub fn extract<'a>(variant: &'a Variant, code: &str) -> Option<&'a Attribute> {
    variant.attribute(code).filter(|attribute| attribute.has_value())
}

/// Returns true if the value of attribute `code` of `variant` is `value`
pub fn has_value(variant: &Variant, code: &str, value: &RawValue) -> bool {
    extract(variant, code).is_some_and(|attribute| &attribute.raw_value == value)
}

/// The raw value and display label of an attribute
pub fn labeled_value(attribute: &Attribute) -> LabeledValue {
    LabeledValue::new(attribute.raw_value.clone(), attribute.label.clone())
}
