//! Collecting the distinct values of each variation attribute

use indexmap::IndexMap;
use variation_selector_types::{AttributeCode, RawValue, Variant};

use crate::extract::extract;

/// A distinct value of one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedValue {
    pub raw_value: RawValue,
    pub label: String,
    pub unit_code: Option<String>,
}

/// The distinct values of one variation attribute, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeGroup {
    pub code: AttributeCode,
    /// The display label of the attribute (e.g. `Color`)
    pub label: String,
    /// Values keyed by raw value. Only the first occurrence of a raw value is
    /// kept, so labels of later variants never show up here.
    pub values: IndexMap<RawValue, GroupedValue>,
}

/// Group the values of `variants` per variation attribute.
///
/// Attributes a variant does not carry are skipped; callers pass variants that
/// went through [`crate::filter::select_variants`].
pub fn group_attributes(
    variants: &[&Variant],
    codes: &[AttributeCode],
) -> IndexMap<AttributeCode, AttributeGroup> {
    let mut groups: IndexMap<AttributeCode, AttributeGroup> = IndexMap::new();

    for variant in variants {
        for code in codes {
            let Some(attribute) = extract(variant, code.as_str()) else {
                continue;
            };

            let group = groups
                .entry(code.clone())
                .or_insert_with(|| AttributeGroup {
                    code: code.clone(),
                    label: attribute.code_label.clone(),
                    values: IndexMap::new(),
                });

            group
                .values
                .entry(attribute.raw_value.clone())
                .or_insert_with(|| GroupedValue {
                    raw_value: attribute.raw_value.clone(),
                    label: attribute.label.clone(),
                    unit_code: attribute.unit_code.clone(),
                });
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use variation_selector_types::Attribute;

    #[test]
    fn test_group_distinct_values() {
        let variants = [
            Variant::new("red-S")
                .with_attribute(Attribute::new("color", "red").with_label("Red").with_code_label("Color"))
                .with_attribute(Attribute::new("size", "S")),
            Variant::new("red-M")
                .with_attribute(Attribute::new("color", "red").with_label("Rot").with_code_label("Farbe"))
                .with_attribute(Attribute::new("size", "M")),
            Variant::new("blue-S")
                .with_attribute(Attribute::new("color", "blue").with_label("Blue"))
                .with_attribute(Attribute::new("size", "S")),
        ];
        let refs: Vec<&Variant> = variants.iter().collect();
        let codes: Vec<AttributeCode> = vec!["color".into(), "size".into()];

        let groups = group_attributes(&refs, &codes);
        assert_eq!(groups.len(), 2);

        let color = &groups["color"];
        assert_eq!(color.label, "Color");
        let labels: Vec<&str> = color.values.values().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["Red", "Blue"]);

        let sizes: Vec<&str> = groups["size"].values.keys().map(RawValue::as_str).collect();
        assert_eq!(sizes, vec!["S", "M"]);
    }
}
