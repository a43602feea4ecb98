//! Which values of other attributes stay reachable once an option is chosen

use indexmap::IndexMap;
use variation_selector_types::{
    AttributeCode, LabeledValue, OtherAttributeRestriction, RawValue, Variant,
};

use crate::extract::{extract, has_value, labeled_value};

/// Collect, for every variation attribute other than `code`, the values found
/// on variants that have `code = value`.
///
/// Restrictions are returned in the order of `codes`; their values are
/// deduplicated by raw value and kept in discovery order. This only looks at
/// which variants exist, never at the active variant.
pub fn restrictions_for(
    code: &str,
    value: &RawValue,
    variants: &[&Variant],
    codes: &[AttributeCode],
) -> Vec<OtherAttributeRestriction> {
    let other_codes: Vec<&AttributeCode> = codes.iter().filter(|c| c.as_str() != code).collect();

    let mut reachable: IndexMap<&AttributeCode, IndexMap<&RawValue, LabeledValue>> = other_codes
        .iter()
        .map(|c| (*c, IndexMap::new()))
        .collect();

    for variant in variants.iter().filter(|variant| has_value(variant, code, value)) {
        for other in &other_codes {
            let Some(attribute) = extract(variant, other.as_str()) else {
                continue;
            };
            if let Some(values) = reachable.get_mut(*other) {
                values
                    .entry(&attribute.raw_value)
                    .or_insert_with(|| labeled_value(attribute));
            }
        }
    }

    reachable
        .into_iter()
        .map(|(code, values)| OtherAttributeRestriction {
            code: code.clone(),
            available_values: values.into_values().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use variation_selector_types::Attribute;

    #[test]
    fn test_restrictions_for() {
        let variants: Vec<Variant> = [
            ("red-S", "red", "S", "slim"),
            ("red-M", "red", "M", "slim"),
            ("red-M-regular", "red", "M", "regular"),
            ("blue-S", "blue", "S", "regular"),
        ]
        .into_iter()
        .map(|(code, color, size, fit)| {
            Variant::new(code)
                .with_attribute(Attribute::new("color", color))
                .with_attribute(Attribute::new("size", size))
                .with_attribute(Attribute::new("fit", fit))
        })
        .collect();
        let refs: Vec<&Variant> = variants.iter().collect();
        let codes: Vec<AttributeCode> = vec!["color".into(), "size".into(), "fit".into()];

        let restrictions = restrictions_for("color", &"red".into(), &refs, &codes);
        assert_eq!(restrictions.len(), 2);
        assert_eq!(restrictions[0].code.as_str(), "size");
        assert_eq!(restrictions[0].labels(), vec!["S", "M"]);
        assert_eq!(restrictions[1].code.as_str(), "fit");
        assert_eq!(restrictions[1].labels(), vec!["slim", "regular"]);

        let restrictions = restrictions_for("size", &"S".into(), &refs, &codes);
        assert_eq!(restrictions[0].code.as_str(), "color");
        assert_eq!(restrictions[0].labels(), vec!["red", "blue"]);
    }
}
