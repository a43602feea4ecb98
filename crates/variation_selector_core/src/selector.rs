//! Assembling the variant selection model

use itertools::Itertools;
use variation_selector_types::{
    AttributeCode, MatchingAttribute, Product, SelectionInput, SelectionModel, SelectionOption,
    Variant, VariantMatch, VariationSelection,
};

use crate::extract::{extract, labeled_value};
use crate::filter::select_variants;
use crate::group::group_attributes;
use crate::matcher::resolve_match;
use crate::restriction::restrictions_for;
use crate::sort_order::VariationSortOrder;
use crate::sorting::VariationSorter;

/// Computes variation selections for configurable products.
///
/// The selector holds nothing but the sort order; every call works on fresh
/// data, so one selector can serve any number of products and threads.
#[derive(Debug, Clone, Default)]
pub struct VariantSelector {
    sort_order: VariationSortOrder,
}

/// The variants and choices that survived filtering, in sorted order.
struct Prepared<'a> {
    codes: Vec<AttributeCode>,
    variants: Vec<&'a Variant>,
    active: Option<&'a Variant>,
}

impl VariantSelector {
    /// Create a selector that orders values by `sort_order`
    pub fn new(sort_order: VariationSortOrder) -> Self {
        Self { sort_order }
    }

    fn sorter(&self) -> VariationSorter<'_> {
        VariationSorter::new(&self.sort_order)
    }

    /// The variation selections of a product. Products without variants to
    /// choose from yield an empty list.
    pub fn select(&self, product: &Product) -> Vec<VariationSelection> {
        match product.selection_input() {
            Some(input) => self.map(input),
            None => {
                tracing::debug!(
                    "Product {} is not configurable, nothing to select",
                    product.marketplace_code()
                );
                Vec::new()
            }
        }
    }

    /// One [`VariationSelection`] per variation attribute, in the order of
    /// the variation attribute codes.
    pub fn map(&self, input: SelectionInput<'_>) -> Vec<VariationSelection> {
        let Some(prepared) = self.prepare(input) else {
            return Vec::new();
        };
        let sorter = self.sorter();
        let groups = group_attributes(&prepared.variants, &prepared.codes);

        let selections: Vec<VariationSelection> = prepared
            .codes
            .iter()
            .filter_map(|code| groups.get(code))
            .map(|group| {
                let code = group.code.as_str();
                let mut options: Vec<SelectionOption> = group
                    .values
                    .values()
                    .filter_map(|value| {
                        let Some(resolved) = resolve_match(
                            code,
                            &value.raw_value,
                            &prepared.variants,
                            &prepared.codes,
                            prepared.active,
                        ) else {
                            tracing::trace!("No variant carries {}={}, dropping it", code, value.raw_value);
                            return None;
                        };

                        let mut restrictions = restrictions_for(
                            code,
                            &value.raw_value,
                            &prepared.variants,
                            &prepared.codes,
                        );
                        sorter.sort_restrictions(&mut restrictions);

                        tracing::trace!(
                            "{}={} -> {} ({})",
                            code,
                            value.raw_value,
                            resolved.variant.marketplace_code,
                            resolved.state
                        );

                        Some(SelectionOption {
                            label: value.label.clone(),
                            raw_value: value.raw_value.clone(),
                            state: resolved.state,
                            variant_marketplace_code: resolved.variant.marketplace_code.clone(),
                            unit_code: value.unit_code.clone(),
                            other_attributes_restrictions: restrictions,
                        })
                    })
                    .collect();
                sorter.sort_options(code, &mut options);

                VariationSelection {
                    code: group.code.clone(),
                    label: group.label.clone(),
                    options,
                }
            })
            .collect();

        tracing::debug!(
            "Computed {} variation selections from {} variants",
            selections.len(),
            prepared.variants.len()
        );
        selections
    }

    /// Every selectable variant together with its values for all variation
    /// attributes, for linking directly to a combination.
    pub fn variant_matches(&self, input: SelectionInput<'_>) -> Vec<VariantMatch> {
        let Some(prepared) = self.prepare(input) else {
            return Vec::new();
        };

        prepared
            .variants
            .iter()
            .map(|variant| VariantMatch {
                variant_marketplace_code: variant.marketplace_code.clone(),
                attributes: prepared
                    .codes
                    .iter()
                    .filter_map(|code| {
                        extract(variant, code.as_str()).map(|attribute| MatchingAttribute {
                            code: code.clone(),
                            value: labeled_value(attribute),
                        })
                    })
                    .collect(),
            })
            .collect()
    }

    /// Both the selections and the variant matches
    pub fn selection_model(&self, input: SelectionInput<'_>) -> SelectionModel {
        SelectionModel {
            selections: self.map(input),
            variant_matches: self.variant_matches(input),
        }
    }

    /// Filter and sort the variants and validate the active variant.
    /// Returns `None` if nothing is selectable.
    fn prepare<'a>(&self, input: SelectionInput<'a>) -> Option<Prepared<'a>> {
        let codes: Vec<AttributeCode> = input
            .variation_attribute_codes
            .iter()
            .unique()
            .cloned()
            .collect();
        if codes.len() != input.variation_attribute_codes.len() {
            tracing::warn!(
                "Variation attribute codes [{}] contain duplicates, using each code once",
                input.variation_attribute_codes.iter().join(", ")
            );
        }
        if codes.is_empty() {
            return None;
        }

        let mut variants = select_variants(input.variants, &codes);
        if variants.is_empty() {
            tracing::debug!(
                "None of {} variants has values for [{}]",
                input.variants.len(),
                codes.iter().join(", ")
            );
            return None;
        }

        let active = input.active_variant.and_then(|active_code| {
            let active = variants
                .iter()
                .copied()
                .find(|variant| &variant.marketplace_code == active_code);
            if active.is_none() {
                tracing::warn!(
                    "Active variant {} is not a selectable variant, ignoring it",
                    active_code
                );
            }
            active
        });

        self.sorter().sort_variants(&codes, &mut variants);

        Some(Prepared {
            codes,
            variants,
            active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;
    use variation_selector_types::{Attribute, MarketplaceCode, OptionState};

    fn variants() -> Vec<Variant> {
        [("red-S", "red", "S"), ("red-M", "red", "M"), ("blue-S", "blue", "S")]
            .into_iter()
            .map(|(code, color, size)| {
                Variant::new(code)
                    .with_attribute(Attribute::new("color", color).with_code_label("Color"))
                    .with_attribute(Attribute::new("size", size).with_code_label("Size"))
            })
            .collect()
    }

    #[test]
    fn test_empty_codes_yield_nothing() {
        let variants = variants();
        let selector = VariantSelector::default();
        let input = SelectionInput::new(&variants, &[]);
        assert!(selector.map(input).is_empty());
        assert!(selector.variant_matches(input).is_empty());
    }

    #[test]
    fn test_duplicate_codes_are_used_once() {
        let variants = variants();
        let codes: Vec<AttributeCode> = vec!["color".into(), "size".into(), "color".into()];
        let selections = VariantSelector::default().map(SelectionInput::new(&variants, &codes));

        let codes: Vec<&str> = selections.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["color", "size"]);
        assert_eq!(selections[0].label, "Color");
    }

    #[traced_test]
    #[test]
    fn test_unknown_active_variant_is_ignored() {
        let variants = variants();
        let codes: Vec<AttributeCode> = vec!["color".into(), "size".into()];
        let unknown = MarketplaceCode::from("green-XL");
        let input = SelectionInput::new(&variants, &codes).with_active_variant(Some(&unknown));

        let selections = VariantSelector::default().map(input);
        assert!(
            selections
                .iter()
                .flat_map(|s| &s.options)
                .all(|o| o.state == OptionState::Match)
        );
        assert!(logs_contain("Active variant green-XL is not a selectable variant"));
    }
}
