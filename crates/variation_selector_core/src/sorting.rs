//! Ordering of options, restriction values and variants by the configured
//! sort order

use std::cmp::Ordering;

use variation_selector_types::{
    AttributeCode, LabeledValue, OtherAttributeRestriction, RawValue, SelectionOption, Variant,
};

use crate::sort_order::VariationSortOrder;

/// The position of a value in the configured order of its attribute.
///
/// Every indexed value ranks before every unindexed one. All sorts that use
/// the rank are stable, so unindexed values keep their discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Indexed(usize),
    Unindexed,
}

/// Sorts selection data by a [`VariationSortOrder`].
#[derive(Debug, Clone, Copy)]
pub struct VariationSorter<'a> {
    sort_order: &'a VariationSortOrder,
}

impl<'a> VariationSorter<'a> {
    pub fn new(sort_order: &'a VariationSortOrder) -> Self {
        Self { sort_order }
    }

    /// The rank of `value` within attribute `code`
    pub fn rank(&self, code: &str, value: &RawValue) -> Rank {
        self.sort_order
            .index_of(code, value)
            .map_or(Rank::Unindexed, Rank::Indexed)
    }

    /// Compare two variants attribute by attribute, in the order of `codes`.
    /// The first attribute whose ranks differ decides.
    pub fn compare_variants(&self, codes: &[AttributeCode], a: &Variant, b: &Variant) -> Ordering {
        codes
            .iter()
            .map(|code| {
                let rank_a = self.variant_rank(code, a);
                let rank_b = self.variant_rank(code, b);
                rank_a.cmp(&rank_b)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Sort variants with [`Self::compare_variants`]
    pub fn sort_variants(&self, codes: &[AttributeCode], variants: &mut [&Variant]) {
        variants.sort_by(|a, b| self.compare_variants(codes, a, b));
    }

    /// Sort the options of attribute `code`
    pub fn sort_options(&self, code: &str, options: &mut [SelectionOption]) {
        options.sort_by_key(|option| self.rank(code, &option.raw_value));
    }

    /// Sort values of attribute `code`
    pub fn sort_values(&self, code: &str, values: &mut [LabeledValue]) {
        values.sort_by_key(|value| self.rank(code, &value.raw_value));
    }

    /// Sort the values of every restriction by the order of its own attribute
    pub fn sort_restrictions(&self, restrictions: &mut [OtherAttributeRestriction]) {
        for restriction in restrictions {
            self.sort_values(restriction.code.as_str(), &mut restriction.available_values);
        }
    }

    fn variant_rank(&self, code: &AttributeCode, variant: &Variant) -> Rank {
        variant
            .value(code.as_str())
            .map_or(Rank::Unindexed, |value| self.rank(code.as_str(), value))
    }
}
