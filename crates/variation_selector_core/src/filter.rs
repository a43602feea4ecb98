//! Selecting the variants that take part in the selection

use variation_selector_types::{AttributeCode, Variant};

use crate::extract::extract;

/// Keep the variants that have a value for every variation attribute.
///
/// The input order is preserved. An empty result means there is nothing to
/// select.
pub fn select_variants<'a>(variants: &'a [Variant], codes: &[AttributeCode]) -> Vec<&'a Variant> {
    variants
        .iter()
        .filter(|variant| {
            let complete = codes
                .iter()
                .all(|code| extract(variant, code.as_str()).is_some());
            if !complete {
                tracing::trace!(
                    "Variant {} lacks a variation attribute, skipping it",
                    variant.marketplace_code
                );
            }
            complete
        })
        .collect()
}
