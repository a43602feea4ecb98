//! # variation_selector_core
//!
//! Computes the variant selection model of a configurable product: for every
//! variation attribute the distinct values found on the variants, whether each
//! value belongs to the active variant, leads to another variant with the same
//! remaining choices, or only exists in other combinations, and which values of
//! the other attributes stay reachable once a value is chosen.
//!
//! ## Example
//!
//! ```rust
//! use variation_selector_core::{VariantSelector, VariationSortOrder};
//! use variation_selector_types::{Attribute, AttributeCode, OptionState, SelectionInput, Variant};
//!
//! let variants: Vec<Variant> = [("red-S", "red", "S"), ("red-L", "red", "L"), ("blue-S", "blue", "S")]
//!     .into_iter()
//!     .map(|(code, color, size)| {
//!         Variant::new(code)
//!             .with_attribute(Attribute::new("color", color))
//!             .with_attribute(Attribute::new("size", size))
//!     })
//!     .collect();
//! let codes: Vec<AttributeCode> = vec!["color".into(), "size".into()];
//!
//! let sort_order = VariationSortOrder::from_yaml_str("size: [S, M, L]").unwrap();
//! let selector = VariantSelector::new(sort_order);
//!
//! let active = variants[1].marketplace_code.clone();
//! let input = SelectionInput::new(&variants, &codes).with_active_variant(Some(&active));
//! let selections = selector.map(input);
//!
//! // red-L is active, blue-L does not exist
//! assert_eq!(selections[0].options[0].state, OptionState::Active);
//! assert_eq!(selections[0].options[1].state, OptionState::NoMatch);
//! ```
//!
//! ## Sort order
//!
//! The display order of values is configured per attribute:
//!
//! ```yaml
//! color: [red, blue]
//! size: [S, M, L]
//! ```
//!
//! Values without a configured position are shown after all configured ones,
//! in the order they were found on the variants.

pub mod error;
pub mod extract;
pub mod filter;
pub mod group;
pub mod matcher;
pub mod restriction;
pub mod selector;
pub mod sort_order;
pub mod sorting;

// Re-export main types
pub use error::SortOrderError;
pub use filter::select_variants;
pub use matcher::{ResolvedMatch, find_variant, resolve_match};
pub use selector::VariantSelector;
pub use sort_order::VariationSortOrder;
pub use sorting::{Rank, VariationSorter};
