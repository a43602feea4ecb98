//! The `variation-selector` command line tool: computes the variant selection
//! model of a product document and prints it.

pub mod catalog;
pub mod console_utils;
pub mod opt;
pub mod render;

use variation_selector_core::{VariantSelector, VariationSortOrder};
use variation_selector_types::Product;

use crate::opt::{MatchesOpts, ProductOpts, SelectOpts};

fn load(opts: &ProductOpts) -> miette::Result<(Product, VariantSelector)> {
    let product = catalog::load_product(&opts.product)?;
    let sort_order = VariationSortOrder::from_files(&opts.sort_order)?;
    if sort_order.is_empty() {
        tracing::debug!("No sort order configured, values keep their discovery order");
    }
    Ok((product, VariantSelector::new(sort_order)))
}

/// Run the `select` subcommand and return the rendered output
pub fn select_from_args(args: SelectOpts) -> miette::Result<String> {
    let (mut product, selector) = load(&args.product_opts)?;

    if args.no_active {
        product = product.with_active_variant(None);
    } else if let Some(active) = args.active {
        product = product.with_active_variant(Some(active.into()));
    } else if !args.choose.is_empty() {
        let active = catalog::resolve_choices(&product, &args.choose)?;
        tracing::info!("Chosen values resolve to variant {}", active);
        product = product.with_active_variant(Some(active));
    }

    let selections = selector.select(&product);
    if selections.is_empty() {
        tracing::warn!(
            "Product {} has no variants to select from",
            product.marketplace_code()
        );
    }

    render::render_selections(&selections, args.product_opts.format)
}

/// Run the `matches` subcommand and return the rendered output
pub fn matches_from_args(args: MatchesOpts) -> miette::Result<String> {
    let (product, selector) = load(&args.product_opts)?;

    let matches = product
        .selection_input()
        .map(|input| selector.variant_matches(input))
        .unwrap_or_default();
    if matches.is_empty() {
        tracing::warn!(
            "Product {} has no selectable variants",
            product.marketplace_code()
        );
    }

    render::render_variant_matches(&matches, args.product_opts.format)
}
