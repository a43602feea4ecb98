//! Loading product documents from disk.

use std::path::{Path, PathBuf};

use fs_err as fs;
use miette::Diagnostic;
use thiserror::Error;
use variation_selector_core::{find_variant, select_variants};
use variation_selector_types::{MarketplaceCode, Product, RawValue};

use crate::opt::Choice;

/// Errors that can occur while loading a product document.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("Could not open file ({0}): {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("Could not parse product document {}: {source}", path.display())]
    #[diagnostic(help(
        "a product document needs a `type` (simple, configurable, configurable_with_active_variant or bundle) and a `marketplace_code`"
    ))]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Could not parse product document {}: {source}", path.display())]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while turning `--choose` pairs into an active variant.
#[derive(Debug, Error, Diagnostic)]
pub enum ChooseError {
    #[error("Product {0} has no variants to choose from")]
    NotConfigurable(MarketplaceCode),

    #[error("'{code}' is not a variation attribute of product {product}")]
    #[diagnostic(help("the variation attributes are: {available}"))]
    UnknownAttribute {
        product: MarketplaceCode,
        code: String,
        available: String,
    },

    #[error("No value chosen for '{code}'")]
    #[diagnostic(help("pass --choose {code}=<VALUE>"))]
    Incomplete { code: String },

    #[error("Product {product} has no variant with {combination}")]
    NoSuchCombination {
        product: MarketplaceCode,
        combination: String,
    },
}

/// Load a product document. Files ending in `.json` are read as JSON, all
/// others as YAML.
pub fn load_product(path: &Path) -> Result<Product, CatalogError> {
    let contents =
        fs::read_to_string(path).map_err(|e| CatalogError::IoError(path.to_path_buf(), e))?;

    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    let product: Product = if is_json {
        serde_json::from_str(&contents).map_err(|source| CatalogError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_yaml::from_str(&contents).map_err(|source| CatalogError::ParseYaml {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!(
        "Loaded product {} from {}",
        product.marketplace_code(),
        path.display()
    );
    Ok(product)
}

/// Find the variant that has exactly the chosen values. Every variation
/// attribute of the product needs a value.
pub fn resolve_choices(product: &Product, choices: &[Choice]) -> Result<MarketplaceCode, ChooseError> {
    let configurable = product
        .configurable()
        .ok_or_else(|| ChooseError::NotConfigurable(product.marketplace_code().clone()))?;
    let codes = &configurable.variation_attribute_codes;

    if let Some(unknown) = choices.iter().find(|choice| !codes.contains(&choice.code)) {
        return Err(ChooseError::UnknownAttribute {
            product: configurable.marketplace_code.clone(),
            code: unknown.code.to_string(),
            available: codes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    // Later choices for the same attribute win
    let desired = codes
        .iter()
        .map(|code| {
            choices
                .iter()
                .rev()
                .find(|choice| &choice.code == code)
                .map(|choice| (code.as_str(), &choice.value))
                .ok_or_else(|| ChooseError::Incomplete {
                    code: code.to_string(),
                })
        })
        .collect::<Result<Vec<(&str, &RawValue)>, _>>()?;

    let variants = select_variants(&configurable.variants, codes);
    find_variant(&variants, &desired)
        .map(|variant| variant.marketplace_code.clone())
        .ok_or_else(|| ChooseError::NoSuchCombination {
            product: configurable.marketplace_code.clone(),
            combination: desired
                .iter()
                .map(|(code, value)| format!("{code}={value}"))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIRT: &str = r#"
type: configurable
marketplace_code: shirt
variation_attribute_codes: [color, size]
variants:
  - marketplace_code: red-S
    attributes:
      color: { raw_value: red }
      size: { raw_value: S }
  - marketplace_code: blue-M
    attributes:
      color: { raw_value: blue }
      size: { raw_value: M }
"#;

    fn choices(pairs: &[&str]) -> Vec<Choice> {
        pairs.iter().map(|pair| pair.parse().unwrap()).collect()
    }

    #[test]
    fn test_resolve_choices() {
        let product: Product = serde_yaml::from_str(SHIRT).unwrap();

        let code = resolve_choices(&product, &choices(&["size=M", "color=blue"])).unwrap();
        assert_eq!(code.as_str(), "blue-M");

        // the last value for an attribute wins
        let code =
            resolve_choices(&product, &choices(&["color=blue", "size=S", "color=red"])).unwrap();
        assert_eq!(code.as_str(), "red-S");
    }

    #[test]
    fn test_resolve_choices_errors() {
        let product: Product = serde_yaml::from_str(SHIRT).unwrap();

        assert!(matches!(
            resolve_choices(&product, &choices(&["color=red"])),
            Err(ChooseError::Incomplete { code }) if code == "size"
        ));
        assert!(matches!(
            resolve_choices(&product, &choices(&["color=red", "size=S", "fit=slim"])),
            Err(ChooseError::UnknownAttribute { .. })
        ));
        assert!(matches!(
            resolve_choices(&product, &choices(&["color=red", "size=M"])),
            Err(ChooseError::NoSuchCombination { .. })
        ));

        let simple: Product = serde_yaml::from_str("type: simple\nmarketplace_code: mug").unwrap();
        assert!(matches!(
            resolve_choices(&simple, &[]),
            Err(ChooseError::NotConfigurable(_))
        ));
    }
}
