//! The configured display order of attribute values

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::Path;
use variation_selector_types::{AttributeCode, RawValue};

use crate::error::SortOrderError;

/// The display order of attribute values, per attribute code.
///
/// This is external configuration, typically loaded from a YAML file:
///
/// ```yaml
/// color: [red, blue]
/// size: [S, M, L, XL]
/// ```
///
/// Values that are not listed (and attributes that are not configured at all)
/// are shown after the listed ones, in the order they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariationSortOrder {
    /// Raw values in display order, keyed by attribute code
    pub orders: IndexMap<AttributeCode, Vec<RawValue>>,
}

impl VariationSortOrder {
    /// Create a new empty sort order
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a sort order from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SortOrderError> {
        let config: VariationSortOrder = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a sort order from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, SortOrderError> {
        let contents = fs_err::read_to_string(path)
            .map_err(|e| SortOrderError::IoError(path.to_path_buf(), e))?;

        // An empty file configures nothing
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }

        let config: VariationSortOrder =
            serde_yaml::from_str(&contents).map_err(|source| SortOrderError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load multiple sort order files and merge them
    ///
    /// Files are merged in order, with later files taking precedence.
    pub fn from_files(paths: &[impl AsRef<Path>]) -> Result<Self, SortOrderError> {
        let mut final_config = VariationSortOrder::new();

        for path in paths {
            let path = path.as_ref();
            tracing::info!("Loading sort order from: {}", path.display());
            final_config.merge(Self::from_file(path)?);
        }

        Ok(final_config)
    }

    /// Merge another sort order into this one
    ///
    /// The order of an attribute is replaced as a whole, not merged.
    pub fn merge(&mut self, other: VariationSortOrder) {
        self.orders.extend(other.orders);
    }

    /// Insert or replace the order of an attribute
    pub fn insert(&mut self, code: impl Into<AttributeCode>, values: Vec<RawValue>) {
        self.orders.insert(code.into(), values);
    }

    /// Get the configured order of an attribute
    pub fn get(&self, code: &str) -> Option<&Vec<RawValue>> {
        self.orders.get(code)
    }

    /// The position of `value` in the configured order of `code`, or `None`
    /// if the attribute is not configured or does not list the value.
    ///
    /// For values listed more than once the first position wins.
    pub fn index_of(&self, code: &str, value: &RawValue) -> Option<usize> {
        self.orders.get(code)?.iter().position(|v| v == value)
    }

    /// Check if configuration is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the number of configured attributes
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Serialize to YAML string
    pub fn to_yaml_string(&self) -> Result<String, SortOrderError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), SortOrderError> {
        if self.orders.keys().any(|code| code.as_str().trim().is_empty()) {
            return Err(SortOrderError::InvalidConfig(
                "attribute codes must not be empty".to_string(),
            ));
        }

        for (code, values) in &self.orders {
            let duplicates = values.iter().duplicates().join(", ");
            if !duplicates.is_empty() {
                tracing::warn!(
                    "Sort order of '{}' lists [{}] more than once, using the first position",
                    code,
                    duplicates
                );
            }
        }
        Ok(())
    }
}

impl<C, V> FromIterator<(C, Vec<V>)> for VariationSortOrder
where
    C: Into<AttributeCode>,
    V: Into<RawValue>,
{
    fn from_iter<T: IntoIterator<Item = (C, Vec<V>)>>(iter: T) -> Self {
        Self {
            orders: iter
                .into_iter()
                .map(|(code, values)| (code.into(), values.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_config() {
        let yaml = r#"
color:
  - red
  - blue
size: [S, M, L]
"#;
        let config = VariationSortOrder::from_yaml_str(yaml).unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("size").unwrap().len(), 3);
        assert_eq!(config.index_of("color", &"blue".into()), Some(1));
        assert_eq!(config.index_of("color", &"green".into()), None);
        assert_eq!(config.index_of("fit", &"slim".into()), None);
    }

    #[test]
    fn test_numeric_values() {
        let config = VariationSortOrder::from_yaml_str("shoe_size: [38, 39.5, \"40\"]").unwrap();
        assert_eq!(config.index_of("shoe_size", &"39.5".into()), Some(1));
        assert_eq!(config.index_of("shoe_size", &"40".into()), Some(2));
    }

    #[test]
    fn test_duplicate_value_first_position_wins() {
        let config = VariationSortOrder::from_yaml_str("size: [S, M, S]").unwrap();
        assert_eq!(config.index_of("size", &"S".into()), Some(0));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            VariationSortOrder::from_yaml_str("color: red"),
            Err(SortOrderError::InvalidYaml(_))
        ));
        assert!(matches!(
            VariationSortOrder::from_yaml_str("'': [red]"),
            Err(SortOrderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_merge_configs() {
        let mut config1: VariationSortOrder =
            [("color", vec!["red", "blue"]), ("size", vec!["S", "M"])]
                .into_iter()
                .collect();
        let config2: VariationSortOrder = [("size", vec!["XL"])].into_iter().collect();

        config1.merge(config2);

        assert_eq!(config1.len(), 2);
        // Replaced, not appended
        assert_eq!(config1.get("size").unwrap(), &vec![RawValue::from("XL")]);
        assert_eq!(config1.index_of("color", &"blue".into()), Some(1));
    }

    #[test]
    fn test_to_yaml_string() {
        let mut config = VariationSortOrder::new();
        config.insert("color", vec!["red".into(), "blue".into()]);
        config.insert("size", vec!["S".into(), "M".into(), "L".into()]);

        let yaml = config.to_yaml_string().unwrap();
        insta::assert_snapshot!(yaml);

        let parsed = VariationSortOrder::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
