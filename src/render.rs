//! Printing selections and variant matches.

use comfy_table::{Table, presets, modifiers};
use miette::IntoDiagnostic;
use serde::Serialize;
use variation_selector_types::{OptionState, VariantMatch, VariationSelection};

use crate::opt::OutputFormat;

fn serialize<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> miette::Result<Option<String>> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).into_diagnostic().map(Some),
        OutputFormat::Yaml => serde_yaml::to_string(value).into_diagnostic().map(Some),
        OutputFormat::Table => Ok(None),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

fn state_marker(state: OptionState) -> &'static str {
    match state {
        OptionState::Active => "● active",
        OptionState::Match => "○ match",
        OptionState::NoMatch => "✕ no match",
    }
}

/// Render variation selections in the requested format
pub fn render_selections(
    selections: &[VariationSelection],
    format: OutputFormat,
) -> miette::Result<String> {
    if let Some(serialized) = serialize(selections, format)? {
        return Ok(serialized);
    }

    let mut table = new_table();
    table.set_header(vec!["Attribute", "Value", "State", "Variant", "Reachable"]);
    for selection in selections {
        for option in &selection.options {
            let value = match &option.unit_code {
                Some(unit) => format!("{} {}", option.label, unit),
                None => option.label.clone(),
            };
            let reachable = option
                .other_attributes_restrictions
                .iter()
                .map(|restriction| format!("{}: {}", restriction.code, restriction.labels().join(", ")))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(vec![
                format!("{} ({})", selection.label, selection.code),
                value,
                state_marker(option.state).to_string(),
                option.variant_marketplace_code.to_string(),
                reachable,
            ]);
        }
    }
    Ok(table.to_string())
}

/// Render variant matches in the requested format
pub fn render_variant_matches(
    matches: &[VariantMatch],
    format: OutputFormat,
) -> miette::Result<String> {
    if let Some(serialized) = serialize(matches, format)? {
        return Ok(serialized);
    }

    let mut table = new_table();
    let mut header = vec!["Variant".to_string()];
    if let Some(first) = matches.first() {
        header.extend(first.attributes.iter().map(|attribute| attribute.code.to_string()));
    }
    table.set_header(header);

    for variant_match in matches {
        let mut row = vec![variant_match.variant_marketplace_code.to_string()];
        row.extend(
            variant_match
                .attributes
                .iter()
                .map(|attribute| attribute.value.label.clone()),
        );
        table.add_row(row);
    }
    Ok(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use variation_selector_types::{LabeledValue, OtherAttributeRestriction, SelectionOption};

    fn selections() -> Vec<VariationSelection> {
        vec![VariationSelection {
            code: "color".into(),
            label: "Color".to_string(),
            options: vec![SelectionOption {
                label: "Red".to_string(),
                raw_value: "red".into(),
                state: OptionState::Active,
                variant_marketplace_code: "red-S".into(),
                unit_code: None,
                other_attributes_restrictions: vec![OtherAttributeRestriction {
                    code: "size".into(),
                    available_values: vec![LabeledValue::new("S", "S"), LabeledValue::new("M", "M")],
                }],
            }],
        }]
    }

    #[test]
    fn test_render_table() {
        let table = render_selections(&selections(), OutputFormat::Table).unwrap();
        assert!(table.contains("Color (color)"));
        assert!(table.contains("● active"));
        assert!(table.contains("size: S, M"));
    }

    #[test]
    fn test_render_json() {
        let json = render_selections(&selections(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["options"][0]["state"], "active");
        assert_eq!(value[0]["options"][0]["variant_marketplace_code"], "red-S");
        // no unit, no key
        assert!(value[0]["options"][0].get("unit_code").is_none());
    }
}
