//! Field mapping acquisition
//!
//! Builds the per-run `FieldMapping` either from the compiled-in column
//! names or by asking a `ColumnPicker` for each template field, then applies
//! explicit `FIELD=SOURCE` overrides on top.

mod picker;

pub use picker::{ColumnPicker, TerminalPicker};
#[cfg(test)]
pub use picker::ScriptedPicker;

use std::str::FromStr;

use anyhow::{Result, bail};

use crate::config::Mode;
use crate::transfer::{FieldMapping, TEMPLATE_FIELDS, is_template_field};

/// Explicit `FIELD=SOURCE` mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOverride {
    pub field: String,
    pub source: String,
}

impl FromStr for ColumnOverride {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((field, source)) = s.split_once('=') else {
            bail!("Expected FIELD=SOURCE, got '{}'", s);
        };

        if !is_template_field(field) {
            bail!(
                "Unknown template field '{}' (expected one of: {})",
                field,
                TEMPLATE_FIELDS.join(", ")
            );
        }
        if source.is_empty() {
            bail!("Missing source column for '{}'", field);
        }

        Ok(ColumnOverride {
            field: field.to_string(),
            source: source.to_string(),
        })
    }
}

/// clap value parser for `--column`
pub fn parse_column_override(s: &str) -> Result<ColumnOverride> {
    s.parse()
}

/// Build the field mapping for one run.
///
/// In interactive mode every template field without an override is asked
/// through `picker`, choosing among `source_columns`.
pub fn acquire_mapping(
    mode: Mode,
    source_columns: &[String],
    overrides: &[ColumnOverride],
    picker: &mut dyn ColumnPicker,
) -> Result<FieldMapping> {
    let mut mapping = match mode {
        Mode::Static => FieldMapping::static_mapping(),
        Mode::Interactive => {
            if source_columns.is_empty() {
                bail!("Client file has no columns to choose from");
            }

            let mut mapping = FieldMapping::new();
            for field in TEMPLATE_FIELDS {
                if overrides.iter().any(|o| o.field == field) {
                    continue;
                }
                let idx = picker.pick(field, source_columns)?;
                let Some(column) = source_columns.get(idx) else {
                    bail!("Picked column index {} out of range for '{}'", idx, field);
                };
                log::debug!("Selected '{}' for {}", column, field);
                mapping.set(field, column.clone());
            }
            mapping
        }
    };

    for o in overrides {
        log::debug!("Override: {} <- '{}'", o.field, o.source);
        mapping.set(o.field.clone(), o.source.clone());
    }

    // Keep template field order regardless of where overrides landed
    Ok(TEMPLATE_FIELDS
        .iter()
        .filter_map(|field| {
            mapping
                .source_for(field)
                .map(|source| (field.to_string(), source.to_string()))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_static_mode_ignores_picker() {
        let mut picker = ScriptedPicker::default();
        let mapping = acquire_mapping(Mode::Static, &[], &[], &mut picker).unwrap();
        assert_eq!(mapping, FieldMapping::static_mapping());
    }

    #[test]
    fn test_interactive_asks_every_field_in_order() {
        let source = columns(&["Closed", "Type", "From", "Dep", "Arr", "To", "Tons"]);
        let mut picker = ScriptedPicker::new(["Closed", "Type", "From", "Dep", "Arr", "To", "Tons"]);

        let mapping = acquire_mapping(Mode::Interactive, &source, &[], &mut picker).unwrap();

        let pairs: Vec<(&str, &str)> = mapping
            .iter()
            .map(|e| (e.template.as_str(), e.source.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Res_Date", "Closed"),
                ("Facility", "Type"),
                ("Departure", "From"),
                ("Start Date", "Dep"),
                ("End Date", "Arr"),
                ("Arrival", "To"),
                ("Weight Ton", "Tons"),
            ]
        );
    }

    #[test]
    fn test_overridden_fields_are_not_prompted() {
        let source = columns(&["A", "B"]);
        let overrides: Vec<ColumnOverride> = vec![
            "Departure=B".parse().unwrap(),
            "Arrival=Port of Discharge".parse().unwrap(),
        ];
        // Five answers for the seven fields minus two overrides
        let mut picker = ScriptedPicker::new(["A", "A", "A", "A", "A"]);

        let mapping = acquire_mapping(Mode::Interactive, &source, &overrides, &mut picker).unwrap();

        assert_eq!(mapping.len(), 7);
        assert_eq!(mapping.source_for("Departure"), Some("B"));
        assert_eq!(mapping.source_for("Arrival"), Some("Port of Discharge"));
        assert_eq!(mapping.iter().nth(2).map(|e| e.template.as_str()), Some("Departure"));
    }

    #[test]
    fn test_static_mode_applies_overrides() {
        let overrides: Vec<ColumnOverride> = vec!["Weight Ton=Gross Weight".parse().unwrap()];
        let mut picker = ScriptedPicker::default();

        let mapping = acquire_mapping(Mode::Static, &[], &overrides, &mut picker).unwrap();

        assert_eq!(mapping.source_for("Weight Ton"), Some("Gross Weight"));
        assert_eq!(mapping.source_for("Departure"), Some("POL"));
    }

    #[test]
    fn test_interactive_without_columns_fails() {
        let mut picker = ScriptedPicker::default();
        assert!(acquire_mapping(Mode::Interactive, &[], &[], &mut picker).is_err());
    }

    #[test]
    fn test_parse_override() {
        let parsed = parse_column_override("Start Date=ATD (local)").unwrap();
        assert_eq!(parsed.field, "Start Date");
        assert_eq!(parsed.source, "ATD (local)");

        let with_equals = parse_column_override("Facility=Type=LCL").unwrap();
        assert_eq!(with_equals.source, "Type=LCL");

        assert!(parse_column_override("Departure").is_err());
        assert!(parse_column_override("Departure=").is_err());
        assert!(parse_column_override("Gate=POL").is_err());
    }
}
