//! Column mapper - shapes a source table like the template

use crate::transfer::{FieldMapping, Table};

/// What went wrong for a single mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// The mapped source column is absent from the client file
    SourceColumnMissing { source: String },
    /// The mapping key is not a column of the template
    TemplateColumnMissing,
}

/// Non-fatal diagnostic from mapping a single template field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingWarning {
    pub field: String,
    pub kind: WarningKind,
}

impl std::fmt::Display for MappingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            WarningKind::SourceColumnMissing { source } => {
                write!(f, "Column '{}' not found in client file (for '{}')", source, self.field)
            }
            WarningKind::TemplateColumnMissing => {
                write!(f, "Column '{}' not found in template, skipped", self.field)
            }
        }
    }
}

/// Mapper output: the template-shaped table plus diagnostics
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MappedTable {
    pub table: Table,
    pub warnings: Vec<MappingWarning>,
}

/// Build a table with exactly the template's columns, filled from the source
/// according to `mapping`. Unmapped and unresolvable columns stay null.
pub fn map_columns(source: &Table, template_columns: &[String], mapping: &FieldMapping) -> MappedTable {
    let mut table = Table::with_null_rows(template_columns.to_vec(), source.row_count());
    let mut warnings = Vec::new();

    for entry in mapping.iter() {
        let Some(target_idx) = table.column_index(&entry.template) else {
            warnings.push(MappingWarning {
                field: entry.template.clone(),
                kind: WarningKind::TemplateColumnMissing,
            });
            continue;
        };

        let Some(source_idx) = source.column_index(&entry.source) else {
            warnings.push(MappingWarning {
                field: entry.template.clone(),
                kind: WarningKind::SourceColumnMissing {
                    source: entry.source.clone(),
                },
            });
            continue;
        };

        for (row, value) in table.rows.iter_mut().zip(source.column_values(source_idx)) {
            row[target_idx] = value.clone();
        }
    }

    MappedTable { table, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::Value;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn source() -> Table {
        let mut table = Table::new(strings(&["POL", "POD", "Extra"]));
        table.push_row(vec!["CNSHA".into(), "NLRTM".into(), Value::Int(1)]);
        table.push_row(vec!["CNNGB".into(), "DEHAM".into(), Value::Int(2)]);
        table
    }

    #[test]
    fn test_output_has_template_columns_in_order() {
        let template = strings(&["Arrival", "Notes", "Departure"]);
        let mut mapping = FieldMapping::new();
        mapping.set("Departure", "POL");
        mapping.set("Arrival", "POD");

        let mapped = map_columns(&source(), &template, &mapping);

        assert!(mapped.warnings.is_empty());
        assert_eq!(mapped.table.columns, template);
        assert_eq!(mapped.table.row_count(), 2);
        assert_eq!(mapped.table.rows[0], vec!["NLRTM".into(), Value::Null, "CNSHA".into()]);
        assert_eq!(mapped.table.rows[1], vec!["DEHAM".into(), Value::Null, "CNNGB".into()]);
    }

    #[test]
    fn test_missing_source_column_warns_and_continues() {
        let template = strings(&["Departure", "Arrival"]);
        let mut mapping = FieldMapping::new();
        mapping.set("Departure", "Port of Loading");
        mapping.set("Arrival", "POD");

        let mapped = map_columns(&source(), &template, &mapping);

        assert_eq!(
            mapped.warnings,
            vec![MappingWarning {
                field: "Departure".into(),
                kind: WarningKind::SourceColumnMissing {
                    source: "Port of Loading".into()
                },
            }]
        );
        assert!(mapped.table.column_values(0).all(Value::is_null));
        assert_eq!(mapped.table.rows[0][1], Value::from("NLRTM"));
    }

    #[test]
    fn test_unknown_template_key_is_skipped() {
        let template = strings(&["Departure"]);
        let mut mapping = FieldMapping::new();
        mapping.set("Gate", "POL");

        let mapped = map_columns(&source(), &template, &mapping);

        assert_eq!(mapped.table.columns, template);
        assert_eq!(mapped.warnings.len(), 1);
        assert_eq!(mapped.warnings[0].kind, WarningKind::TemplateColumnMissing);
    }

    #[test]
    fn test_name_match_is_exact() {
        let template = strings(&["Departure"]);
        let mut mapping = FieldMapping::new();
        mapping.set("Departure", "pol");

        let mapped = map_columns(&source(), &template, &mapping);
        assert_eq!(mapped.warnings.len(), 1);
    }

    #[test]
    fn test_warning_message_names_the_client_column() {
        let warning = MappingWarning {
            field: "Departure".into(),
            kind: WarningKind::SourceColumnMissing { source: "POL".into() },
        };
        assert_eq!(
            warning.to_string(),
            "Column 'POL' not found in client file (for 'Departure')"
        );
    }
}
