//! Constant metadata columns and incomplete-row removal

use crate::transfer::{Table, Value};

/// Constant columns added to every result row
mod cols {
    pub const CF_STANDARD: &str = "CF Standard";
    pub const GAS: &str = "Gas";
    pub const ACTIVITY_UNIT: &str = "Activity Unit";
}

/// Column name and value of each constant column, in output order
pub const CONSTANT_COLUMNS: [(&str, &str); 3] = [
    (cols::CF_STANDARD, "IATA"),
    (cols::GAS, "CO2"),
    (cols::ACTIVITY_UNIT, "Kg"),
];

/// Add the constant columns, then drop every row holding a null.
/// The returned table has no null anywhere.
pub fn enrich_and_clean(mut table: Table) -> Table {
    for (name, value) in CONSTANT_COLUMNS {
        table.set_constant_column(name, Value::from(value));
    }

    table.rows.retain(|row| !row.iter().any(Value::is_null));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_constants_appended_after_template_columns() {
        let mut table = Table::new(strings(&["Departure"]));
        table.push_row(vec!["CNSHA".into()]);

        let result = enrich_and_clean(table);

        assert_eq!(
            result.columns,
            strings(&["Departure", "CF Standard", "Gas", "Activity Unit"])
        );
        assert_eq!(
            result.rows,
            vec![vec![
                Value::from("CNSHA"),
                Value::from("IATA"),
                Value::from("CO2"),
                Value::from("Kg"),
            ]]
        );
    }

    #[test]
    fn test_rows_with_any_null_are_dropped() {
        let mut table = Table::new(strings(&["a", "b"]));
        table.push_row(vec![Value::Int(1), Value::Int(2)]);
        table.push_row(vec![Value::Int(3), Value::Null]);
        table.push_row(vec![Value::Null, Value::Int(4)]);

        let result = enrich_and_clean(table);

        assert_eq!(result.row_count(), 1);
        assert_eq!(result.rows[0][0], Value::Int(1));
        assert!(result.rows.iter().flatten().all(|v| !v.is_null()));
    }

    #[test]
    fn test_unmapped_column_drops_every_row() {
        let mut table = Table::new(strings(&["a", "unmapped"]));
        for i in 0..5 {
            table.push_row(vec![Value::Int(i), Value::Null]);
        }

        let result = enrich_and_clean(table);

        assert_eq!(result.row_count(), 0);
        assert_eq!(result.column_count(), 5);
    }

    #[test]
    fn test_existing_constant_column_overwritten_in_place() {
        let mut table = Table::new(strings(&["Gas", "a"]));
        table.push_row(vec![Value::Null, Value::Int(1)]);

        let result = enrich_and_clean(table);

        assert_eq!(
            result.columns,
            strings(&["Gas", "a", "CF Standard", "Activity Unit"])
        );
        assert_eq!(result.rows[0][0], Value::from("CO2"));
    }

    #[test]
    fn test_empty_string_is_not_missing() {
        let mut table = Table::new(strings(&["a"]));
        table.push_row(vec![Value::from("")]);
        assert_eq!(enrich_and_clean(table).row_count(), 1);
    }
}
