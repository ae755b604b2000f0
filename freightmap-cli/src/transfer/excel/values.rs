//! Cell conversion between calamine data and transfer values

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};

use crate::transfer::Value;

/// Strings treated as missing values, in addition to empty cells
pub const NA_LITERALS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Convert a calamine cell into a Value
pub fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => {
            if NA_LITERALS.contains(&s.as_str()) {
                Value::Null
            } else {
                Value::String(s.clone())
            }
        }
        Data::Int(i) => Value::Int(*i),
        Data::Float(f) => float_to_value(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(parsed) => Value::DateTime(parsed),
            None => float_to_value(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(Value::DateTime)
            .unwrap_or_else(|| Value::String(s.clone())),
        Data::DurationIso(s) => Value::String(s.clone()),
    }
}

/// Whole floats become integers so numbers survive an xlsx round trip unchanged
fn float_to_value(f: f64) -> Value {
    if f.is_nan() {
        Value::Null
    } else if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Value::Int(f as i64)
    } else {
        Value::Float(f)
    }
}

/// Parse the ISO 8601 forms ODS files store dates in
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Text of a header cell, `None` for blank headers
pub fn header_text(cell: &Data) -> Option<String> {
    match cell_to_value(cell) {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        value => Some(value.to_string()),
    }
}

/// Name header cells: blanks become `Unnamed: <position>`, repeats get `.1`, `.2`, ...
pub fn header_names(cells: &[Data]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(cells.len());

    for (idx, cell) in cells.iter().enumerate() {
        let base = header_text(cell).unwrap_or_else(|| format!("Unnamed: {}", idx));

        let mut name = base.clone();
        let mut suffix = 0;
        while names.contains(&name) {
            suffix += 1;
            name = format!("{}.{}", base, suffix);
        }
        names.push(name);
    }

    names
}
