//! Cell value representation for spreadsheet transfers

use chrono::NaiveDateTime;

/// A single cell value, used for mapper inputs and outputs
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value (empty cell, error cell or NA literal)
    Null,
    /// Text
    String(String),
    /// Whole number
    Int(i64),
    /// Floating point number with a fractional part
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Date and time, no timezone (spreadsheets don't carry one)
    DateTime(NaiveDateTime),
}

impl Value {
    /// Check if this value is missing
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "(null)"),
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
