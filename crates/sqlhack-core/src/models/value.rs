//! Untyped SQL values and result rows.

use std::fmt;

use rusqlite::types::ValueRef;
use serde::Serialize;

/// A single untyped value as returned by SQLite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the text content if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer content if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Writes the value the way it appears inside a printed row: text is
    /// quoted, everything else matches [`fmt::Display`].
    fn fmt_quoted(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "'{}'", text.replace('\'', "\\'")),
            other => write!(f, "{other}"),
        }
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{i}"),
            // Debug keeps the trailing ".0" on whole floats
            Value::Real(r) => write!(f, "{r:?}"),
            Value::Text(t) => write!(f, "{t}"),
            Value::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

/// One result row, in column order.
///
/// The printed form is a parenthesised tuple such as
/// `(1, 'Marcus Steel', 'Security')`; mission grading matches against it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row(pub Vec<Value>);

impl Row {
    /// The values of this row.
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the value at a column index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row(values)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            value.fmt_quoted(f)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_display_quotes_text() {
        let row = Row(vec![
            Value::Integer(1),
            Value::from("Marcus Steel"),
            Value::Null,
            Value::Real(2.0),
        ]);
        assert_eq!(row.to_string(), "(1, 'Marcus Steel', NULL, 2.0)");
    }

    #[test]
    fn test_single_value_row_has_trailing_comma() {
        let row = Row(vec![Value::Integer(5)]);
        assert_eq!(row.to_string(), "(5,)");
    }

    #[test]
    fn test_value_display_is_unquoted() {
        assert_eq!(Value::from("Break Room").to_string(), "Break Room");
        assert_eq!(Value::Blob(vec![0, 1, 2]).to_string(), "<blob 3 bytes>");
    }

    #[test]
    fn test_row_serializes_as_plain_array() {
        let row = Row(vec![Value::Integer(3), Value::from("Server Room"), Value::Null]);
        let json = serde_json::to_string(&row).expect("serialize row");
        assert_eq!(json, r#"[3,"Server Room",null]"#);
    }
}
