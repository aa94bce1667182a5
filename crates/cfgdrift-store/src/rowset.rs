use serde::{Deserialize, Serialize};

/// A single cell of an untyped query result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Integer(i64),
    Null,
}

impl Value {
    /// The text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer cell.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this cell is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

/// An untyped query result: a column descriptor plus rows of cells.
///
/// Used where the engine must check the store's shape instead of trusting
/// it — the identity handshake and the drift tuple stream both validate
/// their descriptor before consuming any row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl RowSet {
    /// Build a row set from a column descriptor and rows.
    pub fn new(
        columns: impl IntoIterator<Item = impl Into<String>>,
        rows: Vec<Vec<Value>>,
    ) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Whether the column descriptor matches `expected` exactly, including
    /// order.
    pub fn columns_match(&self, expected: &[&str]) -> bool {
        self.columns.len() == expected.len()
            && self.columns.iter().zip(expected).all(|(a, b)| a == b)
    }
}
