//! Decoded metadata values and their flattening.
//!
//! Metadata values arrive from the store as raw strings. Values that were
//! stored as a serialized composite decode into a `MetaValue` tree; the
//! scanner then flattens the tree into one searchable string.
//!
//! The flattening is deliberately lossy: mapping keys are dropped and every
//! element is followed by a single space separator. Matching is plain
//! substring containment, so only the concatenated scalar values matter.

use serde_json::Value;

/// A decoded metadata value: either a scalar or an ordered composite
///
/// Mappings are represented by their values only; keys never participate
/// in matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// A plain scalar, already in string form
    Scalar(String),

    /// A nested list/mapping, reduced to its ordered elements
    Composite(Vec<MetaValue>),
}

impl MetaValue {
    /// Flatten the value into a single searchable string
    ///
    /// Scalars are used directly. Composites are imploded depth-first: each
    /// scalar element is appended followed by a space, and each nested
    /// composite is recursively imploded with a trailing space after it.
    pub fn flatten(&self) -> String {
        match self {
            MetaValue::Scalar(s) => s.clone(),
            MetaValue::Composite(items) => implode(items),
        }
    }
}

fn implode(items: &[MetaValue]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            MetaValue::Scalar(s) => {
                out.push_str(s);
                out.push(' ');
            }
            MetaValue::Composite(inner) => {
                out.push_str(&implode(inner));
                out.push(' ');
            }
        }
    }
    out
}

impl From<Value> for MetaValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => MetaValue::Scalar(String::new()),
            Value::Bool(b) => MetaValue::Scalar(b.to_string()),
            Value::Number(n) => MetaValue::Scalar(n.to_string()),
            Value::String(s) => MetaValue::Scalar(s),
            Value::Array(items) => {
                MetaValue::Composite(items.into_iter().map(MetaValue::from).collect())
            }
            // Keys are dropped; only values can hold a file reference
            Value::Object(map) => {
                MetaValue::Composite(map.into_iter().map(|(_, v)| MetaValue::from(v)).collect())
            }
        }
    }
}
