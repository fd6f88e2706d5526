use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

/// Values produced by the query engine for one column, or fetched from a record
/// field to be sent as a positional parameter.
///
/// ```rust
/// use sql_binding::prelude::*;
///
/// let params = vec![
///     RowValues::Int(1),
///     RowValues::Text("alice".into()),
///     RowValues::Bool(true),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Text/string value
    Text(String),
    /// Integer value (32-bit), as some drivers report narrow columns
    Int32(i32),
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// Binary data
    Blob(Vec<u8>),
    /// NULL value
    Null,
    /// JSON value
    JSON(JsonValue),
}

impl RowValues {
    /// Short name of the variant, used in error messages and logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            RowValues::Text(_) => "text",
            RowValues::Int32(_) => "int32",
            RowValues::Int(_) => "int64",
            RowValues::Float(_) => "float",
            RowValues::Bool(_) => "bool",
            RowValues::Timestamp(_) => "timestamp",
            RowValues::Blob(_) => "bytes",
            RowValues::Null => "null",
            RowValues::JSON(_) => "json",
        }
    }
}
