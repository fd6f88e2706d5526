use thiserror::Error;

use crate::record::DestinationKind;

#[derive(Debug, Error)]
pub enum SqlBindError {
    #[error("Missing parameter in target: {0}")]
    MissingField(String),

    #[error("Invalid field type for {source_kind}: cannot assign to {destination}")]
    InvalidFieldType {
        source_kind: &'static str,
        destination: DestinationKind,
    },

    #[error("Value conversion error: {0}")]
    ConversionError(String),

    #[error("Column has no matching field: {0}")]
    UnmappedColumn(String),

    #[error("Parameter error: {0}")]
    ParameterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
