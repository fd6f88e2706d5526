//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::binder::{BatchQuery, Binder, QueryAndParams};
pub use crate::bind_record;
pub use crate::coercion::{coerce, coerce_with};
pub use crate::error::SqlBindError;
pub use crate::extraction::{
    ParameterPrefix, detect_prefix, extract_named_parameters, extract_named_parameters_auto,
};
pub use crate::field_map::{FieldMap, FieldMapCache};
pub use crate::options::{BindOptions, BindOptionsBuilder, CoercionPolicy, UnknownColumns};
pub use crate::record::{BindField, Destination, DestinationKind, FieldDef, Record};
pub use crate::row::ScannedRow;
pub use crate::types::RowValues;
