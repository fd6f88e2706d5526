//! Binding engine for lightweight SQL data access.
//!
//! Three pieces, none of which touch a connection:
//!
//! - [`extract_named_parameters`] rewrites `:name` / `@name` placeholders to
//!   positional `?` markers and returns the names in source order.
//! - [`FieldMapCache`] resolves, once per record type, the mapping from
//!   external column/parameter names to record fields.
//! - [`coerce`] assigns one scanned [`RowValues`] into one typed
//!   [`Destination`] following a fixed rule table.
//!
//! [`Binder`] combines them for a single call:
//!
//! ```rust
//! use sql_binding::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! bind_record!(Person {
//!     name => "name,omitempty",
//!     age,
//! });
//!
//! let binder = Binder::default();
//! let bound = binder
//!     .bind(
//!         "INSERT INTO people (name, age) VALUES (:name, :age)",
//!         &Person { name: "ada".into(), age: 36 },
//!     )
//!     .unwrap();
//! assert_eq!(bound.query, "INSERT INTO people (name, age) VALUES (?, ?)");
//! assert_eq!(bound.params, vec![RowValues::Text("ada".into()), RowValues::Int(36)]);
//! ```

pub mod binder;
pub mod coercion;
pub mod error;
pub mod extraction;
pub mod field_map;
mod macros;
pub mod options;
pub mod prelude;
pub mod record;
pub mod row;
pub mod types;

pub use binder::{BatchQuery, Binder, QueryAndParams};
pub use coercion::{coerce, coerce_with};
pub use error::SqlBindError;
pub use extraction::{
    ParameterPrefix, detect_prefix, extract_named_parameters, extract_named_parameters_auto,
};
pub use field_map::{FieldMap, FieldMapCache};
pub use options::{BindOptions, BindOptionsBuilder, CoercionPolicy, UnknownColumns};
pub use record::{BindField, Destination, DestinationKind, FieldDef, Record};
pub use row::ScannedRow;
pub use types::RowValues;
