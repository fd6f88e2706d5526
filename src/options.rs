use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SqlBindError;
use crate::extraction::ParameterPrefix;

/// How byte values that fail to parse as numbers are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// Leave the destination unchanged and carry on.
    #[default]
    Lenient,
    /// Report the parse failure as an error.
    Strict,
}

/// What to do with a result column that has no matching record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownColumns {
    /// Skip the column.
    #[default]
    Skip,
    /// Fail the scan with `UnmappedColumn`.
    Error,
}

/// Options for a [`Binder`](crate::Binder).
///
/// ```rust
/// use sql_binding::prelude::*;
///
/// let options = BindOptions::default()
///     .with_prefix(ParameterPrefix::Colon)
///     .with_coercion(CoercionPolicy::Strict);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BindOptions {
    pub prefix: ParameterPrefix,
    pub coercion: CoercionPolicy,
    pub unknown_columns: UnknownColumns,
}

impl BindOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: ParameterPrefix) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub fn with_coercion(mut self, coercion: CoercionPolicy) -> Self {
        self.coercion = coercion;
        self
    }

    #[must_use]
    pub fn with_unknown_columns(mut self, unknown_columns: UnknownColumns) -> Self {
        self.unknown_columns = unknown_columns;
        self
    }

    /// Parse options from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `SqlBindError::ConfigError` if the JSON is malformed or names an
    /// unknown variant.
    pub fn from_json(json: &str) -> Result<Self, SqlBindError> {
        serde_json::from_str(json).map_err(|e| SqlBindError::ConfigError(e.to_string()))
    }
}

/// Fluent builder for [`BindOptions`].
#[derive(Debug, Clone, Default)]
pub struct BindOptionsBuilder {
    opts: BindOptions,
}

impl BindOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefix(mut self, prefix: ParameterPrefix) -> Self {
        self.opts.prefix = prefix;
        self
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.opts.coercion = if strict {
            CoercionPolicy::Strict
        } else {
            CoercionPolicy::Lenient
        };
        self
    }

    #[must_use]
    pub fn unknown_columns(mut self, unknown_columns: UnknownColumns) -> Self {
        self.opts.unknown_columns = unknown_columns;
        self
    }

    #[must_use]
    pub fn finish(self) -> BindOptions {
        self.opts
    }
}
