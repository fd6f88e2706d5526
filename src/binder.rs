//! Per-call glue combining extraction, field maps, and coercion.
//!
//! Nothing here talks to a database: [`Binder::bind`] produces the rewritten
//! query and its ordered parameters, and [`Binder::scan_row`] fills a record
//! from a row the caller already fetched.

use std::borrow::Cow;
use std::sync::Arc;

use crate::coercion::coerce_with;
use crate::error::SqlBindError;
use crate::extraction::extract_named_parameters;
use crate::field_map::{FieldMap, FieldMapCache};
use crate::options::{BindOptions, UnknownColumns};
use crate::record::Record;
use crate::row::ScannedRow;
use crate::types::RowValues;

/// A query string with its parameters
///
/// This is used to group a query with its positional parameters, in the order
/// the query engine consumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAndParams {
    /// The SQL query string
    pub query: String,
    /// The parameters to be bound to the query
    pub params: Vec<RowValues>,
}

impl QueryAndParams {
    pub fn new(query: impl Into<String>, params: Vec<RowValues>) -> Self {
        Self {
            query: query.into(),
            params,
        }
    }

    pub fn new_without_params(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }
}

/// One rewritten query with a parameter set per record.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchQuery {
    pub query: String,
    pub param_sets: Vec<Vec<RowValues>>,
}

/// Binding context: options plus a shared field map cache.
#[derive(Debug, Clone, Default)]
pub struct Binder {
    cache: Arc<FieldMapCache>,
    options: BindOptions,
}

impl Binder {
    #[must_use]
    pub fn new(options: BindOptions) -> Self {
        Self::with_cache(options, Arc::new(FieldMapCache::new()))
    }

    /// Create a binder that shares `cache` with other binders.
    #[must_use]
    pub fn with_cache(options: BindOptions, cache: Arc<FieldMapCache>) -> Self {
        Self { cache, options }
    }

    #[must_use]
    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<FieldMapCache> {
        &self.cache
    }

    /// Rewrite `query` using the configured prefix.
    #[must_use]
    pub fn extract<'q>(&self, query: &'q str) -> (Cow<'q, str>, Vec<String>) {
        match self.options.prefix.resolve(query) {
            Some(prefix) => extract_named_parameters(query, prefix),
            None => (Cow::Borrowed(query), Vec::new()),
        }
    }

    /// Rewrite `query` and collect the named parameters from `record`.
    ///
    /// # Errors
    ///
    /// Returns `SqlBindError::MissingField` if a parameter has no matching
    /// field; no partial parameter list is produced.
    pub fn bind<R: Record>(&self, query: &str, record: &R) -> Result<QueryAndParams, SqlBindError> {
        let (sql, names) = self.extract(query);
        let map = self.cache.resolve::<R>();
        let params = collect_params(&map, &names, record)?;
        Ok(QueryAndParams::new(sql, params))
    }

    /// Rewrite `query` once and collect a parameter set for every record.
    ///
    /// # Errors
    ///
    /// Returns `SqlBindError::ParameterError` for an empty batch and
    /// `SqlBindError::MissingField` if a parameter has no matching field.
    pub fn bind_all<R: Record>(&self, query: &str, records: &[R]) -> Result<BatchQuery, SqlBindError> {
        if records.is_empty() {
            return Err(SqlBindError::ParameterError(
                "batch bind requires at least one record".to_string(),
            ));
        }

        let (sql, names) = self.extract(query);
        let map = self.cache.resolve::<R>();
        let param_sets = records
            .iter()
            .map(|record| collect_params(&map, &names, record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BatchQuery {
            query: sql.into_owned(),
            param_sets,
        })
    }

    /// Coerce every column of `row` into the matching field of `target`.
    ///
    /// # Errors
    ///
    /// Returns `SqlBindError::InvalidFieldType` for a bytes value the field
    /// cannot hold, `SqlBindError::ConversionError` for unparsable numbers
    /// under the strict policy, and `SqlBindError::UnmappedColumn` when
    /// unknown columns are configured as errors.
    pub fn scan_row<R: Record>(&self, row: &ScannedRow, target: &mut R) -> Result<(), SqlBindError> {
        let map = self.cache.resolve::<R>();
        for (column, value) in row.iter() {
            let slot = match map.get(column) {
                Some(ident) => target.field_slot(ident),
                None => None,
            };
            let Some(slot) = slot else {
                match self.options.unknown_columns {
                    UnknownColumns::Skip => {
                        tracing::trace!(column, "skipping column without a field");
                        continue;
                    }
                    UnknownColumns::Error => {
                        return Err(SqlBindError::UnmappedColumn(column.to_string()));
                    }
                }
            };
            coerce_with(slot, value, self.options.coercion)?;
        }
        Ok(())
    }

    /// Scan each row into a fresh `R::default()`.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Binder::scan_row`].
    pub fn scan_rows<R: Record + Default>(&self, rows: &[ScannedRow]) -> Result<Vec<R>, SqlBindError> {
        rows.iter().map(|row| self.scan_new(row)).collect()
    }

    /// Scan the first row, if any.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Binder::scan_row`].
    pub fn scan_one<R: Record + Default>(&self, rows: &[ScannedRow]) -> Result<Option<R>, SqlBindError> {
        rows.first().map(|row| self.scan_new(row)).transpose()
    }

    fn scan_new<R: Record + Default>(&self, row: &ScannedRow) -> Result<R, SqlBindError> {
        let mut record = R::default();
        self.scan_row(row, &mut record)?;
        Ok(record)
    }
}

fn collect_params<R: Record>(
    map: &FieldMap,
    names: &[String],
    record: &R,
) -> Result<Vec<RowValues>, SqlBindError> {
    names
        .iter()
        .map(|name| {
            map.get(name)
                .and_then(|ident| record.field_value(ident))
                .ok_or_else(|| SqlBindError::MissingField(name.clone()))
        })
        .collect()
}
