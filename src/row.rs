use std::collections::HashMap;
use std::sync::Arc;

use crate::types::RowValues;

/// One row as scanned from the query engine: column names plus values.
#[derive(Debug, Clone)]
pub struct ScannedRow {
    /// The column names for this row (shared across all rows in a result set)
    pub column_names: Arc<Vec<String>>,
    /// The values for this row, in column order
    pub values: Vec<RowValues>,
    column_index_cache: Arc<HashMap<String, usize>>,
}

impl ScannedRow {
    /// Create a row, indexing the column names for lookup.
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<RowValues>) -> Self {
        let cache = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<HashMap<_, _>>(),
        );
        Self {
            column_names,
            values,
            column_index_cache: cache,
        }
    }

    /// Create a row that reuses another row's columns and index.
    #[must_use]
    pub fn sibling(&self, values: Vec<RowValues>) -> Self {
        Self {
            column_names: Arc::clone(&self.column_names),
            values,
            column_index_cache: Arc::clone(&self.column_index_cache),
        }
    }

    #[must_use]
    pub fn get_column_index(&self, column_name: &str) -> Option<usize> {
        self.column_index_cache.get(column_name).copied()
    }

    /// Get a value from the row by column name
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.get_column_index(column_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a value from the row by column index
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.values.get(index)
    }

    /// Iterate `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValues)> {
        self.column_names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Column name to value map. With duplicate column names the last one wins.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, RowValues> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ScannedRow {
        ScannedRow::new(
            Arc::new(vec!["id".to_string(), "name".to_string()]),
            vec![RowValues::Int(1), RowValues::Text("alice".into())],
        )
    }

    #[test]
    fn looks_up_by_name_and_index() {
        let row = row();
        assert_eq!(row.get("name"), Some(&RowValues::Text("alice".into())));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.get_by_index(0), Some(&RowValues::Int(1)));
        assert_eq!(row.get_by_index(5), None);
    }

    #[test]
    fn sibling_shares_columns() {
        let first = row();
        let second = first.sibling(vec![RowValues::Int(2), RowValues::Null]);
        assert!(Arc::ptr_eq(&first.column_names, &second.column_names));
        assert_eq!(second.get("id"), Some(&RowValues::Int(2)));
    }

    #[test]
    fn converts_to_map() {
        let map = row().to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["id"], RowValues::Int(1));
    }
}
