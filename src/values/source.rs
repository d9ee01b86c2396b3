// Tabular Values Source
//
// The forward-only source abstraction the row cursor reads from. A source
// yields one row of raw column values at a time; iteration is strictly
// sequential and single-pass.

use crate::results::error::{ResultsError, ResultsResult};
use crate::values::value::SqlValue;

/// Column-level metadata for a values source.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuesMetadata {
    column_names: Vec<String>,
}

impl ValuesMetadata {
    pub fn new(column_names: Vec<String>) -> Self {
        ValuesMetadata { column_names }
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Zero-based position of a named column, if present.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }
}

/// A forward-only tabular source of raw column values.
///
/// `advance` moves to the next row; `row` is valid only after an `advance`
/// that returned `Ok(true)` and before the next `advance`. I/O failures
/// surface from `advance` and terminate iteration for the caller.
pub trait ValuesSource {
    fn metadata(&self) -> &ValuesMetadata;

    /// Move to the next row. Returns `Ok(false)` on exhaustion.
    fn advance(&mut self) -> ResultsResult<bool>;

    /// The current row's column values. Callers must only call this after
    /// a successful `advance`; implementations may panic otherwise.
    fn row(&self) -> &[SqlValue];
}

/// A values source over rows held in memory, used for tests and for
/// adapting already-fetched result batches.
pub struct InMemoryValuesSource {
    metadata: ValuesMetadata,
    rows: std::vec::IntoIter<Vec<SqlValue>>,
    current: Option<Vec<SqlValue>>,
}

impl InMemoryValuesSource {
    /// Create a source over `rows`. Every row must match the column count
    /// of `column_names`.
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<SqlValue>>) -> ResultsResult<Self> {
        let metadata = ValuesMetadata::new(column_names);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != metadata.column_count() {
                return Err(ResultsError::Source(format!(
                    "row {} has {} values, but source declares {} columns",
                    index,
                    row.len(),
                    metadata.column_count()
                )));
            }
        }
        Ok(InMemoryValuesSource {
            metadata,
            rows: rows.into_iter(),
            current: None,
        })
    }
}

impl ValuesSource for InMemoryValuesSource {
    fn metadata(&self) -> &ValuesMetadata {
        &self.metadata
    }

    fn advance(&mut self) -> ResultsResult<bool> {
        self.current = self.rows.next();
        Ok(self.current.is_some())
    }

    fn row(&self) -> &[SqlValue] {
        self.current
            .as_deref()
            .expect("row access with no current row loaded")
    }
}
