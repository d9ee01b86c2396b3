// Query Options
//
// Immutable per-execution options carried by the row cursor. The default
// is an unbounded, writable execution.

/// Options fixed for the duration of one query execution.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Zero-based index of the first row to materialize.
    pub first_row: Option<usize>,
    /// Maximum number of rows to materialize.
    pub max_rows: Option<usize>,
    /// Driver fetch-size hint; not interpreted by this layer.
    pub fetch_size: Option<usize>,
    pub read_only: bool,
    /// Optional comment attached to the execution, for diagnostics.
    pub comment: Option<String>,
}

impl QueryOptions {
    /// Options restricted to a row window.
    pub fn with_row_window(first_row: Option<usize>, max_rows: Option<usize>) -> Self {
        QueryOptions {
            first_row,
            max_rows,
            ..QueryOptions::default()
        }
    }

    /// Number of leading rows the consumer should skip.
    pub fn rows_to_skip(&self) -> usize {
        self.first_row.unwrap_or(0)
    }

    pub fn has_row_window(&self) -> bool {
        self.first_row.is_some() || self.max_rows.is_some()
    }
}
