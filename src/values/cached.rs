// Cached Values Source
//
// Replays a previously captured row batch from its serialized form, so a
// query's raw results can be re-materialized without going back to the
// driver. Encoding is bincode over the full batch.

use crate::results::error::{ResultsError, ResultsResult};
use crate::values::source::{ValuesMetadata, ValuesSource};
use crate::values::value::SqlValue;

/// Encode a batch of rows for later replay through [`CachedValuesSource`].
pub fn encode_rows(rows: &[Vec<SqlValue>]) -> ResultsResult<Vec<u8>> {
    bincode::serialize(rows)
        .map_err(|e| ResultsError::Source(format!("failed to encode row batch: {}", e)))
}

/// A values source that replays a bincode-encoded row batch.
pub struct CachedValuesSource {
    metadata: ValuesMetadata,
    rows: std::vec::IntoIter<Vec<SqlValue>>,
    current: Option<Vec<SqlValue>>,
}

impl CachedValuesSource {
    /// Decode an encoded batch. Every decoded row must match the declared
    /// column count; a mismatch means the cache entry does not belong to
    /// this result shape.
    pub fn from_bytes(column_names: Vec<String>, bytes: &[u8]) -> ResultsResult<Self> {
        let rows: Vec<Vec<SqlValue>> = bincode::deserialize(bytes)
            .map_err(|e| ResultsError::Source(format!("failed to decode row batch: {}", e)))?;

        let metadata = ValuesMetadata::new(column_names);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != metadata.column_count() {
                return Err(ResultsError::Source(format!(
                    "cached row {} has {} values, but source declares {} columns",
                    index,
                    row.len(),
                    metadata.column_count()
                )));
            }
        }

        Ok(CachedValuesSource {
            metadata,
            rows: rows.into_iter(),
            current: None,
        })
    }
}

impl ValuesSource for CachedValuesSource {
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
