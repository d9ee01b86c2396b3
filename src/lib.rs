// Harrow — row-at-a-time materialization of tabular query results

pub mod common;
pub mod exec;
pub mod results;
pub mod values;

// Re-export key items for convenient access
pub use common::path::NavigablePath;
pub use exec::context::{ExecutionContext, Session};
pub use exec::options::QueryOptions;
pub use results::consumer::consume_all;
pub use results::error::{ResultsError, ResultsResult};
pub use results::row_processing::{RowProcessingState, ValuesSourceProcessingState};
pub use results::row_reader::StandardRowReader;
pub use values::source::{InMemoryValuesSource, ValuesSource};
pub use values::value::SqlValue;
