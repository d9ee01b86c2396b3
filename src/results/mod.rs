// Results Module
//
// The result-processing core: the row cursor, execution-scoped state,
// initializers, assemblers, the row reader, and the list consumer.

pub mod assembler;
pub mod consumer;
pub mod error;
pub mod initializer;
pub mod row_processing;
pub mod row_reader;

pub use assembler::{DomainResultAssembler, EntityAssembler, ResultValue, ScalarAssembler};
pub use consumer::consume_all;
pub use error::{ResultsError, ResultsResult};
pub use initializer::{
    EntityFetch, EntityInitializer, EntityInstance, Initializer, SharedInitializer,
};
pub use row_processing::{ParameterBindingContext, RowProcessingState, ValuesSourceProcessingState};
pub use row_reader::{RowReader, RowTransformer, StandardRowReader, TupleTransformer};
