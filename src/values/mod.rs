// Raw Values Module
//
// Raw column values and the tabular sources that yield them.

pub mod cached;
pub mod source;
pub mod value;

pub use cached::{encode_rows, CachedValuesSource};
pub use source::{InMemoryValuesSource, ValuesMetadata, ValuesSource};
pub use value::SqlValue;
