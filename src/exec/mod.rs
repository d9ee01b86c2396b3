// Execution Module
//
// Execution-scoped plumbing: session handle, query options, and the
// after-load callback capability.

pub mod callback;
pub mod context;
pub mod options;

pub use callback::{AfterLoadAction, AfterLoadCallback, Callback, NoopCallback};
pub use context::{ExecutionContext, Session};
pub use options::QueryOptions;
