// Row Processing State
//
// The forward-only row cursor over a tabular values source, consumed by
// row-reading logic during a single query execution. One instance exists
// per execution; it owns the source and the execution-scoped state,
// buffers exactly one row at a time, and resolves initializers by path.
//
// The cursor has two states: NoRow (initial, after finish_row, and after
// an advance that hit end-of-data) and RowLoaded (after a successful
// advance). Only column() requires RowLoaded. Iteration is single-threaded
// and single-pass; failures from the source terminate it for the caller.

use std::sync::Arc;

use log::{debug, trace};

use crate::common::path::NavigablePath;
use crate::exec::callback::Callback;
use crate::exec::context::{ExecutionContext, Session};
use crate::exec::options::QueryOptions;
use crate::results::error::{ResultsError, ResultsResult};
use crate::results::initializer::{EntityFetch, SharedInitializer};
use crate::values::source::{ValuesMetadata, ValuesSource};
use crate::values::value::SqlValue;

/// State shared by all rows produced within one query execution.
pub struct ValuesSourceProcessingState {
    context: ExecutionContext,
    rows_processed: usize,
}

impl ValuesSourceProcessingState {
    pub fn new(context: ExecutionContext) -> Self {
        ValuesSourceProcessingState {
            context,
            rows_processed: 0,
        }
    }

    pub fn execution_context(&self) -> &ExecutionContext {
        &self.context
    }

    pub fn execution_context_mut(&mut self) -> &mut ExecutionContext {
        &mut self.context
    }

    pub fn session(&self) -> &Session {
        self.context.session()
    }

    /// Rows pulled from the source so far in this execution.
    pub fn rows_processed(&self) -> usize {
        self.rows_processed
    }

    pub(crate) fn record_row(&mut self) {
        self.rows_processed += 1;
    }

    /// End-of-execution work: runs the registered after-load actions
    /// against this execution's session.
    pub fn finish_up(&mut self) {
        debug!(
            "finishing up result processing, {} rows processed",
            self.rows_processed
        );
        self.context.invoke_after_load_actions();
    }
}

/// Placeholder for the domain-parameter binding capability. Deliberately
/// unsupported in this layer; it cannot be constructed.
#[derive(Debug)]
pub struct ParameterBindingContext {
    _private: (),
}

/// The per-execution row cursor.
pub struct RowProcessingState {
    source_state: ValuesSourceProcessingState,
    options: QueryOptions,
    initializers: Vec<(NavigablePath, SharedInitializer)>,
    source: Box<dyn ValuesSource>,
    current_row: Option<Vec<SqlValue>>,
}

impl RowProcessingState {
    /// Build the cursor for one execution. Captures each initializer's
    /// path up front and rejects duplicate registrations, so first-match
    /// lookup can never silently shadow a distinct initializer.
    pub fn new(
        source_state: ValuesSourceProcessingState,
        options: QueryOptions,
        initializers: &[SharedInitializer],
        source: Box<dyn ValuesSource>,
    ) -> ResultsResult<Self> {
        let mut keyed: Vec<(NavigablePath, SharedInitializer)> =
            Vec::with_capacity(initializers.len());
        for shared in initializers {
            let path = shared.lock().navigable_path().clone();
            if keyed.iter().any(|(existing, _)| *existing == path) {
                return Err(ResultsError::DuplicateInitializerPath(path));
            }
            keyed.push((path, Arc::clone(shared)));
        }

        debug!(
            "row processing state created: {} initializers, {} columns",
            keyed.len(),
            source.metadata().column_count()
        );

        Ok(RowProcessingState {
            source_state,
            options,
            initializers: keyed,
            source,
            current_row: None,
        })
    }

    /// Pull the next row from the source. On success the row's column
    /// values are captured into the current-row buffer; on exhaustion the
    /// buffer is cleared. Source failures propagate untouched — iteration
    /// is a single forward-only pass with no retry.
    pub fn advance(&mut self) -> ResultsResult<bool> {
        if self.source.advance()? {
            self.current_row = Some(self.source.row().to_vec());
            self.source_state.record_row();
            trace!("advanced to row {}", self.source_state.rows_processed());
            Ok(true)
        } else {
            self.current_row = None;
            Ok(false)
        }
    }

    /// The raw value at a zero-based column position of the current row.
    ///
    /// Contract: only valid between a successful [`advance`](Self::advance)
    /// and [`finish_row`](Self::finish_row). Calling with no row loaded is
    /// a sequencing bug in the caller and panics.
    pub fn column(&self, position: usize) -> &SqlValue {
        let row = self
            .current_row
            .as_ref()
            .expect("column access with no current row loaded");
        &row[position]
    }

    pub fn has_current_row(&self) -> bool {
        self.current_row.is_some()
    }

    /// Invalidate the current row buffer once the row is fully consumed.
    /// Idempotent.
    pub fn finish_row(&mut self) {
        self.current_row = None;
    }

    /// The initializer registered under exactly `path`, or `None` — a
    /// normal, expected outcome callers must handle.
    pub fn resolve_initializer(&self, path: &NavigablePath) -> Option<&SharedInitializer> {
        // Initializer count is bounded by result shape complexity; a
        // linear scan stays simpler than a map at that size.
        self.initializers
            .iter()
            .find(|(registered, _)| registered == path)
            .map(|(_, initializer)| initializer)
    }

    pub fn session(&self) -> &Session {
        self.source_state.session()
    }

    pub fn query_options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn callback(&self) -> &dyn Callback {
        self.source_state.execution_context().callback()
    }

    pub fn source_processing_state(&self) -> &ValuesSourceProcessingState {
        &self.source_state
    }

    pub fn source_processing_state_mut(&mut self) -> &mut ValuesSourceProcessingState {
        &mut self.source_state
    }

    pub fn metadata(&self) -> &ValuesMetadata {
        self.source.metadata()
    }

    /// Domain-parameter binding is not supported by this layer; this fails
    /// immediately rather than returning a degraded value.
    pub fn parameter_binding_context(&self) -> ResultsResult<&ParameterBindingContext> {
        Err(ResultsError::NotYetImplemented(
            "domain parameter binding context",
        ))
    }

    /// Extension point reserved for marking an association as confirmed
    /// absent. No observable effect in this version; must not fail.
    pub fn register_non_exists(&mut self, _fetch: &EntityFetch) {}
}
