// Row Reader
//
// Reads one result row at a time from the cursor: drives the initializers
// for the row, runs the assemblers, and hands the assembled values to a
// transformer that shapes the caller's row type.

use crate::results::assembler::{DomainResultAssembler, ResultValue};
use crate::results::error::ResultsResult;
use crate::results::initializer::SharedInitializer;
use crate::results::row_processing::RowProcessingState;

/// Shapes the assembled values of one row into the caller's row type.
pub trait RowTransformer {
    type Output;

    fn transform(&self, values: Vec<ResultValue>) -> Self::Output;
}

/// Identity transformer: each row is the plain vector of result values.
pub struct TupleTransformer;

impl RowTransformer for TupleTransformer {
    type Output = Vec<ResultValue>;

    fn transform(&self, values: Vec<ResultValue>) -> Self::Output {
        values
    }
}

impl<R, F> RowTransformer for F
where
    F: Fn(Vec<ResultValue>) -> R,
{
    type Output = R;

    fn transform(&self, values: Vec<ResultValue>) -> Self::Output {
        self(values)
    }
}

/// Reads one row of output from the cursor.
pub trait RowReader {
    type Output;

    /// The initializers this reader drives; the same set must be
    /// registered with the cursor so assemblers can resolve them by path.
    fn initializers(&self) -> &[SharedInitializer];

    /// Produce one output row from the currently loaded row.
    fn read_row(&mut self, row: &RowProcessingState) -> ResultsResult<Self::Output>;

    /// Clear per-row state in the initializers.
    fn finish_row(&mut self);
}

/// Standard reader: a fixed assembler list over a fixed initializer set,
/// with a transformer shaping the output.
pub struct StandardRowReader<T: RowTransformer> {
    assemblers: Vec<Box<dyn DomainResultAssembler>>,
    initializers: Vec<SharedInitializer>,
    transformer: T,
}

impl<T: RowTransformer> StandardRowReader<T> {
    pub fn new(
        assemblers: Vec<Box<dyn DomainResultAssembler>>,
        initializers: Vec<SharedInitializer>,
        transformer: T,
    ) -> Self {
        StandardRowReader {
            assemblers,
            initializers,
            transformer,
        }
    }
}

impl<T: RowTransformer> RowReader for StandardRowReader<T> {
    type Output = T::Output;

    fn initializers(&self) -> &[SharedInitializer] {
        &self.initializers
    }

    fn read_row(&mut self, row: &RowProcessingState) -> ResultsResult<Self::Output> {
        // Initializers resolve their instances first; assemblers then pull
        // from them (or straight from the row).
        for initializer in &self.initializers {
            initializer.lock().initialize_instance(row)?;
        }

        let mut values = Vec::with_capacity(self.assemblers.len());
        for assembler in &self.assemblers {
            values.push(assembler.assemble(row)?);
        }

        Ok(self.transformer.transform(values))
    }

    fn finish_row(&mut self) {
        for initializer in &self.initializers {
            initializer.lock().finish_row();
        }
    }
}
