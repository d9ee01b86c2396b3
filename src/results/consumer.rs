// List Results Consumer
//
// Drives the single forward-only pass over an execution: advance the
// cursor, read each row, finish it, and collect the outputs. The first
// error terminates iteration and propagates to the caller.

use log::debug;

use crate::results::error::ResultsResult;
use crate::results::row_processing::RowProcessingState;
use crate::results::row_reader::RowReader;

/// Consume every remaining row of the execution into a list, honoring the
/// row window in the cursor's query options (`first_row` rows skipped,
/// at most `max_rows` collected). Runs execution finish-up (after-load
/// actions) on normal completion.
pub fn consume_all<R: RowReader>(
    reader: &mut R,
    row_state: &mut RowProcessingState,
) -> ResultsResult<Vec<R::Output>> {
    let to_skip = row_state.query_options().rows_to_skip();
    let max_rows = row_state.query_options().max_rows;

    let mut skipped = 0usize;
    let mut results = Vec::new();

    while row_state.advance()? {
        if skipped < to_skip {
            skipped += 1;
            reader.finish_row();
            row_state.finish_row();
            continue;
        }

        let output = reader.read_row(row_state)?;
        reader.finish_row();
        row_state.finish_row();
        results.push(output);

        if max_rows.is_some_and(|max| results.len() >= max) {
            break;
        }
    }

    row_state.source_processing_state_mut().finish_up();
    debug!("consumed {} result rows ({} skipped)", results.len(), skipped);
    Ok(results)
}
