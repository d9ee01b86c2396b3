use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;

use harrow::common::path::NavigablePath;
use harrow::exec::callback::AfterLoadCallback;
use harrow::exec::context::{ExecutionContext, Session};
use harrow::exec::options::QueryOptions;
use harrow::results::assembler::{
    DomainResultAssembler, EntityAssembler, ResultValue, ScalarAssembler,
};
use harrow::results::consumer::consume_all;
use harrow::results::error::ResultsError;
use harrow::results::row_processing::{RowProcessingState, ValuesSourceProcessingState};
use harrow::results::row_reader::{RowReader, StandardRowReader, TupleTransformer};
use harrow::values::source::InMemoryValuesSource;
use harrow::values::value::SqlValue;

// Declare the common module for test utilities using a path attribute
#[path = "../common/mod.rs"]
mod common;
use common::{customer_initializer, customer_path, default_order_row_state, order_row_state};

fn order_reader() -> StandardRowReader<TupleTransformer> {
    let assemblers: Vec<Box<dyn DomainResultAssembler>> = vec![
        Box::new(ScalarAssembler::new(0)),
        Box::new(EntityAssembler::new(customer_path())),
        Box::new(ScalarAssembler::new(3)),
    ];
    StandardRowReader::new(assemblers, vec![customer_initializer()], TupleTransformer)
}

/// Entity graph nodes are reconstituted per row and absent associations
/// materialize as null.
#[test]
fn test_entity_materialization() -> Result<()> {
    let mut reader = order_reader();
    let mut state = default_order_row_state(reader.initializers());

    let rows = consume_all(&mut reader, &mut state)?;
    assert_eq!(rows.len(), 3);

    let first = &rows[0];
    assert_eq!(first[0], ResultValue::Scalar(SqlValue::Integer(100)));
    let customer = first[1].as_entity().expect("customer entity expected");
    assert_eq!(customer.entity_name(), "Customer");
    assert_eq!(customer.key(), &SqlValue::Integer(1));
    assert_eq!(
        customer.attribute("name"),
        Some(&SqlValue::Text("Ada".to_string()))
    );
    assert_eq!(first[2], ResultValue::Scalar(SqlValue::Float(9.5)));

    // Order 101 has a NULL customer key; the association is absent.
    assert!(rows[1][1].is_null());
    assert_eq!(rows[1][0], ResultValue::Scalar(SqlValue::Integer(101)));

    let last_customer = rows[2][1].as_entity().expect("customer entity expected");
    assert_eq!(last_customer.key(), &SqlValue::Integer(2));
    Ok(())
}

/// Each row resolves its own entity instance; state from one row never
/// leaks into the next.
#[test]
fn test_per_row_instances_do_not_leak() -> Result<()> {
    let mut reader = order_reader();
    let mut state = default_order_row_state(reader.initializers());

    let rows = consume_all(&mut reader, &mut state)?;
    let first = rows[0][1].as_entity().expect("entity expected");
    let last = rows[2][1].as_entity().expect("entity expected");
    assert_ne!(first.key(), last.key());
    assert_ne!(first.attribute("name"), last.attribute("name"));
    Ok(())
}

#[test]
fn test_row_window_with_entities() -> Result<()> {
    let mut reader = order_reader();
    let state_initializers = reader.initializers().to_vec();
    let mut state = order_row_state(
        ExecutionContext::new(Session::open()),
        QueryOptions::with_row_window(Some(1), Some(1)),
        &state_initializers,
    );

    let rows = consume_all(&mut reader, &mut state)?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], ResultValue::Scalar(SqlValue::Integer(101)));
    Ok(())
}

#[test]
fn test_after_load_actions_run_once_at_finish_up() -> Result<()> {
    let invocations = Rc::new(Cell::new(0u32));
    let counter = invocations.clone();

    let mut context =
        ExecutionContext::with_callback(Session::open(), Box::new(AfterLoadCallback::new()));
    context
        .callback_mut()
        .register_after_load(Box::new(move |_: &Session| counter.set(counter.get() + 1)));

    let mut reader = order_reader();
    let state_initializers = reader.initializers().to_vec();
    let mut state = order_row_state(context, QueryOptions::default(), &state_initializers);

    assert_eq!(invocations.get(), 0);
    let rows = consume_all(&mut reader, &mut state)?;
    assert_eq!(rows.len(), 3);
    assert_eq!(invocations.get(), 1);

    // Actions drained at finish-up; a second finish-up has no effect.
    state.source_processing_state_mut().finish_up();
    assert_eq!(invocations.get(), 1);
    Ok(())
}

/// An entity assembler whose path has no registered initializer is a
/// configuration error, not a silent null.
#[test]
fn test_missing_initializer_is_an_error() {
    let assemblers: Vec<Box<dyn DomainResultAssembler>> = vec![Box::new(EntityAssembler::new(
        NavigablePath::root("order").append("shipping"),
    ))];
    let mut reader = StandardRowReader::new(assemblers, vec![customer_initializer()], TupleTransformer);
    let state_initializers = reader.initializers().to_vec();
    let mut state = default_order_row_state(&state_initializers);

    let err = consume_all(&mut reader, &mut state).expect_err("expected initialization error");
    match err {
        ResultsError::Initialization { path, .. } => {
            assert_eq!(path, NavigablePath::root("order").append("shipping"));
        }
        other => panic!("expected Initialization error, got {:?}", other),
    }
}

#[test]
fn test_bulk_generated_rows() -> Result<()> {
    let row_count = 200 + (rand::random::<u32>() % 100) as i64;
    let rows: Vec<Vec<SqlValue>> = (0..row_count)
        .map(|i| {
            vec![
                SqlValue::Integer(i),
                SqlValue::Integer(i % 17),
                SqlValue::Text(format!("Customer {}", i % 17)),
                SqlValue::Float(i as f64 * 0.25),
            ]
        })
        .collect();

    let source = InMemoryValuesSource::new(common::order_columns(), rows)?;
    let mut reader = order_reader();
    let mut state = RowProcessingState::new(
        ValuesSourceProcessingState::new(ExecutionContext::new(Session::open())),
        QueryOptions::default(),
        reader.initializers(),
        Box::new(source),
    )?;

    let results = consume_all(&mut reader, &mut state)?;
    assert_eq!(results.len(), row_count as usize);
    assert_eq!(
        state.source_processing_state().rows_processed(),
        row_count as usize
    );

    // Spot check an arbitrary row.
    let probe = results[results.len() / 2][1]
        .as_entity()
        .expect("entity expected");
    assert_eq!(probe.entity_name(), "Customer");
    Ok(())
}
