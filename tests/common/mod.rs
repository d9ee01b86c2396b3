use harrow::common::path::NavigablePath;
use harrow::exec::context::{ExecutionContext, Session};
use harrow::exec::options::QueryOptions;
use harrow::results::initializer::{EntityInitializer, SharedInitializer};
use harrow::results::row_processing::{RowProcessingState, ValuesSourceProcessingState};
use harrow::values::source::InMemoryValuesSource;
use harrow::values::value::SqlValue;

// Columns of the shared order/customer fixture:
// order_id, customer_id, customer_name, total
pub fn order_columns() -> Vec<String> {
    vec![
        "order_id".to_string(),
        "customer_id".to_string(),
        "customer_name".to_string(),
        "total".to_string(),
    ]
}

// Three orders; the second one has no customer (unmatched outer join).
pub fn order_rows() -> Vec<Vec<SqlValue>> {
    vec![
        vec![
            SqlValue::Integer(100),
            SqlValue::Integer(1),
            SqlValue::Text("Ada".to_string()),
            SqlValue::Float(9.5),
        ],
        vec![
            SqlValue::Integer(101),
            SqlValue::Null,
            SqlValue::Null,
            SqlValue::Float(0.0),
        ],
        vec![
            SqlValue::Integer(102),
            SqlValue::Integer(2),
            SqlValue::Text("Grace".to_string()),
            SqlValue::Float(42.0),
        ],
    ]
}

pub fn customer_path() -> NavigablePath {
    NavigablePath::root("order").append("customer")
}

pub fn customer_initializer() -> SharedInitializer {
    EntityInitializer::new(
        customer_path(),
        "Customer",
        1,
        vec![("id".to_string(), 1), ("name".to_string(), 2)],
    )
    .shared()
}

// Build a cursor over the order fixture with the given options and
// execution context.
pub fn order_row_state(
    context: ExecutionContext,
    options: QueryOptions,
    initializers: &[SharedInitializer],
) -> RowProcessingState {
    let source = InMemoryValuesSource::new(order_columns(), order_rows())
        .expect("fixture source construction failed");
    RowProcessingState::new(
        ValuesSourceProcessingState::new(context),
        options,
        initializers,
        Box::new(source),
    )
    .expect("fixture state construction failed")
}

pub fn default_order_row_state(initializers: &[SharedInitializer]) -> RowProcessingState {
    order_row_state(
        ExecutionContext::new(Session::open()),
        QueryOptions::default(),
        initializers,
    )
}
