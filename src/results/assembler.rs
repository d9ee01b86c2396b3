// Domain Result Assemblers
//
// An assembler projects the current row into one result value: either a
// scalar pulled straight from a column position, or an entity produced by
// the initializer registered at the assembler's path.

use crate::common::path::NavigablePath;
use crate::results::error::{ResultsError, ResultsResult};
use crate::results::initializer::EntityInstance;
use crate::results::row_processing::RowProcessingState;
use crate::values::value::SqlValue;

/// One materialized value of a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    /// An absent entity (e.g. unmatched outer join).
    Null,
    Scalar(SqlValue),
    Entity(EntityInstance),
}

impl ResultValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ResultValue::Null)
    }

    pub fn as_scalar(&self) -> Option<&SqlValue> {
        match self {
            ResultValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&EntityInstance> {
        match self {
            ResultValue::Entity(instance) => Some(instance),
            _ => None,
        }
    }
}

/// Projects the current row into one result value. Assemblers run after
/// all initializers have resolved their instances for the row.
pub trait DomainResultAssembler {
    fn assemble(&self, row: &RowProcessingState) -> ResultsResult<ResultValue>;
}

/// Assembles the raw value at a fixed column position.
pub struct ScalarAssembler {
    position: usize,
}

impl ScalarAssembler {
    pub fn new(position: usize) -> Self {
        ScalarAssembler { position }
    }
}

impl DomainResultAssembler for ScalarAssembler {
    fn assemble(&self, row: &RowProcessingState) -> ResultsResult<ResultValue> {
        Ok(ResultValue::Scalar(row.column(self.position).clone()))
    }
}

/// Assembles the entity produced by the initializer registered at a path.
/// A missing registration is a configuration error; an initializer that
/// produced no instance for this row assembles to [`ResultValue::Null`].
pub struct EntityAssembler {
    navigable_path: NavigablePath,
}

impl EntityAssembler {
    pub fn new(navigable_path: NavigablePath) -> Self {
        EntityAssembler { navigable_path }
    }
}

impl DomainResultAssembler for EntityAssembler {
    fn assemble(&self, row: &RowProcessingState) -> ResultsResult<ResultValue> {
        let initializer = row.resolve_initializer(&self.navigable_path).ok_or_else(|| {
            ResultsError::Initialization {
                path: self.navigable_path.clone(),
                message: "no initializer registered for path".to_string(),
            }
        })?;

        let guard = initializer.lock();
        match guard.entity_instance() {
            Some(instance) => Ok(ResultValue::Entity(instance.clone())),
            None => Ok(ResultValue::Null),
        }
    }
}
