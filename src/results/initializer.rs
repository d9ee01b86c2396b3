// Initializers
//
// An initializer reconstitutes one node of the result's entity/value graph
// from the current row's raw column values. Initializers are constructed
// once per execution, addressed by navigable path, and reused across all
// rows; any per-row state is cleared by finish_row.

use std::sync::Arc;

use linked_hash_map::LinkedHashMap;
use parking_lot::Mutex;

use crate::common::path::NavigablePath;
use crate::results::error::ResultsResult;
use crate::results::row_processing::RowProcessingState;
use crate::values::value::SqlValue;

/// One node of the result graph, reconstituted per row.
pub trait Initializer {
    /// The path this initializer is registered under.
    fn navigable_path(&self) -> &NavigablePath;

    /// Resolve this initializer's instance from the current row. Called
    /// once per row, before assemblers run; a repeated call within the
    /// same row is a no-op.
    fn initialize_instance(&mut self, row: &RowProcessingState) -> ResultsResult<()>;

    /// Clear per-row state once the row is fully consumed.
    fn finish_row(&mut self);

    /// The entity instance produced for the current row, if this
    /// initializer produces entities and the row carried one.
    fn entity_instance(&self) -> Option<&EntityInstance> {
        None
    }
}

/// Initializers are shared between the row reader that drives them and the
/// cursor's path lookup table.
pub type SharedInitializer = Arc<Mutex<dyn Initializer>>;

/// Descriptor of a fetched entity association.
#[derive(Debug, Clone)]
pub struct EntityFetch {
    navigable_path: NavigablePath,
    entity_name: String,
}

impl EntityFetch {
    pub fn new(navigable_path: NavigablePath, entity_name: &str) -> Self {
        EntityFetch {
            navigable_path,
            entity_name: entity_name.to_string(),
        }
    }

    pub fn navigable_path(&self) -> &NavigablePath {
        &self.navigable_path
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }
}

/// A reconstituted entity: name, key, and attribute state in declaration
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityInstance {
    entity_name: String,
    key: SqlValue,
    state: LinkedHashMap<String, SqlValue>,
}

impl EntityInstance {
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn key(&self) -> &SqlValue {
        &self.key
    }

    pub fn attribute(&self, name: &str) -> Option<&SqlValue> {
        self.state.get(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&String, &SqlValue)> {
        self.state.iter()
    }
}

/// Initializer that builds an [`EntityInstance`] from a key column and a
/// set of attribute columns. A `NULL` key means the row carries no
/// instance for this path (absent association).
pub struct EntityInitializer {
    navigable_path: NavigablePath,
    entity_name: String,
    key_position: usize,
    attributes: Vec<(String, usize)>,
    current: Option<EntityInstance>,
}

impl EntityInitializer {
    pub fn new(
        navigable_path: NavigablePath,
        entity_name: &str,
        key_position: usize,
        attributes: Vec<(String, usize)>,
    ) -> Self {
        EntityInitializer {
            navigable_path,
            entity_name: entity_name.to_string(),
            key_position,
            attributes,
            current: None,
        }
    }

    /// Wrap for sharing between the row reader and the cursor.
    pub fn shared(self) -> SharedInitializer {
        Arc::new(Mutex::new(self))
    }
}

impl Initializer for EntityInitializer {
    fn navigable_path(&self) -> &NavigablePath {
        &self.navigable_path
    }

    fn initialize_instance(&mut self, row: &RowProcessingState) -> ResultsResult<()> {
        if self.current.is_some() {
            return Ok(());
        }

        let key = row.column(self.key_position).clone();
        if key.is_null() {
            return Ok(());
        }

        let mut state = LinkedHashMap::new();
        for (name, position) in &self.attributes {
            state.insert(name.clone(), row.column(*position).clone());
        }

        self.current = Some(EntityInstance {
            entity_name: self.entity_name.clone(),
            key,
            state,
        });
        Ok(())
    }

    fn finish_row(&mut self) {
        self.current = None;
    }

    fn entity_instance(&self) -> Option<&EntityInstance> {
        self.current.as_ref()
    }
}
