// Navigable Path
//
// Hierarchical path identifiers used to address parts of a result shape.
// Initializers are registered under a path and looked up by exact match.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dot-separated hierarchical path addressing one node of a result shape,
/// e.g. `order.customer.address`. Equality is full-path equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigablePath {
    full_path: String,
}

impl NavigablePath {
    /// Create a root path from a single name.
    pub fn root(name: &str) -> Self {
        NavigablePath {
            full_path: name.to_string(),
        }
    }

    /// Create a child path by appending a local name to this path.
    pub fn append(&self, name: &str) -> Self {
        NavigablePath {
            full_path: format!("{}.{}", self.full_path, name),
        }
    }

    /// The complete dotted path.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// The last segment of the path.
    pub fn local_name(&self) -> &str {
        match self.full_path.rsplit_once('.') {
            Some((_, local)) => local,
            None => &self.full_path,
        }
    }

    /// The enclosing path, or `None` for a root path.
    pub fn parent(&self) -> Option<NavigablePath> {
        self.full_path.rsplit_once('.').map(|(parent, _)| NavigablePath {
            full_path: parent.to_string(),
        })
    }

    pub fn is_root(&self) -> bool {
        !self.full_path.contains('.')
    }
}

impl fmt::Display for NavigablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path)
    }
}
