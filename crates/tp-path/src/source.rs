//! Where path nodes come from.
//!
//! Loading path data (database tables, client data files) belongs to the
//! host.  The engine only needs the ordered node list for one path id, which
//! it asks for through [`PathSource`].  [`PathTable`] is the in-memory
//! implementation: a flat row list shared by every path, filtered on lookup,
//! preserving row order.

use tp_core::PathId;

use crate::PathNode;

/// Read-only provider of per-path node lists.
pub trait PathSource {
    /// All nodes of `path`, in path order.  Empty if the path is unknown.
    fn nodes(&self, path: PathId) -> Vec<PathNode>;
}

/// A flat table of `(path, node)` rows.
#[derive(Clone, Debug, Default)]
pub struct PathTable {
    rows: Vec<(PathId, PathNode)>,
}

impl PathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.  Rows for one path keep their insertion order.
    pub fn push(&mut self, path: PathId, node: PathNode) {
        self.rows.push((path, node));
    }

    /// Append every node of `nodes` under `path`.
    pub fn extend_path(&mut self, path: PathId, nodes: impl IntoIterator<Item = PathNode>) {
        self.rows.extend(nodes.into_iter().map(|n| (path, n)));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PathSource for PathTable {
    fn nodes(&self, path: PathId) -> Vec<PathNode> {
        self.rows
            .iter()
            .filter(|(p, _)| *p == path)
            .map(|(_, n)| n.clone())
            .collect()
    }
}
