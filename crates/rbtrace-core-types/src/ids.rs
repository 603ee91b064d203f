//! Identifier types for tree nodes, snapshots and operations
//!
//! All identifiers are small integers handed out by a monotonically
//! increasing counter owned by the tree. They are never reused until the
//! tree is reset, so consumers can key history and diff data on them.

use serde::{Deserialize, Serialize};

/// Stable identity of a tree node
///
/// Assigned once when the node is created. A node that is later removed
/// keeps its id retired; the next node gets a fresh one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// The identifier that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Identifier of a recorded snapshot, ascending in recording order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(pub u64);

impl SnapshotId {
    /// The identifier that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Snapshot numbering starts at 1
impl Default for SnapshotId {
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Identifier of a recorded insert or delete operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(pub u64);

impl OperationId {
    /// The identifier that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Operation numbering starts at 1
impl Default for OperationId {
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "op{}", self.0)
    }
}
