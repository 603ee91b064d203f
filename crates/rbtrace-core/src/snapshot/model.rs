//! Recorded snapshot type.

use rbtrace_core_types::{NodeId, SnapshotId};
use serde::{Deserialize, Serialize};

use crate::diff::model::StructuralDiff;
use crate::errors::Result;
use crate::snapshot::digest::compute_structure_digest;
use crate::snapshot::export::NodeExport;
use crate::snapshot::rebuild::ExportedTree;

/// Immutable picture of the tree after one step of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: SnapshotId,
    /// What the step did
    pub description: String,
    pub root: Option<NodeId>,
    /// Reachable nodes in in-order sequence, then any detached ones by id
    pub nodes: Vec<NodeExport>,
    /// Nodes the step concerns; only ids present in `nodes`
    pub highlight: Vec<NodeId>,
    /// Delta against the previous snapshot of the same operation
    pub diff: StructuralDiff,
}

impl Snapshot {
    pub fn node(&self, id: NodeId) -> Option<&NodeExport> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Record holding `value`, if any
    pub fn find_value(&self, value: i64) -> Option<&NodeExport> {
        self.nodes.iter().find(|n| n.value == value)
    }

    pub fn root_node(&self) -> Option<&NodeExport> {
        self.root.and_then(|id| self.node(id))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values in export order
    pub fn values(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    /// SHA256 digest of root and node records
    pub fn digest(&self) -> Result<String> {
        compute_structure_digest(self.root, &self.nodes)
    }

    /// Navigable, validated graph of this snapshot
    pub fn rebuild(&self) -> Result<ExportedTree> {
        ExportedTree::rebuild(self.root, &self.nodes)
    }
}
