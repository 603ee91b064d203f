//! Structural diff output types.
//!
//! Every set is a sorted `Vec<NodeId>` so serialized diffs are deterministic.

use rbtrace_core_types::NodeId;
use serde::{Deserialize, Serialize};

/// Delta between two consecutive snapshot exports.
///
/// `recolored` and `moved` are computed independently, so a node that was
/// both recolored and relinked by the same step appears in both sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructuralDiff {
    /// Nodes present now but not before
    pub added: Vec<NodeId>,
    /// Nodes present before but not now
    pub removed: Vec<NodeId>,
    /// Nodes present in both whose color changed
    pub recolored: Vec<NodeId>,
    /// Nodes present in both with any of parent, left or right changed
    pub moved: Vec<NodeId>,
}

impl StructuralDiff {
    /// True when no node was added, removed, recolored or moved
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.recolored.is_empty()
            && self.moved.is_empty()
    }

    /// Sorted, de-duplicated union of all four sets
    pub fn touched(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .added
            .iter()
            .chain(&self.removed)
            .chain(&self.recolored)
            .chain(&self.moved)
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(StructuralDiff::default().is_empty());
    }

    #[test]
    fn test_touched_merges_overlapping_sets() {
        let diff = StructuralDiff {
            added: vec![NodeId(3)],
            removed: vec![],
            recolored: vec![NodeId(1), NodeId(2)],
            moved: vec![NodeId(2)],
        };
        assert!(!diff.is_empty());
        assert_eq!(diff.touched(), vec![NodeId(1), NodeId(2), NodeId(3)]);
    }
}
