//! Structural diff computation engine.
//!
//! The entry point is [`compute_diff`], which compares two node exports keyed
//! by id. It is pure and linear in the number of nodes.

use crate::diff::model::StructuralDiff;
use crate::snapshot::export::NodeExport;
use rbtrace_core_types::NodeId;
use std::collections::HashMap;

/// Compute the structural delta from `previous` to `current`.
///
/// The first snapshot of an operation is diffed against an empty slice,
/// which reports every live node as added.
pub fn compute_diff(previous: &[NodeExport], current: &[NodeExport]) -> StructuralDiff {
    let before: HashMap<NodeId, &NodeExport> = previous.iter().map(|n| (n.id, n)).collect();
    let after: HashMap<NodeId, &NodeExport> = current.iter().map(|n| (n.id, n)).collect();

    let mut diff = StructuralDiff::default();

    for node in current {
        match before.get(&node.id) {
            None => diff.added.push(node.id),
            Some(old) => {
                if old.color != node.color {
                    diff.recolored.push(node.id);
                }
                if relinked(old, node) {
                    diff.moved.push(node.id);
                }
            }
        }
    }

    diff.removed = previous
        .iter()
        .filter(|n| !after.contains_key(&n.id))
        .map(|n| n.id)
        .collect();

    diff.added.sort_unstable();
    diff.removed.sort_unstable();
    diff.recolored.sort_unstable();
    diff.moved.sort_unstable();
    diff
}

/// Any of the three relations differs
fn relinked(old: &NodeExport, new: &NodeExport) -> bool {
    old.parent != new.parent || old.left != new.left || old.right != new.right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    fn export(
        id: u64,
        value: i64,
        color: Color,
        parent: Option<u64>,
        left: Option<u64>,
        right: Option<u64>,
    ) -> NodeExport {
        NodeExport {
            id: NodeId(id),
            value,
            color,
            parent: parent.map(NodeId),
            left: left.map(NodeId),
            right: right.map(NodeId),
        }
    }

    #[test]
    fn test_diff_against_empty_reports_all_added() {
        let current = vec![
            export(0, 10, Color::Black, None, Some(1), None),
            export(1, 5, Color::Red, Some(0), None, None),
        ];
        let diff = compute_diff(&[], &current);

        assert_eq!(diff.added, vec![NodeId(0), NodeId(1)]);
        assert!(diff.removed.is_empty());
        assert!(diff.recolored.is_empty());
        assert!(diff.moved.is_empty());
    }

    #[test]
    fn test_identical_exports_have_empty_diff() {
        let nodes = vec![export(0, 10, Color::Black, None, None, None)];
        assert!(compute_diff(&nodes, &nodes).is_empty());
    }

    #[test]
    fn test_recolor_and_move_are_independent() {
        let previous = vec![
            export(0, 10, Color::Black, None, Some(1), None),
            export(1, 5, Color::Red, Some(0), None, None),
        ];
        // 5 becomes the black root and 10 its red right child
        let current = vec![
            export(1, 5, Color::Black, None, None, Some(0)),
            export(0, 10, Color::Red, Some(1), None, None),
        ];
        let diff = compute_diff(&previous, &current);

        assert_eq!(diff.recolored, vec![NodeId(0), NodeId(1)]);
        assert_eq!(diff.moved, vec![NodeId(0), NodeId(1)]);
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn test_removed_node_and_parent_slot_change() {
        let previous = vec![
            export(0, 10, Color::Black, None, Some(1), None),
            export(1, 5, Color::Red, Some(0), None, None),
        ];
        let current = vec![export(0, 10, Color::Black, None, None, None)];
        let diff = compute_diff(&previous, &current);

        assert_eq!(diff.removed, vec![NodeId(1)]);
        assert_eq!(diff.moved, vec![NodeId(0)]);
        assert!(diff.recolored.is_empty());
    }

    #[test]
    fn test_value_change_alone_is_not_reported() {
        let previous = vec![export(0, 10, Color::Black, None, None, None)];
        let current = vec![export(0, 11, Color::Black, None, None, None)];
        assert!(compute_diff(&previous, &current).is_empty());
    }
}
