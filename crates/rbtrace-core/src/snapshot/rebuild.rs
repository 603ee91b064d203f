//! Graph reconstruction from snapshot exports.
//!
//! A snapshot only stores ids. [`ExportedTree::rebuild`] turns the records
//! back into a navigable graph and rejects exports whose links disagree.

use rbtrace_core_types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{RbTraceError, Result};
use crate::model::Color;
use crate::snapshot::export::NodeExport;

/// Recursive value/color structure of a tree, independent of node ids
///
/// Two trees with equal shapes are isomorphic as red-black trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeShape {
    pub value: i64,
    pub color: Color,
    pub left: Option<Box<TreeShape>>,
    pub right: Option<Box<TreeShape>>,
}

/// Node lookup used to walk any id-linked tree: value, color, left, right
pub type ShapeLookup<'a> = dyn Fn(NodeId) -> Option<(i64, Color, Option<NodeId>, Option<NodeId>)> + 'a;

impl TreeShape {
    /// Build the shape below `root`; `None` for an empty tree
    pub fn build(root: Option<NodeId>, lookup: &ShapeLookup<'_>) -> Option<TreeShape> {
        let (value, color, left, right) = lookup(root?)?;
        Some(TreeShape {
            value,
            color,
            left: Self::build(left, lookup).map(Box::new),
            right: Self::build(right, lookup).map(Box::new),
        })
    }

    /// Number of nodes in the shape
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |l| l.node_count())
            + self.right.as_ref().map_or(0, |r| r.node_count())
    }
}

/// Validated, navigable view over one snapshot's node records
#[derive(Debug, Clone)]
pub struct ExportedTree {
    root: Option<NodeId>,
    nodes: HashMap<NodeId, NodeExport>,
}

impl ExportedTree {
    /// Rebuild a graph from `root` and its export records.
    ///
    /// # Errors
    ///
    /// - `DuplicateNode` if an id occurs twice
    /// - `MissingRoot` if `root` is not among the records
    /// - `RootHasParent` if the root carries a parent back-reference
    /// - `DanglingReference` if a relation names an id not in the records
    /// - `ParentLinkMismatch` if a child's parent does not point back at its holder
    pub fn rebuild(root: Option<NodeId>, exports: &[NodeExport]) -> Result<Self> {
        let mut nodes = HashMap::with_capacity(exports.len());
        for export in exports {
            if nodes.insert(export.id, export.clone()).is_some() {
                return Err(RbTraceError::DuplicateNode { node_id: export.id });
            }
        }

        if let Some(root_id) = root {
            let root_node = nodes
                .get(&root_id)
                .ok_or(RbTraceError::MissingRoot { root_id })?;
            if let Some(parent_id) = root_node.parent {
                return Err(RbTraceError::RootHasParent {
                    node_id: root_id,
                    parent_id,
                });
            }
        }

        // Walk the slice, not the map, so the first reported error is stable
        for export in exports {
            if let Some(parent_id) = export.parent {
                if !nodes.contains_key(&parent_id) {
                    return Err(RbTraceError::DanglingReference {
                        node_id: export.id,
                        target_id: parent_id,
                    });
                }
            }
            for child_id in [export.left, export.right].into_iter().flatten() {
                let child = nodes
                    .get(&child_id)
                    .ok_or(RbTraceError::DanglingReference {
                        node_id: export.id,
                        target_id: child_id,
                    })?;
                if child.parent != Some(export.id) {
                    return Err(RbTraceError::ParentLinkMismatch {
                        node_id: child_id,
                        holder_id: export.id,
                        parent_id: child.parent,
                    });
                }
            }
        }

        Ok(Self { root, nodes })
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeExport> {
        self.nodes.get(&id)
    }

    pub fn shape(&self) -> Option<TreeShape> {
        TreeShape::build(self.root, &|id| {
            self.get(id).map(|n| (n.value, n.color, n.left, n.right))
        })
    }

    /// Values reachable from the root, ascending when the export is a valid tree
    pub fn in_order_values(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current.and_then(|id| self.get(id)) {
                stack.push(node);
                current = node.left;
            }
            if let Some(node) = stack.pop() {
                values.push(node.value);
                current = node.right;
            } else {
                break;
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::export::export_tree;
    use crate::tree::RbTree;

    fn export(id: u64, value: i64, parent: Option<u64>, left: Option<u64>) -> NodeExport {
        NodeExport {
            id: NodeId(id),
            value,
            color: Color::Black,
            parent: parent.map(NodeId),
            left: left.map(NodeId),
            right: None,
        }
    }

    #[test]
    fn test_rebuild_live_tree_matches_shape() {
        let mut tree = RbTree::new();
        for v in [8, 4, 12, 2, 6] {
            tree.insert(v);
        }
        let rebuilt = ExportedTree::rebuild(tree.root(), &export_tree(&tree)).unwrap();

        assert_eq!(rebuilt.len(), 5);
        assert_eq!(rebuilt.shape(), tree.shape());
        assert_eq!(rebuilt.shape().map(|s| s.node_count()), Some(5));
        assert_eq!(rebuilt.in_order_values(), vec![2, 4, 6, 8, 12]);
    }

    #[test]
    fn test_empty_rebuild() {
        let rebuilt = ExportedTree::rebuild(None, &[]).unwrap();
        assert!(rebuilt.is_empty());
        assert!(rebuilt.shape().is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let exports = vec![export(0, 1, None, None), export(0, 2, None, None)];
        let err = ExportedTree::rebuild(Some(NodeId(0)), &exports).unwrap_err();
        assert_eq!(err, RbTraceError::DuplicateNode { node_id: NodeId(0) });
    }

    #[test]
    fn test_missing_root_rejected() {
        let err = ExportedTree::rebuild(Some(NodeId(3)), &[]).unwrap_err();
        assert_eq!(err, RbTraceError::MissingRoot { root_id: NodeId(3) });
    }

    #[test]
    fn test_dangling_child_rejected() {
        let exports = vec![export(0, 5, None, Some(9))];
        let err = ExportedTree::rebuild(Some(NodeId(0)), &exports).unwrap_err();
        assert!(matches!(err, RbTraceError::DanglingReference { .. }));
    }

    #[test]
    fn test_parent_disagreement_rejected() {
        let exports = vec![export(0, 5, None, Some(1)), export(1, 3, None, None)];
        let err = ExportedTree::rebuild(Some(NodeId(0)), &exports).unwrap_err();
        assert_eq!(
            err,
            RbTraceError::ParentLinkMismatch {
                node_id: NodeId(1),
                holder_id: NodeId(0),
                parent_id: None,
            }
        );
    }
}
