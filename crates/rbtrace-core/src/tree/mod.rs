//! Red-black tree engine with recorded operations
//!
//! Live nodes are kept in an id-keyed arena; relations are optional ids.
//! Absent children count as black through [`RbTree::is_black`], so there is
//! no shared sentinel node.
//!
//! Every public mutation returns an [`OperationRecord`] holding the ordered
//! snapshots taken while the operation ran.

mod delete;
mod insert;
mod rotation;

use std::collections::BTreeMap;

use rbtrace_core_types::{NodeId, OperationId, SnapshotId};

use crate::model::{Color, Node};
use crate::recorder::{OperationKind, OperationOutcome, OperationRecord, OperationRecorder};
use crate::snapshot::export::{export_tree, NodeExport};
use crate::snapshot::rebuild::TreeShape;
use crate::snapshot::SnapshotSource;

/// Red-black tree over unique `i64` keys
///
/// Single-owner and synchronous: every operation runs to completion under
/// `&mut self`. Removed nodes are dropped from the arena but their ids stay
/// retired; [`RbTree::reset`] is the only way to start over.
#[derive(Debug, Clone, Default)]
pub struct RbTree {
    /// Live nodes keyed by id
    nodes: BTreeMap<NodeId, Node>,
    root: Option<NodeId>,
    len: usize,
    next_node_id: NodeId,
    next_snapshot_id: SnapshotId,
    next_operation_id: OperationId,
}

impl RbTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Current root node id
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a live node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Iterate over all live nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Find the node holding `value`
    pub fn find(&self, value: i64) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id)?;
            current = match value.cmp(&node.value) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Membership test without recording anything
    pub fn has(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    /// Node ids in in-order (ascending value) sequence
    pub fn in_order_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.left_of(id);
            }
            if let Some(id) = stack.pop() {
                ids.push(id);
                current = self.right_of(id);
            }
        }
        ids
    }

    /// Values in ascending order
    pub fn in_order_values(&self) -> Vec<i64> {
        self.in_order_ids()
            .into_iter()
            .filter_map(|id| self.node(id).map(|n| n.value))
            .collect()
    }

    /// Recursive value/color structure, used for isomorphism checks
    pub fn shape(&self) -> Option<TreeShape> {
        TreeShape::build(self.root, &|id| {
            self.node(id).map(|n| (n.value, n.color, n.left, n.right))
        })
    }

    /// Discard every node and restart all identifier counters
    ///
    /// Nothing is recorded; reset is not part of the operation history.
    pub fn reset(&mut self) {
        tracing::debug!(
            component = module_path!(),
            op = "reset",
            tree_len = self.len,
        );
        *self = Self::default();
    }

    // ===== Operation bookkeeping =====

    fn begin_operation(&mut self, kind: OperationKind, value: i64) -> OperationRecorder {
        let operation_id = self.next_operation_id;
        self.next_operation_id = operation_id.next();
        OperationRecorder::new(operation_id, kind, value, self.next_snapshot_id)
    }

    fn finish_operation(
        &mut self,
        recorder: OperationRecorder,
        outcome: OperationOutcome,
    ) -> OperationRecord {
        self.next_snapshot_id = recorder.next_snapshot_id();
        recorder.finish(outcome)
    }

    // ===== Arena =====

    fn allocate(&mut self, value: i64) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id = id.next();
        self.nodes.insert(id, Node::new(id, value));
        self.len += 1;
        id
    }

    fn release(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(&id);
        if node.is_some() {
            self.len -= 1;
        }
        node
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    // ===== Nil-tolerant link helpers =====

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.left)
    }

    fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.right)
    }

    /// Color of a possibly absent node; absence is black
    pub fn color_of(&self, id: Option<NodeId>) -> Color {
        id.and_then(|id| self.node(id))
            .map_or(Color::Black, |n| n.color)
    }

    pub fn is_black(&self, id: Option<NodeId>) -> bool {
        self.color_of(id) == Color::Black
    }

    pub fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color_of(id) == Color::Red
    }

    fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(node) = id.and_then(|id| self.node_mut(id)) {
            node.color = color;
        }
    }

    fn set_parent(&mut self, id: Option<NodeId>, parent: Option<NodeId>) {
        if let Some(node) = id.and_then(|id| self.node_mut(id)) {
            node.parent = parent;
        }
    }

    fn set_left(&mut self, id: NodeId, child: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.left = child;
        }
    }

    fn set_right(&mut self, id: NodeId, child: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.right = child;
        }
    }

    /// Point the slot that held `old` (a parent's child slot or the root) at `new`
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) if self.left_of(p) == Some(old) => self.set_left(p, new),
            Some(p) => self.set_right(p, new),
        }
    }

    /// Replace the subtree rooted at `old` with the one rooted at `new`
    fn transplant(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.parent_of(old);
        self.replace_child(parent, old, new);
        self.set_parent(new, parent);
    }

    /// Leftmost node of the subtree rooted at `id`
    fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.left_of(id) {
            id = left;
        }
        id
    }

    /// Value of a node for step descriptions
    fn label(&self, id: NodeId) -> String {
        self.node(id)
            .map_or_else(|| id.to_string(), |n| n.value.to_string())
    }
}

impl SnapshotSource for RbTree {
    fn root(&self) -> Option<NodeId> {
        self.root
    }

    fn export(&self) -> Vec<NodeExport> {
        export_tree(self)
    }

    fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(values: &[i64]) -> RbTree {
        let mut tree = RbTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree = RbTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.root().is_none());
        assert!(tree.shape().is_none());
    }

    #[test]
    fn test_absent_node_is_black() {
        let tree = RbTree::new();
        assert!(tree.is_black(None));
        assert!(!tree.is_red(None));
    }

    #[test]
    fn test_find_and_has() {
        let tree = tree_with(&[8, 3, 12]);
        assert!(tree.has(3));
        assert!(!tree.has(4));

        let id = tree.find(12).unwrap();
        assert_eq!(tree.node(id).unwrap().value, 12);
    }

    #[test]
    fn test_in_order_values_are_sorted() {
        let tree = tree_with(&[50, 20, 70, 10, 30, 60, 80, 25]);
        assert_eq!(tree.in_order_values(), vec![10, 20, 25, 30, 50, 60, 70, 80]);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut tree = tree_with(&[1, 2]);
        let removed = tree.find(2).unwrap();
        tree.delete(2);
        tree.insert(3);

        let fresh = tree.find(3).unwrap();
        assert!(fresh > removed);
    }

    #[test]
    fn test_deleted_nodes_are_dropped_from_storage() {
        let mut tree = tree_with(&[50]);
        for _ in 0..1_000 {
            tree.insert(1);
            tree.delete(1);
        }
        let record = tree.insert(1);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.nodes.len(), tree.len());
        assert_eq!(record.final_snapshot().unwrap().nodes.len(), 2);
        // ids stay retired: 50 got n0, the 1,001 inserts of 1 got n1..=n1001
        assert_eq!(tree.find(1), Some(NodeId(1001)));
    }

    #[test]
    fn test_reset_restarts_counters() {
        let mut tree = tree_with(&[5, 6, 7]);
        tree.reset();
        assert!(tree.is_empty());

        let record = tree.insert(9);
        assert_eq!(record.id, OperationId(1));
        assert_eq!(record.snapshots[0].id, SnapshotId(1));
        assert_eq!(tree.find(9), Some(NodeId(0)));
    }

    #[test]
    fn test_transplant_replaces_root() {
        let mut tree = tree_with(&[10, 20]);
        let root = tree.root().unwrap();
        let child = tree.find(20).unwrap();

        tree.transplant(root, Some(child));

        assert_eq!(tree.root(), Some(child));
        assert_eq!(tree.parent_of(child), None);
    }
}
