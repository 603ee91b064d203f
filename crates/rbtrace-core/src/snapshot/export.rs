//! Live tree to immutable export conversion.

use rbtrace_core_types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{Color, Node};
use crate::tree::RbTree;

/// One node as seen at a single instant; relations are ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeExport {
    pub id: NodeId,
    pub value: i64,
    pub color: Color,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl From<&Node> for NodeExport {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            value: node.value,
            color: node.color,
            parent: node.parent,
            left: node.left,
            right: node.right,
        }
    }
}

/// Export every live node of `tree`.
///
/// Nodes reachable from the root come first in in-order sequence. A node
/// that is momentarily detached (a successor between removal from its old
/// slot and relinking) follows, in ascending id order, so an intermediate
/// export never refers to an id it does not contain.
pub fn export_tree(tree: &RbTree) -> Vec<NodeExport> {
    let ordered = tree.in_order_ids();
    let reachable: HashSet<NodeId> = ordered.iter().copied().collect();

    let mut exports: Vec<NodeExport> = ordered
        .iter()
        .filter_map(|&id| tree.node(id))
        .map(NodeExport::from)
        .collect();
    exports.extend(
        tree.nodes()
            .filter(|node| !reachable.contains(&node.id))
            .map(NodeExport::from),
    );
    exports
}
