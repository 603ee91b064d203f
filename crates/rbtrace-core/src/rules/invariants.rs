use std::collections::HashSet;

use rbtrace_core_types::NodeId;

use crate::tree::RbTree;

/// Root id if the root is red
pub fn find_red_root(tree: &RbTree) -> Option<NodeId> {
    tree.root().filter(|&root| tree.is_red(Some(root)))
}

/// Root with a parent back-reference
///
/// Returns (root_id, parent_id)
pub fn find_root_with_parent(tree: &RbTree) -> Option<(NodeId, NodeId)> {
    let root = tree.root()?;
    let parent = tree.node(root)?.parent?;
    Some((root, parent))
}

/// Relations that point at ids with no live node
///
/// Returns list of (node_id, target_id) tuples
pub fn find_dangling_references(tree: &RbTree) -> Vec<(NodeId, NodeId)> {
    let mut dangling = Vec::new();

    if let Some(root) = tree.root() {
        if tree.node(root).is_none() {
            dangling.push((root, root));
        }
    }

    for node in tree.nodes() {
        for target in [node.parent, node.left, node.right].into_iter().flatten() {
            if tree.node(target).is_none() {
                dangling.push((node.id, target));
            }
        }
    }

    dangling
}

/// Children whose parent back-reference does not name the node holding them
///
/// Returns list of (child_id, holder_id, child's recorded parent) tuples
pub fn find_parent_link_mismatches(tree: &RbTree) -> Vec<(NodeId, NodeId, Option<NodeId>)> {
    let mut mismatches = Vec::new();

    for holder in tree.nodes() {
        for child_id in [holder.left, holder.right].into_iter().flatten() {
            // Missing children are reported by find_dangling_references
            let Some(child) = tree.node(child_id) else {
                continue;
            };
            if child.parent != Some(holder.id) {
                mismatches.push((child_id, holder.id, child.parent));
            }
        }
    }

    mismatches
}

/// Live nodes not reachable from the root
pub fn find_unreachable_nodes(tree: &RbTree) -> Vec<NodeId> {
    let reachable: HashSet<NodeId> = tree.in_order_ids().into_iter().collect();
    tree.nodes()
        .map(|node| node.id)
        .filter(|id| !reachable.contains(id))
        .collect()
}

/// Nodes whose value does not exceed their in-order predecessor
///
/// Returns list of (node_id, value) tuples
pub fn find_order_violations(tree: &RbTree) -> Vec<(NodeId, i64)> {
    let mut violations = Vec::new();
    let mut previous: Option<i64> = None;

    for id in tree.in_order_ids() {
        let Some(node) = tree.node(id) else {
            continue;
        };
        if previous.is_some_and(|p| node.value <= p) {
            violations.push((id, node.value));
        }
        previous = Some(node.value);
    }

    violations
}

/// Red nodes with a red parent
///
/// Returns list of (child_id, parent_id) tuples
pub fn find_red_red_violations(tree: &RbTree) -> Vec<(NodeId, NodeId)> {
    tree.nodes()
        .filter(|node| node.is_red())
        .filter_map(|node| {
            let parent = node.parent?;
            tree.is_red(Some(parent)).then_some((node.id, parent))
        })
        .collect()
}

/// Nodes whose subtrees have different black-heights
///
/// Returns list of (node_id, left_height, right_height) tuples. Heights
/// count black nodes below the node, absent leaves excluded.
pub fn find_black_height_mismatches(tree: &RbTree) -> Vec<(NodeId, usize, usize)> {
    let mut mismatches = Vec::new();
    subtree_black_height(tree, tree.root(), &mut mismatches);
    mismatches
}

/// Black nodes on every root-to-leaf path, root included, if consistent
pub fn black_height(tree: &RbTree) -> Option<usize> {
    let mut mismatches = Vec::new();
    let height = subtree_black_height(tree, tree.root(), &mut mismatches);
    mismatches.is_empty().then_some(height)
}

/// Black nodes on the path from `id` (inclusive) down to an absent leaf,
/// following the left spine when the subtrees disagree
fn subtree_black_height(
    tree: &RbTree,
    id: Option<NodeId>,
    mismatches: &mut Vec<(NodeId, usize, usize)>,
) -> usize {
    let Some(node) = id.and_then(|id| tree.node(id)) else {
        return 0;
    };

    let left = subtree_black_height(tree, node.left, mismatches);
    let right = subtree_black_height(tree, node.right, mismatches);
    if left != right {
        mismatches.push((node.id, left, right));
    }

    left + usize::from(node.is_black())
}
