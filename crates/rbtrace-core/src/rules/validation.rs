use crate::errors::{RbTraceError, Result};
use crate::tree::RbTree;

use super::invariants;

/// Validate a completed tree
///
/// Runs every invariant check and returns an error for the first violation:
///
/// 1. All relations name live nodes
/// 2. The root has no parent and every child points back at its holder
/// 3. Every live node is reachable from the root
/// 4. In-order values are strictly ascending
/// 5. The root is black
/// 6. No red node has a red child
/// 7. All paths from a node to an absent leaf hold the same number of black nodes
///
/// Intermediate states inside an operation are not expected to pass.
///
/// # Errors
/// Returns the first validation error encountered. For exhaustive error
/// reporting, call the individual invariant functions directly.
pub fn validate_tree(tree: &RbTree) -> Result<()> {
    // Requirement 1: links resolve
    if let Some(&(node_id, target_id)) = invariants::find_dangling_references(tree).first() {
        return Err(RbTraceError::DanglingReference { node_id, target_id });
    }

    // Requirement 2: links agree
    if let Some((node_id, parent_id)) = invariants::find_root_with_parent(tree) {
        return Err(RbTraceError::RootHasParent { node_id, parent_id });
    }

    let mismatches = invariants::find_parent_link_mismatches(tree);
    if let Some(&(node_id, holder_id, parent_id)) = mismatches.first() {
        return Err(RbTraceError::ParentLinkMismatch {
            node_id,
            holder_id,
            parent_id,
        });
    }

    // Requirement 3: reachability
    if let Some(&node_id) = invariants::find_unreachable_nodes(tree).first() {
        return Err(RbTraceError::UnreachableNode { node_id });
    }

    // Requirement 4: ordering
    if let Some(&(node_id, value)) = invariants::find_order_violations(tree).first() {
        return Err(RbTraceError::OrderViolation { node_id, value });
    }

    // Requirements 5-7: coloring
    if let Some(node_id) = invariants::find_red_root(tree) {
        return Err(RbTraceError::RootNotBlack { node_id });
    }

    if let Some(&(node_id, parent_id)) = invariants::find_red_red_violations(tree).first() {
        return Err(RbTraceError::RedRedViolation { node_id, parent_id });
    }

    let heights = invariants::find_black_height_mismatches(tree);
    if let Some(&(node_id, left, right)) = heights.first() {
        return Err(RbTraceError::BlackHeightMismatch {
            node_id,
            left,
            right,
        });
    }

    Ok(())
}
