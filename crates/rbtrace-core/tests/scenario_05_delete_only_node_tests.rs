/// Scenario 5: Delete The Only Node
///
/// Removing the sole node ends with an empty-tree snapshot.
mod common;

use rbtrace_core::{OperationOutcome, RbTree};

#[test]
fn test_scenario_05_delete_only_node() {
    // GIVEN a tree holding only 10
    let mut tree = RbTree::new();
    tree.insert(10);

    // WHEN deleting 10
    let record = tree.delete(10);

    // THEN the operation is applied
    assert_eq!(record.outcome, OperationOutcome::Applied);
    assert_eq!(record.label, "Delete 10");

    // AND the final snapshot reports an empty tree
    let last = record.final_snapshot().unwrap();
    assert!(last.description.contains("empty"));
    assert!(last.is_empty());
    assert_eq!(last.root, None);

    // AND membership is gone
    assert!(!tree.has(10));
    assert!(tree.is_empty());
}

#[test]
fn test_scenario_05_delete_from_empty_tree_is_cancelled() {
    // GIVEN an empty tree
    let mut tree = RbTree::new();

    // WHEN deleting any value
    let record = tree.delete(10);

    // THEN a single informational snapshot is recorded
    assert_eq!(record.outcome, OperationOutcome::Cancelled);
    assert_eq!(record.label, "Delete 10 (cancelled: value not found)");
    assert_eq!(record.snapshots.len(), 1);
    assert!(record.snapshots[0].highlight.is_empty());
    assert!(record.snapshots[0].is_empty());
}
