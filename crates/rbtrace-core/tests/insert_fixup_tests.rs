mod common;

use common::{assert_valid, color_of_value, root_value, snapshot_containing, tree_with};
use rbtrace_core::Color;

#[test]
fn test_red_uncle_recolor_reaches_root() {
    // GIVEN 10 with red children 5 and 15
    let mut tree = tree_with(&[10, 5, 15]);
    let root = tree.root().unwrap();

    // WHEN inserting 3 under the red parent 5
    let record = tree.insert(3);

    // THEN parent, uncle and grandparent are recolored in one step
    let recolor = snapshot_containing(&record, "uncle");
    assert_eq!(recolor.diff.recolored.len(), 3);
    assert!(recolor.diff.moved.is_empty());

    // AND the red root is blackened in the closing step
    let last = record.final_snapshot().unwrap();
    assert_eq!(last.description, "Recolor root 10 black");
    assert_eq!(last.diff.recolored, vec![root]);

    assert_eq!(color_of_value(&tree, 5), Color::Black);
    assert_eq!(color_of_value(&tree, 15), Color::Black);
    assert_eq!(color_of_value(&tree, 3), Color::Red);
    assert_valid(&tree);
}

#[test]
fn test_left_left_case_rotates_right() {
    // GIVEN 30 with a red left child 20
    let mut tree = tree_with(&[30, 20]);

    // WHEN inserting 10 as outer grandchild
    let record = tree.insert(10);

    // THEN a single rotation lifts 20 to the root
    let rotation = snapshot_containing(&record, "rotate 30 right");
    assert_eq!(rotation.root_node().map(|n| n.value), Some(20));
    assert_eq!(root_value(&tree), Some(20));
    assert_eq!(color_of_value(&tree, 30), Color::Red);
    assert_valid(&tree);
}

#[test]
fn test_left_right_case_rotates_twice() {
    // GIVEN 30 with a red left child 10
    let mut tree = tree_with(&[30, 10]);

    // WHEN inserting 20 as inner grandchild
    let record = tree.insert(20);

    // THEN the parent is rotated first, then the grandparent
    let straighten = snapshot_containing(&record, "inner grandchild");
    assert!(straighten.description.contains("rotate parent 10 left"));
    let lift = snapshot_containing(&record, "rotate 30 right");
    assert!(lift.id > straighten.id);

    assert_eq!(root_value(&tree), Some(20));
    assert_valid(&tree);
}

#[test]
fn test_right_left_case_rotates_twice() {
    // GIVEN 10 with a red right child 30
    let mut tree = tree_with(&[10, 30]);

    // WHEN inserting 20 as inner grandchild
    let record = tree.insert(20);

    // THEN both mirrored rotations are recorded
    let straighten = snapshot_containing(&record, "rotate parent 30 right");
    let lift = snapshot_containing(&record, "rotate 10 left");
    assert!(lift.id > straighten.id);

    assert_eq!(root_value(&tree), Some(20));
    assert_valid(&tree);
}

#[test]
fn test_black_parent_needs_no_fixup() {
    // GIVEN a black root
    let mut tree = tree_with(&[10]);

    // WHEN inserting a child
    let record = tree.insert(12);

    // THEN only the attach and closing snapshots are recorded
    let descriptions: Vec<&str> = record
        .snapshots
        .iter()
        .map(|s| s.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Attach red node 12 as the right child of 10",
            "Root 10 is black; insertion complete",
        ]
    );
}

#[test]
fn test_sequential_inserts_stay_valid() {
    let mut tree = tree_with(&[]);
    for v in 0..200 {
        tree.insert(v);
        assert_valid(&tree);
    }
    for v in (-200..0).rev() {
        tree.insert(v);
        assert_valid(&tree);
    }
    assert_eq!(tree.len(), 400);
}
