use rbtrace_core::rules::validation::validate_tree;
use rbtrace_core::{Color, OperationRecord, RbTree, Snapshot};

/// Build a tree by inserting `values` in order
#[allow(dead_code)]
pub fn tree_with(values: &[i64]) -> RbTree {
    let mut tree = RbTree::new();
    for &v in values {
        tree.insert(v);
    }
    tree
}

/// Panic with the violation if the tree is not a valid red-black tree
#[allow(dead_code)]
pub fn assert_valid(tree: &RbTree) {
    if let Err(err) = validate_tree(tree) {
        panic!("tree is invalid: {err}; in-order {:?}", tree.in_order_values());
    }
}

/// Color of the live node holding `value`
#[allow(dead_code)]
pub fn color_of_value(tree: &RbTree, value: i64) -> Color {
    let id = tree
        .find(value)
        .unwrap_or_else(|| panic!("{value} is not in the tree"));
    tree.color_of(Some(id))
}

/// Value at the root, if any
#[allow(dead_code)]
pub fn root_value(tree: &RbTree) -> Option<i64> {
    tree.root().and_then(|id| tree.node(id)).map(|n| n.value)
}

/// First snapshot whose description contains `needle`
#[allow(dead_code)]
pub fn snapshot_containing<'a>(record: &'a OperationRecord, needle: &str) -> &'a Snapshot {
    record
        .snapshots
        .iter()
        .find(|s| s.description.contains(needle))
        .unwrap_or_else(|| {
            let descriptions: Vec<&str> =
                record.snapshots.iter().map(|s| s.description.as_str()).collect();
            panic!("no snapshot mentions {needle:?}: {descriptions:?}")
        })
}
