//! Human-readable summary renderer for operation records.

use rbtrace_core_types::NodeId;

use crate::recorder::{OperationOutcome, OperationRecord};
use crate::snapshot::Snapshot;

/// Render a Markdown/text summary of an [`OperationRecord`].
///
/// One numbered entry per snapshot with its description and non-empty diff
/// sets, followed by the final in-order contents. Informational only.
pub fn render_operation_summary(record: &OperationRecord) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!("## {} ({})\n\n", record.label, record.id));

    let outcome_label = match record.outcome {
        OperationOutcome::Applied => "Applied",
        OperationOutcome::Cancelled => "Cancelled",
    };
    out.push_str(&format!(
        "**Outcome**: {outcome_label}  \n**Snapshots**: {}\n\n",
        record.snapshots.len()
    ));

    // Steps
    out.push_str("### Steps\n\n");
    let mut previous: Option<&Snapshot> = None;
    for (index, snapshot) in record.snapshots.iter().enumerate() {
        out.push_str(&format!(
            "{}. `{}` {}\n",
            index + 1,
            snapshot.id,
            snapshot.description
        ));

        let diff = &snapshot.diff;
        let sets = [
            ("added", &diff.added, false),
            ("removed", &diff.removed, true),
            ("recolored", &diff.recolored, false),
            ("moved", &diff.moved, false),
        ];
        for (name, ids, from_previous) in sets {
            if ids.is_empty() {
                continue;
            }
            let lookup = if from_previous { previous } else { Some(snapshot) };
            let names: Vec<String> = ids.iter().map(|&id| describe(lookup, id)).collect();
            out.push_str(&format!("   - {name}: {}\n", names.join(", ")));
        }

        previous = Some(snapshot);
    }
    out.push('\n');

    // Final state
    match record.final_snapshot() {
        Some(last) if !last.is_empty() => {
            let values: Vec<String> = last.values().iter().map(i64::to_string).collect();
            let root = last
                .root_node()
                .map_or_else(|| "none".to_string(), |n| n.value.to_string());
            out.push_str(&format!(
                "**In order**: {}  \n**Root**: {root}\n",
                values.join(", ")
            ));
        }
        _ => out.push_str("_The tree is empty._\n"),
    }

    out
}

/// `value (id)` if the node is in `snapshot`, else the bare id
fn describe(snapshot: Option<&Snapshot>, id: NodeId) -> String {
    match snapshot.and_then(|s| s.node(id)) {
        Some(node) => format!("{} ({})", node.value, id),
        None => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RbTree;

    #[test]
    fn test_summary_for_first_insert() {
        let mut tree = RbTree::new();
        let record = tree.insert(10);
        let summary = render_operation_summary(&record);

        assert!(summary.starts_with("## Insert 10 (op1)"));
        assert!(summary.contains("**Outcome**: Applied"));
        assert!(summary.contains("**Snapshots**: 1"));
        assert!(summary.contains("added: 10 (n0)"));
        assert!(summary.contains("**Root**: 10"));
    }

    #[test]
    fn test_summary_for_cancelled_insert() {
        let mut tree = RbTree::new();
        tree.insert(10);
        let record = tree.insert(10);
        let summary = render_operation_summary(&record);

        assert!(summary.contains("cancelled: value already present"));
        assert!(summary.contains("**Outcome**: Cancelled"));
    }

    #[test]
    fn test_summary_names_removed_nodes_from_previous_step() {
        let mut tree = RbTree::new();
        tree.insert(1);
        tree.insert(2);
        let record = tree.delete(2);
        let summary = render_operation_summary(&record);

        assert!(summary.contains("removed: 2 (n1)"));
    }

    #[test]
    fn test_summary_for_emptied_tree() {
        let mut tree = RbTree::new();
        tree.insert(1);
        let record = tree.delete(1);
        let summary = render_operation_summary(&record);

        assert!(summary.contains("The tree is now empty"));
        assert!(summary.contains("_The tree is empty._"));
    }
}
