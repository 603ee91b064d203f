//! Operation recorder
//!
//! Turns one insert or delete into an ordered list of snapshots. The tree
//! calls [`OperationRecorder::record`] after every meaningful step; the
//! recorder exports the tree, diffs against the previous snapshot and
//! appends. [`OperationRecorder::finish`] hands back the immutable record.

use rbtrace_core_types::{NodeId, OperationId, SnapshotId};
use serde::{Deserialize, Serialize};

use crate::diff::engine::compute_diff;
use crate::snapshot::{NodeExport, Snapshot, SnapshotSource};

/// Kind of recorded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Insert,
    Delete,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Insert => "insert",
            OperationKind::Delete => "delete",
        }
    }
}

/// Whether an operation changed the tree
///
/// A duplicate insert or a delete of a missing value is `Cancelled`; it is
/// still a successful operation with one informational snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationOutcome {
    Applied,
    Cancelled,
}

impl OperationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationOutcome::Applied => "applied",
            OperationOutcome::Cancelled => "cancelled",
        }
    }
}

/// Completed, immutable operation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub id: OperationId,
    pub kind: OperationKind,
    pub value: i64,
    pub outcome: OperationOutcome,
    /// Human-readable action and outcome, e.g. "Insert 10 (cancelled: value already present)"
    pub label: String,
    pub snapshots: Vec<Snapshot>,
}

impl OperationRecord {
    pub fn is_cancelled(&self) -> bool {
        self.outcome == OperationOutcome::Cancelled
    }

    /// Last snapshot, i.e. the tree as the operation left it
    pub fn final_snapshot(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

/// Builds the label for an operation
pub fn operation_label(kind: OperationKind, value: i64, outcome: OperationOutcome) -> String {
    match (kind, outcome) {
        (OperationKind::Insert, OperationOutcome::Applied) => format!("Insert {value}"),
        (OperationKind::Insert, OperationOutcome::Cancelled) => {
            format!("Insert {value} (cancelled: value already present)")
        }
        (OperationKind::Delete, OperationOutcome::Applied) => format!("Delete {value}"),
        (OperationKind::Delete, OperationOutcome::Cancelled) => {
            format!("Delete {value} (cancelled: value not found)")
        }
    }
}

/// Accumulates snapshots for one in-flight operation
#[derive(Debug)]
pub struct OperationRecorder {
    operation_id: OperationId,
    kind: OperationKind,
    value: i64,
    next_snapshot_id: SnapshotId,
    snapshots: Vec<Snapshot>,
}

impl OperationRecorder {
    pub fn new(
        operation_id: OperationId,
        kind: OperationKind,
        value: i64,
        first_snapshot_id: SnapshotId,
    ) -> Self {
        Self {
            operation_id,
            kind,
            value,
            next_snapshot_id: first_snapshot_id,
            snapshots: Vec::new(),
        }
    }

    /// Capture the current state of `source`.
    ///
    /// Highlight ids that are not live are dropped. The first snapshot is
    /// diffed against an empty export.
    pub fn record<S: SnapshotSource + ?Sized>(
        &mut self,
        source: &S,
        description: impl Into<String>,
        highlight: &[NodeId],
    ) -> SnapshotId {
        let id = self.next_snapshot_id;
        self.next_snapshot_id = id.next();

        let nodes = source.export();
        let previous: &[NodeExport] = self.snapshots.last().map_or(&[], |s| &s.nodes);
        let diff = compute_diff(previous, &nodes);

        let mut live: Vec<NodeId> = Vec::with_capacity(highlight.len());
        for &h in highlight {
            if source.contains(h) && !live.contains(&h) {
                live.push(h);
            }
        }

        let snapshot = Snapshot {
            id,
            description: description.into(),
            root: source.root(),
            nodes,
            highlight: live,
            diff,
        };

        tracing::debug!(
            component = module_path!(),
            op = self.kind.as_str(),
            operation_id = self.operation_id.0,
            snapshot_id = id.0,
            description = %snapshot.description,
            added = snapshot.diff.added.len(),
            removed = snapshot.diff.removed.len(),
            recolored = snapshot.diff.recolored.len(),
            moved = snapshot.diff.moved.len(),
            "snapshot recorded"
        );

        self.snapshots.push(snapshot);
        id
    }

    /// Id the next recorded snapshot will get
    pub fn next_snapshot_id(&self) -> SnapshotId {
        self.next_snapshot_id
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Seal the operation into its immutable record
    pub fn finish(self, outcome: OperationOutcome) -> OperationRecord {
        OperationRecord {
            id: self.operation_id,
            kind: self.kind,
            value: self.value,
            outcome,
            label: operation_label(self.kind, self.value, outcome),
            snapshots: self.snapshots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RbTree;

    #[test]
    fn test_labels() {
        assert_eq!(
            operation_label(OperationKind::Insert, 10, OperationOutcome::Applied),
            "Insert 10"
        );
        assert_eq!(
            operation_label(OperationKind::Delete, 7, OperationOutcome::Cancelled),
            "Delete 7 (cancelled: value not found)"
        );
    }

    #[test]
    fn test_record_assigns_ascending_ids_and_diffs() {
        let mut tree = RbTree::new();
        tree.insert(5);
        let mut recorder =
            OperationRecorder::new(OperationId(9), OperationKind::Insert, 6, SnapshotId(40));

        let first = recorder.record(&tree, "first", &[]);
        let second = recorder.record(&tree, "second", &[]);

        assert_eq!(first, SnapshotId(40));
        assert_eq!(second, SnapshotId(41));
        assert_eq!(recorder.next_snapshot_id(), SnapshotId(42));

        let snapshots = recorder.snapshots();
        // first snapshot is diffed against nothing
        assert_eq!(snapshots[0].diff.added.len(), 1);
        assert!(snapshots[1].diff.is_empty());
    }

    #[test]
    fn test_highlight_is_filtered_to_live_nodes() {
        let mut tree = RbTree::new();
        tree.insert(1);
        let live = tree.find(1).unwrap();

        let mut recorder =
            OperationRecorder::new(OperationId(1), OperationKind::Delete, 1, SnapshotId(1));
        recorder.record(&tree, "step", &[live, NodeId(99)]);

        assert_eq!(recorder.snapshots()[0].highlight, vec![live]);
    }

    #[test]
    fn test_finish_builds_record() {
        let tree = RbTree::new();
        let mut recorder =
            OperationRecorder::new(OperationId(3), OperationKind::Delete, 4, SnapshotId(1));
        recorder.record(&tree, "nothing to delete", &[]);
        let record = recorder.finish(OperationOutcome::Cancelled);

        assert_eq!(record.id, OperationId(3));
        assert!(record.is_cancelled());
        assert_eq!(record.label, "Delete 4 (cancelled: value not found)");
        assert_eq!(record.final_snapshot().unwrap().description, "nothing to delete");
    }
}
