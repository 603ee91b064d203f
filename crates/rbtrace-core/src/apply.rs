//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry point
//! for tree mutations. It owns the operation lifecycle log events; the tree
//! and recorder below it only emit debug events.
//!
//! ## Atomicity Contract
//!
//! - **Reject before mutate**: a stale selection fails without touching the tree
//! - **No panics**: invalid input returns typed errors
//! - **Cancelled is not an error**: a duplicate insert or a missing delete
//!   returns a recorded, cancelled operation
//!
//! ## Example
//!
//! ```
//! use rbtrace_core::{apply::apply, Applied, Command, RbTree};
//!
//! let mut tree = RbTree::new();
//! let applied = apply(&mut tree, Command::Insert { value: 10 }).unwrap();
//!
//! match applied {
//!     Applied::Recorded(record) => assert_eq!(record.snapshots.len(), 1),
//!     Applied::Reset => unreachable!(),
//! }
//! ```

use crate::commands::Command;
use crate::errors::{RbTraceError, Result};
use crate::recorder::OperationRecord;
use crate::tree::RbTree;
use crate::{log_op_end, log_op_error, log_op_start};

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// An insert or delete ran and produced its history
    Recorded(OperationRecord),
    /// The tree was reset; nothing is recorded
    Reset,
}

impl Applied {
    pub fn record(&self) -> Option<&OperationRecord> {
        match self {
            Applied::Recorded(record) => Some(record),
            Applied::Reset => None,
        }
    }

    pub fn into_record(self) -> Option<OperationRecord> {
        match self {
            Applied::Recorded(record) => Some(record),
            Applied::Reset => None,
        }
    }
}

/// Apply a command to a tree
///
/// # Errors
///
/// Returns `RbTraceError::StaleSelection` when a `DeleteSelected` command
/// names a node that no longer exists or no longer holds the selected value.
/// The tree is left unchanged.
pub fn apply(tree: &mut RbTree, cmd: Command) -> Result<Applied> {
    let op = cmd.op_name();
    if let Command::DeleteSelected { node_id, value } = cmd {
        log_op_start!(op, value = value, node_id = node_id.0);
    } else if let Some(value) = cmd.value() {
        log_op_start!(op, value = value);
    } else {
        log_op_start!(op);
    }
    let start = std::time::Instant::now();

    let result = match cmd {
        Command::Insert { value } => Ok(Applied::Recorded(tree.insert(value))),
        Command::Delete { value } => Ok(Applied::Recorded(tree.delete(value))),
        Command::DeleteSelected { node_id, value } => {
            match tree.node(node_id).filter(|node| node.value == value) {
                Some(_) => Ok(Applied::Recorded(tree.delete(value))),
                None => Err(RbTraceError::StaleSelection { node_id, value }),
            }
        }
        Command::Reset => {
            tree.reset();
            Ok(Applied::Reset)
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(Applied::Recorded(record)) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                operation_id = record.id.0,
                outcome = record.outcome.as_str(),
                snapshot_count = record.snapshots.len()
            );
        }
        Ok(Applied::Reset) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => log_op_error!(op, err.clone(), duration_ms = duration_ms),
    }

    result
}
