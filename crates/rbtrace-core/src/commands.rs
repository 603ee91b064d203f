//! Command types accepted at the functional boundary
//!
//! Every request from outside the core (CLI arguments, script steps,
//! node-selection events from a presentation layer) is expressed as a
//! [`Command`] and executed by [`crate::apply::apply`].

use rbtrace_core_types::NodeId;
use serde::{Deserialize, Serialize};

/// Command enum representing all tree operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Insert a value
    Insert { value: i64 },

    /// Delete a value
    Delete { value: i64 },

    /// Delete the node a user selected
    ///
    /// The selection carries the value it showed; if the node is gone or now
    /// holds another value the command is rejected as stale.
    DeleteSelected { node_id: NodeId, value: i64 },

    /// Discard the tree and restart every counter
    Reset,
}

impl Command {
    /// Operation name used in log events
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "insert",
            Command::Delete { .. } => "delete",
            Command::DeleteSelected { .. } => "delete_selected",
            Command::Reset => "reset",
        }
    }

    /// Requested value, if the command carries one
    pub fn value(&self) -> Option<i64> {
        match self {
            Command::Insert { value }
            | Command::Delete { value }
            | Command::DeleteSelected { value, .. } => Some(*value),
            Command::Reset => None,
        }
    }
}
