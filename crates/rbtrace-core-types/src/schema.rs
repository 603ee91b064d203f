//! Canonical schema constants for structured logging and events
//!
//! These constants keep field keys consistent across the engine, the
//! logging facility and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_OPERATION_ID: &str = "operation_id";
pub const FIELD_SNAPSHOT_ID: &str = "snapshot_id";
pub const FIELD_NODE_ID: &str = "node_id";
pub const FIELD_VALUE: &str = "value";

// Operation results
pub const FIELD_OUTCOME: &str = "outcome";
pub const FIELD_SNAPSHOT_COUNT: &str = "snapshot_count";
pub const FIELD_TREE_LEN: &str = "tree_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
