//! Lifecycle event macros used by [`crate::apply`]
//!
//! One `start` and one `end` (or `end_error`) event bracket every command.
//! All three carry `component`, `op` and `event`; the closing events add
//! `duration_ms`. Extra `key = value` fields pass through unchanged, which
//! is how `apply` attaches the value, operation id, outcome and snapshot
//! count.

/// `start` event for a command, at `info`
///
/// # Example
///
/// ```
/// # use rbtrace_core::log_op_start;
/// log_op_start!("insert");
/// log_op_start!("insert", value = 10);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rbtrace_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rbtrace_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// `end` event for a command that returned `Ok`, cancelled operations
/// included
///
/// # Example
///
/// ```
/// # use rbtrace_core::log_op_end;
/// log_op_end!("insert", duration_ms = 0);
/// log_op_end!("insert", duration_ms = 0, snapshot_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rbtrace_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rbtrace_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// `end_error` event at `error` level
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// the event reports its kind and `ERR_*` code rather than the message.
///
/// # Example
///
/// ```
/// # use rbtrace_core::{log_op_error, errors::RbTraceError};
/// # use rbtrace_core_types::NodeId;
/// let err = RbTraceError::StaleSelection { node_id: NodeId(1), value: 5 };
/// log_op_error!("delete_selected", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = rbtrace_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = rbtrace_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
