use rbtrace_core_types::NodeId;
use thiserror::Error;

/// Result type alias using RbTraceError
pub type Result<T> = std::result::Result<T, RbTraceError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// testing and structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Tree structure
    InvariantViolation,
    BrokenLink,
    OrderViolation,

    // Snapshot exports
    InvalidSnapshot,
    DanglingReference,
    DuplicateNode,

    // Commands
    StaleSelection,

    // Integration
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::BrokenLink => "ERR_BROKEN_LINK",
            ExErrorKind::OrderViolation => "ERR_ORDER_VIOLATION",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::DanglingReference => "ERR_DANGLING_REFERENCE",
            ExErrorKind::DuplicateNode => "ERR_DUPLICATE_NODE",
            ExErrorKind::StaleSelection => "ERR_STALE_SELECTION",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_id: Option<NodeId>,
    value: Option<i64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_id: None,
            value: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node context
    pub fn with_node_id(mut self, node_id: NodeId) -> Self {
        self.node_id = Some(node_id);
        self
    }

    /// Add key value context
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn node_id(&self) -> Option<NodeId> {
        self.node_id
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(node_id) = self.node_id {
            write!(f, " (node_id: {})", node_id)?;
        }
        if let Some(value) = self.value {
            write!(f, " (value: {})", value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for rbtrace operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RbTraceError {
    // ===== Red-black invariants =====
    /// The root is red after an operation completed
    #[error("Root {node_id} is red")]
    RootNotBlack { node_id: NodeId },

    /// A red node has a red child
    #[error("Red node {parent_id} has red child {node_id}")]
    RedRedViolation { node_id: NodeId, parent_id: NodeId },

    /// The two subtrees of a node have different black-heights
    #[error("Black-height mismatch at {node_id}: left {left}, right {right}")]
    BlackHeightMismatch {
        node_id: NodeId,
        left: usize,
        right: usize,
    },

    // ===== Structural links =====
    /// A child's parent back-reference does not point at the node holding it
    #[error("Node {node_id} is held by {holder_id} but its parent is {parent_id:?}")]
    ParentLinkMismatch {
        node_id: NodeId,
        holder_id: NodeId,
        parent_id: Option<NodeId>,
    },

    /// The root has a parent back-reference
    #[error("Root {node_id} has parent {parent_id}")]
    RootHasParent { node_id: NodeId, parent_id: NodeId },

    /// A relation points at a node that is not live
    #[error("Node {node_id} references missing node {target_id}")]
    DanglingReference { node_id: NodeId, target_id: NodeId },

    /// A live node cannot be reached from the root
    #[error("Node {node_id} is not reachable from the root")]
    UnreachableNode { node_id: NodeId },

    /// The same node id appears twice
    #[error("Node {node_id} appears more than once")]
    DuplicateNode { node_id: NodeId },

    // ===== Ordering =====
    /// In-order traversal is not strictly ascending
    #[error("Value {value} of node {node_id} is out of order")]
    OrderViolation { node_id: NodeId, value: i64 },

    // ===== Snapshot exports =====
    /// The export's root id is not among its nodes
    #[error("Snapshot root {root_id} is not among its nodes")]
    MissingRoot { root_id: NodeId },

    // ===== Commands =====
    /// A selected node no longer exists or no longer holds the selected value
    #[error("Selection {node_id} with value {value} is stale")]
    StaleSelection { node_id: NodeId, value: i64 },

    // ===== Generic Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<RbTraceError> for ExError {
    fn from(err: RbTraceError) -> Self {
        match err {
            RbTraceError::RootNotBlack { node_id } => ExError::new(ExErrorKind::InvariantViolation)
                .with_node_id(node_id)
                .with_message("Root is red"),

            RbTraceError::RedRedViolation { node_id, parent_id } => {
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_node_id(node_id)
                    .with_message(format!("Red node has red parent {}", parent_id))
            }

            RbTraceError::BlackHeightMismatch {
                node_id,
                left,
                right,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_node_id(node_id)
                .with_message(format!(
                    "Black-height differs between subtrees (left {}, right {})",
                    left, right
                )),

            RbTraceError::ParentLinkMismatch {
                node_id,
                holder_id,
                parent_id,
            } => ExError::new(ExErrorKind::BrokenLink)
                .with_node_id(node_id)
                .with_message(format!(
                    "Held by {} but parent back-reference is {:?}",
                    holder_id, parent_id
                )),

            RbTraceError::RootHasParent { node_id, parent_id } => {
                ExError::new(ExErrorKind::BrokenLink)
                    .with_node_id(node_id)
                    .with_message(format!("Root has parent {}", parent_id))
            }

            RbTraceError::UnreachableNode { node_id } => ExError::new(ExErrorKind::BrokenLink)
                .with_node_id(node_id)
                .with_message("Node is not reachable from the root"),

            RbTraceError::DanglingReference { node_id, target_id } => {
                ExError::new(ExErrorKind::DanglingReference)
                    .with_node_id(node_id)
                    .with_message(format!("References missing node {}", target_id))
            }

            RbTraceError::DuplicateNode { node_id } => ExError::new(ExErrorKind::DuplicateNode)
                .with_node_id(node_id)
                .with_message("Node appears more than once"),

            RbTraceError::OrderViolation { node_id, value } => {
                ExError::new(ExErrorKind::OrderViolation)
                    .with_node_id(node_id)
                    .with_value(value)
                    .with_message("In-order sequence is not strictly ascending")
            }

            RbTraceError::MissingRoot { root_id } => ExError::new(ExErrorKind::InvalidSnapshot)
                .with_node_id(root_id)
                .with_message("Snapshot root is not among its nodes"),

            RbTraceError::StaleSelection { node_id, value } => {
                ExError::new(ExErrorKind::StaleSelection)
                    .with_node_id(node_id)
                    .with_value(value)
                    .with_message("Selected node is gone or holds another value")
            }

            RbTraceError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            RbTraceError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for RbTraceError {
    fn from(err: serde_json::Error) -> Self {
        RbTraceError::Serialization {
            message: err.to_string(),
        }
    }
}
