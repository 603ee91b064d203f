use rbtrace_core_types::NodeId;
use serde::{Deserialize, Serialize};

/// Node color used for red-black balancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Lowercase name used in descriptions and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live node in the tree arena
///
/// Relations are arena identifiers rather than references. The parent link
/// is a back-reference used for upward navigation only; ownership of a node
/// belongs to the single child slot (or the root slot) that points at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Stable identity, never reused
    pub id: NodeId,

    /// Unique ordering key
    pub value: i64,

    /// Current color
    pub color: Color,

    /// Parent back-reference (None for the root or a detached node)
    pub parent: Option<NodeId>,

    /// Left child
    pub left: Option<NodeId>,

    /// Right child
    pub right: Option<NodeId>,
}

impl Node {
    /// Create a new unlinked node
    ///
    /// Fresh nodes are red; the engine recolors a new sole root black.
    pub fn new(id: NodeId, value: i64) -> Self {
        Self {
            id,
            value,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// Number of present children
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}
