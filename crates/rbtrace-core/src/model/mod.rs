pub mod node;

pub use node::{Color, Node};
