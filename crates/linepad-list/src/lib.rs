/// Position-indexed doubly linked list.
///
/// Nodes live in an index-based arena and link to each other through stable
/// `NodeId` handles, so the back-links never take part in ownership.
pub mod error;
pub mod list;
pub mod node;

pub use error::{OutOfRange, ValidRange};
pub use list::{DoublyLinkedList, Iter, EMPTY_LIST, MISSING_VALUE};
pub use node::{Node, NodeId};
