// Arena cell holding one element and its traversal links.

/// Stable handle to a node slot inside a `DoublyLinkedList`.
///
/// Handles are only meaningful for the list that issued them and only while
/// the node they name is still linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single list cell.
///
/// The value may itself be absent; removing an element drops the whole node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) previous: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: Option<T>) -> Self {
        Self {
            value,
            previous: None,
            next: None,
        }
    }

    /// The element stored in this node.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Handle of the node before this one, `None` at the head.
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    /// Handle of the node after this one, `None` at the tail.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// Clears both links and hands back the value.
    pub(crate) fn unlink(mut self) -> Option<T> {
        self.previous = None;
        self.next = None;
        self.value
    }
}
