/// Doubly linked list over an index-based node arena.
use std::fmt;
use std::iter::FusedIterator;

use crate::error::{OutOfRange, ValidRange};
use crate::node::{Node, NodeId};

/// Rendering of a list with no elements.
pub const EMPTY_LIST: &str = "List is empty";

/// Rendering of an element whose value is absent.
pub const MISSING_VALUE: &str = "(none)";

/// Which end a positional lookup starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Walk {
    FromHead,
    FromTail,
}

/// A doubly linked list with position-indexed access.
///
/// Nodes are stored in a slab of slots; `previous`/`next` are slot handles.
/// Vacated slots are recycled for newly created nodes. Lookups by position
/// walk from whichever end is closer, so the worst case is `len / 2` steps.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Number of linked elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Handle of the first node.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Handle of the last node.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Looks up a node by handle. Returns `None` for vacated slots.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// The first element, `None` when the list is empty.
    pub fn front(&self) -> Option<Option<&T>> {
        self.head.map(|id| self.slot(id).value())
    }

    /// The last element, `None` when the list is empty.
    pub fn back(&self) -> Option<Option<&T>> {
        self.tail.map(|id| self.slot(id).value())
    }

    /// Inserts `value` so that it ends up at `position`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position <= len()`.
    pub fn insert_at(
        &mut self,
        position: usize,
        value: impl Into<Option<T>>,
    ) -> Result<(), OutOfRange> {
        OutOfRange::check_insert(position, self.size)?;
        let value = value.into();

        if position == 0 {
            self.push_front(value);
        } else if position == self.size {
            self.push_back(value);
        } else {
            // Interior: splice between the node currently at `position` and its predecessor.
            let current = self.id_at(position)?;
            let previous = self.slot(current).previous;

            let mut node = Node::new(value);
            node.previous = previous;
            node.next = Some(current);
            let id = self.alloc(node);

            if let Some(previous) = previous {
                self.slot_mut(previous).next = Some(id);
            }
            self.slot_mut(current).previous = Some(id);
            self.size += 1;
        }
        Ok(())
    }

    /// Appends `value` at the tail.
    pub fn append(&mut self, value: impl Into<Option<T>>) {
        self.push_back(value);
    }

    /// Inserts `value` before the head.
    pub fn push_front(&mut self, value: impl Into<Option<T>>) {
        let mut node = Node::new(value.into());
        node.next = self.head;
        let id = self.alloc(node);

        match self.head {
            Some(old_head) => self.slot_mut(old_head).previous = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.size += 1;
    }

    /// Inserts `value` after the tail.
    pub fn push_back(&mut self, value: impl Into<Option<T>>) {
        let mut node = Node::new(value.into());
        node.previous = self.tail;
        let id = self.alloc(node);

        match self.tail {
            Some(old_tail) => self.slot_mut(old_tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;
    }

    /// Removes the head and returns its element, `None` when empty.
    pub fn pop_front(&mut self) -> Option<Option<T>> {
        let id = self.head?;
        Some(self.unlink(id))
    }

    /// Removes the tail and returns its element, `None` when empty.
    pub fn pop_back(&mut self) -> Option<Option<T>> {
        let id = self.tail?;
        Some(self.unlink(id))
    }

    /// Removes the element at `position` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position < len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<Option<T>, OutOfRange> {
        let id = self.id_at(position)?;
        Ok(self.unlink(id))
    }

    /// Drops elements from the tail until at most `len` remain.
    pub fn truncate(&mut self, len: usize) {
        while self.size > len {
            self.pop_back();
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    /// Returns the node at `position`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position < len()`.
    pub fn node_at(&self, position: usize) -> Result<&Node<T>, OutOfRange> {
        let id = self.id_at(position)?;
        Ok(self.slot(id))
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position < len()`.
    pub fn get(&self, position: usize) -> Result<Option<&T>, OutOfRange> {
        Ok(self.node_at(position)?.value())
    }

    /// Overwrites the element at `position` in place and returns the old one.
    ///
    /// The node itself stays linked where it is.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position < len()`.
    pub fn set(
        &mut self,
        position: usize,
        value: impl Into<Option<T>>,
    ) -> Result<Option<T>, OutOfRange> {
        let id = self.id_at(position)?;
        let slot = &mut self.slot_mut(id).value;
        Ok(std::mem::replace(slot, value.into()))
    }

    /// Iterates elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.size,
        }
    }

    pub(crate) fn walk_for(&self, position: usize) -> Walk {
        if position < self.size / 2 {
            Walk::FromHead
        } else {
            Walk::FromTail
        }
    }

    fn id_at(&self, position: usize) -> Result<NodeId, OutOfRange> {
        OutOfRange::check_access(position, self.size)?;

        let found = match self.walk_for(position) {
            Walk::FromHead => self.walk(self.head, position, |node| node.next),
            Walk::FromTail => self.walk(self.tail, self.size - 1 - position, |node| node.previous),
        };
        found.ok_or(OutOfRange {
            position,
            valid: ValidRange::Access { size: self.size },
        })
    }

    fn walk(
        &self,
        start: Option<NodeId>,
        steps: usize,
        step: impl Fn(&Node<T>) -> Option<NodeId>,
    ) -> Option<NodeId> {
        let mut current = start;
        for _ in 0..steps {
            current = step(self.slot(current?));
        }
        current
    }

    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let Some(node) = self.slots[id.0].take() else {
            unreachable!("unlinking vacant slot {}", id.0);
        };

        match node.previous {
            Some(previous) => self.slot_mut(previous).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.slot_mut(next).previous = node.previous,
            None => self.tail = node.previous,
        }

        self.free.push(id.0);
        self.size -= 1;
        node.unlink()
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn slot(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("link to vacant slot {}", id.0),
        }
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("link to vacant slot {}", id.0),
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns every position, ascending, whose element equals `value`.
    ///
    /// An absent `value` matches only absent elements.
    pub fn find(&self, value: Option<&T>) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, element)| *element == value)
            .map(|(position, _)| position)
            .collect()
    }
}

impl<T: fmt::Display> DoublyLinkedList<T> {
    /// Renders the list left to right, e.g. `List: [0]:A <-> [1]:B`.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_LIST.to_string();
        }
        let cells: Vec<String> = self
            .iter()
            .enumerate()
            .map(|(position, element)| match element {
                Some(value) => format!("[{position}]:{value}"),
                None => format!("[{position}]:{MISSING_VALUE}"),
            })
            .collect();
        format!("List: {}", cells.join(" <-> "))
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a `DoublyLinkedList`, head to tail.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.slot(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.slot(self.back?);
        self.back = node.previous;
        self.remaining -= 1;
        Some(node.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
