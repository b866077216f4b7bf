use std::sync::Arc;

use tracing::trace;

use crate::error::{Container, Result, StateError};

/// LIFO container of node indices.
///
/// Cloning shares the backing buffer; the first mutation after a clone copies
/// it, so a clone behaves as an independent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    items: Arc<Vec<usize>>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Arc::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `node` on top.
    ///
    /// Keeping indices unique and naming existing nodes is up to the transition
    /// system driving the stack; use [`Stack::contains`] where a move could
    /// violate it.
    pub fn push(&mut self, node: usize) {
        trace!(node, depth = self.items.len(), "stack push");
        Arc::make_mut(&mut self.items).push(node);
    }

    pub fn pop(&mut self) -> Result<usize> {
        if self.items.is_empty() {
            return Err(StateError::EmptyContainer(Container::Stack));
        }
        let node = Arc::make_mut(&mut self.items).pop();
        trace!(?node, "stack pop");
        node.ok_or(StateError::EmptyContainer(Container::Stack))
    }

    /// Top of the stack, if any.
    pub fn peek(&self) -> Option<usize> {
        self.items.last().copied()
    }

    /// The `i`-th element counted from the top (0 = top).
    pub fn index(&self, i: usize) -> Result<usize> {
        let len = self.items.len();
        if i >= len {
            return Err(StateError::IndexOutOfRange {
                container: Container::Stack,
                index: i,
                len,
            });
        }
        Ok(self.items[len - 1 - i])
    }

    /// The `i`-th element counted from the bottom (0 = bottom).
    pub fn index_from_bottom(&self, i: usize) -> Result<usize> {
        self.items
            .get(i)
            .copied()
            .ok_or(StateError::IndexOutOfRange {
                container: Container::Stack,
                index: i,
                len: self.items.len(),
            })
    }

    pub fn contains(&self, node: usize) -> bool {
        self.items.contains(&node)
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.items
    }

    #[cfg(test)]
    pub(crate) fn shares_buffer_with(&self, other: &Stack) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_from_both_ends() {
        let mut stack = Stack::new();
        for node in [1, 4, 2] {
            stack.push(node);
        }

        assert_eq!(stack.index(0).unwrap(), 2);
        assert_eq!(stack.index(2).unwrap(), 1);
        assert_eq!(stack.index_from_bottom(0).unwrap(), 1);
        assert_eq!(stack.peek(), Some(2));
        assert_eq!(
            stack.index(3),
            Err(StateError::IndexOutOfRange {
                container: Container::Stack,
                index: 3,
                len: 3
            })
        );
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), Err(StateError::EmptyContainer(Container::Stack)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Stack::new();
        original.push(1);
        original.push(2);

        let mut snapshot = original.clone();
        assert!(snapshot.shares_buffer_with(&original));

        assert_eq!(snapshot.pop().unwrap(), 2);
        snapshot.push(3);

        assert!(!snapshot.shares_buffer_with(&original));
        assert_eq!(original.as_slice(), &[1, 2]);
        assert_eq!(snapshot.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_push_leaves_uniqueness_to_driver() {
        let mut stack = Stack::new();
        stack.push(1);
        assert!(stack.contains(1));
        stack.push(1);

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert_eq!(stack.as_slice(), &[1]);
    }
}
