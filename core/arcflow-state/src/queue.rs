use std::sync::Arc;

use tracing::trace;

use crate::error::{Container, Result, StateError};

/// FIFO container of the node indices not yet consumed.
///
/// Dequeuing only advances `front`, so it never copies a shared buffer.
/// Enqueuing onto a shared buffer first compacts the live range into a
/// private one.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: Arc<Vec<usize>>,
    front: usize,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Arc::new(Vec::with_capacity(capacity)),
            front: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len() - self.front
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn enqueue(&mut self, node: usize) {
        trace!(node, len = self.len(), "enqueue");
        self.buffer_mut().push(node);
    }

    pub fn dequeue(&mut self) -> Result<usize> {
        let node = self
            .items
            .get(self.front)
            .copied()
            .ok_or(StateError::EmptyContainer(Container::Queue))?;
        self.front += 1;
        trace!(node, remaining = self.len(), "dequeue");
        Ok(node)
    }

    /// Front of the queue, if any.
    pub fn peek(&self) -> Option<usize> {
        self.items.get(self.front).copied()
    }

    /// The `i`-th element counted from the front (0 = front).
    pub fn index(&self, i: usize) -> Result<usize> {
        self.as_slice()
            .get(i)
            .copied()
            .ok_or(StateError::IndexOutOfRange {
                container: Container::Queue,
                index: i,
                len: self.len(),
            })
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.as_slice().iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.items[self.front..]
    }

    fn buffer_mut(&mut self) -> &mut Vec<usize> {
        if Arc::get_mut(&mut self.items).is_none() {
            self.items = Arc::new(self.as_slice().to_vec());
            self.front = 0;
        }
        // Unique after the branch above.
        Arc::make_mut(&mut self.items)
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Queue {}

impl FromIterator<usize> for Queue {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            items: Arc::new(iter.into_iter().collect()),
            front: 0,
        }
    }
}
