use std::sync::Arc;

use arcflow_protocol::DepArc;

use crate::error::{Container, Result, StateError};

/// Append-only arc store. Ordinals are stable once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcSet {
    arcs: Arc<Vec<DepArc>>,
}

impl ArcSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arcs: Arc::new(Vec::with_capacity(capacity)),
        }
    }

    /// Appends `arc` and returns its ordinal.
    pub fn add(&mut self, arc: DepArc) -> usize {
        let arcs = Arc::make_mut(&mut self.arcs);
        arcs.push(arc);
        arcs.len() - 1
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn index(&self, i: usize) -> Result<&DepArc> {
        self.arcs.get(i).ok_or(StateError::IndexOutOfRange {
            container: Container::ArcSet,
            index: i,
            len: self.arcs.len(),
        })
    }

    /// Most recently added arc.
    pub fn last(&self) -> Result<&DepArc> {
        self.arcs
            .last()
            .ok_or(StateError::EmptyContainer(Container::ArcSet))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DepArc> {
        self.arcs.iter()
    }
}

impl<'a> IntoIterator for &'a ArcSet {
    type Item = &'a DepArc;
    type IntoIter = std::slice::Iter<'a, DepArc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
