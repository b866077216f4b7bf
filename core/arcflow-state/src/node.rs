//! Per-token node cache.
//!
//! A [`Node`] is never edited in place. [`Node::bind`] and
//! [`Node::with_modifier`] return fresh values which the owning
//! configuration swaps into its own slot.

use std::sync::Arc;

use arcflow_protocol::{EnumTaggedToken, PosId, RelationId, TaggedToken, WordId, WordPosId};

use crate::error::{Result, StateError};

/// Head assignment recorded on a modifier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    pub head: usize,
    pub relation: RelationId,
    /// Ordinal of the arc in the arc set that produced this binding.
    pub arc: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    index: usize,
    token: Arc<EnumTaggedToken>,
    binding: Option<Binding>,
    modifiers: Vec<(usize, RelationId)>,
}

impl Node {
    pub fn new(index: usize, token: EnumTaggedToken) -> Self {
        Self {
            index,
            token: Arc::new(token),
            binding: None,
            modifiers: Vec::new(),
        }
    }

    /// The synthetic root always sits at index 0.
    pub fn root() -> Self {
        Self::new(0, EnumTaggedToken::from(TaggedToken::root()))
    }

    /// Returns a bound copy of this node.
    pub fn bind(&self, head: usize, relation: RelationId, arc: usize) -> Result<Self> {
        if let Some(existing) = self.binding {
            return Err(StateError::AlreadyBound {
                modifier: self.index,
                head: existing.head,
                relation: existing.relation,
            });
        }
        Ok(Self {
            binding: Some(Binding {
                head,
                relation,
                arc,
            }),
            ..self.clone()
        })
    }

    /// Returns a copy with `(modifier, relation)` appended to the modifier list.
    pub fn with_modifier(&self, modifier: usize, relation: RelationId) -> Self {
        let mut next = self.clone();
        next.modifiers.push((modifier, relation));
        next
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_root(&self) -> bool {
        self.index == 0
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn binding(&self) -> Option<Binding> {
        self.binding
    }

    pub fn head(&self) -> Option<usize> {
        self.binding.map(|b| b.head)
    }

    pub fn relation(&self) -> Option<RelationId> {
        self.binding.map(|b| b.relation)
    }

    pub fn arc_id(&self) -> Option<usize> {
        self.binding.map(|b| b.arc)
    }

    /// Modifiers in the order their arcs were added.
    pub fn modifiers(&self) -> &[(usize, RelationId)] {
        &self.modifiers
    }

    pub fn raw_token(&self) -> &str {
        &self.token.tagged.token
    }

    pub fn raw_tag(&self) -> &str {
        &self.token.tagged.tag
    }

    pub fn word(&self) -> Option<WordId> {
        self.token.word
    }

    pub fn pos(&self) -> Option<PosId> {
        self.token.pos
    }

    pub fn word_pos(&self) -> Option<WordPosId> {
        self.token.word_pos
    }

    pub fn token(&self) -> &EnumTaggedToken {
        &self.token
    }
}
