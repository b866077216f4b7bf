use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::{PosId, RelationId, WordId, WordPosId};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Surface text and tag used for the synthetic root node.
pub const ROOT_TOKEN: &str = "ROOT";

/// A raw (token, tag) pair as produced by an external tagger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_TOKEN, ROOT_TOKEN)
    }
}

impl<T: Into<String>, U: Into<String>> From<(T, U)> for TaggedToken {
    fn from((token, tag): (T, U)) -> Self {
        Self::new(token, tag)
    }
}

/// A tagged token optionally enriched with compact ids.
///
/// The ids are opaque to this workspace; they are assigned by whatever
/// enumeration service the driver uses for feature extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct EnumTaggedToken {
    pub tagged: TaggedToken,
    pub word: Option<WordId>,
    pub pos: Option<PosId>,
    pub word_pos: Option<WordPosId>,
}

impl From<TaggedToken> for EnumTaggedToken {
    fn from(tagged: TaggedToken) -> Self {
        Self {
            tagged,
            word: None,
            pos: None,
            word_pos: None,
        }
    }
}

pub type TaggedSentence = Vec<TaggedToken>;
pub type EnumTaggedSentence = Vec<EnumTaggedToken>;

/// Directed labeled dependency arc between node indices (head -> modifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct DepArc {
    pub head: usize,
    pub modifier: usize,
    pub relation: RelationId,
}

impl DepArc {
    pub const fn new(head: usize, modifier: usize, relation: RelationId) -> Self {
        Self {
            head,
            modifier,
            relation,
        }
    }

    /// Undirected view: the two endpoints, smaller index first.
    pub fn endpoints(&self) -> (usize, usize) {
        if self.head <= self.modifier {
            (self.head, self.modifier)
        } else {
            (self.modifier, self.head)
        }
    }

    pub fn touches(&self, node: usize) -> bool {
        self.head == node || self.modifier == node
    }
}
