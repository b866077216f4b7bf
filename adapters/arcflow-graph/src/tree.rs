use arcflow_protocol::{DepArc, RelationId, TaggedToken};

use crate::error::GraphError;
use crate::graph::DependencyGraph;

/// A fixed reference analysis, e.g. a treebank tree used for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldTree {
    tokens: Vec<TaggedToken>,
    arcs: Vec<DepArc>,
    by_modifier: Vec<Option<usize>>,
}

impl GoldTree {
    /// Builds a tree from one `(head, relation)` per token; token `i` is vertex `i + 1`.
    pub fn from_heads(
        sentence: &[TaggedToken],
        heads: &[(usize, RelationId)],
    ) -> Result<Self, GraphError> {
        if sentence.len() != heads.len() {
            return Err(GraphError::LengthMismatch {
                expected: sentence.len(),
                found: heads.len(),
            });
        }

        let vertex_count = sentence.len() + 1;
        let mut tokens = Vec::with_capacity(vertex_count);
        tokens.push(TaggedToken::root());
        tokens.extend(sentence.iter().cloned());

        let mut arcs = Vec::with_capacity(heads.len());
        let mut by_modifier = vec![None; vertex_count];
        for (i, &(head, relation)) in heads.iter().enumerate() {
            if head >= vertex_count {
                return Err(GraphError::HeadOutOfRange {
                    modifier: i + 1,
                    head,
                });
            }
            by_modifier[i + 1] = Some(arcs.len());
            arcs.push(DepArc::new(head, i + 1, relation));
        }

        Ok(Self {
            tokens,
            arcs,
            by_modifier,
        })
    }
}

impl DependencyGraph for GoldTree {
    type Vertex = TaggedToken;

    fn vertex_count(&self) -> usize {
        self.tokens.len()
    }

    fn edge_count(&self) -> usize {
        self.arcs.len()
    }

    fn vertex(&self, id: usize) -> Option<&TaggedToken> {
        self.tokens.get(id)
    }

    fn directed_edge(&self, id: usize) -> Option<DepArc> {
        self.arcs.get(id).copied()
    }

    fn arc_of(&self, node: usize) -> Option<DepArc> {
        let ordinal = (*self.by_modifier.get(node)?)?;
        self.arcs.get(ordinal).copied()
    }
}
