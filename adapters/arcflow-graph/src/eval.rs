use petgraph::algo::is_cyclic_directed;

use crate::error::GraphError;
use crate::graph::{to_petgraph, DependencyGraph};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttachmentScores {
    /// Tokens scored (root excluded).
    pub total: usize,
    pub unlabeled: usize,
    pub labeled: usize,
}

impl AttachmentScores {
    pub fn uas(&self) -> f64 {
        ratio(self.unlabeled, self.total)
    }

    pub fn las(&self) -> f64 {
        ratio(self.labeled, self.total)
    }
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// Compares `predicted` against `gold` token by token.
/// A token left without a head in `predicted` counts as wrong.
pub fn attachment_scores<P, G>(predicted: &P, gold: &G) -> Result<AttachmentScores, GraphError>
where
    P: DependencyGraph + ?Sized,
    G: DependencyGraph + ?Sized,
{
    if predicted.vertex_count() != gold.vertex_count() {
        return Err(GraphError::LengthMismatch {
            expected: gold.vertex_count(),
            found: predicted.vertex_count(),
        });
    }

    let mut scores = AttachmentScores::default();
    for v in gold.vertices().skip(1) {
        let Some(expected) = gold.arc_of(v) else { continue };
        scores.total += 1;
        if let Some(found) = predicted.arc_of(v) {
            if found.head == expected.head {
                scores.unlabeled += 1;
                if found.relation == expected.relation {
                    scores.labeled += 1;
                }
            }
        }
    }
    Ok(scores)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeViolation {
    Cycle,
    /// Non-root vertices without a head.
    Unattached(Vec<usize>),
}

/// Checks that `graph` is a complete tree rooted at vertex 0.
pub fn validate_tree<G: DependencyGraph + ?Sized>(graph: &G) -> Vec<TreeViolation> {
    let mut violations = Vec::new();

    if is_cyclic_directed(&to_petgraph(graph)) {
        violations.push(TreeViolation::Cycle);
    }

    let unattached: Vec<usize> = graph
        .vertices()
        .skip(1)
        .filter(|&v| graph.arc_of(v).is_none())
        .collect();
    if !unattached.is_empty() {
        violations.push(TreeViolation::Unattached(unattached));
    }

    violations
}
