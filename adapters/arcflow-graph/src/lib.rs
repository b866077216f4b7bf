pub mod error;
pub mod eval;
pub mod graph;
pub mod tree;

pub use error::GraphError;
pub use eval::{attachment_scores, validate_tree, AttachmentScores, TreeViolation};
pub use graph::{to_petgraph, DependencyGraph, Edge};
pub use tree::GoldTree;

#[cfg(test)]
mod tests {
    use super::*;
    use arcflow_protocol::{DepArc, RelationId, TaggedToken};
    use arcflow_state::{Configuration, Options};
    use petgraph::visit::EdgeRef;
    use std::sync::Arc;

    const NSUBJ: RelationId = RelationId(0);
    const DOBJ: RelationId = RelationId(1);
    const ROOT: RelationId = RelationId(2);

    fn sentence() -> Vec<TaggedToken> {
        vec![
            TaggedToken::new("John", "NNP"),
            TaggedToken::new("eats", "VBZ"),
            TaggedToken::new("apples", "NNS"),
        ]
    }

    /// "John eats apples" with John and apples attached to "eats".
    fn parsed() -> Configuration {
        let init = Arc::new(Configuration::from_tagged(&sentence(), Options::default()));
        let mut conf = init.copy();
        conf.add_arc(2, 1, NSUBJ).unwrap();
        conf.add_arc(2, 3, DOBJ).unwrap();
        conf.add_arc(0, 2, ROOT).unwrap();
        conf
    }

    #[test]
    fn test_configuration_as_graph() {
        let conf = parsed();

        assert_eq!(conf.vertex_count(), 4);
        assert_eq!(conf.edge_count(), 3);
        assert_eq!(conf.vertex(3).unwrap().raw_token(), "apples");
        assert_eq!(conf.directed_edge(1), Some(DepArc::new(2, 3, DOBJ)));
        assert!(conf.edge(1).unwrap().connects(3, 2));
        assert_eq!(conf.arc_of(1), Some(DepArc::new(2, 1, NSUBJ)));
        assert_eq!(conf.arc_of(0), None);
        assert_eq!(conf.heads(), vec![None, Some(2), Some(0), Some(2)]);
        assert_eq!(conf.directed_edge(7), None);
    }

    #[test]
    fn test_petgraph_export() {
        let conf = parsed();
        let graph = to_petgraph(&conf);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);

        let eats = petgraph::graph::NodeIndex::new(2);
        let mut children: Vec<_> = graph
            .edges(eats)
            .map(|edge| (graph[edge.target()], *edge.weight()))
            .collect();
        children.sort();
        assert_eq!(children, vec![(1, NSUBJ), (3, DOBJ)]);
    }

    #[test]
    fn test_attachment_scores() {
        let gold = GoldTree::from_heads(&sentence(), &[(2, NSUBJ), (0, ROOT), (2, NSUBJ)]).unwrap();
        let scores = attachment_scores(&parsed(), &gold).unwrap();

        assert_eq!(scores.total, 3);
        assert_eq!(scores.unlabeled, 3);
        assert_eq!(scores.labeled, 2);
        assert!((scores.las() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(scores.uas(), 1.0);
    }

    #[test]
    fn test_partial_parse_scores_and_violations() {
        let init = Arc::new(Configuration::from_tagged(&sentence(), Options::default()));
        let mut partial = init.copy();
        partial.add_arc(2, 1, NSUBJ).unwrap();

        let gold = GoldTree::from_heads(&sentence(), &[(2, NSUBJ), (0, ROOT), (2, DOBJ)]).unwrap();
        let scores = attachment_scores(&partial, &gold).unwrap();
        assert_eq!((scores.unlabeled, scores.labeled), (1, 1));

        assert_eq!(
            validate_tree(&partial),
            vec![TreeViolation::Unattached(vec![2, 3])]
        );
        assert!(validate_tree(&parsed()).is_empty());
        assert!(validate_tree(&gold).is_empty());
    }

    #[test]
    fn test_cycle_is_reported() {
        let init = Arc::new(Configuration::from_tagged(&sentence(), Options::default()));
        let mut conf = init.copy();
        conf.add_arc(1, 2, NSUBJ).unwrap();
        conf.add_arc(2, 1, NSUBJ).unwrap();
        conf.add_arc(0, 3, ROOT).unwrap();

        assert_eq!(validate_tree(&conf), vec![TreeViolation::Cycle]);
    }

    #[test]
    fn test_mismatched_inputs() {
        let short = vec![TaggedToken::new("Hi", "UH")];
        assert_eq!(
            GoldTree::from_heads(&short, &[]),
            Err(GraphError::LengthMismatch { expected: 1, found: 0 })
        );
        assert_eq!(
            GoldTree::from_heads(&short, &[(5, ROOT)]),
            Err(GraphError::HeadOutOfRange { modifier: 1, head: 5 })
        );

        let gold = GoldTree::from_heads(&short, &[(0, ROOT)]).unwrap();
        assert!(matches!(
            attachment_scores(&parsed(), &gold),
            Err(GraphError::LengthMismatch { expected: 2, found: 4 })
        ));
    }
}
