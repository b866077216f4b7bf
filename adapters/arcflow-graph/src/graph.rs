use petgraph::graph::{Graph, NodeIndex};
use petgraph::Directed;

use arcflow_protocol::{DepArc, RelationId};
use arcflow_state::{Configuration, Node};

/// Undirected view of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn connects(&self, x: usize, y: usize) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

impl From<DepArc> for Edge {
    fn from(arc: DepArc) -> Self {
        let (a, b) = arc.endpoints();
        Self { a, b }
    }
}

/// Vertex/edge view of a dependency analysis.
///
/// Vertex ids are node indices (0 = root); edge ids are arc ordinals.
pub trait DependencyGraph {
    type Vertex;

    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    fn vertex(&self, id: usize) -> Option<&Self::Vertex>;
    fn directed_edge(&self, id: usize) -> Option<DepArc>;

    /// The arc for which `node` is the modifier.
    fn arc_of(&self, node: usize) -> Option<DepArc>;

    fn edge(&self, id: usize) -> Option<Edge> {
        self.directed_edge(id).map(Edge::from)
    }

    fn vertices(&self) -> std::ops::Range<usize> {
        0..self.vertex_count()
    }

    fn edges(&self) -> std::ops::Range<usize> {
        0..self.edge_count()
    }

    /// Head of every vertex, indexed by vertex id.
    fn heads(&self) -> Vec<Option<usize>> {
        self.vertices()
            .map(|v| self.arc_of(v).map(|arc| arc.head))
            .collect()
    }
}

impl DependencyGraph for Configuration {
    type Vertex = Node;

    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        self.arcs().len()
    }

    fn vertex(&self, id: usize) -> Option<&Node> {
        self.node(id)
    }

    fn directed_edge(&self, id: usize) -> Option<DepArc> {
        self.arcs().index(id).ok().copied()
    }

    // O(1) through the arc id cached on the node.
    fn arc_of(&self, node: usize) -> Option<DepArc> {
        self.labeled_arc(node).copied()
    }
}

/// Copies any dependency graph into a petgraph graph.
///
/// Node weights are vertex ids and petgraph node `i` is vertex `i`.
pub fn to_petgraph<G: DependencyGraph + ?Sized>(graph: &G) -> Graph<usize, RelationId, Directed> {
    let mut out = Graph::with_capacity(graph.vertex_count(), graph.edge_count());
    for v in graph.vertices() {
        out.add_node(v);
    }
    for arc in graph.edges().filter_map(|e| graph.directed_edge(e)) {
        out.add_edge(NodeIndex::new(arc.head), NodeIndex::new(arc.modifier), arc.relation);
    }
    out
}
