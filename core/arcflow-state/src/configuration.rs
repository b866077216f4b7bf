//! Parser configuration: stack, queue, arcs and node bindings, plus a shared
//! link to the configuration it was copied from.
//!
//! Configurations are snapshotted with [`Configuration::copy`], which shares
//! every buffer with the parent. Only the copy is mutated; the parent stays
//! reachable through [`Configuration::previous`] and is never written again,
//! so many children may hang off one parent (beam search, oracle lookahead).

use std::fmt::Write as _;
use std::sync::Arc;

use arcflow_protocol::{
    DepArc, EnumTaggedSentence, EnumTaggedToken, RelationId, TaggedSentence, TaggedToken,
    TransitionId,
};
use tracing::{debug, error, trace};

use crate::arcs::ArcSet;
use crate::error::{Result, StateError};
use crate::node::Node;
use crate::options::{Options, RootPlacement, TerminalRule};
use crate::queue::Queue;
use crate::stack::Stack;

#[derive(Debug)]
pub struct Configuration {
    stack: Stack,
    queue: Queue,
    arcs: ArcSet,
    // Slot array shared with the parent until this configuration binds a node.
    nodes: Arc<Vec<Arc<Node>>>,
    last: Option<TransitionId>,
    previous: Option<Arc<Configuration>>,
    num_head_stack: usize,
    options: Options,
}

impl Configuration {
    /// Builds the head of a history chain from an enumerated sentence.
    ///
    /// Node 0 is the synthetic root; token `i` of the sentence becomes node `i + 1`.
    pub fn init(sentence: &[EnumTaggedToken], options: Options) -> Self {
        let len = sentence.len();
        debug!(tokens = len, ?options, "initializing configuration");

        let mut nodes = Vec::with_capacity(len + 1);
        nodes.push(Arc::new(Node::root()));
        for (i, token) in sentence.iter().enumerate() {
            nodes.push(Arc::new(Node::new(i + 1, token.clone())));
        }

        let mut stack = Stack::with_capacity(len + 1);
        if options.root == RootPlacement::Seeded {
            stack.push(0);
        }

        Self {
            stack,
            queue: (1..=len).collect(),
            arcs: ArcSet::with_capacity(len),
            nodes: Arc::new(nodes),
            last: None,
            previous: None,
            num_head_stack: 0,
            options,
        }
    }

    /// Same as [`Configuration::init`] for a sentence without enumerated ids.
    pub fn from_tagged(sentence: &[TaggedToken], options: Options) -> Self {
        let enumerated: EnumTaggedSentence =
            sentence.iter().cloned().map(EnumTaggedToken::from).collect();
        Self::init(&enumerated, options)
    }

    /// Snapshot whose `previous` is `self`.
    ///
    /// Stack, queue, arcs and the node slot array are shared until the copy
    /// first writes to them. The last transition is inherited and should be
    /// overwritten by the driver with [`Configuration::set_last_transition`].
    pub fn copy(self: &Arc<Self>) -> Configuration {
        trace!(arcs = self.arcs.len(), queue = self.queue.len(), "copying configuration");
        Configuration {
            stack: self.stack.clone(),
            queue: self.queue.clone(),
            arcs: self.arcs.clone(),
            nodes: Arc::clone(&self.nodes),
            last: self.last,
            previous: Some(Arc::clone(self)),
            num_head_stack: self.num_head_stack,
            options: self.options,
        }
    }

    /// Adds `head -> modifier` and returns the new arc's ordinal.
    ///
    /// Fails with [`StateError::AlreadyBound`] if `modifier` already has a head;
    /// in that case nothing is modified.
    pub fn add_arc(&mut self, head: usize, modifier: usize, relation: RelationId) -> Result<usize> {
        let len = self.nodes.len();
        for index in [head, modifier] {
            if index >= len {
                return Err(StateError::UnknownNode { index, len });
            }
        }

        let ordinal = self.arcs.len();
        let bound = match self.nodes[modifier].bind(head, relation, ordinal) {
            Ok(node) => node,
            Err(err) => {
                error!(head, modifier, %relation, %err, "rejected second head for modifier");
                return Err(err);
            }
        };
        let ordinal = self.arcs.add(DepArc::new(head, modifier, relation));

        let nodes = Arc::make_mut(&mut self.nodes);
        nodes[modifier] = Arc::new(bound);
        let governor = nodes[head].with_modifier(modifier, relation);
        nodes[head] = Arc::new(governor);

        trace!(head, modifier, %relation, ordinal, "arc added");
        Ok(ordinal)
    }

    pub fn set_last_transition(&mut self, transition: TransitionId) {
        self.last = Some(transition);
    }

    pub fn last_transition(&self) -> Option<TransitionId> {
        self.last
    }

    pub fn is_terminal(&self) -> bool {
        if !self.queue.is_empty() {
            return false;
        }
        match (self.options.terminal, self.options.root) {
            (TerminalRule::QueueExhausted, _) => true,
            (TerminalRule::Drained, RootPlacement::Detached) => self.stack.is_empty(),
            (TerminalRule::Drained, RootPlacement::Seeded) => self.stack.as_slice() == [0],
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut Queue {
        &mut self.queue
    }

    pub fn arcs(&self) -> &ArcSet {
        &self.arcs
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn previous(&self) -> Option<&Arc<Configuration>> {
        self.previous.as_ref()
    }

    /// Walks the chain from `self` back to its head, most recent first.
    pub fn history(&self) -> History<'_> {
        History { next: Some(self) }
    }

    /// Number of configurations in the chain, `self` included.
    pub fn history_len(&self) -> usize {
        self.history().count()
    }

    /// The chain ordered from its head to `self`.
    pub fn derivation(&self) -> Vec<&Configuration> {
        let mut chain: Vec<_> = self.history().collect();
        chain.reverse();
        chain
    }

    /// Compares stack, queue, arcs and node bindings, ignoring history.
    pub fn graph_equal(&self, other: &Configuration) -> bool {
        self.stack == other.stack
            && self.queue == other.queue
            && self.arcs == other.arcs
            && (Arc::ptr_eq(&self.nodes, &other.nodes) || self.nodes == other.nodes)
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index).map(|node| node.as_ref())
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.iter().map(|node| node.as_ref())
    }

    /// The arc that bound `node` as a modifier, if any.
    pub fn labeled_arc(&self, node: usize) -> Option<&DepArc> {
        let arc = self.node(node)?.arc_id()?;
        self.arcs.index(arc).ok()
    }

    pub fn num_head_stack(&self) -> usize {
        self.num_head_stack
    }

    pub fn set_num_head_stack(&mut self, count: usize) {
        self.num_head_stack = count;
    }

    /// Sentence the configuration was initialized from, root stripped.
    pub fn tagged_sentence(&self) -> TaggedSentence {
        self.nodes
            .iter()
            .skip(1)
            .map(|node| node.token().tagged.clone())
            .collect()
    }

    /// Like [`Configuration::tagged_sentence`], keeping the enumerated ids.
    pub fn sentence(&self) -> EnumTaggedSentence {
        self.nodes.iter().skip(1).map(|node| node.token().clone()).collect()
    }

    /// Dump of every node binding followed by the arc list.
    pub fn string_graph(&self) -> String {
        let mut out = String::new();
        for node in self.nodes() {
            let _ = match node.binding() {
                Some(b) => write!(
                    out,
                    "{}:{}/{}<-{}:{} ",
                    node.index(),
                    node.raw_token(),
                    node.raw_tag(),
                    b.head,
                    b.relation
                ),
                None => write!(out, "{}:{}/{} ", node.index(), node.raw_token(), node.raw_tag()),
            };
        }
        let arcs: Vec<String> = self
            .arcs
            .iter()
            .map(|a| format!("({},{},{})", a.head, a.relation, a.modifier))
            .collect();
        let _ = write!(out, "[{}]", arcs.join(" "));
        out
    }

    #[cfg(test)]
    pub(crate) fn shares_nodes_with(&self, other: &Configuration) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }
}

/// Equal when the transition sequences leading to both configurations match.
///
/// Contents are not compared; use [`Configuration::graph_equal`] for that.
impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.history();
        let mut right = other.history();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if std::ptr::eq(a, b) {
                        return true;
                    }
                    if a.last != b.last {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Configuration {}

// Unlinks the chain iteratively; the derived drop would recurse once per ancestor.
impl Drop for Configuration {
    fn drop(&mut self) {
        let mut previous = self.previous.take();
        while let Some(parent) = previous {
            previous = Arc::into_inner(parent).and_then(|mut conf| conf.previous.take());
        }
    }
}

/// Iterator over a history chain, most recent configuration first.
#[derive(Debug, Clone)]
pub struct History<'a> {
    next: Option<&'a Configuration>,
}

impl<'a> Iterator for History<'a> {
    type Item = &'a Configuration;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.previous.as_deref();
        Some(current)
    }
}
