use arcflow_protocol::RelationId;
use thiserror::Error;

/// Which container an access failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Stack,
    Queue,
    ArcSet,
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Container::Stack => "stack",
            Container::Queue => "queue",
            Container::ArcSet => "arc set",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("index {index} out of range for {container} of size {len}")]
    IndexOutOfRange {
        container: Container,
        index: usize,
        len: usize,
    },

    #[error("{0} is empty")]
    EmptyContainer(Container),

    /// A modifier may receive exactly one head. Hitting this means the driver
    /// applied an illegal transition and the derivation must be abandoned.
    #[error("node {modifier} is already bound to head {head} with relation {relation}")]
    AlreadyBound {
        modifier: usize,
        head: usize,
        relation: RelationId,
    },

    #[error("node {index} does not exist (sentence has {len} nodes including root)")]
    UnknownNode { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StateError>;
