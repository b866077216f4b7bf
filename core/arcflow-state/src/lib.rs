//! Parser configurations for transition-based dependency parsing.
//!
//! A [`Configuration`] holds the stack, queue, arc set and per-node bindings of
//! one parser state. Drivers create the chain head with
//! [`Configuration::init`], then repeatedly [`copy`](Configuration::copy) and
//! apply a transition's effects to the copy. Which transition to apply is
//! decided elsewhere.

pub mod arcs;
pub mod configuration;
pub mod error;
pub mod node;
pub mod options;
pub mod queue;
pub mod render;
pub mod stack;

pub use arcs::ArcSet;
pub use configuration::{Configuration, History};
pub use error::{Container, Result, StateError};
pub use node::{Binding, Node};
pub use options::{Options, RootPlacement, TerminalRule};
pub use queue::Queue;
pub use render::{Labels, Trace, Vocabulary};
pub use stack::Stack;
