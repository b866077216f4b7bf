//! Transition-system conventions a configuration is created under.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the synthetic root lives after `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RootPlacement {
    /// Root is on neither the stack nor the queue; drivers attach to index 0
    /// explicitly (e.g. with a pop-root move).
    #[default]
    Detached,
    /// Root index 0 is pushed onto the stack by `init`.
    Seeded,
}

/// Stopping predicate of the transition system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TerminalRule {
    /// Terminal as soon as the queue is empty.
    QueueExhausted,
    /// Queue empty and the stack reduced: empty for a detached root,
    /// holding only the root when it was seeded.
    #[default]
    Drained,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub root: RootPlacement,
    pub terminal: TerminalRule,
}

impl Options {
    pub fn new(root: RootPlacement, terminal: TerminalRule) -> Self {
        Self { root, terminal }
    }

    /// Root seeded on the stack, terminal when only the root remains.
    pub fn seeded() -> Self {
        Self::new(RootPlacement::Seeded, TerminalRule::Drained)
    }
}
