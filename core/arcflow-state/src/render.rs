//! One-line trace rendering of configurations.
//!
//! ```text
//! RA-nsubj	=>([ROOT],	[sleeps],	A1=A0+{(ROOT,nsubj,John)})
//! ```

use std::collections::HashMap;
use std::fmt;

use arcflow_protocol::{RelationId, TransitionId};

use crate::configuration::Configuration;

/// Resolves enumerated ids back to their names.
pub trait Vocabulary {
    fn transition_name(&self, id: TransitionId) -> Option<&str>;
    fn relation_name(&self, id: RelationId) -> Option<&str>;
}

/// Simple interning table for transition and relation names.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    transitions: Vec<String>,
    relations: Vec<String>,
    transition_ids: HashMap<String, TransitionId>,
    relation_ids: HashMap<String, RelationId>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern_transition(&mut self, name: &str) -> TransitionId {
        if let Some(id) = self.transition_ids.get(name) {
            return *id;
        }
        let id = TransitionId(self.transitions.len() as u32);
        self.transitions.push(name.to_string());
        self.transition_ids.insert(name.to_string(), id);
        id
    }

    pub fn intern_relation(&mut self, name: &str) -> RelationId {
        if let Some(id) = self.relation_ids.get(name) {
            return *id;
        }
        let id = RelationId(self.relations.len() as u32);
        self.relations.push(name.to_string());
        self.relation_ids.insert(name.to_string(), id);
        id
    }

    pub fn transition(&self, name: &str) -> Option<TransitionId> {
        self.transition_ids.get(name).copied()
    }

    pub fn relation(&self, name: &str) -> Option<RelationId> {
        self.relation_ids.get(name).copied()
    }
}

impl Vocabulary for Labels {
    fn transition_name(&self, id: TransitionId) -> Option<&str> {
        self.transitions.get(id.index()).map(String::as_str)
    }

    fn relation_name(&self, id: RelationId) -> Option<&str> {
        self.relations.get(id.index()).map(String::as_str)
    }
}

/// Display adapter returned by [`Configuration::trace`].
pub struct Trace<'a, V: ?Sized> {
    conf: &'a Configuration,
    vocabulary: &'a V,
}

impl Configuration {
    pub fn trace<'a, V: Vocabulary + ?Sized>(&'a self, vocabulary: &'a V) -> Trace<'a, V> {
        Trace {
            conf: self,
            vocabulary,
        }
    }
}

impl<V: Vocabulary + ?Sized> Trace<'_, V> {
    fn token(&self, node: usize) -> &str {
        self.conf.node(node).map_or("?", |n| n.raw_token())
    }

    // Closest three in order, otherwise first,...,last.
    fn boundary_view(&self, items: &[usize]) -> String {
        match items.len() {
            0 => String::new(),
            1..=3 => items
                .iter()
                .map(|&i| self.token(i))
                .collect::<Vec<_>>()
                .join(","),
            n => [self.token(items[0]), "...", self.token(items[n - 1])].join(","),
        }
    }

    fn transition(&self) -> Option<String> {
        let id = self.conf.last_transition()?;
        Some(
            self.vocabulary
                .transition_name(id)
                .map_or_else(|| id.to_string(), str::to_string),
        )
    }

    fn arc_summary(&self, transition: Option<&str>) -> String {
        let arcs = self.conf.arcs();
        let n = arcs.len();
        let created = matches!(transition.and_then(|t| t.get(..2)), Some("LA" | "RA"));
        match arcs.last() {
            Ok(arc) if created => {
                let relation = self
                    .vocabulary
                    .relation_name(arc.relation)
                    .map_or_else(|| arc.relation.to_string(), str::to_string);
                format!(
                    "A{}=A{}+{{({},{},{})}}",
                    n,
                    n - 1,
                    self.token(arc.head),
                    relation,
                    self.token(arc.modifier)
                )
            }
            _ => format!("A{n}"),
        }
    }
}

impl<V: Vocabulary + ?Sized> fmt::Display for Trace<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transition = self.transition();
        // Stack is listed bottom to top, so the top sits next to the queue.
        write!(
            f,
            "{}\t=>([{}],\t[{}],\t{})",
            transition.as_deref().unwrap_or(""),
            self.boundary_view(self.conf.stack().as_slice()),
            self.boundary_view(self.conf.queue().as_slice()),
            self.arc_summary(transition.as_deref())
        )
    }
}
