use std::fs;
use std::path::Path;

use anyhow::Context;
use arcflow_protocol::{TaggedSentence, TaggedToken};
use arcflow_state::Options;
use serde::Deserialize;

use crate::systems::System;

/// JSON replay script: a tagged sentence plus the transitions to apply.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub sentence: Vec<(String, String)>,
    #[serde(default)]
    pub system: System,
    #[serde(default)]
    pub options: Options,
    pub transitions: Vec<String>,
    /// Optional reference heads, one `(head, relation)` per token.
    #[serde(default)]
    pub gold: Option<Vec<(usize, String)>>,
}

impl Script {
    /// Reads and parses the script at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        serde_json::from_str(&input)
            .with_context(|| format!("invalid script {}", path.display()))
    }

    pub fn tagged_sentence(&self) -> TaggedSentence {
        self.sentence
            .iter()
            .map(|(token, tag)| TaggedToken::new(token.as_str(), tag.as_str()))
            .collect()
    }
}
