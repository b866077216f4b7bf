use std::sync::Arc;

use anyhow::Context;
use arcflow_graph::{attachment_scores, validate_tree, AttachmentScores, GoldTree, TreeViolation};
use arcflow_state::{Configuration, Labels};
use log::{debug, info};

use crate::script::Script;
use crate::systems::{Move, System};

pub struct Replay {
    pub lines: Vec<String>,
    pub last: Arc<Configuration>,
    pub scores: Option<AttachmentScores>,
    pub violations: Vec<TreeViolation>,
}

/// Applies every scripted transition to a fresh copy and renders each state.
pub fn run(script: &Script, system: System) -> anyhow::Result<Replay> {
    let sentence = script.tagged_sentence();
    let mut labels = Labels::new();
    let mut current = Arc::new(Configuration::from_tagged(&sentence, script.options));
    let mut lines = vec![current.trace(&labels).to_string()];

    for (step, name) in script.transitions.iter().enumerate() {
        if current.is_terminal() {
            info!("transition {step} ({name}) applied to a terminal configuration");
        }
        let mv: Move = name.parse()?;
        let mut next = current.copy();
        system
            .apply(&mut next, &mv, &mut labels)
            .with_context(|| format!("transition {step} ('{name}') failed"))?;
        next.set_last_transition(labels.intern_transition(name));

        current = Arc::new(next);
        debug!("step {step}: {} arcs", current.arcs().len());
        lines.push(current.trace(&labels).to_string());
    }

    let scores = match &script.gold {
        Some(gold) => {
            let heads: Vec<_> = gold
                .iter()
                .map(|(head, rel)| (*head, labels.intern_relation(rel)))
                .collect();
            let tree = GoldTree::from_heads(&sentence, &heads)?;
            Some(attachment_scores(current.as_ref(), &tree)?)
        }
        None => None,
    };

    Ok(Replay {
        lines,
        violations: validate_tree(current.as_ref()),
        last: current,
        scores,
    })
}
