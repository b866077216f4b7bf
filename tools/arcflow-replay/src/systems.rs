//! Reference transition systems used to replay scripted derivations.

use std::str::FromStr;

use anyhow::{bail, ensure, Context};
use arcflow_protocol::RelationId;
use arcflow_state::{Configuration, Labels};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum System {
    #[default]
    ArcStandard,
    ArcEager,
}

/// A named transition: `SH`, `RE`, `PR`, `LA-<rel>` or `RA-<rel>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Shift,
    Reduce,
    PopRoot,
    LeftArc(String),
    RightArc(String),
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> anyhow::Result<Self> {
        match name {
            "SH" => return Ok(Move::Shift),
            "RE" => return Ok(Move::Reduce),
            "PR" => return Ok(Move::PopRoot),
            _ => {}
        }
        let (kind, relation) = name
            .split_once('-')
            .with_context(|| format!("unknown transition '{name}'"))?;
        ensure!(!relation.is_empty(), "transition '{name}' has an empty relation");
        match kind {
            "LA" => Ok(Move::LeftArc(relation.to_string())),
            "RA" => Ok(Move::RightArc(relation.to_string())),
            _ => bail!("unknown transition '{name}'"),
        }
    }
}

fn stack_top(conf: &Configuration, depth: usize) -> anyhow::Result<usize> {
    conf.stack()
        .index(depth)
        .with_context(|| format!("needs {} element(s) on the stack", depth + 1))
}

fn shift(conf: &mut Configuration) -> anyhow::Result<()> {
    let node = conf.queue_mut().dequeue().context("shift on an empty queue")?;
    conf.stack_mut().push(node);
    Ok(())
}

fn pop_root(conf: &mut Configuration, relation: RelationId) -> anyhow::Result<()> {
    ensure!(conf.queue().is_empty(), "pop-root while input remains");
    ensure!(conf.stack().len() == 1, "pop-root needs exactly one stack element");
    let node = conf.stack_mut().pop()?;
    ensure!(node != 0, "pop-root on the root itself");
    if !conf.node(node).is_some_and(|n| n.is_bound()) {
        conf.add_arc(0, node, relation)?;
    }
    Ok(())
}

impl System {
    /// Applies the effects of `mv` to `conf`.
    pub fn apply(self, conf: &mut Configuration, mv: &Move, labels: &mut Labels) -> anyhow::Result<()> {
        match (self, mv) {
            (_, Move::Shift) => shift(conf),
            (_, Move::PopRoot) => pop_root(conf, labels.intern_relation("root")),

            (System::ArcStandard, Move::LeftArc(rel)) => {
                let (s0, s1) = (stack_top(conf, 0)?, stack_top(conf, 1)?);
                ensure!(s1 != 0, "left-arc would give the root a head");
                conf.add_arc(s0, s1, labels.intern_relation(rel))?;
                conf.stack_mut().pop()?;
                conf.stack_mut().pop()?;
                conf.stack_mut().push(s0);
                Ok(())
            }
            (System::ArcStandard, Move::RightArc(rel)) => {
                let (s0, s1) = (stack_top(conf, 0)?, stack_top(conf, 1)?);
                conf.add_arc(s1, s0, labels.intern_relation(rel))?;
                conf.stack_mut().pop()?;
                Ok(())
            }
            (System::ArcStandard, Move::Reduce) => bail!("arc-standard has no reduce"),

            (System::ArcEager, Move::LeftArc(rel)) => {
                let s0 = stack_top(conf, 0)?;
                let b0 = conf.queue().peek().context("left-arc on an empty queue")?;
                ensure!(s0 != 0, "left-arc would give the root a head");
                conf.add_arc(b0, s0, labels.intern_relation(rel))?;
                conf.stack_mut().pop()?;
                Ok(())
            }
            (System::ArcEager, Move::RightArc(rel)) => {
                let s0 = stack_top(conf, 0)?;
                let b0 = conf.queue_mut().dequeue().context("right-arc on an empty queue")?;
                conf.add_arc(s0, b0, labels.intern_relation(rel))?;
                conf.stack_mut().push(b0);
                Ok(())
            }
            (System::ArcEager, Move::Reduce) => {
                let s0 = stack_top(conf, 0)?;
                ensure!(
                    conf.node(s0).is_some_and(|n| n.is_bound()),
                    "reduce on unattached node {s0}"
                );
                conf.stack_mut().pop()?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcflow_protocol::TaggedToken;
    use arcflow_state::{Options, StateError};
    use std::sync::Arc;

    fn init(options: Options) -> Arc<Configuration> {
        let sentence = vec![TaggedToken::new("John", "NNP"), TaggedToken::new("sleeps", "VBZ")];
        Arc::new(Configuration::from_tagged(&sentence, options))
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!("SH".parse::<Move>().unwrap(), Move::Shift);
        assert_eq!("LA-nsubj".parse::<Move>().unwrap(), Move::LeftArc("nsubj".into()));
        assert_eq!("RA-acl-relcl".parse::<Move>().unwrap(), Move::RightArc("acl-relcl".into()));
        assert!("LA-".parse::<Move>().is_err());
        assert!("XX-foo".parse::<Move>().is_err());
        assert!("jump".parse::<Move>().is_err());
    }

    #[test]
    fn test_arc_standard_left_arc() {
        let mut labels = Labels::new();
        let mut conf = init(Options::default()).copy();
        for mv in ["SH", "SH", "LA-nsubj"] {
            System::ArcStandard
                .apply(&mut conf, &mv.parse().unwrap(), &mut labels)
                .unwrap();
        }

        assert_eq!(conf.stack().as_slice(), &[2]);
        assert_eq!(conf.node(1).unwrap().head(), Some(2));
        assert_eq!(labels.relation("nsubj"), conf.node(1).unwrap().relation());
    }

    #[test]
    fn test_arc_eager_right_arc_and_reduce() {
        let mut labels = Labels::new();
        let mut conf = init(Options::seeded()).copy();
        for mv in ["SH", "LA-nsubj", "RA-root", "RE"] {
            System::ArcEager
                .apply(&mut conf, &mv.parse().unwrap(), &mut labels)
                .unwrap();
        }

        assert_eq!(conf.stack().as_slice(), &[0]);
        assert!(conf.queue().is_empty());
        assert!(conf.is_terminal());
        assert_eq!(conf.node(2).unwrap().head(), Some(0));
    }

    #[test]
    fn test_illegal_moves_are_reported() {
        let mut labels = Labels::new();
        let mut conf = init(Options::default()).copy();

        assert!(System::ArcStandard.apply(&mut conf, &Move::Reduce, &mut labels).is_err());
        assert!(System::ArcStandard
            .apply(&mut conf, &Move::RightArc("dep".into()), &mut labels)
            .is_err());

        let mut eager = init(Options::seeded()).copy();
        System::ArcEager.apply(&mut eager, &Move::Shift, &mut labels).unwrap();
        System::ArcEager
            .apply(&mut eager, &Move::RightArc("dep".into()), &mut labels)
            .unwrap();
        // Node 2 already has head 1.
        let err = eager.add_arc(0, 2, RelationId(9)).unwrap_err();
        assert!(matches!(err, StateError::AlreadyBound { modifier: 2, head: 1, .. }));
    }
}
