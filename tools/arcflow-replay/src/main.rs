mod replay;
mod script;
mod systems;

use clap::Parser;
use std::path::PathBuf;

use crate::script::Script;
use crate::systems::System;

#[derive(Parser)]
#[command(author, version, about = "Replays a scripted transition sequence and prints the configuration trace")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    script: PathBuf,

    /// Overrides the transition system named in the script
    #[arg(long, value_enum)]
    system: Option<System>,

    /// Dump node bindings and arcs of the final configuration
    #[arg(long)]
    graph: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    eprintln!("📖 Reading script from {:?}...", cli.script);
    let script = Script::load(&cli.script)?;
    let system = cli.system.unwrap_or(script.system);

    eprintln!(
        "⚙️  Replaying {} transitions over {} tokens ({:?})...",
        script.transitions.len(),
        script.sentence.len(),
        system
    );
    let outcome = replay::run(&script, system)?;

    for line in &outcome.lines {
        println!("{line}");
    }
    if cli.graph {
        println!("{}", outcome.last.string_graph());
    }

    if let Some(scores) = outcome.scores {
        eprintln!("📊 UAS {:.3}  LAS {:.3}", scores.uas(), scores.las());
    }
    if outcome.last.is_terminal() && outcome.violations.is_empty() {
        eprintln!("✅ Terminal after {} transitions", outcome.last.history_len() - 1);
    } else {
        eprintln!(
            "⚠️  Stopped before a complete tree (terminal: {}, issues: {:?})",
            outcome.last.is_terminal(),
            outcome.violations
        );
    }
    Ok(())
}
