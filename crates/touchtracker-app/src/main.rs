//! TouchTracker replay tool.
//!
//! Feeds a recorded JSON script of input events through the draw controller
//! and prints the resulting display list.

mod replay;

use clap::Parser;
use std::path::PathBuf;

use replay::{AppError, replay_file};

#[derive(Parser, Debug)]
#[command(name = "touchtracker", about = "Replay a TouchTracker input script")]
struct Cli {
    /// JSON array of input events.
    script: PathBuf,

    /// Tracker config (JSON). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the display list.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        eprintln!("touchtracker: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let summary = replay_file(&cli.script, cli.config.as_deref())?;
    log::info!(
        "Replayed {} events ({} redraws): {} finished lines, {} active",
        summary.events,
        summary.redraws,
        summary.finished,
        summary.active
    );
    let output = if cli.pretty {
        serde_json::to_string_pretty(&summary.scene)?
    } else {
        serde_json::to_string(&summary.scene)?
    };
    println!("{output}");
    Ok(())
}
