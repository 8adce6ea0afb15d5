//! Chimney CLI
//!
//! Plays the looping chimney ASCII animation in the terminal until the
//! process is killed.

use std::io;

use chimney::{
    Animator, CancelToken, FrameSequence, SleepTicker, TerminalClearer, FRAME_DIR, FRAME_RANGE,
    FRAME_TICK,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Chimney - looping ASCII art animation for the terminal
#[derive(Parser, Debug)]
#[command(name = "chimney")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output: show per-frame debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix into the stdout animation channel
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let sequence = FrameSequence::load(FRAME_DIR, FRAME_RANGE)?;
    info!("Loaded {} frames from {}/", sequence.len(), FRAME_DIR);
    debug!("Frame tick: {:?}", FRAME_TICK);

    let mut animator = Animator::new(
        sequence,
        io::stdout(),
        TerminalClearer::new(io::stdout()),
        SleepTicker,
        FRAME_TICK,
    );

    // No cancellation source is wired up: the loop runs until the process
    // is terminated externally, matching the original contract.
    animator.run(&CancelToken::new())?;

    Ok(())
}
