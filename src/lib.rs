//! Chimney - looping ASCII art animation for the terminal
//!
//! Loads a numbered sequence of pre-rendered text frames from disk once at
//! startup, then plays them back forever: print the current frame, sleep a
//! fixed tick, clear the screen, advance a modulo cursor.

pub mod animator;
pub mod clear;
pub mod loader;

pub use animator::{Animator, CancelToken, ScreenClearer, SleepTicker, Ticker};
pub use clear::TerminalClearer;
pub use loader::FrameSequence;

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

/// Directory the frame files are read from, relative to the working directory.
pub const FRAME_DIR: &str = "chimney";

/// Inclusive frame file index range: `chimney/frame2.txt` through
/// `chimney/frame45.txt`, 44 frames total.
pub const FRAME_RANGE: RangeInclusive<u32> = 2..=45;

/// Duration between animation frames (100 ms = 10 FPS).
pub const FRAME_TICK: Duration = Duration::from_millis(100);

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Errors that can occur while loading or playing the animation
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Failed to read frame file {path}: {source}")]
    MissingFrame {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Frame sequence is empty; nothing to animate")]
    EmptySequence,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
