//! Playback loop.
//!
//! Time, output and screen clearing are injected through small traits so the
//! loop can be driven under test without a real terminal or real sleeps. The
//! loop itself is single-threaded and blocking: the fixed-tick sleep idles
//! the whole process, there is nothing else for it to do.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::loader::FrameSequence;
use crate::Result;

/// Erases previously printed terminal content before the next frame draws.
pub trait ScreenClearer {
    fn clear(&mut self) -> std::io::Result<()>;
}

/// Blocking wait between frames.
pub trait Ticker {
    fn wait(&mut self, duration: Duration);
}

/// Real wall-clock ticker backed by `std::thread::sleep`.
#[derive(Debug, Default)]
pub struct SleepTicker;

impl Ticker for SleepTicker {
    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Cooperative stop flag checked once per loop iteration.
///
/// A fresh token is never set, preserving the run-until-killed contract.
/// A clone handed to a test harness or process supervisor stops the loop
/// cleanly at the next iteration boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Plays a [`FrameSequence`] forever: write, wait, clear, advance.
pub struct Animator<W, C, T> {
    sequence: FrameSequence,
    out: W,
    clearer: C,
    ticker: T,
    tick: Duration,
}

impl<W: Write, C: ScreenClearer, T: Ticker> Animator<W, C, T> {
    pub fn new(sequence: FrameSequence, out: W, clearer: C, ticker: T, tick: Duration) -> Self {
        Self {
            sequence,
            out,
            clearer,
            ticker,
            tick,
        }
    }

    /// Run the playback loop until the token is cancelled.
    ///
    /// Each iteration writes the current frame, waits one tick and clears
    /// the screen, in that order, before advancing the cursor. Write, flush
    /// and clear failures are fatal; the caller decides how to surface them.
    pub fn run(&mut self, token: &CancelToken) -> Result<()> {
        let mut cursor: u64 = 0;

        while !token.is_cancelled() {
            // no trailing newline: the next clear wipes any partial line
            self.out
                .write_all(self.sequence.frame_at(cursor).as_bytes())?;
            self.out.flush()?;
            self.ticker.wait(self.tick);
            self.clearer.clear()?;
            cursor += 1;
        }

        debug!(frames_shown = cursor, "playback cancelled");
        Ok(())
    }
}
