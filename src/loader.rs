//! Frame loading.
//!
//! Reads numbered `frame<k>.txt` files into an ordered in-memory sequence
//! once at startup. Loading is all-or-nothing: a missing or unreadable file
//! aborts with the offending path rather than silently shrinking or
//! reordering playback.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use tracing::debug;

use crate::{PlayerError, Result};

/// Ordered, non-empty list of animation frames. Immutable after load.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<String>,
}

impl FrameSequence {
    /// Load `dir/frame<k>.txt` for every `k` in `range`, in increasing order
    /// of `k`. File order is animation order.
    pub fn load(dir: impl AsRef<Path>, range: RangeInclusive<u32>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut frames = Vec::new();

        for k in range {
            let path = dir.join(format!("frame{k}.txt"));
            // read_to_string opens, reads and closes the handle in one scope,
            // so 44 sequential loads never accumulate open descriptors
            let contents = fs::read_to_string(&path).map_err(|source| PlayerError::MissingFrame {
                path: path.clone(),
                source,
            })?;
            debug!(frame = k, bytes = contents.len(), "loaded frame");
            frames.push(contents);
        }

        Self::from_frames(frames)
    }

    /// Build a sequence from already-loaded frames. Rejects an empty list so
    /// modulo indexing can never divide by zero.
    pub fn from_frames(frames: Vec<String>) -> Result<Self> {
        if frames.is_empty() {
            return Err(PlayerError::EmptySequence);
        }
        Ok(Self { frames })
    }

    /// Number of frames in the sequence. Always at least 1.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: construction rejects empty frame lists. Kept alongside
    /// `len` to satisfy the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame displayed at a given cursor position. The cursor is unbounded;
    /// only its value modulo the sequence length selects a frame.
    pub fn frame_at(&self, cursor: u64) -> &str {
        let idx = (cursor % self.frames.len() as u64) as usize;
        &self.frames[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_sequence_rejected() {
        let result = FrameSequence::from_frames(Vec::new());
        assert!(matches!(result, Err(PlayerError::EmptySequence)));
    }

    #[test]
    fn test_frame_at_wraps_modulo_len() {
        let seq = FrameSequence::from_frames(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ])
        .unwrap();

        let displayed: Vec<&str> = (0..6).map(|c| seq.frame_at(c)).collect();
        assert_eq!(displayed, vec!["A", "B", "C", "A", "B", "C"]);
    }

    #[test]
    fn test_frame_at_large_cursor() {
        let seq =
            FrameSequence::from_frames(vec!["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(seq.frame_at(10_001), "B");
    }
}
