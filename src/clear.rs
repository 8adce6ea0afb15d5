//! Screen clearing.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::animator::ScreenClearer;

/// Clears the visible screen with terminal control sequences instead of
/// spawning an external `clear` process, so the same binary works on every
/// platform crossterm supports.
pub struct TerminalClearer<W: Write> {
    out: W,
}

impl<W: Write> TerminalClearer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ScreenClearer for TerminalClearer<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_emits_control_sequences() {
        let mut buf = Vec::new();
        TerminalClearer::new(&mut buf).clear().unwrap();
        // erase-display plus home-cursor escape sequences
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\u{1b}[2J"));
        assert!(out.contains("\u{1b}[1;1H"));
    }
}
