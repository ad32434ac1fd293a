#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use super::Boundary;

/// Terminal boundary: prints to stdout and reads answers from stdin.
pub struct ConsoleBoundary {
    clear_screen: bool,
}

impl ConsoleBoundary {
    pub fn new() -> Self {
        Self { clear_screen: true }
    }

    /// Keep the scrollback instead of clearing between frames.
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }
}

impl Default for ConsoleBoundary {
    fn default() -> Self {
        Self::new()
    }
}

impl Boundary for ConsoleBoundary {
    fn announce(&mut self, message: &str) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        // prompts ending in ": " stay on the input line
        if message.ends_with(": ") {
            write!(out, "{}", message)?;
        } else {
            writeln!(out, "{}", message)?;
        }
        out.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            anyhow::bail!("standard input closed");
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        if self.clear_screen {
            let mut out = io::stdout().lock();
            write!(out, "\x1B[2J\x1B[1;1H")?;
            out.flush()?;
        }
        Ok(())
    }
}
