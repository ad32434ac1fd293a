//! I/O boundary between the match engine and whoever is playing.
//!
//! The engine never prints or reads on its own. Everything goes through a
//! [`Boundary`]: [`console::ConsoleBoundary`] talks to a terminal and
//! [`scripted::ScriptedBoundary`] replays queued answers for tests and
//! simulations.
//!
//! Implementors provide three primitives (`announce`, `read_line`, `clear`);
//! the prompts are built on top of them and keep asking until the answer is
//! acceptable. A bad answer is never an error. An error means the input
//! source itself is gone.

use alloc::format;
use alloc::string::String;

use crate::common::{CellKey, Marker};
use crate::ui::joinor;

pub trait Boundary {
    /// Show a message to the player.
    fn announce(&mut self, message: &str) -> anyhow::Result<()>;

    /// Block until the player enters a line; the trailing newline is removed.
    fn read_line(&mut self) -> anyhow::Result<String>;

    /// Clear the screen between frames.
    fn clear(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Ask which marker the human plays with.
    fn prompt_marker_choice(&mut self) -> anyhow::Result<Marker> {
        loop {
            self.announce("")?;
            self.announce("Which player do you want to be? X or O?")?;
            if let Ok(marker) = self.read_line()?.parse::<Marker>() {
                return Ok(marker);
            }
            self.announce("")?;
            self.announce("Sorry, invalid choice.")?;
        }
    }

    /// Ask which of two markers moves first.
    fn prompt_first_mover_choice(&mut self, a: Marker, b: Marker) -> anyhow::Result<Marker> {
        loop {
            self.announce("")?;
            self.announce("Who should go first?")?;
            self.announce(&format!("Choose: {} or {}", a, b))?;
            match self.read_line()?.parse::<Marker>() {
                Ok(marker) if marker == a || marker == b => return Ok(marker),
                _ => {
                    self.announce("")?;
                    self.announce("Sorry, invalid choice.")?;
                }
            }
        }
    }

    /// Ask for a cell, listing the valid ones. Returns the raw answer; the
    /// caller checks it against the board.
    fn prompt_cell_choice(&mut self, valid_keys: &[CellKey]) -> anyhow::Result<String> {
        self.announce(&format!("Choose a square ({}): ", joinor(valid_keys, ", ", "or")))?;
        self.read_line()
    }

    /// Ask a yes/no question.
    fn prompt_yes_no(&mut self, question: &str) -> anyhow::Result<bool> {
        loop {
            self.announce("")?;
            self.announce(question)?;
            match self.read_line()?.trim().to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.announce("Sorry, must be y or n")?,
            }
        }
    }
}

#[cfg(feature = "std")]
pub mod console;
pub mod scripted;
