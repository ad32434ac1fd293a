use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::Boundary;

/// Boundary that answers prompts from a queue of lines and records every
/// announcement.
#[derive(Debug, Default, Clone)]
pub struct ScriptedBoundary {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
    clears: usize,
}

impl ScriptedBoundary {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            clears: 0,
        }
    }

    /// Queue another answer after the existing ones.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// Answers not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Every announced message, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any announcement contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Number of announcements containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|line| line.contains(needle)).count()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Boundary for ScriptedBoundary {
    fn announce(&mut self, message: &str) -> anyhow::Result<()> {
        self.transcript.push(message.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted input exhausted"))
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.clears += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Marker;

    #[test]
    fn prompts_retry_until_valid() {
        let mut io = ScriptedBoundary::new(["q", "", "o", "maybe", "Y"]);
        assert_eq!(io.prompt_marker_choice().unwrap(), Marker::O);
        assert!(io.prompt_yes_no("Again?").unwrap());
        assert_eq!(io.count("Sorry, invalid choice."), 2);
        assert_eq!(io.count("Sorry, must be y or n"), 1);
        assert_eq!(io.remaining_inputs(), 0);
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let mut io = ScriptedBoundary::new(Vec::<String>::new());
        assert!(io.prompt_yes_no("Again?").is_err());
    }

    #[test]
    fn first_mover_prompt_lists_both_markers() {
        let mut io = ScriptedBoundary::new(["x"]);
        assert_eq!(io.prompt_first_mover_choice(Marker::O, Marker::X).unwrap(), Marker::X);
        assert!(io.saw("Choose: O or X"));
    }
}
