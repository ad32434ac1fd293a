use crate::{
    board::Board,
    boundary::Boundary,
    common::CellKey,
    participant::Participant,
};

use crate::player::Player;

/// Interactive player: asks the user for every move.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `input` as a key that is still free on `board`.
fn parse_free_cell(board: &Board, input: &str) -> Option<CellKey> {
    input
        .parse::<CellKey>()
        .ok()
        .filter(|&key| !board.is_marked(key))
}

impl Player for CliPlayer {
    fn choose_cell(
        &mut self,
        board: &Board,
        _me: &Participant,
        _opponent: &Participant,
        io: &mut dyn Boundary,
    ) -> anyhow::Result<CellKey> {
        let mut answer = io.prompt_cell_choice(&board.unmarked_keys())?;
        loop {
            if let Some(key) = parse_free_cell(board, &answer) {
                return Ok(key);
            }
            io.announce("Sorry, that's not a valid choice.")?;
            answer = io.read_line()?;
        }
    }
}
