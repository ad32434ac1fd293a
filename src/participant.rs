use alloc::string::String;

use crate::board::Board;
use crate::common::Marker;

/// Identity and running score of one side of the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    marker: Marker,
    score: u32,
}

impl Participant {
    /// A participant with a score of zero and an empty name; the engine names
    /// it when the match starts.
    pub fn new(marker: Marker) -> Self {
        Self {
            name: String::new(),
            marker,
            score: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Count a round win if this participant's marker owns a complete line.
    pub fn update_score(&mut self, board: &Board) {
        if board.winning_marker() == Some(self.marker) {
            self.score += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CellKey;

    #[test]
    fn only_the_winner_scores() {
        let mut board = Board::new();
        for key in [CellKey::A1, CellKey::B2, CellKey::C3] {
            board.place(key, Marker::O);
        }
        let mut x = Participant::new(Marker::X);
        let mut o = Participant::new(Marker::O);
        x.update_score(&board);
        o.update_score(&board);
        assert_eq!((x.score(), o.score()), (0, 1));
    }

    #[test]
    fn tie_scores_nobody() {
        let board = Board::new();
        let mut x = Participant::new(Marker::X).with_name("Ann");
        x.update_score(&board);
        assert_eq!(x.score(), 0);
        assert_eq!(x.name(), "Ann");
    }
}
