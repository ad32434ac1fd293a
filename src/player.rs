use crate::{board::Board, boundary::Boundary, common::CellKey, participant::Participant};

/// Source of moves for one participant.
///
/// The engine owns the participants and the board; a player only looks at
/// them and answers with the cell to mark. Interactive players talk to the
/// user through `io`; automated ones ignore it.
pub trait Player {
    /// Choose an unmarked cell for `me` to mark.
    fn choose_cell(
        &mut self,
        board: &Board,
        me: &Participant,
        opponent: &Participant,
        io: &mut dyn Boundary,
    ) -> anyhow::Result<CellKey>;
}
