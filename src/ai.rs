// Move selection for the automated participant.
// Fixed-priority heuristic; no search and no heap use beyond the key list.

use crate::{
    board::Board,
    common::{BoardError, CellKey, Marker},
    config::CENTER,
};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Picks one cell out of a non-empty candidate list when no heuristic rule
/// applies.
pub trait CellPicker {
    fn pick(&mut self, candidates: &[CellKey]) -> Option<CellKey>;
}

/// Uniform random choice backed by any `rand` generator.
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CellPicker for RandomPicker<R> {
    fn pick(&mut self, candidates: &[CellKey]) -> Option<CellKey> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always takes the first candidate. Makes fallback moves reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl CellPicker for FirstAvailable {
    fn pick(&mut self, candidates: &[CellKey]) -> Option<CellKey> {
        candidates.first().copied()
    }
}

/// Which rule produced a move; reported in the debug log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    Center,
    Win,
    Block,
    Fallback,
}

/// Choose the cell for `me` to mark, together with the rule that chose it.
///
/// Rules are tried in this order and the first that applies wins:
/// take the center, complete our own threatened line, block the opponent's
/// threatened line, otherwise let `picker` choose among the unmarked cells.
pub fn choose_move_with_reason<P: CellPicker + ?Sized>(
    board: &Board,
    me: Marker,
    opponent: Marker,
    picker: &mut P,
) -> Result<(CellKey, MoveReason), BoardError> {
    let unmarked = board.unmarked_keys();
    if unmarked.is_empty() {
        return Err(BoardError::BoardFull);
    }
    if !board.is_marked(CENTER) {
        return Ok((CENTER, MoveReason::Center));
    }
    let completing = |marker| {
        board
            .line_dominated_by(marker)
            .and_then(|line| board.available_key_in_line(&line))
    };
    if let Some(key) = completing(me) {
        return Ok((key, MoveReason::Win));
    }
    if let Some(key) = completing(opponent) {
        return Ok((key, MoveReason::Block));
    }
    picker
        .pick(&unmarked)
        .filter(|key| unmarked.contains(key))
        .map(|key| (key, MoveReason::Fallback))
        .ok_or(BoardError::PickerRejected)
}

/// Convenience wrapper returning only the chosen cell.
pub fn choose_move<P: CellPicker + ?Sized>(
    board: &Board,
    me: Marker,
    opponent: Marker,
    picker: &mut P,
) -> Result<CellKey, BoardError> {
    choose_move_with_reason(board, me, opponent, picker).map(|(key, _)| key)
}
