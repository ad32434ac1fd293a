use crate::{
    ai::{self, CellPicker},
    board::Board,
    boundary::Boundary,
    common::CellKey,
    participant::Participant,
};

use crate::player::Player;

/// Automated player driven by the fixed-priority policy in [`ai`].
pub struct AiPlayer<P: CellPicker> {
    picker: P,
}

impl<P: CellPicker> AiPlayer<P> {
    pub fn new(picker: P) -> Self {
        Self { picker }
    }
}

impl<P: CellPicker> Player for AiPlayer<P> {
    fn choose_cell(
        &mut self,
        board: &Board,
        me: &Participant,
        opponent: &Participant,
        _io: &mut dyn Boundary,
    ) -> anyhow::Result<CellKey> {
        let (key, reason) =
            ai::choose_move_with_reason(board, me.marker(), opponent.marker(), &mut self.picker)
                .map_err(|e| anyhow::anyhow!(e))?;
        log::debug!("{} picks {} ({:?})", me.name(), key, reason);
        Ok(key)
    }
}
