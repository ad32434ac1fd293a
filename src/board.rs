//! Game board state, one `BitBoard` per marker.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{CellKey, Marker};
use crate::config::{Line, WINNING_LINES};

/// Snapshot of a board, cheap to copy and compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BoardState {
    pub x: BitBoard,
    pub o: BitBoard,
}

/// The 3×3 grid. Every cell is either unmarked or holds one marker.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    x: BitBoard,
    o: BitBoard,
}

impl Board {
    /// Create a board with all nine cells unmarked.
    pub fn new() -> Self {
        Self::default()
    }

    fn marks(&self, marker: Marker) -> BitBoard {
        match marker {
            Marker::X => self.x,
            Marker::O => self.o,
        }
    }

    fn marks_mut(&mut self, marker: Marker) -> &mut BitBoard {
        match marker {
            Marker::X => &mut self.x,
            Marker::O => &mut self.o,
        }
    }

    fn occupied(&self) -> BitBoard {
        self.x | self.o
    }

    /// Put `marker` on `key`, replacing whatever the cell held before.
    pub fn place(&mut self, key: CellKey, marker: Marker) {
        self.marks_mut(marker.other()).clear(key);
        self.marks_mut(marker).set(key);
    }

    /// The marker on `key`, or `None` if the cell is unmarked.
    pub fn get(&self, key: CellKey) -> Option<Marker> {
        if self.x.get(key) {
            Some(Marker::X)
        } else if self.o.get(key) {
            Some(Marker::O)
        } else {
            None
        }
    }

    pub fn is_marked(&self, key: CellKey) -> bool {
        self.occupied().get(key)
    }

    /// Whether `text` names one of the nine cells.
    pub fn is_valid_key(&self, text: &str) -> bool {
        text.parse::<CellKey>().is_ok()
    }

    /// Marked keys in enumeration order.
    pub fn marked_keys(&self) -> Vec<CellKey> {
        self.occupied().iter().collect()
    }

    /// Unmarked keys in enumeration order.
    pub fn unmarked_keys(&self) -> Vec<CellKey> {
        (!self.occupied()).iter().collect()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == BitBoard::full()
    }

    /// Number of marks on the line when they all agree, with the shared
    /// marker. Returns `(0, None)` for an empty line or mixed markers.
    fn identical_markers(&self, line: &Line) -> (usize, Option<Marker>) {
        let mask = BitBoard::from_keys(line);
        let xs = (self.marks(Marker::X) & mask).count_ones();
        let os = (self.marks(Marker::O) & mask).count_ones();
        match (xs, os) {
            (0, 0) => (0, None),
            (n, 0) => (n, Some(Marker::X)),
            (0, n) => (n, Some(Marker::O)),
            _ => (0, None),
        }
    }

    /// Lines holding two identical marks and one unmarked cell, in
    /// rows/columns/diagonals order.
    pub fn threatened_lines(&self) -> impl Iterator<Item = Line> + '_ {
        WINNING_LINES.into_iter().filter(move |line| {
            let (count, _) = self.identical_markers(line);
            count == 2 && line.iter().any(|&key| !self.is_marked(key))
        })
    }

    /// First threatened line whose two marks are `marker`.
    pub fn line_dominated_by(&self, marker: Marker) -> Option<Line> {
        self.threatened_lines()
            .find(|line| self.identical_markers(line).1 == Some(marker))
    }

    /// First unmarked key of `line`, in the line's own order.
    pub fn available_key_in_line(&self, line: &Line) -> Option<CellKey> {
        line.iter().copied().find(|&key| !self.is_marked(key))
    }

    /// The marker holding a complete line, checking lines in priority order.
    pub fn winning_marker(&self) -> Option<Marker> {
        WINNING_LINES.iter().find_map(|line| match self.identical_markers(line) {
            (3, marker) => marker,
            _ => None,
        })
    }

    pub fn someone_won(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Unmark every cell.
    pub fn reset(&mut self) {
        self.x.clear_all();
        self.o.clear_all();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Board [")?;
        for (i, key) in CellKey::ALL.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                f.write_str(" / ")?;
            }
            let ch = self.get(*key).map_or('.', Marker::as_char);
            write!(f, "{}", ch)?;
        }
        f.write_str("]")
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState { x: b.x, o: b.o }
    }
}

impl From<BoardState> for Board {
    /// Cells set in both masks are kept as `X`.
    fn from(state: BoardState) -> Self {
        Board {
            x: state.x,
            o: state.o & !state.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_line_has_no_identical_count() {
        let mut board = Board::new();
        board.place(CellKey::A1, Marker::X);
        board.place(CellKey::B1, Marker::O);
        assert_eq!(board.identical_markers(&WINNING_LINES[0]), (0, None));
    }

    #[test]
    fn place_overwrites_previous_marker() {
        let mut board = Board::new();
        board.place(CellKey::C2, Marker::X);
        board.place(CellKey::C2, Marker::O);
        assert_eq!(board.get(CellKey::C2), Some(Marker::O));
        assert_eq!(board.marked_keys(), vec![CellKey::C2]);
    }
}
