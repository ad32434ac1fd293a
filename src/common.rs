//! Common types for tic-tac-toe: markers, cell keys and board errors.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// One of the two symbols a participant places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// Both markers, in the order they are offered to the user.
    pub const ALL: [Marker; 2] = [Marker::X, Marker::O];

    /// The marker held by the other participant.
    pub fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Marker {
    type Err = BoardError;

    /// Accepts `x`/`o` in either case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Marker::X),
            "o" | "O" => Ok(Marker::O),
            other => Err(BoardError::InvalidMarker(other.to_string())),
        }
    }
}

/// Identifies one of the nine cells, column `A..=C` by row `1..=3`.
///
/// Keys are stored as a row-major index so iteration over [`CellKey::ALL`]
/// yields A1, B1, C1, A2, ... which is the order the board reports keys in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(u8);

impl CellKey {
    pub const A1: CellKey = CellKey(0);
    pub const B1: CellKey = CellKey(1);
    pub const C1: CellKey = CellKey(2);
    pub const A2: CellKey = CellKey(3);
    pub const B2: CellKey = CellKey(4);
    pub const C2: CellKey = CellKey(5);
    pub const A3: CellKey = CellKey(6);
    pub const B3: CellKey = CellKey(7);
    pub const C3: CellKey = CellKey(8);

    /// Every valid key in fixed enumeration order.
    pub const ALL: [CellKey; 9] = [
        Self::A1,
        Self::B1,
        Self::C1,
        Self::A2,
        Self::B2,
        Self::C2,
        Self::A3,
        Self::B3,
        Self::C3,
    ];

    /// Build a key from zero-based column and row indices.
    pub fn new(col: usize, row: usize) -> Result<Self, BoardError> {
        if col >= 3 || row >= 3 {
            return Err(BoardError::InvalidCell(alloc::format!("col={col}, row={row}")));
        }
        Ok(CellKey((row * 3 + col) as u8))
    }

    /// Zero-based column (A = 0).
    pub const fn col(self) -> usize {
        self.0 as usize % 3
    }

    /// Zero-based row (1 = 0).
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Row-major position in `0..9`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col() as u8) as char;
        write!(f, "{}{}", col, self.row() + 1)
    }
}

impl FromStr for CellKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(col_ch), Some(row_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BoardError::InvalidCell(trimmed.to_string()));
        };
        let col = match col_ch.to_ascii_uppercase() {
            c @ 'A'..='C' => c as usize - 'A' as usize,
            _ => return Err(BoardError::InvalidCell(trimmed.to_string())),
        };
        let row = match row_ch {
            r @ '1'..='3' => r as usize - '1' as usize,
            _ => return Err(BoardError::InvalidCell(trimmed.to_string())),
        };
        CellKey::new(col, row)
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for CellKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors returned by board and policy operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Text or indices that do not name one of the nine cells.
    InvalidCell(String),
    /// Text that is neither `X` nor `O`.
    InvalidMarker(String),
    /// A move was requested on a board with no unmarked cell.
    BoardFull,
    /// The fallback picker offered no cell, or one that was not unmarked.
    PickerRejected,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCell(key) => write!(f, "Invalid cell key: '{}'", key),
            BoardError::InvalidMarker(text) => write!(f, "Invalid marker: '{}'", text),
            BoardError::BoardFull => write!(f, "No unmarked cell left on the board"),
            BoardError::PickerRejected => write!(f, "Picker did not choose an unmarked cell"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_key_parses_case_insensitively() {
        assert_eq!("b2".parse::<CellKey>(), Ok(CellKey::B2));
        assert_eq!(" C3 ".parse::<CellKey>(), Ok(CellKey::C3));
        assert!("D1".parse::<CellKey>().is_err());
        assert!("A4".parse::<CellKey>().is_err());
        assert!("A10".parse::<CellKey>().is_err());
        assert!("".parse::<CellKey>().is_err());
    }

    #[test]
    fn cell_key_display_matches_enumeration() {
        let names: Vec<String> = CellKey::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["A1", "B1", "C1", "A2", "B2", "C2", "A3", "B3", "C3"]);
    }

    #[test]
    fn marker_other_and_parse() {
        assert_eq!(Marker::X.other(), Marker::O);
        assert_eq!("o".parse::<Marker>(), Ok(Marker::O));
        assert_eq!(" X ".parse::<Marker>(), Ok(Marker::X));
        assert_eq!(
            "z".parse::<Marker>(),
            Err(BoardError::InvalidMarker("z".to_string()))
        );
    }
}
