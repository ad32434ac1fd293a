//! A fixed 3×3 bitboard packed into a `u16`.
//!
//! Bit `i` corresponds to the cell whose row-major index is `i`, so the set
//! bits of a board iterate in the same order as [`CellKey::ALL`]. The board
//! never allocates and is `Copy`, which lets the engine snapshot it freely.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::common::CellKey;

const CELLS: usize = 9;
const MASK: u16 = (1 << CELLS) - 1;

/// Set of cells, one bit per cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitBoard {
    bits: u16,
}

impl BitBoard {
    /// Create an empty bitboard.
    #[inline]
    pub const fn new() -> Self {
        BitBoard { bits: 0 }
    }

    /// Bitboard with every cell set.
    #[inline]
    pub const fn full() -> Self {
        BitBoard { bits: MASK }
    }

    /// Bitboard holding exactly the given cells.
    pub const fn from_keys(keys: &[CellKey]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < keys.len() {
            bits |= 1 << keys[i].index();
            i += 1;
        }
        BitBoard { bits }
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Gets the bit for `key`.
    #[inline]
    pub fn get(&self, key: CellKey) -> bool {
        (self.bits >> key.index()) & 1 != 0
    }

    /// Sets the bit for `key`.
    #[inline]
    pub fn set(&mut self, key: CellKey) {
        self.bits |= 1 << key.index();
    }

    /// Clears the bit for `key`.
    #[inline]
    pub fn clear(&mut self, key: CellKey) {
        self.bits &= !(1 << key.index());
    }

    /// Clears all bits.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = 0;
    }

    /// Consumes the board and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> u16 {
        self.bits
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: u16) -> Self {
        BitBoard { bits: raw & MASK }
    }

    /// Iterator over the set cells in enumeration order.
    #[inline]
    pub fn iter(&self) -> SetBits {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard:")?;
        for row in 0..3 {
            for col in 0..3 {
                let bit = if (self.bits >> (row * 3 + col)) & 1 != 0 {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits {
    bits: u16,
    idx: usize,
}

impl Iterator for SetBits {
    type Item = CellKey;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < CELLS {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & 1 != 0 {
                return Some(CellKey::ALL[idx]);
            }
        }
        None
    }
}

impl BitAnd for BitBoard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl BitOr for BitBoard {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Complement within the nine board cells.
impl Not for BitBoard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl BitAndAssign for BitBoard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOrAssign for BitBoard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}
