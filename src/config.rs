use crate::common::CellKey;

/// Round wins needed to take the set.
pub const GAMES_IN_SET: u32 = 5;

/// The cell the automated participant always takes first.
pub const CENTER: CellKey = CellKey::B2;

pub const DEFAULT_HUMAN_NAME: &str = "Human";
pub const DEFAULT_COMPUTER_NAME: &str = "Computer";

/// A line of three cells that wins the round when uniformly marked.
pub type Line = [CellKey; 3];

/// All eight winning lines in priority order: rows, columns, diagonals.
pub const WINNING_LINES: [Line; 8] = [
    [CellKey::A1, CellKey::B1, CellKey::C1],
    [CellKey::A2, CellKey::B2, CellKey::C2],
    [CellKey::A3, CellKey::B3, CellKey::C3],
    [CellKey::A1, CellKey::A2, CellKey::A3],
    [CellKey::B1, CellKey::B2, CellKey::B3],
    [CellKey::C1, CellKey::C2, CellKey::C3],
    [CellKey::A1, CellKey::B2, CellKey::C3],
    [CellKey::C1, CellKey::B2, CellKey::A3],
];

/// Who takes the first move of every round in a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum FirstMover {
    Human,
    Computer,
    /// Ask the user once, after markers are chosen.
    #[default]
    Choose,
}

/// Runtime settings for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub first_mover: FirstMover,
    pub human_name: alloc::string::String,
    pub computer_name: alloc::string::String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::Choose,
            human_name: DEFAULT_HUMAN_NAME.into(),
            computer_name: DEFAULT_COMPUTER_NAME.into(),
        }
    }
}
