//! Commonly used types and utilities for ease of import.

pub use crate::{
    choose_move, AiPlayer, Board, Boundary, CellKey, CliPlayer, FirstAvailable, Marker,
    MatchConfig, MatchEngine, MatchPhase, Participant, Player, RandomPicker, ScriptedBoundary,
    Seat,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsoleBoundary};
