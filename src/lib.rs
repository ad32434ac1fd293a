#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
pub mod boundary;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod participant;
mod player;
mod player_ai;
mod player_cli;
pub mod prelude;
pub mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, SetBits};
pub use board::*;
#[cfg(feature = "std")]
pub use boundary::console::ConsoleBoundary;
pub use boundary::scripted::ScriptedBoundary;
pub use boundary::Boundary;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use participant::*;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
