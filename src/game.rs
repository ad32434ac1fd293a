//! Match engine: sequences rounds, turns and scoring for a best-of-N set.
//!
//! The engine is a small state machine. Each call to [`MatchEngine::step`]
//! performs the work of the current [`MatchPhase`] and moves to the next one;
//! [`MatchEngine::play`] simply steps until the match is [`MatchPhase::Finished`].
//! During a round every step is exactly one move.

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;

use crate::{
    board::Board,
    boundary::Boundary,
    common::{CellKey, Marker},
    config::{FirstMover, MatchConfig, GAMES_IN_SET},
    participant::Participant,
    player::Player,
    ui,
};

/// Where the match currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    ChoosingMarkers,
    ChoosingFirstMover,
    RoundInProgress,
    RoundConcluded,
    /// Scores are settled; waiting for the answer to "play again?".
    PromptingReplay,
    NextRound,
    SetConcluded,
    Finished,
}

/// One of the two sides of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}

/// How a single round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum RoundOutcome {
    Won(Seat),
    Tie,
}

/// Record of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundRecord {
    pub round: u32,
    pub first_to_move: Seat,
    pub outcome: RoundOutcome,
    pub moves: Vec<CellKey>,
}

/// Result of a whole match, returned by [`MatchEngine::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub rounds: Vec<RoundRecord>,
    pub human_score: u32,
    pub computer_score: u32,
    pub set_winner: Option<Seat>,
}

/// Owns the board and both participants and drives them through a set.
pub struct MatchEngine {
    board: Board,
    human: Participant,
    computer: Participant,
    human_player: Box<dyn Player>,
    computer_player: Box<dyn Player>,
    first_mover: FirstMover,
    first_to_move: Seat,
    current: Seat,
    phase: MatchPhase,
    round: u32,
    moves: Vec<CellKey>,
    history: Vec<RoundRecord>,
}

impl MatchEngine {
    /// Create an engine for a fresh match. Scores start at zero; the human
    /// holds `X` until the marker choice says otherwise.
    pub fn new(
        config: MatchConfig,
        human_player: Box<dyn Player>,
        computer_player: Box<dyn Player>,
    ) -> Self {
        let first_to_move = match config.first_mover {
            FirstMover::Computer => Seat::Computer,
            FirstMover::Human | FirstMover::Choose => Seat::Human,
        };
        Self {
            board: Board::new(),
            human: Participant::new(Marker::X).with_name(config.human_name),
            computer: Participant::new(Marker::O).with_name(config.computer_name),
            human_player,
            computer_player,
            first_mover: config.first_mover,
            first_to_move,
            current: first_to_move,
            phase: MatchPhase::ChoosingMarkers,
            round: 1,
            moves: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> &Participant {
        &self.human
    }

    pub fn computer(&self) -> &Participant {
        &self.computer
    }

    pub fn participant(&self, seat: Seat) -> &Participant {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Number of the round being played (starting at 1).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn first_to_move(&self) -> Seat {
        self.first_to_move
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> Seat {
        self.current
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Seat that reached [`GAMES_IN_SET`] wins, if any.
    pub fn set_winner(&self) -> Option<Seat> {
        if self.human.score() >= GAMES_IN_SET {
            Some(Seat::Human)
        } else if self.computer.score() >= GAMES_IN_SET {
            Some(Seat::Computer)
        } else {
            None
        }
    }

    fn seat_of(&self, marker: Marker) -> Seat {
        if marker == self.human.marker() {
            Seat::Human
        } else {
            Seat::Computer
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            rounds: self.history.clone(),
            human_score: self.human.score(),
            computer_score: self.computer.score(),
            set_winner: self.set_winner(),
        }
    }

    /// Step until the match is finished.
    pub fn play(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchSummary> {
        while self.phase != MatchPhase::Finished {
            self.step(io)?;
        }
        Ok(self.summary())
    }

    /// Perform the current phase and return the phase entered next.
    pub fn step(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchPhase> {
        self.phase = match self.phase {
            MatchPhase::ChoosingMarkers => self.choose_markers(io)?,
            MatchPhase::ChoosingFirstMover => self.choose_first_mover(io)?,
            MatchPhase::RoundInProgress => self.play_turn(io)?,
            MatchPhase::RoundConcluded => self.conclude_round(io)?,
            MatchPhase::PromptingReplay => self.prompt_replay(io)?,
            MatchPhase::NextRound => self.start_next_round(io)?,
            MatchPhase::SetConcluded => self.conclude_set(io)?,
            MatchPhase::Finished => MatchPhase::Finished,
        };
        Ok(self.phase)
    }

    fn choose_markers(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchPhase> {
        io.clear()?;
        io.announce("Welcome to Tic Tac Toe!")?;
        let marker = io.prompt_marker_choice()?;
        self.human.set_marker(marker);
        self.computer.set_marker(marker.other());
        log::info!(
            "{} plays {}, {} plays {}",
            self.human.name(),
            self.human.marker(),
            self.computer.name(),
            self.computer.marker()
        );
        if self.first_mover == FirstMover::Choose {
            Ok(MatchPhase::ChoosingFirstMover)
        } else {
            self.current = self.first_to_move;
            Ok(MatchPhase::RoundInProgress)
        }
    }

    fn choose_first_mover(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchPhase> {
        let marker =
            io.prompt_first_mover_choice(self.human.marker(), self.computer.marker())?;
        self.first_to_move = self.seat_of(marker);
        self.current = self.first_to_move;
        log::info!("{:?} moves first", self.first_to_move);
        Ok(MatchPhase::RoundInProgress)
    }

    fn display_board(&self, io: &mut dyn Boundary) -> anyhow::Result<()> {
        io.clear()?;
        io.announce(&ui::marker_legend(&self.human, &self.computer))?;
        io.announce("")?;
        io.announce(&ui::render(&self.board))?;
        io.announce("")
    }

    /// One move by the current seat.
    fn play_turn(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchPhase> {
        self.display_board(io)?;
        let key = match self.current {
            Seat::Human => {
                self.human_player
                    .choose_cell(&self.board, &self.human, &self.computer, io)?
            }
            Seat::Computer => {
                self.computer_player
                    .choose_cell(&self.board, &self.computer, &self.human, io)?
            }
        };
        if self.board.is_marked(key) {
            anyhow::bail!("{:?} chose {} which is already marked", self.current, key);
        }
        let marker = self.participant(self.current).marker();
        self.board.place(key, marker);
        self.moves.push(key);
        log::debug!("round {}: {} -> {}", self.round, marker, key);
        self.current = self.current.other();

        if self.board.someone_won() || self.board.is_full() {
            self.settle_round();
            Ok(MatchPhase::RoundConcluded)
        } else {
            Ok(MatchPhase::RoundInProgress)
        }
    }

    /// Score the finished round and record it. Runs exactly once per round,
    /// on the move that ends it.
    fn settle_round(&mut self) {
        self.human.update_score(&self.board);
        self.computer.update_score(&self.board);

        let outcome = match self.board.winning_marker() {
            Some(marker) => RoundOutcome::Won(self.seat_of(marker)),
            None => RoundOutcome::Tie,
        };
        log::info!("round {} ended: {:?}", self.round, outcome);
        self.history.push(RoundRecord {
            round: self.round,
            first_to_move: self.first_to_move,
            outcome,
            moves: core::mem::take(&mut self.moves),
        });
    }

    fn conclude_round(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchPhase> {
        let outcome = match self.board.winning_marker() {
            Some(marker) => RoundOutcome::Won(self.seat_of(marker)),
            None => RoundOutcome::Tie,
        };
        self.display_board(io)?;
        match outcome {
            RoundOutcome::Won(Seat::Human) => io.announce("You won the game!")?,
            RoundOutcome::Won(Seat::Computer) => {
                io.announce(&format!("{} won the game!", self.computer.name()))?
            }
            RoundOutcome::Tie => io.announce("The game is a tie!")?,
        }
        io.announce("")?;
        io.announce(&ui::score_table(&self.human, &self.computer))?;

        if self.set_winner().is_some() {
            Ok(MatchPhase::SetConcluded)
        } else {
            Ok(MatchPhase::PromptingReplay)
        }
    }

    fn prompt_replay(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchPhase> {
        if io.prompt_yes_no("Would you like to play again? (y/n)")? {
            Ok(MatchPhase::NextRound)
        } else {
            Ok(MatchPhase::SetConcluded)
        }
    }

    fn start_next_round(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchPhase> {
        self.board.reset();
        self.current = self.first_to_move;
        self.round += 1;
        io.clear()?;
        io.announce("Let's play again!")?;
        io.announce("")?;
        Ok(MatchPhase::RoundInProgress)
    }

    fn conclude_set(&mut self, io: &mut dyn Boundary) -> anyhow::Result<MatchPhase> {
        match self.set_winner() {
            Some(Seat::Human) => {
                io.announce("")?;
                io.announce("You won the set!!!")?;
            }
            Some(Seat::Computer) => {
                io.announce("")?;
                io.announce(&format!("{} won the set!!!", self.computer.name()))?;
            }
            None => {}
        }
        io.announce("")?;
        io.announce("Thanks for playing Tic Tac Toe! Goodbye!")?;
        io.announce("")?;
        log::info!(
            "match over after {} rounds: {}-{}",
            self.history.len(),
            self.human.score(),
            self.computer.score()
        );
        Ok(MatchPhase::Finished)
    }
}
