use tictactoe::{
    AiPlayer, Board, Boundary, CellKey, FirstAvailable, FirstMover, Marker, MatchConfig,
    MatchEngine, MatchPhase, Participant, Player, RoundOutcome, ScriptedBoundary, Seat,
    GAMES_IN_SET,
};

/// Stands in for the human: always takes the first free cell.
struct FirstFree;

impl Player for FirstFree {
    fn choose_cell(
        &mut self,
        board: &Board,
        _me: &Participant,
        _opponent: &Participant,
        _io: &mut dyn Boundary,
    ) -> anyhow::Result<CellKey> {
        board
            .unmarked_keys()
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("board is full"))
    }
}

fn engine(first_mover: FirstMover) -> MatchEngine {
    let config = MatchConfig {
        first_mover,
        ..MatchConfig::default()
    };
    MatchEngine::new(
        config,
        Box::new(FirstFree),
        Box::new(AiPlayer::new(FirstAvailable)),
    )
}

// With the computer moving first every round goes B2, A1, B1, C1, B3:
// the computer completes column B on its third move.
const COMPUTER_WIN: [CellKey; 5] = [CellKey::B2, CellKey::A1, CellKey::B1, CellKey::C1, CellKey::B3];

#[test]
fn test_set_ends_at_fifth_win_without_prompting() {
    let mut script = vec!["x"];
    script.extend(["y"; 4]);
    let mut io = ScriptedBoundary::new(script);
    let mut engine = engine(FirstMover::Computer);

    let summary = engine.play(&mut io).unwrap();

    assert_eq!(engine.phase(), MatchPhase::Finished);
    assert_eq!(summary.computer_score, GAMES_IN_SET);
    assert_eq!(summary.human_score, 0);
    assert_eq!(summary.set_winner, Some(Seat::Computer));
    assert_eq!(summary.rounds.len(), 5);
    for record in &summary.rounds {
        assert_eq!(record.outcome, RoundOutcome::Won(Seat::Computer));
        assert_eq!(record.moves, COMPUTER_WIN.to_vec());
    }
    assert_eq!(io.count("Would you like to play again? (y/n)"), 4);
    assert_eq!(io.remaining_inputs(), 0);
    assert!(io.saw("Computer won the set!!!"));
    assert!(io.saw("Thanks for playing Tic Tac Toe! Goodbye!"));
}

#[test]
fn test_declining_ends_without_set_winner() {
    let mut io = ScriptedBoundary::new(["o", "n"]);
    let mut engine = engine(FirstMover::Computer);

    let summary = engine.play(&mut io).unwrap();

    assert_eq!(engine.human().marker(), Marker::O);
    assert_eq!(engine.computer().marker(), Marker::X);
    assert_eq!(summary.rounds.len(), 1);
    assert_eq!(summary.set_winner, None);
    assert!(io.saw("Computer won the game!"));
    assert!(!io.saw("won the set"));
    assert!(io.saw("Thanks for playing Tic Tac Toe! Goodbye!"));
}

#[test]
fn test_step_walks_through_phases() {
    let mut io = ScriptedBoundary::new(["x", "y"]);
    let mut engine = engine(FirstMover::Computer);
    assert_eq!(engine.phase(), MatchPhase::ChoosingMarkers);

    assert_eq!(engine.step(&mut io).unwrap(), MatchPhase::RoundInProgress);
    for (i, key) in COMPUTER_WIN.iter().enumerate() {
        let expected = if i + 1 == COMPUTER_WIN.len() {
            MatchPhase::RoundConcluded
        } else {
            MatchPhase::RoundInProgress
        };
        assert_eq!(engine.step(&mut io).unwrap(), expected);
        assert!(engine.board().is_marked(*key));
    }
    assert_eq!(engine.board().winning_marker(), Some(Marker::O));
    assert_eq!(engine.computer().score(), 1);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.step(&mut io).unwrap(), MatchPhase::PromptingReplay);
    assert_eq!(engine.step(&mut io).unwrap(), MatchPhase::NextRound);
    assert_eq!(engine.computer().score(), 1);

    assert_eq!(engine.step(&mut io).unwrap(), MatchPhase::RoundInProgress);
    assert_eq!(engine.round(), 2);
    assert!(engine.board().marked_keys().is_empty());
    assert_eq!(engine.current(), Seat::Computer);
    assert_eq!(engine.computer().score(), 1);
    assert!(io.saw("Let's play again!"));
}

#[test]
fn test_choose_first_mover_by_marker() {
    // human plays O and hands the first move to X, the computer
    let mut io = ScriptedBoundary::new(["o", "z", "x", "n"]);
    let mut engine = engine(FirstMover::Choose);

    assert_eq!(engine.step(&mut io).unwrap(), MatchPhase::ChoosingFirstMover);
    assert_eq!(engine.step(&mut io).unwrap(), MatchPhase::RoundInProgress);
    assert_eq!(engine.first_to_move(), Seat::Computer);
    assert_eq!(io.count("Sorry, invalid choice."), 1);

    engine.play(&mut io).unwrap();
    assert_eq!(engine.history()[0].first_to_move, Seat::Computer);
    assert_eq!(engine.history()[0].moves[0], CellKey::B2);
}

#[test]
fn test_human_first_round() {
    // Human (X): A1, computer (O): B2, human: B1, computer blocks C1,
    // human: A2, computer wins on the anti-diagonal at A3.
    let mut io = ScriptedBoundary::new(["x", "n"]);
    let mut engine = engine(FirstMover::Human);

    let summary = engine.play(&mut io).unwrap();

    let record = &summary.rounds[0];
    assert_eq!(record.first_to_move, Seat::Human);
    assert_eq!(
        record.moves,
        vec![CellKey::A1, CellKey::B2, CellKey::B1, CellKey::C1, CellKey::A2, CellKey::A3]
    );
    assert_eq!(record.outcome, RoundOutcome::Won(Seat::Computer));
    assert!(io.saw("Human's marker is X. Computer's marker is O."));
}

#[test]
fn test_exhausted_input_is_reported() {
    let mut io = ScriptedBoundary::new(["x"]);
    let mut engine = engine(FirstMover::Computer);
    assert!(engine.play(&mut io).is_err());
    assert_eq!(engine.phase(), MatchPhase::PromptingReplay);
}

#[test]
fn test_resuming_after_failed_prompt_scores_round_once() {
    let mut io = ScriptedBoundary::new(["x"]);
    let mut engine = engine(FirstMover::Computer);
    assert!(engine.play(&mut io).is_err());
    let before = (engine.human().score(), engine.computer().score(), engine.history().len());
    assert_eq!(before, (0, 1, 1));

    io.push_input("n");
    let summary = engine.play(&mut io).unwrap();

    assert_eq!(engine.phase(), MatchPhase::Finished);
    assert_eq!((summary.human_score, summary.computer_score, summary.rounds.len()), before);
    assert_eq!(summary.set_winner, None);
    assert_eq!(io.count("Would you like to play again? (y/n)"), 2);
    assert_eq!(io.count("Computer won the game!"), 1);
}
