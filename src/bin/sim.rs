//! Automated self-play: both seats use the policy, answers come from a script.
//! Prints a JSON summary of the set on stdout.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tictactoe::{
    init_logging, AiPlayer, FirstMover, MatchConfig, MatchEngine, RandomPicker, ScriptedBoundary,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = FirstMover::Computer)]
    first: FirstMover,
    /// Stop after this many rounds even if nobody has taken the set.
    #[arg(long, default_value_t = 50)]
    max_rounds: u32,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    anyhow::ensure!(args.max_rounds > 0, "--max-rounds must be at least 1");

    // marker choice, optional first-mover choice, then one answer per round
    let mut script = vec!["x".to_string()];
    if args.first == FirstMover::Choose {
        script.push("x".to_string());
    }
    script.extend((1..args.max_rounds).map(|_| "y".to_string()));
    script.push("n".to_string());
    let mut io = ScriptedBoundary::new(script);

    let config = MatchConfig {
        first_mover: args.first,
        human_name: "Player 1".into(),
        computer_name: "Player 2".into(),
    };
    let mut engine = MatchEngine::new(
        config,
        Box::new(AiPlayer::new(RandomPicker::new(SmallRng::seed_from_u64(args.seed)))),
        Box::new(AiPlayer::new(RandomPicker::new(SmallRng::seed_from_u64(
            args.seed.wrapping_add(1),
        )))),
    );
    let summary = engine.play(&mut io)?;

    let result = json!({
        "seed": args.seed,
        "rounds_played": summary.rounds.len(),
        "summary": summary,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
