#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, AiPlayer, CliPlayer, ConsoleBoundary, FirstMover, MatchConfig, MatchEngine,
    RandomPicker, DEFAULT_COMPUTER_NAME, DEFAULT_HUMAN_NAME,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Play a best-of-five set of tic-tac-toe against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Who moves first in every round; `choose` asks after markers are picked.
    #[arg(long, value_enum, default_value_t = FirstMover::Choose)]
    first: FirstMover,
    #[arg(long, default_value = DEFAULT_HUMAN_NAME)]
    name: String,
    #[arg(long, default_value = DEFAULT_COMPUTER_NAME)]
    opponent: String,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Keep previous frames on screen instead of clearing.
    #[arg(long)]
    no_clear: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        log::info!("Using fixed seed: {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = MatchConfig {
        first_mover: cli.first,
        human_name: cli.name,
        computer_name: cli.opponent,
    };
    let mut engine = MatchEngine::new(
        config,
        Box::new(CliPlayer::new()),
        Box::new(AiPlayer::new(RandomPicker::new(rng))),
    );

    let mut io = ConsoleBoundary::new();
    if cli.no_clear {
        io = io.without_clearing();
    }
    engine.play(&mut io)?;
    Ok(())
}
