#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_ai::{init_logging, Difficulty, Match, Side};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};

/// Run AI-vs-AI matches and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = 0, help = "Fix RNG seed for reproducible matches")]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u32,
    #[arg(long, value_enum, default_value = "hard")]
    difficulty: Difficulty,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut rng = SmallRng::seed_from_u64(cli.seed);

    let mut wins = [0u32; 2];
    let mut total_turns = 0u64;
    for _ in 0..cli.games {
        let mut game = Match::new(cli.difficulty);
        game.setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        let report = game.run(&mut rng);
        match report.winner {
            Side::One => wins[0] += 1,
            Side::Two => wins[1] += 1,
        }
        total_turns += u64::from(report.turns);
    }

    let summary = serde_json::json!({
        "games": cli.games,
        "wins": { "player1": wins[0], "player2": wins[1] },
        "avg_turns": total_turns as f64 / f64::from(cli.games.max(1)),
    });
    println!("{}", summary);
    Ok(())
}
