//! Automatic domino match driver.
//!
//! Deals a match, lets the chosen policy play every seat, and prints the
//! event log as it grows. Set `DOMINO_LOG` (e.g. `debug`) for engine traces.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use domino_engine::{
    FirstLegal, HeaviestTile, MatchConfig, MatchEngine, MatchRecord, MovePolicy, RandomPolicy,
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyKind {
    /// First legal move in enumeration order.
    First,
    /// Uniformly random legal move.
    Random,
    /// Highest pip tile first.
    Heaviest,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play an automatic domino match", long_about = None)]
struct Cli {
    /// Player names in turn order, comma separated.
    #[arg(long, value_delimiter = ',', default_value = "Alice,Bot")]
    players: Vec<String>,

    /// Highest pip value (6 for a double-six set).
    #[arg(long, default_value_t = 6)]
    max_pip: u8,

    /// Tiles dealt to each player.
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    #[arg(long, help = "Fix RNG seed for reproducible matches (e.g., --seed 12345)")]
    seed: Option<u64>,

    /// How every seat picks among its legal moves.
    #[arg(long, value_enum, default_value_t = PolicyKind::First)]
    policy: PolicyKind,

    /// Write a bincode match record to this path.
    #[arg(long)]
    record: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DOMINO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = MatchConfig::new(cli.players)
        .with_max_pip(cli.max_pip)
        .with_hand_size(cli.hand_size)
        .with_seed(seed);

    let policy: Box<dyn MovePolicy> = match cli.policy {
        PolicyKind::First => Box::new(FirstLegal),
        PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        PolicyKind::Heaviest => Box::new(HeaviestTile),
    };

    let mut engine = MatchEngine::with_policy(config, policy).context("invalid match configuration")?;
    engine.setup()?;

    println!("Domino match (seed {seed})");
    for (player, hand) in engine.hands().iter() {
        println!("  {} ({player}): {hand}", engine.player_name(player));
    }
    println!("  boneyard: {} tiles", engine.boneyard().len());

    let mut cursor = 0;
    loop {
        for record in engine.events_since(cursor) {
            println!("{record}");
        }
        cursor = engine.events().len();

        if engine.is_finished() {
            break;
        }
        engine.play_turn()?;
    }

    if let Some(result) = engine.result() {
        println!();
        println!("Board: {}", engine.board());
        for (player, pips) in result.pip_sums.iter() {
            println!("  {}: {pips} pips", engine.player_name(player));
        }
        println!(
            "Winner: {} ({})",
            engine.player_name(result.winner),
            result.reason
        );
    }

    if let Some(path) = cli.record {
        let bytes = MatchRecord::from_engine(&engine).to_bytes()?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write match record to {}", path.display()))?;
        println!("Record written to {}", path.display());
    }

    Ok(())
}
