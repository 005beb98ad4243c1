use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::PathBuf;
use tictactoe_core::logic::board::BoardCoordinate;
use tictactoe_core::{EngineConfig, GameEngine, GameStatus, Move};
use tracing_subscriber::EnvFilter;

/// Plays the minimax engine against an opponent that moves at random.
#[derive(Parser, Debug)]
#[command(name = "selfplay", version, about, long_about = None)]
struct Cli {
    /// Number of games to play
    #[arg(short, long, default_value_t = 100)]
    games: u32,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Board size, overrides the config file
    #[arg(long)]
    board_size: Option<usize>,

    /// Let the engine make the first move
    #[arg(long)]
    computer_first: bool,

    /// Log every search branch
    #[arg(long)]
    debug: bool,

    /// JSON engine config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct Tally {
    wins: u32,
    ties: u32,
    losses: u32,
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            EngineConfig::load_from_json(&json)?
        }
        None => EngineConfig::default(),
    };
    if let Some(size) = cli.board_size {
        config.board_size = size;
    }
    config.debug |= cli.debug;
    config.human_first = !cli.computer_first;
    Ok(config)
}

fn play_game(engine: &mut GameEngine, rng: &mut StdRng) -> Result<GameStatus> {
    loop {
        if engine.current_player().is_human {
            let label = engine.current_player().label;
            let empties: Vec<BoardCoordinate> = engine.board().empty_cells().collect();
            let coord = empties
                .choose(rng)
                .context("no empty cell left for the random player")?;
            engine.apply_move(Move::played(coord.row, coord.col, label))?;
        } else {
            engine.select_computer_move()?;
        }

        if engine.has_winner() || engine.is_tied() {
            return Ok(engine.status());
        }
        engine.toggle_player();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = load_config(&cli)?;
    let mut engine = GameEngine::new(config)?;
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut tally = Tally::default();

    for game in 0..cli.games {
        engine.reset_with(!cli.computer_first);
        let status = play_game(&mut engine, &mut rng)?;

        match status {
            GameStatus::Won(_) if engine.winner().is_some_and(|p| p.is_human) => {
                tally.losses += 1;
                tracing::warn!(game, board = %engine.board(), "engine lost");
            }
            GameStatus::Won(_) => tally.wins += 1,
            _ => tally.ties += 1,
        }
        tracing::debug!(game, ?status, "game finished");
    }

    tracing::info!(
        games = cli.games,
        wins = tally.wins,
        ties = tally.ties,
        losses = tally.losses,
        "self-play finished"
    );
    Ok(())
}
