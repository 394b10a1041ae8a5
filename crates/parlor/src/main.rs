//! Chess Parlor CLI
//!
//! Plays games between the computer and a person at the terminal (or any
//! pairing of the two) until the requested number of games is done.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use chess_core::TurnBudget;
use clap::Parser;
use material_engine::MaterialEvaluator;
use parlor::{
    ComputerPlayer, ParlorConfig, Player, PlayerKind, Referee, RefereeConfig, SaveStore,
    TerminalPlayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chess_parlor", about = "Play chess against the computer in the terminal")]
struct Args {
    /// TOML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Computer thinking time per turn, e.g. 1s, 10s, 30m
    #[arg(long, value_parser = humantime::parse_duration)]
    turn_time: Option<Duration>,

    /// White player: computer or terminal
    #[arg(long)]
    white: Option<PlayerKind>,

    /// Black player: computer or terminal
    #[arg(long)]
    black: Option<PlayerKind>,

    /// Save file for difficulty and recent positions
    #[arg(long)]
    save: Option<PathBuf>,

    /// Number of games to play (0 = keep playing)
    #[arg(long)]
    games: Option<u32>,

    /// Plies before a game is drawn (0 = no limit)
    #[arg(long)]
    max_plies: Option<u32>,

    /// Search depth for the computer
    #[arg(long)]
    depth: Option<u8>,

    /// Seed for the computer's move choice
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<ParlorConfig> {
        let mut config = match &self.config {
            Some(path) => ParlorConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ParlorConfig::default(),
        };
        if let Some(turn_time) = self.turn_time {
            config.turn_time = turn_time;
        }
        if let Some(white) = self.white {
            config.white = white;
        }
        if let Some(black) = self.black {
            config.black = black;
        }
        if let Some(save) = self.save {
            config.save_path = save;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn create_player(kind: PlayerKind, side: &str, config: &ParlorConfig) -> Box<dyn Player> {
    match kind {
        PlayerKind::Terminal => Box::new(TerminalPlayer::stdio(side)),
        PlayerKind::Computer => {
            let budget = TurnBudget::new(config.turn_time, config.search_depth);
            let mut computer = ComputerPlayer::new(side, MaterialEvaluator::new(), budget)
                .with_resign_threshold(config.resign_threshold);
            if let Some(seed) = config.seed {
                // Different streams per side so self-play is not mirrored.
                let offset = if side == "white" { 0 } else { 1 };
                computer = computer.with_seed(seed.wrapping_add(offset));
            }
            // In self-play only white's difficulty is saved.
            if side == "black" && config.white == PlayerKind::Computer {
                computer = computer.with_persistence(false);
            }
            Box::new(computer)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config()?;
    let mut store = SaveStore::open(&config.save_path)
        .with_context(|| format!("failed to open save file {}", config.save_path.display()))?;

    let mut white = create_player(config.white, "white", &config);
    let mut black = create_player(config.black, "black", &config);
    let referee = Referee::new(RefereeConfig {
        max_plies: config.max_plies,
    });

    println!(
        "Starting game with {} vs {} - ({} per turn)",
        config.white,
        config.black,
        humantime::format_duration(config.turn_time)
    );

    let mut played = 0u32;
    while config.games == 0 || played < config.games {
        let outcome = referee
            .play_game(white.as_mut(), black.as_mut(), &mut store)
            .context("game aborted")?;
        played += 1;
        info!(game = played, %outcome, "game finished");
    }
    Ok(())
}
