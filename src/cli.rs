use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::RngCore;
use tracing::info;

use crate::core::engine::{Difficulty, EngineError, HangmanEngine};
use crate::core::words;
use crate::ui;

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "Hangman for the terminal — guess the word before the timer runs out")]
#[command(version)]
pub struct Cli {
    /// Round difficulty: "basic" draws a word, "intermediate" a phrase
    #[arg(short, long, default_value = "basic", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Lives per round
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..))]
    lives: u32,

    /// Seconds allowed per guess
    #[arg(short = 't', long, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Newline-separated word pool file (defaults to the built-in list)
    #[arg(long)]
    words: Option<PathBuf>,

    /// Newline-separated phrase pool file (defaults to the built-in list)
    #[arg(long)]
    phrases: Option<PathBuf>,

    /// Seed round selection for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Force the line-mode interface (used automatically without a TTY)
    #[arg(long)]
    plain: bool,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, EngineError> {
    Difficulty::from_str(s)
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let word_pool = match &cli.words {
        Some(path) => words::load_pool(path)?,
        None => words::WORDS.iter().map(|w| w.to_string()).collect(),
    };
    let phrase_pool = match &cli.phrases {
        Some(path) => words::load_pool(path)?,
        None => words::PHRASES.iter().map(|p| p.to_string()).collect(),
    };

    let rng: Box<dyn RngCore + Send> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_os_rng()),
    };

    let engine = HangmanEngine::new(word_pool, phrase_pool, cli.lives, rng)?;

    info!(
        difficulty = %cli.difficulty,
        lives = cli.lives,
        timeout = cli.timeout,
        "starting hangterm"
    );

    if cli.plain || !std::io::stdout().is_tty() {
        ui::plain::run(engine, cli.difficulty, cli.timeout).await
    } else {
        ui::tui::run(engine, cli.difficulty, cli.timeout).await
    }
}
