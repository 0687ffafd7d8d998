//! Line-mode fallback for non-TTY use: prints the round each turn and reads
//! guesses with a visible per-second countdown.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

use crate::core::engine::{Difficulty, HangmanEngine};
use crate::ui::render::{guessed_line, spread};

enum Turn {
    Line(String),
    TimedOut,
    Eof,
}

pub async fn run(mut engine: HangmanEngine, difficulty: Difficulty, guess_seconds: u64) -> Result<()> {
    println!("Hangterm [plain mode] — {difficulty} round, {guess_seconds}s per guess");
    engine.start(difficulty);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let st = engine.state()?;
        println!();
        println!("  {}", spread(&st.masked()));
        println!("Lives: {}  Guessed: {}", st.lives(), guessed_line(st));

        if st.is_won() {
            println!("Correct! You guessed it.");
            break;
        }
        if st.is_lost() {
            println!("Out of lives. The answer was {}.", st.answer());
            break;
        }

        match read_guess(&mut lines, guess_seconds).await? {
            Turn::Line(line) => {
                engine.guess(&line)?;
            }
            Turn::TimedOut => {
                println!();
                println!("Time's up!");
                debug!("guess timer expired");
                engine.timeout()?;
            }
            Turn::Eof => break,
        }
    }
    Ok(())
}

async fn read_guess(lines: &mut Lines<BufReader<Stdin>>, seconds: u64) -> Result<Turn> {
    print!("Enter a letter ({seconds:2}s): ");
    std::io::stdout().flush()?;

    let mut remaining = seconds;
    let mut tick = tokio::time::interval(Duration::from_secs(1));
    tick.tick().await;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                return Ok(match line? {
                    Some(line) => Turn::Line(line),
                    None => Turn::Eof,
                });
            }
            _ = tick.tick() => {
                remaining -= 1;
                if remaining == 0 {
                    return Ok(Turn::TimedOut);
                }
                print!("\rEnter a letter ({remaining:2}s): ");
                std::io::stdout().flush()?;
            }
        }
    }
}
