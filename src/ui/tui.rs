//! Full-screen front end: a draw/poll/select loop with a one-second
//! countdown tick. The engine never sees the timer; this loop reports
//! expirations through `timeout()`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::core::engine::{Difficulty, HangmanEngine};
use crate::ui::render::{self, RoundView};

pub async fn run(engine: HangmanEngine, difficulty: Difficulty, guess_seconds: u64) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(engine, difficulty, guess_seconds).run(terminal).await;
    ratatui::restore();
    result
}

struct App {
    engine: HangmanEngine,
    difficulty: Difficulty,
    guess_seconds: u64,
    seconds_left: u64,
    input: String,
}

impl App {
    fn new(engine: HangmanEngine, difficulty: Difficulty, guess_seconds: u64) -> Self {
        Self {
            engine,
            difficulty,
            guess_seconds,
            seconds_left: guess_seconds,
            input: String::new(),
        }
    }

    async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.engine.start(self.difficulty);
        let mut tick = tokio::time::interval(Duration::from_secs(1));
        // An interval's first tick fires immediately; consume it so the
        // countdown starts a full second out.
        tick.tick().await;

        loop {
            let view = RoundView {
                state: self.engine.state()?,
                difficulty: self.difficulty,
                seconds_left: self.seconds_left,
                input: &self.input,
            };
            terminal.draw(|f| render::render(f, &view))?;

            // INPUT (non-blocking)
            if event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Esc {
                        break;
                    }
                    self.handle_key(key)?;
                }
            }

            tokio::select! {
                _ = tick.tick() => self.on_second()?,
                _ = tokio::time::sleep(Duration::from_millis(33)) => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.engine.state()?.is_over() {
            match key.code {
                KeyCode::Enter => self.new_round(),
                KeyCode::Tab => {
                    self.difficulty = match self.difficulty {
                        Difficulty::Basic => Difficulty::Intermediate,
                        Difficulty::Intermediate => Difficulty::Basic,
                    };
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            // Single-letter entry box; the latest key wins.
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.input.clear();
                self.input.push(c.to_ascii_uppercase());
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit()?,
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let guess = std::mem::take(&mut self.input);
        if guess.is_empty() {
            return Ok(());
        }
        debug!(%guess, "submitting guess");
        self.engine.guess(&guess)?;
        self.seconds_left = self.guess_seconds;
        Ok(())
    }

    fn new_round(&mut self) {
        debug!(difficulty = %self.difficulty, "starting new round");
        self.engine.start(self.difficulty);
        self.input.clear();
        self.seconds_left = self.guess_seconds;
    }

    fn on_second(&mut self) -> Result<()> {
        if self.engine.state()?.is_over() {
            return Ok(());
        }
        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left == 0 {
            debug!("guess timer expired");
            self.engine.timeout()?;
            self.seconds_left = self.guess_seconds;
        }
        Ok(())
    }
}
