//! Hangman rules engine, independent of any front end.
//!
//! The engine owns the current round as an immutable [`GameState`] snapshot
//! that is replaced, never mutated, by each transition. Front ends only ever
//! observe snapshots through the read accessor.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rand::seq::IndexedRandom;
use rand_core::RngCore;
use thiserror::Error;

/// Placeholder shown for letters that have not been guessed yet.
pub const MASK_CHAR: char = '_';

/// Selects the pool a round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Draw a single word.
    Basic,
    /// Draw a multi-word phrase.
    Intermediate,
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "intermediate" => Ok(Self::Intermediate),
            other => Err(EngineError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Intermediate => write!(f, "intermediate"),
        }
    }
}

/// Configuration and usage errors. Gameplay input is never an error: bad or
/// redundant guesses are silently ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("word pool is empty")]
    EmptyWordPool,
    #[error("phrase pool is empty")]
    EmptyPhrasePool,
    #[error("default lives must be at least 1")]
    ZeroLives,
    #[error("unknown difficulty {0:?}, expected \"basic\" or \"intermediate\"")]
    InvalidDifficulty(String),
    #[error("no round has been started")]
    NotStarted,
}

/// One round's snapshot: the normalized answer, the guessed letters, and the
/// remaining lives. Won/lost status and the masked view are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    answer: String,
    lives: u32,
    guessed: BTreeSet<char>,
}

impl GameState {
    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    /// The answer with unguessed letters replaced by [`MASK_CHAR`]. Spaces
    /// stay visible. One char per answer position; separators are up to the
    /// caller.
    pub fn masked(&self) -> String {
        self.answer
            .chars()
            .map(|c| {
                if c == ' ' || self.guessed.contains(&c) {
                    c
                } else {
                    MASK_CHAR
                }
            })
            .collect()
    }

    /// True when every non-space character of the answer has been guessed.
    pub fn is_won(&self) -> bool {
        self.answer
            .chars()
            .filter(|c| *c != ' ')
            .all(|c| self.guessed.contains(&c))
    }

    /// True when lives are exhausted and the round is not won. A winning
    /// guessed set takes precedence over zero lives.
    pub fn is_lost(&self) -> bool {
        self.lives == 0 && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Next snapshot after a letter guess, or `None` when the input is a
    /// no-op: terminal round, not exactly one A-Z letter, or a repeat.
    fn with_guess(&self, input: &str) -> Option<GameState> {
        if self.is_over() {
            return None;
        }
        let input = input.trim().to_uppercase();
        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => c,
            _ => return None,
        };
        if self.guessed.contains(&letter) {
            return None;
        }
        let mut guessed = self.guessed.clone();
        guessed.insert(letter);
        // Lives are >= 1 here: a zero-life round is terminal and caught above.
        let lives = if self.answer.contains(letter) {
            self.lives
        } else {
            self.lives - 1
        };
        Some(GameState {
            answer: self.answer.clone(),
            lives,
            guessed,
        })
    }

    /// Next snapshot after a missed deadline, or `None` for terminal rounds.
    fn after_timeout(&self) -> Option<GameState> {
        if self.is_over() {
            return None;
        }
        Some(GameState {
            answer: self.answer.clone(),
            lives: self.lives.saturating_sub(1),
            guessed: self.guessed.clone(),
        })
    }
}

/// Uppercase, keep only A-Z and spaces, trim the ends.
fn normalize_answer(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

fn clean_pool(entries: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    entries
        .into_iter()
        .map(Into::into)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The game engine: word and phrase pools, a default life count, an injected
/// randomness source, and the current round.
pub struct HangmanEngine {
    words: Vec<String>,
    phrases: Vec<String>,
    default_lives: u32,
    rng: Box<dyn RngCore + Send>,
    state: Option<GameState>,
}

impl std::fmt::Debug for HangmanEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HangmanEngine")
            .field("words", &self.words)
            .field("phrases", &self.phrases)
            .field("default_lives", &self.default_lives)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl HangmanEngine {
    /// Build an engine from word and phrase pools. Blank entries are
    /// discarded; an empty resulting pool or a zero life count fails fast.
    /// The randomness source is injected so tests can seed round selection.
    pub fn new(
        words: impl IntoIterator<Item = impl Into<String>>,
        phrases: impl IntoIterator<Item = impl Into<String>>,
        lives: u32,
        rng: Box<dyn RngCore + Send>,
    ) -> Result<Self, EngineError> {
        let words = clean_pool(words);
        let phrases = clean_pool(phrases);
        if words.is_empty() {
            return Err(EngineError::EmptyWordPool);
        }
        if phrases.is_empty() {
            return Err(EngineError::EmptyPhrasePool);
        }
        if lives == 0 {
            return Err(EngineError::ZeroLives);
        }
        Ok(Self {
            words,
            phrases,
            default_lives: lives,
            rng,
            state: None,
        })
    }

    /// Start a fresh round, replacing any previous one: draw from the pool
    /// selected by `difficulty`, reset lives, clear the guessed set.
    pub fn start(&mut self, difficulty: Difficulty) -> &GameState {
        let pool = match difficulty {
            Difficulty::Basic => &self.words,
            Difficulty::Intermediate => &self.phrases,
        };
        let raw = pool
            .choose(self.rng.as_mut())
            .expect("pools are non-empty by construction");
        let next = GameState {
            answer: normalize_answer(raw),
            lives: self.default_lives,
            guessed: BTreeSet::new(),
        };
        &*self.state.insert(next)
    }

    /// Current round snapshot.
    pub fn state(&self) -> Result<&GameState, EngineError> {
        self.state.as_ref().ok_or(EngineError::NotStarted)
    }

    /// Apply a single-letter guess. Invalid, repeated, or post-game input is
    /// ignored and the unchanged snapshot returned.
    pub fn guess(&mut self, input: &str) -> Result<&GameState, EngineError> {
        let current = self.state.as_ref().ok_or(EngineError::NotStarted)?;
        match current.with_guess(input) {
            Some(next) => Ok(&*self.state.insert(next)),
            None => self.state.as_ref().ok_or(EngineError::NotStarted),
        }
    }

    /// Report that the caller-managed guess deadline elapsed: one life lost,
    /// clamped at zero. Ignored once the round is over.
    pub fn timeout(&mut self) -> Result<&GameState, EngineError> {
        let current = self.state.as_ref().ok_or(EngineError::NotStarted)?;
        match current.after_timeout() {
            Some(next) => Ok(&*self.state.insert(next)),
            None => self.state.as_ref().ok_or(EngineError::NotStarted),
        }
    }
}
