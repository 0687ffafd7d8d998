pub mod core {
    pub mod engine;
    pub mod words;
}

pub mod ui {
    pub mod plain;
    pub mod render;
    pub mod tui;
}

pub mod cli;

// Re-export for convenience
pub use crate::core::engine::{Difficulty, EngineError, GameState, HangmanEngine, MASK_CHAR};
