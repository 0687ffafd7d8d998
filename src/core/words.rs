//! Built-in word and phrase pools, plus a loader for user-supplied pool
//! files. Entries are normalized by the engine at round start; blank lines
//! are dropped here.

use std::path::Path;

use anyhow::{Context, Result};

/// Default pool for basic rounds.
pub const WORDS: &[&str] = &[
    "CARGO",
    "COMPILER",
    "VARIABLE",
    "FUNCTION",
    "ALGORITHM",
    "DEBUG",
    "PACKAGE",
    "LIBRARY",
    "INTEGER",
    "BOOLEAN",
    "ITERATOR",
    "CLOSURE",
    "GENERIC",
    "MODULE",
    "CRATE",
    "BORROW",
    "POINTER",
    "THREAD",
    "CHANNEL",
    "SOFTWARE",
    "HARDWARE",
    "NETWORK",
    "SECURITY",
    "DATABASE",
    "MIGRATION",
    "TESTING",
    "QUALITY",
    "VERSION",
    "CONTROL",
    "BRANCH",
    "MERGE",
    "RELEASE",
    "SPRINT",
    "BACKLOG",
    "DESIGN",
    "PATTERN",
    "FACTORY",
    "ADAPTER",
    "STRATEGY",
    "OBSERVER",
    "BUILDER",
    "FACADE",
    "SINGLETON",
    "INHERITANCE",
    "ENCAPSULATION",
    "POLYMORPHISM",
    "COMPOSITION",
    "ABSTRACTION",
];

/// Default pool for intermediate rounds.
pub const PHRASES: &[&str] = &[
    "UNIT TESTS",
    "SOFTWARE QUALITY",
    "HANGMAN GAME",
    "DATA MIGRATION",
    "CODE REVIEW",
    "CONTINUOUS INTEGRATION",
    "VERSION CONTROL",
    "CLEAN CODE",
    "TEST DRIVEN DEVELOPMENT",
    "TERMINAL USER INTERFACE",
    "PROJECT MANAGEMENT",
    "BUG TRIAGE",
    "ERROR HANDLING",
    "STATIC ANALYSIS",
    "TEAM COLLABORATION",
    "STATE MACHINE",
    "EVENT LOOP",
    "PUBLIC INTERFACE",
    "SEPARATION OF CONCERNS",
];

/// Read a newline-separated pool file, skipping blank lines.
pub fn load_pool(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pool file {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pools_are_usable() {
        assert!(!WORDS.is_empty());
        assert!(!PHRASES.is_empty());
        assert!(WORDS.iter().all(|w| !w.trim().is_empty()));
        assert!(PHRASES.iter().all(|p| p.contains(' ')));
    }
}
