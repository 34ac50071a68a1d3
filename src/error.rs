use thiserror::Error;

/// Rejected typewriter configuration. Raised once at construction; a
/// typewriter is never started from a value that failed these checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("phrase list must contain at least one phrase")]
    EmptyPhraseList,
    #[error("phrase at index {index} is empty")]
    EmptyPhrase { index: usize },
    #[error("{phase} interval must be greater than zero")]
    ZeroDelay { phase: &'static str },
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse page content: {0}")]
    Parse(#[from] serde_json::Error),
}
