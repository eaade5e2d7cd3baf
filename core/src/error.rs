use thiserror::Error;

use crate::Difficulty;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Word must contain at least one letter")]
    EmptyWord,
    #[error("Word is longer than 32 letters")]
    WordTooLong,
    #[error("Invalid letter {0:?}, only A-Z are allowed")]
    InvalidLetter(char),
    #[error("No tile with that id in this round")]
    UnknownTile,
    #[error("No slot with that id in this round")]
    UnknownSlot,
    #[error("Tile pool ids must be dense and the pool must cover the word")]
    InvalidPool,
    #[error("Saved round does not match its word or has inconsistent placements")]
    InvalidRound,
    #[error("Score tiers must be non-empty, at most 100% and non-increasing")]
    InvalidScoreTiers,
    #[error("No words available for difficulty {0:?}")]
    NoWords(Difficulty),
    #[error("Session needs at least one round")]
    NoRounds,
    #[error("Round is still in progress")]
    RoundInProgress,
    #[error("Session already ended, no new rounds are started")]
    SessionOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
