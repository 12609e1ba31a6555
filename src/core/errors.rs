use thiserror::Error;

/// Errors from decoding card symbols and tokens.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum CardParseError {
    #[error("Unknown value symbol: {0}")]
    UnknownValueSymbol(char),

    #[error("Unknown suit symbol: {0}")]
    UnknownSuitSymbol(char),

    #[error("Expected a two character card token of value and suit, got: {0}")]
    InvalidCardToken(String),
}

/// Errors from classifying a hand.
///
/// These are caller contract violations rather than recoverable
/// conditions. There is never a partial result.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ClassifyError {
    #[error("A hand must comprise exactly five cards, got {0}")]
    InvalidCardCount(usize),
}

/// Errors from evaluating a deal.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DealError {
    #[error("A deal must comprise exactly two hands, got {0}")]
    InvalidHandCount(usize),
}
