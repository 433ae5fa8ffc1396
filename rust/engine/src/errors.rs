use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card: {0}")]
    InvalidCard(CardDefect),
    #[error("Malformed hand: {0}")]
    MalformedHand(HandDefect),
    #[error("Invalid pool size: expected {expected} cards, got {actual}")]
    InvalidPoolSize { expected: usize, actual: usize },
    #[error("Cannot choose {k} cards from a pool of {pool}")]
    SubsetTooLarge { k: usize, pool: usize },
    #[error("Invalid discard set: {0}")]
    InvalidDiscard(String),
}

/// Why a card could not be constructed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardDefect {
    #[error("rank {0} outside 2..=14")]
    RankOutOfRange(u8),
    #[error("suit {0} outside 1..=4")]
    SuitOutOfRange(u8),
    #[error("card id {0} outside 0..52")]
    IdOutOfRange(u8),
    #[error("wire index [{0}, {1}] outside [0..13, 0..4]")]
    WireIndexOutOfRange(u8, u8),
    #[error("cannot parse {0:?}")]
    Unparsable(String),
}

/// Why a set of cards is not an evaluable hand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandDefect {
    #[error("expected {expected} cards, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}
