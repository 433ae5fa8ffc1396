//! # calpoker-ai: automated California Poker opponents
//!
//! An opponent makes the two decisions a player faces in a round: which four
//! of the eight dealt cards to hand over, and which five of the final eight
//! to show.
//!
//! ## Core Components
//!
//! - [`SwapOpponent`] - Trait every opponent implements
//! - [`heuristic`] - Keep-set scoring opponent
//! - [`discard`] - The scorer and discard search behind it
//! - [`config`] - Tunable scoring weights loaded from file and environment
//! - [`play`] - Runs a complete round between two opponents
//! - [`create_opponent`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use calpoker_ai::{create_opponent, SwapOpponent};
//! use calpoker_engine::cards::parse_cards;
//!
//! let ai = create_opponent("heuristic").unwrap();
//! let pool = parse_cards("7c 2d 7h 9s 7s 3c 4h Jd").unwrap();
//! let discards = ai.choose_discards(&pool).unwrap();
//! assert_eq!(discards.indices(), &[1, 3, 5, 6]);
//! ```

use calpoker_engine::cards::Card;
use calpoker_engine::errors::EngineError;
use calpoker_engine::hand::HAND_SIZE;
use calpoker_engine::round::DiscardChoice;
use calpoker_engine::selector::{BestHand, select_best_cards};
use thiserror::Error;

pub mod config;
pub mod discard;
pub mod heuristic;
pub mod play;

use config::ConfigError;

/// A California Poker player that needs no input.
///
/// Implementations only read the pools they are given.
pub trait SwapOpponent: Send + Sync {
    /// Picks the four cards of an eight card pool to hand to the other player.
    fn choose_discards(&self, pool: &[Card]) -> Result<DiscardChoice, EngineError>;

    /// Picks the five cards to show from the pool held after the exchange.
    fn choose_hand(&self, pool: &[Card]) -> Result<BestHand, EngineError> {
        select_best_cards(pool, HAND_SIZE)
    }

    fn name(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error("unknown opponent type: {0}")]
    UnknownOpponent(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Builds an opponent by type name.
///
/// - `"heuristic"` - [`heuristic::HeuristicOpponent`] with the default weights
/// - `"tuned"` - the same opponent with weights from [`config::load_weights`]
///
/// # Errors
///
/// [`AiError::UnknownOpponent`] for any other name, [`AiError::Config`] when
/// `"tuned"` weights cannot be loaded.
///
/// ```rust
/// use calpoker_ai::{create_opponent, AiError};
///
/// assert_eq!(create_opponent("heuristic").unwrap().name(), "HeuristicOpponent");
/// assert!(matches!(create_opponent("oracle"), Err(AiError::UnknownOpponent(_))));
/// ```
pub fn create_opponent(kind: &str) -> Result<Box<dyn SwapOpponent>, AiError> {
    match kind {
        "heuristic" => Ok(Box::new(heuristic::HeuristicOpponent::new())),
        "tuned" => Ok(Box::new(heuristic::HeuristicOpponent::with_weights(
            config::load_weights()?,
        ))),
        other => Err(AiError::UnknownOpponent(other.to_string())),
    }
}
