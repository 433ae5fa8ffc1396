//! One full round between two opponents: deal, exchange, show down.

use calpoker_engine::cards::Card;
use calpoker_engine::deck::Deck;
use calpoker_engine::errors::EngineError;
use calpoker_engine::round::{DiscardChoice, POOL_SIZE, Winner, apply_swap, deal_pools, showdown};
use calpoker_engine::selector::BestHand;
use serde::Serialize;
use tracing::debug;

use crate::{AiError, SwapOpponent};

/// Everything that happened in a round, first player's view first.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub dealt: [Vec<Card>; 2],
    pub discards: [DiscardChoice; 2],
    pub finals: [Vec<Card>; 2],
    pub hands: [BestHand; 2],
    pub winner: Winner,
}

/// Plays a round from pools already dealt.
pub fn play_pools(
    first: &dyn SwapOpponent,
    second: &dyn SwapOpponent,
    first_pool: Vec<Card>,
    second_pool: Vec<Card>,
) -> Result<RoundReport, AiError> {
    let first_discards = first.choose_discards(&first_pool)?;
    let second_discards = second.choose_discards(&second_pool)?;
    let (first_final, second_final) =
        apply_swap(&first_pool, &first_discards, &second_pool, &second_discards)?;
    let first_hand = first.choose_hand(&first_final)?;
    let second_hand = second.choose_hand(&second_final)?;
    let winner = showdown(&first_hand.rank, &second_hand.rank);
    debug!(
        first = first.name(),
        second = second.name(),
        first_hand = %first_hand.rank,
        second_hand = %second_hand.rank,
        ?winner,
        "round finished"
    );
    Ok(RoundReport {
        dealt: [first_pool, second_pool],
        discards: [first_discards, second_discards],
        finals: [first_final, second_final],
        hands: [first_hand, second_hand],
        winner,
    })
}

/// Deals two pools from `deck` and plays them out.
pub fn play_round(
    first: &dyn SwapOpponent,
    second: &dyn SwapOpponent,
    deck: &mut Deck,
) -> Result<RoundReport, AiError> {
    let (a, b) = deal_pools(deck).ok_or(EngineError::InvalidPoolSize {
        expected: 2 * POOL_SIZE,
        actual: deck.remaining(),
    })?;
    play_pools(first, second, a, b)
}
