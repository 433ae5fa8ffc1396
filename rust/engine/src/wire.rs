//! Translation between the peer's card encoding and [`Card`].
//!
//! The peer sends cards as `[rank_index, suit_index]` pairs, both 0-based:
//! rank 0 is a Two and 12 an Ace, suits run ♠ ♥ ♦ ♣. Nothing outside this
//! module sees that encoding.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, HandCard, Rank};
use crate::errors::{CardDefect, EngineError};
use crate::hand::{Category, HandRank};
use crate::selector::BestHand;

/// A card as the peer encodes it.
pub type WireCard = [u8; 2];

/// Which category numbering to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryScheme {
    /// Ten categories, Royal Flush on its own at 9.
    #[default]
    Ten,
    /// Nine categories, Royal Flush reported as a Straight Flush (8).
    Legacy,
}

pub fn card_from_wire([rank, suit]: WireCard) -> Result<Card, EngineError> {
    if rank > 12 || suit > 3 {
        return Err(EngineError::InvalidCard(CardDefect::WireIndexOutOfRange(
            rank, suit,
        )));
    }
    Card::from_values(rank + 2, suit + 1)
}

pub fn card_to_wire(card: Card) -> WireCard {
    [card.rank.value() - 2, card.suit.value() - 1]
}

pub fn decode_pool(pool: &[WireCard]) -> Result<Vec<Card>, EngineError> {
    pool.iter().copied().map(card_from_wire).collect()
}

pub fn encode_pool(pool: &[Card]) -> Vec<WireCard> {
    pool.iter().copied().map(card_to_wire).collect()
}

/// Parses a JSON pool such as `[[12,0],[11,0],[0,3]]`.
///
/// # Errors
///
/// Malformed JSON and out-of-range indices both surface as
/// [`EngineError::InvalidCard`].
pub fn pool_from_json(json: &str) -> Result<Vec<Card>, EngineError> {
    let raw: Vec<WireCard> = serde_json::from_str(json)
        .map_err(|e| EngineError::InvalidCard(CardDefect::Unparsable(e.to_string())))?;
    decode_pool(&raw)
}

/// A best-hand result in the peer's encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireHandResult {
    pub category: u8,
    /// 0-based rank indices, most significant first.
    pub tiebreakers: Vec<u8>,
    /// Pool indices of the five chosen cards, ascending.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indices: Vec<usize>,
}

impl WireHandResult {
    pub fn from_rank(rank: &HandRank, scheme: CategoryScheme) -> Self {
        let category = match scheme {
            CategoryScheme::Ten => rank.category.code(),
            CategoryScheme::Legacy => rank.category.legacy_code(),
        };
        let mut tiebreakers: Vec<u8> = rank.tiebreakers.iter().map(|r| r.value() - 2).collect();
        // the legacy scheme has no Royal Flush, so it needs the straight's high card
        if scheme == CategoryScheme::Legacy && rank.category == Category::RoyalFlush {
            tiebreakers.push(Rank::Ace.value() - 2);
        }
        WireHandResult {
            category,
            tiebreakers,
            indices: Vec::new(),
        }
    }

    pub fn from_best(best: &BestHand, scheme: CategoryScheme) -> Self {
        WireHandResult {
            indices: best.indices.clone(),
            ..Self::from_rank(&best.rank, scheme)
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Wild cards have no wire form; naturals are encoded as usual.
pub fn hand_card_to_wire(card: HandCard) -> Option<WireCard> {
    card.natural().map(card_to_wire)
}
