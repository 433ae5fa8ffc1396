//! Exhaustive best-hand selection from a larger pool.
//!
//! Every k-subset of the pool is evaluated; there is no pruning. Candidates
//! are visited in lexicographic index order and only a strictly better hand
//! replaces the current best, so ties resolve to the first subset found.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, HandCard};
use crate::combinations::Combinations;
use crate::errors::{EngineError, HandDefect};
use crate::hand::{evaluate, HandRank, HAND_SIZE};

/// The winning subset of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    /// Ascending pool indices of the chosen cards.
    pub indices: Vec<usize>,
    pub cards: Vec<HandCard>,
    pub rank: HandRank,
}

impl BestHand {
    /// Chosen indices as a bitfield, bit `i` set when pool card `i` is selected.
    pub fn bitfield(&self) -> u64 {
        self.indices.iter().fold(0, |bits, &i| bits | 1 << i)
    }
}

/// Returns the best `k` card hand that can be formed from `pool`.
///
/// The pool is only read; the result carries copies of the chosen cards.
///
/// # Errors
///
/// - [`EngineError::SubsetTooLarge`] if `k` exceeds the pool size
/// - [`EngineError::MalformedHand`] if `k` is not a valid hand size or the
///   pool repeats a natural card inside a candidate
///
/// # Examples
///
/// ```
/// use calpoker_engine::cards::parse_hand_cards;
/// use calpoker_engine::hand::Category;
/// use calpoker_engine::selector::select_best;
///
/// let pool = parse_hand_cards("5d 5c 6d Tc 9h 5h 3s").unwrap();
/// let best = select_best(&pool, 5).unwrap();
/// assert_eq!(best.rank.category, Category::ThreeOfAKind);
/// assert_eq!(best.indices, vec![0, 1, 3, 4, 5]);
/// ```
pub fn select_best(pool: &[HandCard], k: usize) -> Result<BestHand, EngineError> {
    if k > pool.len() {
        return Err(EngineError::SubsetTooLarge {
            k,
            pool: pool.len(),
        });
    }

    let mut best: Option<(Vec<usize>, HandRank)> = None;
    let mut candidate = Vec::with_capacity(k);
    for indices in Combinations::new(pool.len(), k) {
        candidate.clear();
        candidate.extend(indices.iter().map(|&i| pool[i]));
        let rank = evaluate(&candidate)?;
        trace!(?indices, category = %rank.category, "evaluated candidate");
        let improves = match &best {
            Some((_, current)) => rank > *current,
            None => true,
        };
        if improves {
            best = Some((indices, rank));
        }
    }

    let (indices, rank) = best.ok_or(EngineError::MalformedHand(HandDefect::WrongSize {
        expected: HAND_SIZE,
        actual: k,
    }))?;
    debug!(?indices, hand = %rank, "selected best hand");
    Ok(BestHand {
        cards: indices.iter().map(|&i| pool[i]).collect(),
        indices,
        rank,
    })
}

/// [`select_best`] over a pool without wild cards.
pub fn select_best_cards(pool: &[Card], k: usize) -> Result<BestHand, EngineError> {
    let pool: Vec<HandCard> = pool.iter().copied().map(HandCard::from).collect();
    select_best(&pool, k)
}
