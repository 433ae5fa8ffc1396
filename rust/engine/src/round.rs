//! California Poker round mechanics: each player is dealt [`POOL_SIZE`]
//! cards, hands [`DISCARD_SIZE`] of them to the opponent, and shows the best
//! five of the eight cards they end up with.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combinations::Combinations;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::{compare_hands, HandRank};

/// Cards dealt to each player.
pub const POOL_SIZE: usize = 8;
/// Cards each player passes to the opponent.
pub const DISCARD_SIZE: usize = 4;

/// Four distinct indices into an eight card pool, kept in ascending order.
/// The complementary four indices are the keep set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct DiscardChoice {
    indices: [usize; DISCARD_SIZE],
}

impl DiscardChoice {
    /// Builds a discard set from indices in any order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDiscard`] unless `indices` holds exactly
    /// four distinct values below [`POOL_SIZE`].
    pub fn new(indices: &[usize]) -> Result<Self, EngineError> {
        let mut sorted: [usize; DISCARD_SIZE] = indices.try_into().map_err(|_| {
            EngineError::InvalidDiscard(format!(
                "expected {DISCARD_SIZE} indices, got {}",
                indices.len()
            ))
        })?;
        sorted.sort_unstable();
        if let Some(&i) = sorted.iter().find(|&&i| i >= POOL_SIZE) {
            return Err(EngineError::InvalidDiscard(format!(
                "index {i} outside a pool of {POOL_SIZE}"
            )));
        }
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(EngineError::InvalidDiscard(format!(
                "repeated index in {sorted:?}"
            )));
        }
        Ok(Self { indices: sorted })
    }

    /// The discard set whose complement is `keep`.
    pub fn from_keep(keep: &[usize]) -> Result<Self, EngineError> {
        if keep.len() != POOL_SIZE - DISCARD_SIZE || keep.iter().any(|&i| i >= POOL_SIZE) {
            return Err(EngineError::InvalidDiscard(format!(
                "keep set {keep:?} is not {} indices below {POOL_SIZE}",
                POOL_SIZE - DISCARD_SIZE
            )));
        }
        let discards: Vec<usize> = (0..POOL_SIZE).filter(|i| !keep.contains(i)).collect();
        Self::new(&discards)
    }

    /// Decodes the one-byte form, bit `i` set when card `i` is discarded.
    pub fn from_bitfield(bits: u8) -> Result<Self, EngineError> {
        let indices: Vec<usize> = (0..POOL_SIZE).filter(|i| bits & (1 << i) != 0).collect();
        Self::new(&indices)
    }

    pub fn bitfield(&self) -> u8 {
        self.indices.iter().fold(0, |bits, &i| bits | 1 << i)
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn keep_indices(&self) -> Vec<usize> {
        (0..POOL_SIZE).filter(|i| !self.contains(*i)).collect()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Splits `pool` into (kept, discarded) cards, both in pool order.
    pub fn split(&self, pool: &[Card]) -> Result<(Vec<Card>, Vec<Card>), EngineError> {
        check_pool(pool)?;
        let (discarded, kept): (Vec<(usize, Card)>, Vec<(usize, Card)>) = pool
            .iter()
            .copied()
            .enumerate()
            .partition(|(i, _)| self.contains(*i));
        Ok((
            kept.into_iter().map(|(_, c)| c).collect(),
            discarded.into_iter().map(|(_, c)| c).collect(),
        ))
    }
}

impl TryFrom<Vec<usize>> for DiscardChoice {
    type Error = EngineError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(&indices)
    }
}

impl From<DiscardChoice> for Vec<usize> {
    fn from(choice: DiscardChoice) -> Self {
        choice.indices.to_vec()
    }
}

/// All 70 discard sets in ascending index-tuple order.
pub fn discard_choices() -> impl Iterator<Item = DiscardChoice> {
    Combinations::new(POOL_SIZE, DISCARD_SIZE).filter_map(|v| {
        let indices: [usize; DISCARD_SIZE] = v.try_into().ok()?;
        Some(DiscardChoice { indices })
    })
}

pub(crate) fn check_pool(pool: &[Card]) -> Result<(), EngineError> {
    if pool.len() != POOL_SIZE {
        return Err(EngineError::InvalidPoolSize {
            expected: POOL_SIZE,
            actual: pool.len(),
        });
    }
    Ok(())
}

/// Deals two eight card pools from `deck`, or nothing at all when fewer
/// than sixteen cards remain.
pub fn deal_pools(deck: &mut Deck) -> Option<(Vec<Card>, Vec<Card>)> {
    if deck.remaining() < 2 * POOL_SIZE {
        return None;
    }
    let first = deck.deal_pool(POOL_SIZE)?;
    let second = deck.deal_pool(POOL_SIZE)?;
    Some((first, second))
}

/// Exchanges discards: each player keeps their four and receives the
/// opponent's four. Final pools are returned in deck id order.
///
/// # Examples
///
/// ```
/// use calpoker_engine::cards::parse_cards;
/// use calpoker_engine::round::{apply_swap, DiscardChoice};
///
/// let a = parse_cards("2s 3s 4s 5s 6h 7h 8h 9h").unwrap();
/// let b = parse_cards("Ts Js Qs Ks Ah Kh Qh Jh").unwrap();
/// let (a2, b2) = apply_swap(
///     &a,
///     &DiscardChoice::new(&[4, 5, 6, 7]).unwrap(),
///     &b,
///     &DiscardChoice::new(&[0, 1, 2, 3]).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(a2, parse_cards("2s 3s 4s 5s Ts Js Qs Ks").unwrap());
/// assert_eq!(b2, parse_cards("6h 7h 8h 9h Jh Qh Kh Ah").unwrap());
/// ```
pub fn apply_swap(
    first: &[Card],
    first_discards: &DiscardChoice,
    second: &[Card],
    second_discards: &DiscardChoice,
) -> Result<(Vec<Card>, Vec<Card>), EngineError> {
    let (mut first_final, first_out) = first_discards.split(first)?;
    let (mut second_final, second_out) = second_discards.split(second)?;
    first_final.extend(second_out);
    second_final.extend(first_out);
    first_final.sort_by_key(Card::id);
    second_final.sort_by_key(Card::id);
    Ok((first_final, second_final))
}

/// Who takes the pot at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    First,
    Second,
    Split,
}

impl Winner {
    /// +1 when the first player wins, -1 when the second does, 0 on a split.
    pub fn direction(self) -> i8 {
        match self {
            Winner::First => 1,
            Winner::Second => -1,
            Winner::Split => 0,
        }
    }
}

pub fn showdown(first: &HandRank, second: &HandRank) -> Winner {
    match compare_hands(first, second) {
        std::cmp::Ordering::Greater => Winner::First,
        std::cmp::Ordering::Less => Winner::Second,
        std::cmp::Ordering::Equal => Winner::Split,
    }
}
