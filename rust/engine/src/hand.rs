use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, all_suits, Card, HandCard, Rank, Suit};
use crate::errors::{EngineError, HandDefect};

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

/// Hand categories, lowest to highest.
///
/// Royal Flush is a category of its own; [`Category::legacy_code`] gives the
/// nine-category numbering where it is folded into Straight Flush.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Ten-category code, 0 (High Card) through 9 (Royal Flush).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Category> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Nine-category code, 0 (High Card) through 8 (Straight Flush, royal included).
    pub fn legacy_code(self) -> u8 {
        match self {
            Category::RoyalFlush => Category::StraightFlush as u8,
            other => other as u8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of evaluating a five card hand.
///
/// Ordering and equality look only at the category and the tiebreakers;
/// `representative` is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    /// Ranks ordered most significant first, exactly as many as the category needs.
    pub tiebreakers: Vec<Rank>,
    /// The natural card carrying the primary rank, if one exists in the hand.
    pub representative: Option<Card>,
}

impl HandRank {
    /// The rank that names the hand: trips rank, straight high card, and so on.
    pub fn primary(&self) -> Option<Rank> {
        match self.category {
            Category::RoyalFlush => Some(Rank::Ace),
            _ => self.tiebreakers.first().copied(),
        }
    }

    /// Human readable description, e.g. `"Full House, Aces over Fours"`.
    pub fn describe(&self) -> String {
        let names = |ranks: &[Rank]| {
            ranks
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match (self.category, self.tiebreakers.as_slice()) {
            (Category::RoyalFlush, _) => Category::RoyalFlush.to_string(),
            (Category::StraightFlush | Category::Straight, [high, ..]) => {
                format!("{} {} High", self.category, high.name())
            }
            (Category::Flush, [high, rest @ ..]) => {
                format!("Flush, {} high, {} kickers", high.name(), names(rest))
            }
            (Category::FourOfAKind, [quads, kicker, ..]) => {
                format!("Four of a Kind, {}. {} kicker", quads.plural(), kicker.name())
            }
            (Category::FullHouse, [trips, pair, ..]) => {
                format!("Full House, {} over {}", trips.plural(), pair.plural())
            }
            (Category::ThreeOfAKind, [trips, rest @ ..]) => {
                format!("Three of a Kind, {}. {} kickers", trips.plural(), names(rest))
            }
            (Category::TwoPair, [high, low, rest @ ..]) => format!(
                "Two Pair, {} over {}, {} kicker",
                high.plural(),
                low.plural(),
                names(rest)
            ),
            (Category::OnePair, [pair, rest @ ..]) => {
                format!("Pair, {}. {} kickers", pair.plural(), names(rest))
            }
            (Category::HighCard, [high, rest @ ..]) => {
                format!("{} high. {} kickers", high.name(), names(rest))
            }
            (category, _) => category.to_string(),
        }
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreakers.cmp(&other.tiebreakers))
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    a.cmp(b)
}

/// Evaluates a five card hand where wild entries are flagged as [`HandCard::Wild`].
///
/// # Errors
///
/// Returns [`EngineError::MalformedHand`] if the hand does not hold exactly
/// [`HAND_SIZE`] entries or a natural card appears twice.
///
/// # Examples
///
/// ```
/// use calpoker_engine::cards::parse_hand_cards;
/// use calpoker_engine::hand::{evaluate, Category};
///
/// let hand = parse_hand_cards("As Ks * Js Ts").unwrap();
/// assert_eq!(evaluate(&hand).unwrap().category, Category::RoyalFlush);
/// ```
pub fn evaluate(cards: &[HandCard]) -> Result<HandRank, EngineError> {
    let mut naturals = Vec::with_capacity(cards.len());
    let mut wilds = 0;
    for card in cards {
        match card {
            HandCard::Natural(c) => naturals.push(*c),
            HandCard::Wild => wilds += 1,
        }
    }
    evaluate_with_wilds(&naturals, wilds)
}

/// Evaluates `naturals` plus `wild_count` wild cards as one five card hand.
pub fn evaluate_with_wilds(naturals: &[Card], wild_count: usize) -> Result<HandRank, EngineError> {
    let total = naturals.len() + wild_count;
    if total != HAND_SIZE {
        return Err(EngineError::MalformedHand(HandDefect::WrongSize {
            expected: HAND_SIZE,
            actual: total,
        }));
    }
    let tally = Tally::new(naturals)?;
    let (category, tiebreakers) = classify(&tally, wild_count);
    let mut hand = HandRank {
        category,
        tiebreakers,
        representative: None,
    };
    hand.representative = hand
        .primary()
        .and_then(|p| naturals.iter().find(|c| c.rank == p).copied());
    Ok(hand)
}

/// Per-rank and per-suit counts of the natural cards in a hand.
struct Tally {
    naturals: usize,
    rank_counts: [u8; 15],
    rank_mask: u16,
    suit_counts: [u8; 5],
    suit_masks: [u16; 5],
}

impl Tally {
    fn new(cards: &[Card]) -> Result<Self, EngineError> {
        let mut t = Tally {
            naturals: cards.len(),
            rank_counts: [0; 15],
            rank_mask: 0,
            suit_counts: [0; 5],
            suit_masks: [0; 5],
        };
        for &c in cards {
            let s = c.suit as usize;
            if t.suit_masks[s] & bit(c.rank) != 0 {
                return Err(EngineError::MalformedHand(HandDefect::DuplicateCard(c)));
            }
            t.suit_masks[s] |= bit(c.rank);
            t.suit_counts[s] += 1;
            t.rank_counts[c.rank as usize] += 1;
            t.rank_mask |= bit(c.rank);
        }
        Ok(t)
    }

    fn ranks_desc(&self) -> Vec<Rank> {
        let mut ranks = Vec::with_capacity(self.naturals);
        for &r in all_ranks().iter().rev() {
            for _ in 0..self.rank_counts[r as usize] {
                ranks.push(r);
            }
        }
        ranks
    }
}

fn bit(rank: Rank) -> u16 {
    1 << (rank as u16)
}

/// Every straight as (high card, rank mask), ace high first and the wheel last.
fn straight_windows() -> Vec<(Rank, u16)> {
    let ranks = all_ranks();
    let mut windows: Vec<(Rank, u16)> = (4..ranks.len())
        .rev()
        .map(|hi| (ranks[hi], ranks[hi - 4..=hi].iter().fold(0, |m, &r| m | bit(r))))
        .collect();
    let wheel = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
    windows.push((Rank::Five, wheel.iter().fold(0, |m, &r| m | bit(r))));
    windows
}

fn classify(t: &Tally, wilds: usize) -> (Category, Vec<Rank>) {
    if let Some(high) = flush_suit(t, wilds)
        .and_then(|s| straight_high(t.suit_masks[s as usize], t.naturals))
    {
        return if high == Rank::Ace {
            (Category::RoyalFlush, Vec::new())
        } else {
            (Category::StraightFlush, vec![high])
        };
    }
    if let Some(ranks) = best_grouping(t, wilds, &[4, 1]) {
        return (Category::FourOfAKind, ranks);
    }
    if let Some(ranks) = best_grouping(t, wilds, &[3, 2]) {
        return (Category::FullHouse, ranks);
    }
    if let Some(ranks) = flush_ranks(t, wilds) {
        return (Category::Flush, ranks);
    }
    if let Some(high) = straight_high(t.rank_mask, t.naturals) {
        return (Category::Straight, vec![high]);
    }
    if let Some(ranks) = best_grouping(t, wilds, &[3, 1, 1]) {
        return (Category::ThreeOfAKind, ranks);
    }
    if let Some(ranks) = best_grouping(t, wilds, &[2, 2, 1]) {
        return (Category::TwoPair, ranks);
    }
    if let Some(ranks) = best_grouping(t, wilds, &[2, 1, 1, 1]) {
        return (Category::OnePair, ranks);
    }
    let ranks = best_grouping(t, wilds, &[1, 1, 1, 1, 1]).unwrap_or_else(|| t.ranks_desc());
    (Category::HighCard, ranks)
}

/// The suit every natural card shares, when wilds can complete a flush in it.
fn flush_suit(t: &Tally, wilds: usize) -> Option<Suit> {
    all_suits()
        .into_iter()
        .find(|&s| usize::from(t.suit_counts[s as usize]) + wilds >= HAND_SIZE)
}

/// Highest straight containing every rank in `mask`; wilds fill the gaps.
fn straight_high(mask: u16, naturals: usize) -> Option<Rank> {
    // a paired rank can never be part of a straight
    if mask.count_ones() as usize != naturals {
        return None;
    }
    straight_windows()
        .into_iter()
        .find(|&(_, window)| mask & !window == 0)
        .map(|(high, _)| high)
}

fn flush_ranks(t: &Tally, wilds: usize) -> Option<Vec<Rank>> {
    let suit = flush_suit(t, wilds)?;
    let mask = t.suit_masks[suit as usize];
    let mut spare = wilds;
    let ranks = all_ranks()
        .iter()
        .rev()
        .copied()
        .filter(|&r| {
            if mask & bit(r) != 0 {
                true
            } else if spare > 0 {
                spare -= 1;
                true
            } else {
                false
            }
        })
        .collect();
    Some(ranks)
}

/// Assigns distinct ranks to the groups of `pattern` (e.g. `[3, 2]` for a full
/// house) using wilds to top up, and returns the lexicographically greatest
/// assignment that accounts for every natural card.
fn best_grouping(t: &Tally, wilds: usize, pattern: &[u8]) -> Option<Vec<Rank>> {
    let mut chosen = Vec::with_capacity(pattern.len());
    if assign_groups(&t.rank_counts, t.naturals, wilds, pattern, None, &mut chosen) {
        Some(chosen)
    } else {
        None
    }
}

fn assign_groups(
    counts: &[u8; 15],
    uncovered: usize,
    wilds: usize,
    pattern: &[u8],
    prev: Option<(u8, Rank)>,
    chosen: &mut Vec<Rank>,
) -> bool {
    let Some((&size, rest)) = pattern.split_first() else {
        return uncovered == 0 && wilds == 0;
    };
    for &rank in all_ranks().iter().rev() {
        // equal sized groups are kept in descending rank order
        if let Some((prev_size, prev_rank)) = prev {
            if prev_size == size && rank >= prev_rank {
                continue;
            }
        }
        if chosen.contains(&rank) {
            continue;
        }
        let have = counts[rank as usize];
        if have > size {
            continue;
        }
        let need = usize::from(size - have);
        if need > wilds {
            continue;
        }
        chosen.push(rank);
        if assign_groups(
            counts,
            uncovered - usize::from(have),
            wilds - need,
            rest,
            Some((size, rank)),
            chosen,
        ) {
            return true;
        }
        chosen.pop();
    }
    false
}
