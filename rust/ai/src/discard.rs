//! Keep-set scoring and discard choice for the California Poker exchange.
//!
//! Looking ahead over every possible incoming four cards is too slow for a
//! live decision, so each candidate keep set is scored on its own potential:
//! rank groups, suitedness, straight draws and raw card height.

use calpoker_engine::cards::{Card, Rank};
use calpoker_engine::errors::EngineError;
use calpoker_engine::round::{DISCARD_SIZE, DiscardChoice, POOL_SIZE, discard_choices};
use tracing::{debug, trace};

use crate::config::HeuristicWeights;

/// Cards a player keeps out of the eight dealt.
pub const KEEP_SIZE: usize = POOL_SIZE - DISCARD_SIZE;

/// Scores a keep set with the default weights.
pub fn score_keep_set(cards: &[Card; KEEP_SIZE]) -> i32 {
    score_keep_set_with(&HeuristicWeights::default(), cards)
}

pub fn score_keep_set_with(weights: &HeuristicWeights, cards: &[Card; KEEP_SIZE]) -> i32 {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let mut score = multiplicity_bonus(weights, &values);
    score += suit_bonus(weights, cards);
    score += straight_bonus(weights, straight_potential(&values));
    score += values
        .iter()
        .zip(weights.position_weights)
        .map(|(&v, w)| i32::from(v) * w)
        .sum::<i32>();
    score
}

fn multiplicity_bonus(weights: &HeuristicWeights, values: &[u8]) -> i32 {
    let mut counts = [0u8; 15];
    for &v in values {
        counts[usize::from(v)] += 1;
    }
    let mut groups: Vec<u8> = counts.into_iter().filter(|&n| n > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    match groups.as_slice() {
        [3, ..] => weights.trips_bonus,
        [2, 2, ..] => weights.pair_bonus + weights.two_pair_bonus,
        [2, ..] => weights.pair_bonus,
        _ => 0,
    }
}

fn suit_bonus(weights: &HeuristicWeights, cards: &[Card]) -> i32 {
    let mut counts = [0u8; 5];
    for c in cards {
        counts[usize::from(c.suit.value())] += 1;
    }
    match counts.into_iter().max() {
        Some(4) => weights.four_suited_bonus,
        Some(3) => weights.three_suited_bonus,
        _ => 0,
    }
}

fn straight_bonus(weights: &HeuristicWeights, potential: usize) -> i32 {
    match potential {
        4 => weights.run_of_four_bonus,
        3 => weights.run_of_three_bonus,
        2 => weights.run_of_two_bonus,
        _ => 0,
    }
}

/// Length of the best straight draw among `values` (rank values, 2-14).
///
/// The longest run of consecutive distinct values competes with a wheel
/// draw: an Ace plus all four of 2-5 counts 4, plus three of them 3, plus two
/// of them 2.
pub fn straight_potential(values: &[u8]) -> usize {
    let mut distinct: Vec<u8> = values.to_vec();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();

    let mut longest = distinct.len().min(1);
    let mut current = 1;
    for pair in distinct.windows(2) {
        if pair[0] - pair[1] == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }

    let ace = Rank::Ace.value();
    let wheel = if distinct.contains(&ace) {
        match (2..=5).filter(|v| distinct.contains(v)).count() {
            4 => 4,
            3 => 3,
            2 => 2,
            _ => 0,
        }
    } else {
        0
    };
    longest.max(wheel)
}

/// Picks the four cards to hand over, using the default weights.
///
/// # Errors
///
/// [`EngineError::InvalidPoolSize`] unless `pool` holds exactly eight cards.
pub fn best_discard(pool: &[Card]) -> Result<DiscardChoice, EngineError> {
    best_discard_with(&HeuristicWeights::default(), pool)
}

/// Scores the keep set left by each of the 70 discard sets, in ascending
/// discard order, and returns the discard set with the strictly greatest
/// score. Ties go to the earlier discard set. `pool` is only read.
pub fn best_discard_with(
    weights: &HeuristicWeights,
    pool: &[Card],
) -> Result<DiscardChoice, EngineError> {
    if pool.len() != POOL_SIZE {
        return Err(EngineError::InvalidPoolSize {
            expected: POOL_SIZE,
            actual: pool.len(),
        });
    }

    let score_of = |choice: &DiscardChoice| {
        let keep = choice.keep_indices();
        let kept: [Card; KEEP_SIZE] = std::array::from_fn(|i| pool[keep[i]]);
        let score = score_keep_set_with(weights, &kept);
        trace!(discard = ?choice.indices(), score, "scored keep set");
        score
    };

    let first = DiscardChoice::new(&[0, 1, 2, 3])?;
    let (mut choice, mut score) = (first, score_of(&first));
    for candidate in discard_choices().filter(|c| *c != first) {
        let candidate_score = score_of(&candidate);
        if candidate_score > score {
            (choice, score) = (candidate, candidate_score);
        }
    }
    debug!(
        discard = ?choice.indices(),
        keep = ?choice.keep_indices(),
        score,
        "chose discards"
    );
    Ok(choice)
}
