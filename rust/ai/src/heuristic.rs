//! The keep-set scoring opponent.

use calpoker_engine::cards::Card;
use calpoker_engine::errors::EngineError;
use calpoker_engine::round::DiscardChoice;

use crate::SwapOpponent;
use crate::config::HeuristicWeights;
use crate::discard::best_discard_with;

/// Discards whatever four cards leave the best-scoring keep set, then shows
/// the best five of the eight it ends up with. Deterministic for a given
/// pool and weights.
///
/// # Example
///
/// ```rust
/// use calpoker_ai::SwapOpponent;
/// use calpoker_ai::heuristic::HeuristicOpponent;
/// use calpoker_engine::cards::parse_cards;
///
/// let ai = HeuristicOpponent::new();
/// let pool = parse_cards("7c 2d 7h 9s 7s 3c 4h Jd").unwrap();
/// let discards = ai.choose_discards(&pool).unwrap();
/// assert_eq!(discards.keep_indices(), vec![0, 2, 4, 7]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeuristicOpponent {
    weights: HeuristicWeights,
}

impl HeuristicOpponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }
}

impl SwapOpponent for HeuristicOpponent {
    fn choose_discards(&self, pool: &[Card]) -> Result<DiscardChoice, EngineError> {
        best_discard_with(&self.weights, pool)
    }

    fn name(&self) -> &str {
        "HeuristicOpponent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calpoker_engine::cards::parse_cards;
    use calpoker_engine::hand::Category;

    #[test]
    fn heuristic_opponent_name() {
        assert_eq!(HeuristicOpponent::new().name(), "HeuristicOpponent");
    }

    #[test]
    fn zero_weights_keep_the_first_four() {
        let ai = HeuristicOpponent::with_weights(HeuristicWeights {
            trips_bonus: 0,
            pair_bonus: 0,
            two_pair_bonus: 0,
            four_suited_bonus: 0,
            three_suited_bonus: 0,
            run_of_four_bonus: 0,
            run_of_three_bonus: 0,
            run_of_two_bonus: 0,
            position_weights: [0, 0, 0, 0],
        });
        let pool = parse_cards("Ac Kd Qh Js 2c 3d 4h 5s").unwrap();
        // every keep set ties, so the first discard set wins
        assert_eq!(ai.choose_discards(&pool).unwrap().indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn choose_hand_picks_best_five() {
        let ai = HeuristicOpponent::new();
        let pool = parse_cards("2c 2d 2h 9s 9c 3c 4h 5s").unwrap();
        let best = ai.choose_hand(&pool).unwrap();
        assert_eq!(best.rank.category, Category::FullHouse);
        assert_eq!(best.indices, vec![0, 1, 2, 3, 4]);
    }
}
