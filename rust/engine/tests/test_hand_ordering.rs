use std::cmp::Ordering;

use calpoker_engine::cards::HandCard;
use calpoker_engine::deck::Deck;
use calpoker_engine::hand::{compare_hands, evaluate, HandRank};

fn random_hands(seed: u64, n: usize) -> Vec<HandRank> {
    let mut deck = Deck::new_with_seed(seed);
    let mut hands = Vec::with_capacity(n);
    while hands.len() < n {
        deck.shuffle();
        while let Some(pool) = deck.deal_pool(5) {
            let cards: Vec<HandCard> = pool.into_iter().map(HandCard::from).collect();
            hands.push(evaluate(&cards).unwrap());
            if hands.len() == n {
                break;
            }
        }
    }
    hands
}

#[test]
fn comparison_is_antisymmetric() {
    let hands = random_hands(7, 120);
    for a in &hands {
        assert_eq!(compare_hands(a, a), Ordering::Equal);
        for b in &hands {
            assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse());
        }
    }
}

#[test]
fn comparison_is_transitive() {
    let mut hands = random_hands(11, 300);
    hands.sort();
    for i in 0..hands.len() {
        for j in i + 1..hands.len() {
            assert_ne!(compare_hands(&hands[i], &hands[j]), Ordering::Greater);
        }
    }
}

#[test]
fn category_dominates_tiebreakers() {
    let hands = random_hands(23, 200);
    for a in &hands {
        for b in &hands {
            if a.category != b.category {
                assert_eq!(compare_hands(a, b), a.category.cmp(&b.category));
            }
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    assert_eq!(random_hands(99, 50), random_hands(99, 50));
}
