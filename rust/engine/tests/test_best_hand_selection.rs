use calpoker_engine::cards::{parse_hand_cards, Card, HandCard, Rank as R, Suit as S};
use calpoker_engine::combinations::Combinations;
use calpoker_engine::deck::Deck;
use calpoker_engine::errors::{EngineError, HandDefect};
use calpoker_engine::hand::{evaluate, Category};
use calpoker_engine::selector::{select_best, select_best_cards};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn picks_trips_and_two_highest_kickers() {
    let pool = [
        c(S::Diamonds, R::Five),
        c(S::Clubs, R::Five),
        c(S::Diamonds, R::Six),
        c(S::Clubs, R::Ten),
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::Five),
        c(S::Spades, R::Three),
    ];
    let best = select_best_cards(&pool, 5).unwrap();
    assert_eq!(best.rank.category, Category::ThreeOfAKind);
    assert_eq!(best.rank.tiebreakers, vec![R::Five, R::Ten, R::Nine]);
    assert_eq!(best.indices, vec![0, 1, 3, 4, 5]);
    assert_eq!(best.bitfield(), 0b0011_1011);
}

#[test]
fn equal_hands_resolve_to_first_subset() {
    // the straight can use either ace
    let pool = parse_hand_cards("Tc Jd Qh Ks Ah Ad").unwrap();
    let best = select_best(&pool, 5).unwrap();
    assert_eq!(best.rank.category, Category::Straight);
    assert_eq!(best.indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn wild_in_pool_is_used() {
    let pool = parse_hand_cards("* 5d 5c 9h 2s 3c Kd").unwrap();
    let best = select_best(&pool, 5).unwrap();
    assert_eq!(best.rank.category, Category::ThreeOfAKind);
    assert_eq!(best.rank.tiebreakers, vec![R::Five, R::King, R::Nine]);
    assert_eq!(best.indices, vec![0, 1, 2, 3, 6]);
    assert_eq!(best.cards[0], HandCard::Wild);
}

#[test]
fn k_larger_than_pool_is_rejected() {
    let pool = parse_hand_cards("Ac Kd Qh Js").unwrap();
    assert_eq!(
        select_best(&pool, 5),
        Err(EngineError::SubsetTooLarge { k: 5, pool: 4 })
    );
}

#[test]
fn k_other_than_five_is_malformed() {
    let pool = parse_hand_cards("Ac Kd Qh Js Tc 9c 8c").unwrap();
    assert_eq!(
        select_best(&pool, 3),
        Err(EngineError::MalformedHand(HandDefect::WrongSize {
            expected: 5,
            actual: 3
        }))
    );
}

#[test]
fn pool_is_not_mutated_and_result_is_deterministic() {
    let pool = parse_hand_cards("9h Th * Qh 2c 2d Kh 3s").unwrap();
    let before = pool.clone();
    let first = select_best(&pool, 5).unwrap();
    let second = select_best(&pool, 5).unwrap();
    assert_eq!(pool, before);
    assert_eq!(first, second);
    assert_eq!(first.rank.category, Category::StraightFlush);
    assert_eq!(first.rank.tiebreakers, vec![R::King]);
    assert_eq!(first.indices, vec![0, 1, 2, 3, 6]);
}

#[test]
fn selection_is_optimal_over_seeded_pools() {
    for seed in 0..40u64 {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let pool = deck.deal_pool(8).unwrap();
        let best = select_best_cards(&pool, 5).unwrap();

        let chosen: Vec<HandCard> = best.indices.iter().map(|&i| HandCard::from(pool[i])).collect();
        assert_eq!(chosen, best.cards);
        assert_eq!(evaluate(&chosen).unwrap(), best.rank);

        for indices in Combinations::new(pool.len(), 5) {
            let hand: Vec<HandCard> = indices.iter().map(|&i| HandCard::from(pool[i])).collect();
            let rank = evaluate(&hand).unwrap();
            assert!(rank <= best.rank, "seed {seed}: {indices:?} beats {:?}", best.indices);
            if rank == best.rank {
                assert!(indices >= best.indices, "seed {seed}: earlier tie {indices:?}");
            }
        }
    }
}

#[test]
fn whole_pool_when_k_equals_size() {
    let pool = parse_hand_cards("2c 3d 4h 5s 6c").unwrap();
    let best = select_best(&pool, 5).unwrap();
    assert_eq!(best.indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(best.rank.tiebreakers, vec![R::Six]);
}
