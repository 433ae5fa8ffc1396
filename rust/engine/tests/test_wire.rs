use calpoker_engine::cards::{Card, HandCard, Rank as R, Suit as S};
use calpoker_engine::errors::{CardDefect, EngineError};
use calpoker_engine::hand::Category;
use calpoker_engine::selector::select_best_cards;
use calpoker_engine::wire::{
    card_from_wire, card_to_wire, decode_pool, encode_pool, hand_card_to_wire, pool_from_json,
    CategoryScheme, WireHandResult,
};

#[test]
fn json_pool_is_translated_once_at_the_boundary() {
    // 5d 5c 6d Tc 9h 5h 3s
    let pool = pool_from_json("[[3,2],[3,3],[4,2],[8,3],[7,1],[3,1],[1,0]]").unwrap();
    assert_eq!(pool[0], Card::new(R::Five, S::Diamonds));
    assert_eq!(pool[6], Card::new(R::Three, S::Spades));

    let best = select_best_cards(&pool, 5).unwrap();
    assert_eq!(best.rank.category, Category::ThreeOfAKind);
    let result = WireHandResult::from_best(&best, CategoryScheme::Ten);
    assert_eq!(result.category, 3);
    assert_eq!(result.tiebreakers, vec![3, 8, 7]);
    assert_eq!(
        result.to_json().unwrap(),
        r#"{"category":3,"tiebreakers":[3,8,7],"indices":[0,1,3,4,5]}"#
    );
}

#[test]
fn encode_inverts_decode() {
    let wire = vec![[0, 0], [12, 3], [5, 1], [9, 2]];
    let cards = decode_pool(&wire).unwrap();
    assert_eq!(encode_pool(&cards), wire);
    assert_eq!(card_to_wire(card_from_wire([7, 2]).unwrap()), [7, 2]);
}

#[test]
fn bad_input_is_an_invalid_card() {
    assert_eq!(
        pool_from_json("[[3,2],[14,0]]"),
        Err(EngineError::InvalidCard(CardDefect::WireIndexOutOfRange(14, 0)))
    );
    assert!(matches!(
        pool_from_json("[[3,2],"),
        Err(EngineError::InvalidCard(CardDefect::Unparsable(_)))
    ));
    assert!(matches!(
        pool_from_json("[[3,2,1]]"),
        Err(EngineError::InvalidCard(CardDefect::Unparsable(_)))
    ));
}

#[test]
fn legacy_scheme_only_changes_royal_flush() {
    let pool = decode_pool(&[[8, 1], [9, 1], [10, 1], [11, 1], [7, 1], [0, 0], [0, 3], [1, 2]])
        .unwrap();
    let best = select_best_cards(&pool, 5).unwrap();
    assert_eq!(best.rank.category, Category::StraightFlush);
    let ten = WireHandResult::from_rank(&best.rank, CategoryScheme::Ten);
    let legacy = WireHandResult::from_rank(&best.rank, CategoryScheme::Legacy);
    assert_eq!(ten, legacy);
    assert_eq!(legacy.category, 8);
    assert_eq!(legacy.tiebreakers, vec![11]);
    assert!(ten.to_json().unwrap().ends_with("[11]}"));
}

#[test]
fn wilds_have_no_wire_form() {
    assert_eq!(hand_card_to_wire(HandCard::Wild), None);
    assert_eq!(
        hand_card_to_wire(HandCard::from(Card::new(R::Ace, S::Hearts))),
        Some([12, 1])
    );
}
