//! # calpoker-engine: hand evaluation for California Poker
//!
//! Scores five card poker hands (with optional wild cards), picks the best
//! five out of a larger pool, and carries the eight-card deal / four-card
//! exchange mechanics of California Poker. Everything here is a pure
//! function of its inputs; the only randomness is the seeded [`deck::Deck`].
//!
//! ## Modules
//!
//! - [`cards`] - Suit, Rank, Card, wild-capable HandCard, text parsing
//! - [`deck`] - Seeded 52-card deck for dealing pools
//! - [`hand`] - Ten-category hand evaluation and ordering
//! - [`combinations`] - Lexicographic k-subset enumeration
//! - [`selector`] - Best k-of-N hand selection
//! - [`round`] - Discard sets, the card exchange, and showdown
//! - [`wire`] - `[rank_index, suit_index]` boundary encoding
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use calpoker_engine::cards::parse_hand_cards;
//! use calpoker_engine::hand::{evaluate, Category};
//!
//! let hand = parse_hand_cards("7h 7d * Ks 2c").unwrap();
//! let rank = evaluate(&hand).unwrap();
//! assert_eq!(rank.category, Category::ThreeOfAKind);
//! assert_eq!(rank.describe(), "Three of a Kind, Sevens. King, Two kickers");
//! ```
//!
//! ## Best five of eight
//!
//! ```rust
//! use calpoker_engine::cards::parse_cards;
//! use calpoker_engine::selector::select_best_cards;
//!
//! let pool = parse_cards("9h Th Jh Qh Kh 2c 2d 2s").unwrap();
//! let best = select_best_cards(&pool, 5).unwrap();
//! assert_eq!(best.indices, vec![0, 1, 2, 3, 4]);
//! ```

pub mod cards;
pub mod combinations;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod round;
pub mod selector;
pub mod wire;
