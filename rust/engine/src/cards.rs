use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CardDefect, EngineError};

/// Represents one of the four suits in a standard 52-card deck.
/// Numeric values follow the 1-4 scheme used throughout the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades = 1,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    /// Converts a 1-4 suit value into a [`Suit`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCard`] when `v` is outside 1..=4.
    pub fn from_u8(v: u8) -> Result<Suit, EngineError> {
        match v {
            1 => Ok(Suit::Spades),
            2 => Ok(Suit::Hearts),
            3 => Ok(Suit::Diamonds),
            4 => Ok(Suit::Clubs),
            _ => Err(EngineError::InvalidCard(CardDefect::SuitOutOfRange(v))),
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    /// Accepts both the ASCII letter (either case) and the suit symbol.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            's' | 'S' | '♠' => Some(Suit::Spades),
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Converts a 2-14 rank value into a [`Rank`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCard`] when `v` is outside 2..=14.
    pub fn from_u8(v: u8) -> Result<Rank, EngineError> {
        match v {
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            4 => Ok(Rank::Four),
            5 => Ok(Rank::Five),
            6 => Ok(Rank::Six),
            7 => Ok(Rank::Seven),
            8 => Ok(Rank::Eight),
            9 => Ok(Rank::Nine),
            10 => Ok(Rank::Ten),
            11 => Ok(Rank::Jack),
            12 => Ok(Rank::Queen),
            13 => Ok(Rank::King),
            14 => Ok(Rank::Ace),
            _ => Err(EngineError::InvalidCard(CardDefect::RankOutOfRange(v))),
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            'A' => Some(Rank::Ace),
            'K' => Some(Rank::King),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            'T' => Some(Rank::Ten),
            '9' => Some(Rank::Nine),
            '8' => Some(Rank::Eight),
            '7' => Some(Rank::Seven),
            '6' => Some(Rank::Six),
            '5' => Some(Rank::Five),
            '4' => Some(Rank::Four),
            '3' => Some(Rank::Three),
            '2' => Some(Rank::Two),
            _ => None,
        }
    }

    /// Full English name, used in hand descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Rank::Two => "Twos",
            Rank::Three => "Threes",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are small immutable values and are always passed by copy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { suit, rank }
    }

    /// Builds a card from a 2-14 rank value and a 1-4 suit value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCard`] if either value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use calpoker_engine::cards::{Card, Rank, Suit};
    ///
    /// let card = Card::from_values(14, 1).unwrap();
    /// assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
    /// assert!(Card::from_values(15, 1).is_err());
    /// ```
    pub fn from_values(rank: u8, suit: u8) -> Result<Card, EngineError> {
        Ok(Card {
            rank: Rank::from_u8(rank)?,
            suit: Suit::from_u8(suit)?,
        })
    }

    /// Builds a card from its 0-51 deck id (`rank = id / 4`, `suit = id % 4`).
    pub fn from_id(id: u8) -> Result<Card, EngineError> {
        if id >= 52 {
            return Err(EngineError::InvalidCard(CardDefect::IdOutOfRange(id)));
        }
        Card::from_values(id / 4 + 2, id % 4 + 1)
    }

    /// The 0-51 deck id of this card.
    pub fn id(&self) -> u8 {
        (self.rank.value() - 2) * 4 + (self.suit.value() - 1)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses two-character cards such as `"As"`, `"td"` or `"Q♥"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || EngineError::InvalidCard(CardDefect::Unparsable(s.to_string()));
        let mut chars = s.trim().chars();
        let rank = chars.next().and_then(Rank::from_char).ok_or_else(unparsable)?;
        let suit = chars.next().and_then(Suit::from_char).ok_or_else(unparsable)?;
        if chars.next().is_some() {
            return Err(unparsable());
        }
        Ok(Card { suit, rank })
    }
}

/// One entry of a hand or pool: either a natural card or a wild card that
/// takes whatever rank and suit maximize the hand it ends up in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandCard {
    Natural(Card),
    Wild,
}

impl HandCard {
    pub fn is_wild(&self) -> bool {
        matches!(self, HandCard::Wild)
    }

    pub fn natural(&self) -> Option<Card> {
        match self {
            HandCard::Natural(card) => Some(*card),
            HandCard::Wild => None,
        }
    }
}

impl From<Card> for HandCard {
    fn from(card: Card) -> Self {
        HandCard::Natural(card)
    }
}

impl fmt::Display for HandCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCard::Natural(card) => write!(f, "{card}"),
            HandCard::Wild => write!(f, "*"),
        }
    }
}

impl FromStr for HandCard {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "*" {
            Ok(HandCard::Wild)
        } else {
            s.parse::<Card>().map(HandCard::Natural)
        }
    }
}

/// Parses a whitespace separated list of cards, e.g. `"As Kd 7c"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EngineError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Like [`parse_cards`] but also accepts `*` for wild cards.
pub fn parse_hand_cards(s: &str) -> Result<Vec<HandCard>, EngineError> {
    s.split_whitespace().map(str::parse).collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 cards ordered by deck id.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
