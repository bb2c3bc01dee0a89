//! Card-related types for the poker seat view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card face values, ace low (0=Ace, 1=Two, ..., 12=King)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl CardFace {
    /// Short face symbol (A, 2, 3, ..., K)
    pub fn symbol(self) -> &'static str {
        match self {
            CardFace::Ace => "A",
            CardFace::Two => "2",
            CardFace::Three => "3",
            CardFace::Four => "4",
            CardFace::Five => "5",
            CardFace::Six => "6",
            CardFace::Seven => "7",
            CardFace::Eight => "8",
            CardFace::Nine => "9",
            CardFace::Ten => "T",
            CardFace::Jack => "J",
            CardFace::Queen => "Q",
            CardFace::King => "K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardFace::Ace => "Ace",
            CardFace::Two => "Two",
            CardFace::Three => "Three",
            CardFace::Four => "Four",
            CardFace::Five => "Five",
            CardFace::Six => "Six",
            CardFace::Seven => "Seven",
            CardFace::Eight => "Eight",
            CardFace::Nine => "Nine",
            CardFace::Ten => "Ten",
            CardFace::Jack => "Jack",
            CardFace::Queen => "Queen",
            CardFace::King => "King",
        }
    }
}

/// Card suit values (0=Clubs, 1=Diamonds, 2=Hearts, 3=Spades)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSuit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl CardSuit {
    /// Suit as a character (♣, ♦, ♥, ♠)
    pub fn symbol(self) -> char {
        match self {
            CardSuit::Clubs => '♣',
            CardSuit::Diamonds => '♦',
            CardSuit::Hearts => '♥',
            CardSuit::Spades => '♠',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardSuit::Clubs => "Clubs",
            CardSuit::Diamonds => "Diamonds",
            CardSuit::Hearts => "Hearts",
            CardSuit::Spades => "Spades",
        }
    }
}

/// A playing card as a `(face, suit)` pair. Two cards are equal when both
/// fields match.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card(pub CardFace, pub CardSuit);

/// A seat holder's pocket cards, in the order they were dealt.
pub type Cards = Vec<Card>;

impl Card {
    pub fn new(face: CardFace, suit: CardSuit) -> Self {
        Card(face, suit)
    }

    pub fn face(self) -> CardFace {
        self.0
    }

    pub fn suit(self) -> CardSuit {
        self.1
    }

    /// Stable identity used as a widget key: `<face><suit>`, e.g. `AceSpades`.
    pub fn key(self) -> String {
        format!("{:?}{:?}", self.0, self.1)
    }

    /// Long name like "Ace of Spades"
    pub fn long_name(self) -> String {
        format!("{} of {}", self.0.name(), self.1.name())
    }

    /// Check if this is a red suit (hearts or diamonds)
    pub fn is_red(self) -> bool {
        matches!(self.1, CardSuit::Hearts | CardSuit::Diamonds)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.symbol(), self.1.symbol())
    }
}
