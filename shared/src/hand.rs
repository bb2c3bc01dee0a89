//! Hand types produced by the external hand evaluator.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Categories of poker hands, ordered from weakest to strongest
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandRankCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeKind,
    Straight,
    Flush,
    FullHouse,
    FourKind,
    StraightFlush,
}

impl HandRankCategory {
    pub fn to_str(&self) -> &'static str {
        match self {
            HandRankCategory::HighCard => "High Card",
            HandRankCategory::Pair => "Pair",
            HandRankCategory::TwoPair => "Two Pair",
            HandRankCategory::ThreeKind => "Three of a Kind",
            HandRankCategory::Straight => "Straight",
            HandRankCategory::Flush => "Flush",
            HandRankCategory::FullHouse => "Full House",
            HandRankCategory::FourKind => "Four of a Kind",
            HandRankCategory::StraightFlush => "Straight Flush",
        }
    }
}

/// Best hand for one seat, computed elsewhere from the seat's pocket cards
/// and the board.
///
/// `rank_cards` are the cards that decide the category; the seat view only
/// tests pocket cards for membership in it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hand {
    pub category: HandRankCategory,
    pub rank_cards: Vec<Card>,
    #[serde(default)]
    pub kicker_cards: Vec<Card>,
}

impl Hand {
    pub fn new(category: HandRankCategory, rank_cards: Vec<Card>) -> Self {
        Self {
            category,
            rank_cards,
            kicker_cards: Vec::new(),
        }
    }

    pub fn with_kickers(mut self, kicker_cards: Vec<Card>) -> Self {
        self.kicker_cards = kicker_cards;
        self
    }
}
