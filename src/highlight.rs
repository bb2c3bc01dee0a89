//! Pocket-card highlighting against a seat's best hand.
//!
//! Hand ranking and card identity belong to the evaluator, so this module
//! only sees them through [`CardEquality`] and [`HandDescriber`].

use seat_shared::{Card, Hand};

/// Card-identity predicate supplied by the hand evaluator.
pub trait CardEquality {
    fn equal_cards(&self, a: &Card, b: &Card) -> bool;
}

/// Turns a hand into ordered, human-readable description fields.
pub trait HandDescriber {
    fn describe_hand(&self, hand: &Hand) -> Vec<String>;
}

impl<F> CardEquality for F
where
    F: Fn(&Card, &Card) -> bool,
{
    fn equal_cards(&self, a: &Card, b: &Card) -> bool {
        self(a, b)
    }
}

impl<F> HandDescriber for F
where
    F: Fn(&Hand) -> Vec<String>,
{
    fn describe_hand(&self, hand: &Hand) -> Vec<String> {
        self(hand)
    }
}

/// Face-and-suit equality.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueEquality;

impl CardEquality for ValueEquality {
    fn equal_cards(&self, a: &Card, b: &Card) -> bool {
        a == b
    }
}

/// Describes a hand as `[category, rank cards, kickers]`; the kicker field is
/// left out when there are none.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryDescriber;

impl HandDescriber for CategoryDescriber {
    fn describe_hand(&self, hand: &Hand) -> Vec<String> {
        let mut fields = vec![hand.category.to_str().to_string()];
        if !hand.rank_cards.is_empty() {
            fields.push(join_cards(&hand.rank_cards));
        }
        if !hand.kicker_cards.is_empty() {
            fields.push(format!("kickers {}", join_cards(&hand.kicker_cards)));
        }
        fields
    }
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightedCard {
    pub card: Card,
    pub highlight: bool,
}

/// Pocket cards in deal order plus the joined hand description, if a hand
/// has been computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PocketCardsView {
    pub cards: Vec<HighlightedCard>,
    pub description: Option<String>,
}

impl PocketCardsView {
    pub fn highlighted(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.highlight).map(|c| &c.card)
    }
}

/// Flag each pocket card that also appears among `hand.rank_cards`.
///
/// Without a hand the cards are still listed, none highlighted and with no
/// description.
pub fn highlight_pocket_cards(
    pocket_cards: &[Card],
    hand: Option<&Hand>,
    equality: &dyn CardEquality,
    describer: &dyn HandDescriber,
) -> PocketCardsView {
    let cards = pocket_cards
        .iter()
        .map(|&card| HighlightedCard {
            card,
            highlight: hand.is_some_and(|h| {
                h.rank_cards
                    .iter()
                    .any(|rank_card| equality.equal_cards(rank_card, &card))
            }),
        })
        .collect();

    let description = hand.map(|h| describer.describe_hand(h).join(", "));

    PocketCardsView { cards, description }
}
