//! Table messages that feed seat data into the view.

use serde::{Deserialize, Serialize};

use crate::cards::Cards;
use crate::game::SeatFlags;
use crate::hand::Hand;
use crate::seat::{Seat, SeatToken};

/// Everything the table knows about one seat at a given moment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeatSnapshot {
    pub seat: Seat,
    #[serde(default)]
    pub flags: SeatFlags,
    #[serde(default)]
    pub hand: Option<Hand>,
    #[serde(default)]
    pub pocket_cards: Option<Cards>,
}

impl SeatSnapshot {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            flags: SeatFlags::default(),
            hand: None,
            pocket_cards: None,
        }
    }

    pub fn token(&self) -> &SeatToken {
        &self.seat.token
    }
}

/// Messages the table sends to the client. Partial updates address a seat
/// by token; `Table` replaces everything.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum TableMsg {
    Table {
        name: String,
        seats: Vec<SeatSnapshot>,
    },
    Seat(SeatSnapshot),
    Flags {
        token: SeatToken,
        flags: SeatFlags,
    },
    PocketCards {
        token: SeatToken,
        cards: Option<Cards>,
    },
    Hand {
        token: SeatToken,
        hand: Option<Hand>,
    },
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardFace, CardSuit};

    #[test]
    fn table_message_parses_from_json() {
        let json = r#"{
            "type": "Table",
            "data": {
                "name": "river-7",
                "seats": [
                    { "seat": { "token": "a" } },
                    {
                        "seat": { "token": "b", "player": { "displayName": "Bo" }, "chipCount": 500 },
                        "flags": { "isDealer": true },
                        "pocketCards": [["Ace", "Spades"], ["King", "Hearts"]]
                    }
                ]
            }
        }"#;
        let msg: TableMsg = serde_json::from_str(json).unwrap();
        let TableMsg::Table { name, seats } = msg else {
            panic!("expected a table message");
        };
        assert_eq!(name, "river-7");
        assert_eq!(seats.len(), 2);
        assert!(seats[0].pocket_cards.is_none());
        assert!(seats[1].flags.is_dealer);
        assert_eq!(
            seats[1].pocket_cards.as_deref(),
            Some(
                &[
                    Card::new(CardFace::Ace, CardSuit::Spades),
                    Card::new(CardFace::King, CardSuit::Hearts)
                ][..]
            )
        );
    }
}
