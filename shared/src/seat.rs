//! Seat and occupant types.

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a seat at a table. Always present, even for
/// unoccupied seats, and used as the last path segment of the join link.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SeatToken(pub String);

impl From<&str> for SeatToken {
    fn from(v: &str) -> Self {
        SeatToken(v.to_string())
    }
}

impl From<String> for SeatToken {
    fn from(v: String) -> Self {
        SeatToken(v)
    }
}

impl SeatToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeatToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whoever is sitting in a seat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub display_name: String,
}

/// Reads a chip count from any JSON number. The table sends plain numbers,
/// so fractions are rounded down, negatives and non-finite values become 0
/// and anything past `u32::MAX` saturates.
fn lenient_chips<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = f64::deserialize(deserializer)?;
    if !n.is_finite() || n <= 0.0 {
        return Ok(0);
    }
    Ok(n.floor().min(u32::MAX as f64) as u32)
}

/// One position at the table. `player` is `None` while the seat is free.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub token: SeatToken,
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default, deserialize_with = "lenient_chips")]
    pub chip_count: u32,
    #[serde(default, deserialize_with = "lenient_chips")]
    pub chips_bet_count: u32,
}

impl Seat {
    /// An unoccupied seat with no chips.
    pub fn empty(token: impl Into<SeatToken>) -> Self {
        Self {
            token: token.into(),
            player: None,
            chip_count: 0,
            chips_bet_count: 0,
        }
    }

    /// An occupied seat holding `chip_count` chips and nothing wagered yet.
    pub fn occupied(token: impl Into<SeatToken>, display_name: &str, chip_count: u32) -> Self {
        Self {
            token: token.into(),
            player: Some(Player {
                display_name: display_name.to_string(),
            }),
            chip_count,
            chips_bet_count: 0,
        }
    }
}
