//! Per-seat game flags and the actions a seat can send upward.

use serde::{Deserialize, Serialize};

/// Flags decided by the table for one seat. The seat view never derives
/// these itself; it only renders them.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SeatFlags {
    pub is_current_user: bool,
    pub is_turn: bool,
    pub is_folded: bool,
    pub is_bust: bool,
    pub is_dealer: bool,
    pub can_deal: bool,
    pub can_bet: bool,
}

/// User intents forwarded from a seat to whoever hosts the table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "amount")]
pub enum SeatAction {
    Deal,
    Bet(f64),
    Check,
    Call,
    Fold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_false_when_omitted() {
        let flags: SeatFlags = serde_json::from_str(r#"{"canBet":true}"#).unwrap();
        assert!(flags.can_bet);
        assert_eq!(
            flags,
            SeatFlags {
                can_bet: true,
                ..SeatFlags::default()
            }
        );
    }

    #[test]
    fn bet_action_carries_amount() {
        let json = serde_json::to_string(&SeatAction::Bet(50.0)).unwrap();
        assert_eq!(json, r#"{"type":"Bet","amount":50.0}"#);
        let fold = serde_json::to_string(&SeatAction::Fold).unwrap();
        assert_eq!(fold, r#"{"type":"Fold"}"#);
    }
}
