//! Seat classification: which blocks a seat shows, in what order, and how
//! its container is highlighted.

use seat_shared::{Seat, SeatFlags};

use crate::bet_input::BetInput;
use crate::highlight::PocketCardsView;
use crate::invite::{invite_url, Origin};

/// Container border treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    /// The seat whose turn it is. Wins over [`Border::Keyline`].
    TurnAccent,
    /// The local player's own seat.
    Keyline,
    Transparent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Player,
    Opponent,
}

/// How the seat container is drawn. Driven only by `is_current_user` and
/// `is_turn`; neither flag changes which blocks appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatFrame {
    pub border: Border,
    pub background: Background,
}

impl SeatFrame {
    pub fn from_flags(flags: &SeatFlags) -> Self {
        let border = if flags.is_turn {
            Border::TurnAccent
        } else if flags.is_current_user {
            Border::Keyline
        } else {
            Border::Transparent
        };
        let background = if flags.is_current_user {
            Background::Player
        } else {
            Background::Opponent
        };
        Self { border, background }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatStatus {
    Bust,
    Folded,
}

impl SeatStatus {
    /// Bust takes priority over folded.
    pub fn from_flags(flags: &SeatFlags) -> Option<Self> {
        if flags.is_bust {
            Some(SeatStatus::Bust)
        } else if flags.is_folded {
            Some(SeatStatus::Folded)
        } else {
            None
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            SeatStatus::Bust => "Out of the game",
            SeatStatus::Folded => "Folded",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SeatStatus::Bust => "😵",
            SeatStatus::Folded => "🏳",
        }
    }
}

/// State of the betting row. Check, Call and Fold are always enabled while
/// the row is visible; only Bet depends on the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BetControls {
    pub text: String,
    pub bet_enabled: bool,
    pub error: Option<String>,
}

impl BetControls {
    fn from_input(input: &BetInput) -> Self {
        Self {
            text: input.text().to_string(),
            bet_enabled: input.can_submit(),
            error: input.error().map(|e| e.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeatBlock {
    /// Unoccupied seat: caption plus the join link. Never combined with any
    /// other block.
    Empty { invite_url: String },
    DisplayName(String),
    BetControls(BetControls),
    /// Chips wagered this round.
    BetStack(u32),
    /// Chips the seat holds.
    ChipStack(u32),
    PocketCards(PocketCardsView),
    DealerMarker,
    Status(SeatStatus),
    DealAction,
}

/// Discriminant of [`SeatBlock`], handy for comparing block order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Empty,
    DisplayName,
    BetControls,
    BetStack,
    ChipStack,
    PocketCards,
    DealerMarker,
    Status,
    DealAction,
}

impl SeatBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            SeatBlock::Empty { .. } => BlockKind::Empty,
            SeatBlock::DisplayName(_) => BlockKind::DisplayName,
            SeatBlock::BetControls(_) => BlockKind::BetControls,
            SeatBlock::BetStack(_) => BlockKind::BetStack,
            SeatBlock::ChipStack(_) => BlockKind::ChipStack,
            SeatBlock::PocketCards(_) => BlockKind::PocketCards,
            SeatBlock::DealerMarker => BlockKind::DealerMarker,
            SeatBlock::Status(_) => BlockKind::Status,
            SeatBlock::DealAction => BlockKind::DealAction,
        }
    }
}

/// Everything needed to draw one seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatPlan {
    pub frame: SeatFrame,
    pub blocks: Vec<SeatBlock>,
}

impl SeatPlan {
    pub fn kinds(&self) -> Vec<BlockKind> {
        self.blocks.iter().map(SeatBlock::kind).collect()
    }

    pub fn has(&self, kind: BlockKind) -> bool {
        self.blocks.iter().any(|b| b.kind() == kind)
    }

    pub fn is_empty_seat(&self) -> bool {
        matches!(self.blocks.as_slice(), [SeatBlock::Empty { .. }])
    }

    pub fn status(&self) -> Option<SeatStatus> {
        self.blocks.iter().find_map(|b| match b {
            SeatBlock::Status(s) => Some(*s),
            _ => None,
        })
    }

    pub fn pocket_cards(&self) -> Option<&PocketCardsView> {
        self.blocks.iter().find_map(|b| match b {
            SeatBlock::PocketCards(view) => Some(view),
            _ => None,
        })
    }

    pub fn bet_controls(&self) -> Option<&BetControls> {
        self.blocks.iter().find_map(|b| match b {
            SeatBlock::BetControls(controls) => Some(controls),
            _ => None,
        })
    }
}

/// Inputs to [`classify`]. Pocket cards arrive already highlighted.
pub struct ClassifyInput<'a> {
    pub origin: &'a Origin,
    pub table_name: &'a str,
    pub seat: &'a Seat,
    pub flags: SeatFlags,
    pub pocket_cards: Option<PocketCardsView>,
    pub bet_input: &'a BetInput,
}

/// Caption shown for free seats and for players without a display name.
pub const EMPTY_CAPTION: &str = "Empty";

pub fn classify(input: ClassifyInput<'_>) -> SeatPlan {
    let frame = SeatFrame::from_flags(&input.flags);

    let Some(player) = &input.seat.player else {
        return SeatPlan {
            frame,
            blocks: vec![SeatBlock::Empty {
                invite_url: invite_url(input.origin, input.table_name, &input.seat.token),
            }],
        };
    };

    let flags = input.flags;
    let mut blocks = Vec::with_capacity(8);

    let name = if player.display_name.is_empty() {
        EMPTY_CAPTION.to_string()
    } else {
        player.display_name.clone()
    };
    blocks.push(SeatBlock::DisplayName(name));

    if flags.can_bet {
        blocks.push(SeatBlock::BetControls(BetControls::from_input(
            input.bet_input,
        )));
    }

    blocks.push(SeatBlock::BetStack(input.seat.chips_bet_count));
    blocks.push(SeatBlock::ChipStack(input.seat.chip_count));

    if let Some(view) = input.pocket_cards {
        blocks.push(SeatBlock::PocketCards(view));
    }

    if flags.is_dealer {
        blocks.push(SeatBlock::DealerMarker);
    }

    if let Some(status) = SeatStatus::from_flags(&flags) {
        blocks.push(SeatBlock::Status(status));
    }

    if flags.can_deal {
        blocks.push(SeatBlock::DealAction);
    }

    SeatPlan { frame, blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_border_wins_over_current_user() {
        let flags = SeatFlags {
            is_current_user: true,
            is_turn: true,
            ..SeatFlags::default()
        };
        let frame = SeatFrame::from_flags(&flags);
        assert_eq!(frame.border, Border::TurnAccent);
        assert_eq!(frame.background, Background::Player);
    }

    #[test]
    fn opponent_without_turn_is_transparent() {
        let frame = SeatFrame::from_flags(&SeatFlags::default());
        assert_eq!(frame.border, Border::Transparent);
        assert_eq!(frame.background, Background::Opponent);
    }

    #[test]
    fn blank_display_name_falls_back_to_caption() {
        let origin = Origin::default();
        let seat = Seat::occupied("t", "", 10);
        let bet_input = BetInput::new();
        let plan = classify(ClassifyInput {
            origin: &origin,
            table_name: "t",
            seat: &seat,
            flags: SeatFlags::default(),
            pocket_cards: None,
            bet_input: &bet_input,
        });
        assert_eq!(plan.blocks[0], SeatBlock::DisplayName("Empty".into()));
    }
}
