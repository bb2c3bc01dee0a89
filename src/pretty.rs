//! Plain-text rendering of seat plans for terminals.

use owo_colors::OwoColorize;
use seat_shared::{Card, SeatToken};

use crate::classifier::{Border, SeatBlock, SeatPlan, EMPTY_CAPTION};
use crate::highlight::PocketCardsView;
use crate::view::SeatButton;

fn format_card(card: Card, highlight: bool, color: bool) -> String {
    let text = card.to_string();
    if !color {
        return if highlight { format!("[{}]", text) } else { text };
    }
    let text = if card.is_red() {
        text.red().to_string()
    } else {
        text
    };
    if highlight {
        text.bold().underline().to_string()
    } else {
        text
    }
}

fn format_pocket_cards(pocket: &PocketCardsView, color: bool) -> String {
    let cards = pocket
        .cards
        .iter()
        .map(|c| format_card(c.card, c.highlight, color))
        .collect::<Vec<_>>()
        .join(" ");
    match &pocket.description {
        Some(description) => format!("{}  {}", cards, description),
        None => cards,
    }
}

fn format_block(block: &SeatBlock, color: bool) -> String {
    match block {
        SeatBlock::Empty { invite_url } => format!("{} {}", EMPTY_CAPTION, invite_url),
        SeatBlock::DisplayName(name) => {
            if color {
                name.bold().to_string()
            } else {
                name.clone()
            }
        }
        SeatBlock::BetControls(controls) => {
            let bet = SeatButton::Bet.label();
            let bet = if controls.bet_enabled {
                format!("[{}]", bet)
            } else {
                format!("({})", bet)
            };
            let row = SeatButton::BETTING_ROW
                .iter()
                .map(|b| format!("[{}]", b.label()))
                .collect::<Vec<_>>()
                .join(" ");
            let mut line = format!("Bet: \"{}\" {} {}", controls.text, bet, row);
            if let Some(error) = &controls.error {
                let error = if color {
                    error.red().to_string()
                } else {
                    error.clone()
                };
                line.push_str(&format!(" ! {}", error));
            }
            line
        }
        SeatBlock::BetStack(chips) => format!("bet: {}", chips),
        SeatBlock::ChipStack(chips) => format!("stack: {}", chips),
        SeatBlock::PocketCards(pocket) => format_pocket_cards(pocket, color),
        SeatBlock::DealerMarker => "Dealer ✋".to_string(),
        SeatBlock::Status(status) => {
            let text = format!("{} {}", status.text(), status.glyph());
            if color {
                text.dimmed().to_string()
            } else {
                text
            }
        }
        SeatBlock::DealAction => format!("[{}]", SeatButton::Deal.label()),
    }
}

/// One header line for the seat, then one indented line per block.
pub fn format_plan(token: &SeatToken, plan: &SeatPlan, color: bool) -> String {
    let marker = match plan.frame.border {
        Border::TurnAccent => "●",
        Border::Keyline => "○",
        Border::Transparent => " ",
    };
    let marker = if color && plan.frame.border == Border::TurnAccent {
        marker.yellow().to_string()
    } else {
        marker.to_string()
    };
    let mut out = format!("{} seat {}\n", marker, token);
    for block in &plan.blocks {
        out.push_str("    ");
        out.push_str(&format_block(block, color));
        out.push('\n');
    }
    out
}
