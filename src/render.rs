//! egui drawing for seat plans.

use egui::{Button, Color32, RichText, Stroke, Ui};
use seat_shared::Card;

use crate::classifier::{Background, BetControls, Border, SeatBlock, SeatFrame, EMPTY_CAPTION};
use crate::highlight::PocketCardsView;
use crate::theme::*;
use crate::view::{SeatActions, SeatButton, SeatView};

/// Draw `view` and route button clicks to `actions`.
pub fn render_seat(ui: &mut Ui, view: &mut SeatView, colors: &SeatColors, actions: &mut dyn SeatActions) {
    // Clicks rebuild the plan, so draw from a snapshot of it.
    let plan = view.plan().clone();
    let token = view.token().clone();
    ui.push_id(token.as_str(), |ui| {
        container(&plan.frame, colors).show(ui, |ui| {
            ui.set_min_width(SEAT_MIN_WIDTH);
            ui.vertical(|ui| {
                for block in &plan.blocks {
                    render_block(ui, block, view, colors, actions);
                    ui.add_space(MARGIN_SM);
                }
            });
        });
    });
}

fn container(frame: &SeatFrame, colors: &SeatColors) -> egui::Frame {
    let stroke = match frame.border {
        Border::TurnAccent => Stroke::new(BORDER_TURN_WIDTH, colors.current_turn_accent),
        Border::Keyline => Stroke::new(BORDER_KEYLINE_WIDTH, colors.keyline),
        Border::Transparent => Stroke::new(BORDER_KEYLINE_WIDTH, Color32::TRANSPARENT),
    };
    let fill = match frame.background {
        Background::Player => colors.player_seat_background,
        Background::Opponent => colors.opponent_seat_background,
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .inner_margin(egui::Margin::same(SEAT_INNER_MARGIN))
        .outer_margin(egui::Margin::same(SEAT_OUTER_MARGIN))
}

fn render_block(
    ui: &mut Ui,
    block: &SeatBlock,
    view: &mut SeatView,
    colors: &SeatColors,
    actions: &mut dyn SeatActions,
) {
    match block {
        SeatBlock::Empty { invite_url } => {
            ui.label(EMPTY_CAPTION);
            ui.hyperlink(invite_url);
        }
        SeatBlock::DisplayName(name) => {
            ui.label(RichText::new(name).size(FONT_SIZE_NAME).strong());
        }
        SeatBlock::BetControls(controls) => {
            render_bet_controls(ui, controls, view, colors, actions);
        }
        SeatBlock::BetStack(chips) => {
            ui.vertical_centered(|ui| {
                ui.monospace(format!("bet: {}", chips));
            });
        }
        SeatBlock::ChipStack(chips) => {
            ui.add_space(MARGIN_XL);
            ui.vertical_centered(|ui| {
                ui.monospace(format!("stack: {}", chips));
            });
        }
        SeatBlock::PocketCards(pocket) => render_pocket_cards(ui, pocket, colors),
        SeatBlock::DealerMarker => {
            ui.label("Dealer ✋");
        }
        SeatBlock::Status(status) => {
            ui.label(format!("{} {}", status.text(), status.glyph()));
        }
        SeatBlock::DealAction => {
            ui.add_space(MARGIN_MD);
            if ui.button(SeatButton::Deal.label()).clicked() {
                view.press(SeatButton::Deal, actions);
            }
        }
    }
}

fn render_bet_controls(
    ui: &mut Ui,
    controls: &BetControls,
    view: &mut SeatView,
    colors: &SeatColors,
    actions: &mut dyn SeatActions,
) {
    ui.horizontal(|ui| {
        ui.label("Bet:");
        let mut text = controls.text.clone();
        let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(BET_INPUT_WIDTH));
        if response.changed() {
            view.set_bet_text(text);
        }
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        // Enablement is read from the view so an edit made this frame counts.
        let bet_clicked = ui
            .add_enabled(view.is_enabled(SeatButton::Bet), Button::new(SeatButton::Bet.label()))
            .clicked();
        if bet_clicked || (enter && view.is_enabled(SeatButton::Bet)) {
            view.press(SeatButton::Bet, actions);
        }
        for button in SeatButton::BETTING_ROW {
            if ui.button(button.label()).clicked() {
                view.press(button, actions);
            }
        }
    });
    if let Some(error) = &controls.error {
        ui.colored_label(colors.error, error);
    }
}

fn render_pocket_cards(ui: &mut Ui, pocket: &PocketCardsView, colors: &SeatColors) {
    ui.horizontal(|ui| {
        for card in &pocket.cards {
            ui.push_id(card.card.key(), |ui| {
                card_chip(ui, card.card, card.highlight, colors);
            });
        }
    });
    if let Some(description) = &pocket.description {
        ui.label(description);
    }
}

pub fn card_chip(ui: &mut Ui, card: Card, highlight: bool, colors: &SeatColors) {
    let color = if card.is_red() {
        colors.red_suit
    } else {
        colors.black_suit
    };
    let mut button = Button::new(RichText::new(card.to_string()).color(color).size(FONT_SIZE_CARD))
        .min_size(egui::vec2(48.0, 40.0));
    if highlight {
        button = button.stroke(Stroke::new(BORDER_TURN_WIDTH, colors.card_highlight));
    }
    ui.add(button).on_hover_text(card.long_name());
}
