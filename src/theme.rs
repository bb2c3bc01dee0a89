use egui::Color32;

pub const MARGIN_SM: f32 = 4.0;
pub const MARGIN_MD: f32 = 8.0;
pub const MARGIN_XL: f32 = 40.0;

pub const FONT_SIZE_NAME: f32 = 40.0;
pub const FONT_SIZE_CARD: f32 = 28.0;

pub const SEAT_MIN_WIDTH: f32 = 260.0;
pub const BET_INPUT_WIDTH: f32 = 80.0;

pub const BORDER_TURN_WIDTH: f32 = 2.0;
pub const BORDER_KEYLINE_WIDTH: f32 = 1.0;

pub const SEAT_INNER_MARGIN: i8 = 16;
pub const SEAT_OUTER_MARGIN: i8 = 16;

/// Seat colors. Defaults follow the dark egui visuals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatColors {
    pub current_turn_accent: Color32,
    pub keyline: Color32,
    pub player_seat_background: Color32,
    pub opponent_seat_background: Color32,
    pub card_highlight: Color32,
    pub red_suit: Color32,
    pub black_suit: Color32,
    pub error: Color32,
}

impl Default for SeatColors {
    fn default() -> Self {
        Self {
            current_turn_accent: Color32::from_rgb(255, 215, 0),
            keyline: Color32::from_rgb(120, 160, 220),
            player_seat_background: Color32::from_rgb(30, 60, 40),
            opponent_seat_background: Color32::from_rgb(35, 35, 40),
            card_highlight: Color32::from_rgb(240, 200, 80),
            red_suit: Color32::from_rgb(220, 50, 50),
            black_suit: Color32::WHITE,
            error: Color32::LIGHT_RED,
        }
    }
}
