//! Poker seat view: turns per-seat flags, cards and hand data into a render
//! plan, owns the bet input, and forwards seat actions to the table.

pub mod app;
pub mod bet_input;
pub mod classifier;
pub mod highlight;
pub mod invite;
pub mod render;
pub mod store;
pub mod theme;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod pretty;

#[cfg(target_arch = "wasm32")]
mod web;

pub use bet_input::{BetAmount, BetError, BetInput};
pub use classifier::{classify, SeatBlock, SeatPlan};
pub use invite::{invite_url, Origin};
pub use store::TableStore;
pub use view::{SeatActions, SeatButton, SeatProps, SeatView};
