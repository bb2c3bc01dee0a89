//! Shared types for the poker seat view.
//!
//! Everything in here travels over the table message layer as JSON, so every
//! type derives `Serialize`/`Deserialize`. Rendering decisions live in the
//! `seat-view` crate.

pub mod cards;
pub mod game;
pub mod hand;
pub mod messages;
pub mod seat;

pub use cards::{Card, CardFace, CardSuit, Cards};
pub use game::{SeatAction, SeatFlags};
pub use hand::{Hand, HandRankCategory};
pub use messages::{SeatSnapshot, TableMsg};
pub use seat::{Player, Seat, SeatToken};
