//! Layout engine for a card game table.  Computes deterministic normalized
//! positions for a full deck, either stacked at the center or dealt out to
//! seats around the table, and projects them into pixel space for whatever
//! renderer sits on top.

pub mod cards;
pub mod constants;
pub mod decks;
pub mod layout;
pub mod positions;
pub mod projection;
pub mod table;

pub use cards::{Card, Rank, Suit};
pub use positions::{CardPosition, Percentage, PositionMap};
pub use projection::{to_pixels, PixelPosition};
pub use table::{CardTable, GamePhase};
