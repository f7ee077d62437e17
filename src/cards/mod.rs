//! Card model: theaters, the bit-packed card codec, and hands.
//!
//! ## Key Types
//!
//! - `Theater`: closed Air/Land/Sea enumeration
//! - `Card`: six-bit face/theater/rank value in one byte
//! - `Hand`: set over the eighteen card identities, plus the Hand Selector

pub mod card;
pub mod hand;
pub mod theater;

pub use card::Card;
pub use hand::{random_hand, Hand};
pub use theater::Theater;
