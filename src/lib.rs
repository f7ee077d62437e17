//! # als-board
//!
//! Card, hand and board model for a two-player Air/Land/Sea style card game.
//!
//! ## Design Principles
//!
//! 1. **Compact values**: a card is six bits in a byte, a hand is an 18-bit
//!    set over the eighteen card identities.
//!
//! 2. **Invalid states are unconstructible**: theaters and the middle-theater
//!    designator are closed enums; raw values are checked where they enter.
//!
//! 3. **Injected randomness**: dealing takes a `RandomSource`, so a seed (or a
//!    scripted source in tests) reproduces a setup exactly.
//!
//! ## Data Flow
//!
//! Codec and Hand Selector build a `GameState`; the renderer reads it.
//! Nothing flows back from rendering into state.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, setup configuration, game state
//! - `cards`: theaters, card codec, hands
//! - `board`: theater stacks and theater display order
//! - `render`: ANSI colour and board/hand text

pub mod board;
pub mod cards;
pub mod core;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    BarricadeSupport, BoardError, GameRng, GameState, MiddleTheater, RandomSource, Result,
    RowOrder, SetupConfig, Side,
};

pub use crate::cards::{random_hand, Card, Hand, Theater};

pub use crate::board::{theater_order, theater_order_from_bits, TheaterStack};

pub use crate::render::{format_card, print_board, render_board, render_hand};
