//! Terminal rendering.
//!
//! - `ansi`: escape-code table and `color_text`
//! - `board`: cards, hands, the title row and the full board

pub mod ansi;
pub mod board;

pub use board::{
    format_card, print_board, render_board, render_hand, render_rows, render_titles,
    theater_title,
};
