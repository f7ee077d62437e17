//! Text rendering of cards, hands and the board.
//!
//! The board is drawn top to bottom as opponent rows, the title row, then own
//! rows. Every card cell is seven visible characters wide.

use std::io::{self, Write};

use tracing::trace;

use super::ansi::{color_text, BG_BLUE, BG_GREEN, BG_WHITE, BLACK, BLUE, GREEN, RESET, WHITE};
use crate::board::theater_order;
use crate::cards::{Card, Hand, Theater};
use crate::core::{GameState, RowOrder, Side};

const BLANK_CELL: &str = "       ";
const CELL_GAP: &str = "   ";
const TITLE_GAP: &str = "  ";

fn theater_fg(theater: Theater) -> &'static str {
    match theater {
        Theater::Air => WHITE,
        Theater::Land => GREEN,
        Theater::Sea => BLUE,
    }
}

fn theater_bg(theater: Theater) -> &'static str {
    match theater {
        Theater::Air => BG_WHITE,
        Theater::Land => BG_GREEN,
        Theater::Sea => BG_BLUE,
    }
}

/// Coloured card text, e.g. green `↑-Lnd-1`.
///
/// Face-down cards always render as an uncoloured `↓-???-?`, whatever their
/// theater and rank bits hold.
#[must_use]
pub fn format_card(card: Card) -> String {
    let color = if card.is_face_up() {
        card.theater().map(theater_fg).unwrap_or("")
    } else {
        ""
    };
    format!("{color}{card}{RESET}")
}

/// Coloured title block for a theater, e.g. `   AIR   ` on white.
#[must_use]
pub fn theater_title(theater: Theater) -> String {
    color_text(&format!("   {}   ", theater.label()), BLACK, theater_bg(theater))
}

/// Title row in display order for the state's middle theater.
#[must_use]
pub fn render_titles(state: &GameState) -> String {
    theater_order(state.middle_theater)
        .iter()
        .map(|&theater| theater_title(theater) + TITLE_GAP)
        .collect()
}

fn column_order(state: &GameState, row_order: RowOrder) -> [Theater; 3] {
    match row_order {
        RowOrder::Board => Theater::ALL,
        RowOrder::Display => theater_order(state.middle_theater),
    }
}

/// One line per row depth for a side, sized by its deepest stack.
#[must_use]
pub fn render_rows(state: &GameState, side: Side, row_order: RowOrder) -> Vec<String> {
    let columns = column_order(state, row_order);
    let depth = state.max_depth(side);
    trace!(?side, depth, "rendering rows");

    (0..depth)
        .map(|row| {
            let cells: Vec<String> = columns
                .iter()
                .map(|&theater| match state.stack(side, theater).get(row) {
                    Some(card) => format_card(card),
                    None => BLANK_CELL.to_string(),
                })
                .collect();
            format!(" {}", cells.join(CELL_GAP))
        })
        .collect()
}

/// Full board: opponent rows, title row, own rows.
#[must_use]
pub fn render_board(state: &GameState, row_order: RowOrder) -> String {
    let mut lines = render_rows(state, Side::Opponent, row_order);
    lines.push(render_titles(state));
    lines.extend(render_rows(state, Side::Own, row_order));
    lines.join("\n")
}

/// Write the board to `out`, followed by a newline.
pub fn print_board(state: &GameState, row_order: RowOrder, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", render_board(state, row_order))
}

/// Cards in a hand, space separated, in identity order.
#[must_use]
pub fn render_hand(hand: Hand) -> String {
    hand.cards().map(format_card).collect::<Vec<_>>().join(" ")
}
