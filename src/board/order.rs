//! Left-to-right display order of the theaters.
//!
//! | designator | order            |
//! |------------|------------------|
//! | Land (01)  | Land, Air, Sea   |
//! | Sea (10)   | Air, Land, Sea   |
//! | otherwise  | Air, Sea, Land   |

use crate::cards::Theater;
use crate::core::config::MiddleTheater;

/// Display order for a middle-theater designator.
#[must_use]
pub fn theater_order(middle: MiddleTheater) -> [Theater; 3] {
    match middle {
        MiddleTheater::Land => [Theater::Land, Theater::Air, Theater::Sea],
        MiddleTheater::Sea => [Theater::Air, Theater::Land, Theater::Sea],
        MiddleTheater::None => [Theater::Air, Theater::Sea, Theater::Land],
    }
}

/// Display order for a raw two-bit designator.
///
/// Total over every byte: only the low two bits are read, and the unused
/// value 3 falls back to the same order as 0.
#[must_use]
pub fn theater_order_from_bits(bits: u8) -> [Theater; 3] {
    theater_order(MiddleTheater::from_bits(bits))
}
