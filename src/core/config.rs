//! Setup configuration.
//!
//! A game is configured by one piece of text: the two-character binary
//! middle-theater designator (`"00"`, `"01"` or `"10"`). `SetupConfig`
//! bundles it with the optional deal seed and the board row order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{BoardError, Result};

/// Which theater, if any, is the middle theater.
///
/// The raw two-bit value 3 has no variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MiddleTheater {
    /// `00`: no middle theater.
    #[default]
    None,
    /// `01`
    Land,
    /// `10`
    Sea,
}

impl MiddleTheater {
    /// Parse the two-character binary designator.
    ///
    /// ```
    /// use als_board::core::MiddleTheater;
    ///
    /// assert_eq!(MiddleTheater::parse("10").unwrap(), MiddleTheater::Sea);
    /// assert!(MiddleTheater::parse("11").is_err());
    /// assert!(MiddleTheater::parse("2").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.as_bytes();
        if digits.len() != 2 {
            return Err(BoardError::configuration(
                input,
                format!("expected 2 binary digits, got {} characters", input.chars().count()),
            ));
        }

        let mut bits = 0u8;
        for &digit in digits {
            bits <<= 1;
            match digit {
                b'0' => {}
                b'1' => bits |= 1,
                _ => {
                    return Err(BoardError::configuration(
                        input,
                        "expected only '0' and '1'",
                    ))
                }
            }
        }

        match bits {
            0 => Ok(MiddleTheater::None),
            1 => Ok(MiddleTheater::Land),
            2 => Ok(MiddleTheater::Sea),
            _ => Err(BoardError::configuration(
                input,
                "designator 11 does not name a theater",
            )),
        }
    }

    /// Decode a raw designator. Only the low two bits are read; 3 maps to `None`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            1 => MiddleTheater::Land,
            2 => MiddleTheater::Sea,
            _ => MiddleTheater::None,
        }
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            MiddleTheater::None => 0,
            MiddleTheater::Land => 1,
            MiddleTheater::Sea => 2,
        }
    }
}

impl FromStr for MiddleTheater {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Prints the designator as two binary digits, e.g. `10`.
impl std::fmt::Display for MiddleTheater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02b}", self.bits())
    }
}

/// Column order used for card rows on the board.
///
/// The title row always follows the theater display order. Card rows can
/// either keep the fixed Air/Land/Sea board order or follow the title row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowOrder {
    /// Air, Land, Sea regardless of the middle theater.
    #[default]
    Board,
    /// Same order as the title row.
    Display,
}

impl FromStr for RowOrder {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "board" => Ok(RowOrder::Board),
            "display" => Ok(RowOrder::Display),
            _ => Err(BoardError::configuration(
                s,
                "expected \"board\" or \"display\"",
            )),
        }
    }
}

/// Everything needed to set up a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Middle-theater designator.
    pub middle_theater: MiddleTheater,

    /// Deal seed. `None` seeds from system entropy.
    pub seed: Option<u64>,

    /// Card row order for rendering.
    pub row_order: RowOrder,
}

impl SetupConfig {
    /// Configuration from designator text with entropy seeding.
    pub fn from_designator(middle_theater: &str) -> Result<Self> {
        Ok(Self {
            middle_theater: MiddleTheater::parse(middle_theater)?,
            ..Self::default()
        })
    }

    /// Use a fixed deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the card row order.
    #[must_use]
    pub fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }
}
