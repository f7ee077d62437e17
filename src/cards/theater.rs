//! The three theaters cards are played into.

use serde::{Deserialize, Serialize};

use crate::core::error::{BoardError, Result};

/// One of the three board columns.
///
/// The raw two-bit value 3 has no variant, so a typed
/// theater can always index a `[T; 3]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Theater {
    Air = 0,
    Land = 1,
    Sea = 2,
}

impl Theater {
    /// All theaters in board order.
    pub const ALL: [Theater; 3] = [Theater::Air, Theater::Land, Theater::Sea];

    /// Decode a raw two-bit theater value.
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(Theater::Air),
            1 => Ok(Theater::Land),
            2 => Ok(Theater::Sea),
            other => Err(BoardError::InvalidTheater(other)),
        }
    }

    /// Raw two-bit value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Index into theater-keyed arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation used on cards.
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Theater::Air => "Air",
            Theater::Land => "Lnd",
            Theater::Sea => "Sea",
        }
    }

    /// Upper-case label used in the title row.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Theater::Air => "AIR",
            Theater::Land => "LND",
            Theater::Sea => "SEA",
        }
    }
}

impl TryFrom<u8> for Theater {
    type Error = BoardError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl std::fmt::Display for Theater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        assert_eq!(Theater::from_bits(0).unwrap(), Theater::Air);
        assert_eq!(Theater::from_bits(1).unwrap(), Theater::Land);
        assert_eq!(Theater::from_bits(2).unwrap(), Theater::Sea);
        assert!(matches!(
            Theater::from_bits(3),
            Err(BoardError::InvalidTheater(3))
        ));
    }

    #[test]
    fn test_index_matches_all() {
        for (i, theater) in Theater::ALL.iter().enumerate() {
            assert_eq!(theater.index(), i);
            assert_eq!(Theater::from_bits(theater.bits()).unwrap(), *theater);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Theater::Land.abbrev(), "Lnd");
        assert_eq!(Theater::Land.label(), "LND");
        assert_eq!(format!("{}", Theater::Sea), "Sea");
    }
}
