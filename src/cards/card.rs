//! Bit-packed card codec.
//!
//! A card is six bits inside a byte, most significant first:
//!
//! ```text
//! bit 5     face-up flag (0 = face-down / unknown)
//! bits 3-4  theater (Air = 0, Land = 1, Sea = 2; 3 unused)
//! bits 0-2  rank 0..=7
//! ```
//!
//! So `0b00_1_01_001` is the face-up Land 1 and `0b00_1_10_111` the face-up
//! Sea 7. A face-down card still carries theater and rank bits, but nothing
//! may read them as meaningful.
//!
//! ```
//! use als_board::cards::{Card, Theater};
//!
//! let card = Card::from_bits_unchecked(0b0010_1001);
//! assert!(card.is_face_up());
//! assert_eq!(card.theater().unwrap(), Theater::Land);
//! assert_eq!(card.rank(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::theater::Theater;
use crate::core::error::{BoardError, Result};

const FACE_UP_SHIFT: u8 = 5;
const THEATER_SHIFT: u8 = 3;
const THEATER_MASK: u8 = 0b11;
const RANK_MASK: u8 = 0b111;
const CARD_MASK: u8 = 0b0011_1111;

/// A single card packed into one byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Pack a card from raw fields.
    ///
    /// Theater is masked to two bits and rank to three bits: out-of-range
    /// inputs wrap instead of failing (`theater = 5` packs as Land,
    /// `rank = 9` packs as 1). Use [`Card::new`] to reject them instead.
    #[must_use]
    pub const fn encode(face_up: bool, theater: u8, rank: u8) -> Self {
        let theater = theater & THEATER_MASK;
        let rank = rank & RANK_MASK;
        Self(((face_up as u8) << FACE_UP_SHIFT) | (theater << THEATER_SHIFT) | rank)
    }

    /// Build a card from a typed theater, rejecting ranks above 7.
    pub fn new(face_up: bool, theater: Theater, rank: u8) -> Result<Self> {
        if rank > RANK_MASK {
            return Err(BoardError::InvalidRank(rank));
        }
        Ok(Self::encode(face_up, theater.bits(), rank))
    }

    /// The generic face-down card (all fields zero).
    #[must_use]
    pub const fn face_down() -> Self {
        Self(0)
    }

    /// Wrap a raw byte, keeping only the six card bits.
    #[must_use]
    pub const fn from_bits_unchecked(bits: u8) -> Self {
        Self(bits & CARD_MASK)
    }

    /// Raw packed byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_face_up(self) -> bool {
        (self.0 >> FACE_UP_SHIFT) & 1 == 1
    }

    /// Raw theater field, `0..=3`. Not validated.
    #[must_use]
    pub const fn theater_bits(self) -> u8 {
        (self.0 >> THEATER_SHIFT) & THEATER_MASK
    }

    /// Typed theater. Fails for the unused value 3.
    pub fn theater(self) -> Result<Theater> {
        Theater::from_bits(self.theater_bits())
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 & RANK_MASK
    }

    /// Same card with the face flag inverted; theater and rank are kept.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self(self.0 ^ (1 << FACE_UP_SHIFT))
    }

    /// Same card turned face-up.
    #[must_use]
    pub const fn turned_face_up(self) -> Self {
        Self(self.0 | (1 << FACE_UP_SHIFT))
    }
}

impl TryFrom<u8> for Card {
    type Error = BoardError;

    /// Strict decode: rejects stray high bits and theater value 3.
    fn try_from(bits: u8) -> Result<Self> {
        if bits & !CARD_MASK != 0 {
            return Err(BoardError::InvalidCard(bits));
        }
        let card = Self(bits);
        card.theater()?;
        Ok(card)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

/// Plain text form without colour codes, e.g. `↑-Lnd-1` or `↓-???-?`.
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_face_up() {
            return f.write_str("↓-???-?");
        }
        let abbrev = self.theater().map(Theater::abbrev).unwrap_or("???");
        write!(f, "↑-{}-{}", abbrev, self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_layouts() {
        let air_one = Card::encode(true, 0, 1);
        assert_eq!(air_one.bits(), 0b10_0001);

        let land_six = Card::encode(true, 1, 6);
        assert_eq!(land_six.bits(), 0b10_1110);

        let sea_seven = Card::encode(true, 2, 7);
        assert_eq!(sea_seven.bits(), 0b11_0111);

        assert_eq!(Card::face_down().bits(), 0);
    }

    #[test]
    fn test_decode_fields() {
        let card = Card::from_bits_unchecked(0b0010_1001);
        assert!(card.is_face_up());
        assert_eq!(card.theater_bits(), 1);
        assert_eq!(card.theater().unwrap(), Theater::Land);
        assert_eq!(card.rank(), 1);
    }

    // encode keeps the masking behaviour: out-of-range fields wrap.
    #[test]
    fn test_encode_masks_out_of_range() {
        assert_eq!(Card::encode(true, 5, 3), Card::encode(true, 1, 3));
        assert_eq!(Card::encode(false, 2, 9), Card::encode(false, 2, 1));
        assert_eq!(Card::encode(true, 3, 0).theater_bits(), 3);
    }

    #[test]
    fn test_new_rejects_rank() {
        assert!(matches!(
            Card::new(true, Theater::Air, 8),
            Err(BoardError::InvalidRank(8))
        ));
        assert_eq!(
            Card::new(true, Theater::Sea, 7).unwrap(),
            Card::encode(true, 2, 7)
        );
    }

    #[test]
    fn test_theater_three_is_rejected_by_typed_accessor() {
        let card = Card::encode(true, 3, 2);
        assert!(matches!(card.theater(), Err(BoardError::InvalidTheater(3))));
    }

    #[test]
    fn test_try_from_strict() {
        assert!(matches!(
            Card::try_from(0b0100_0000),
            Err(BoardError::InvalidCard(_))
        ));
        assert!(matches!(
            Card::try_from(0b0011_1000),
            Err(BoardError::InvalidTheater(3))
        ));
        assert_eq!(Card::try_from(0b0010_1001).unwrap().rank(), 1);
    }

    #[test]
    fn test_flip_preserves_fields() {
        let card = Card::encode(true, 2, 5);
        let down = card.flipped();
        assert!(!down.is_face_up());
        assert_eq!(down.theater_bits(), 2);
        assert_eq!(down.rank(), 5);
        assert_eq!(down.flipped(), card);
        assert_eq!(down.turned_face_up(), card);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::encode(true, 1, 1).to_string(), "↑-Lnd-1");
        assert_eq!(Card::encode(false, 2, 7).to_string(), "↓-???-?");
        assert_eq!(Card::encode(true, 3, 4).to_string(), "↑-???-4");
    }

    #[test]
    fn test_serialization() {
        let card = Card::encode(true, 1, 6);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "46");
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);

        assert!(serde_json::from_str::<Card>("64").is_err());
    }
}
