//! Hands as a fixed-universe set, and the random Hand Selector.
//!
//! The game has eighteen physical cards: ranks 1-6 in each of the three
//! theaters. A hand is the subset of those identities a player holds, stored
//! as an 18-bit mask for O(1) membership tests.
//!
//! Identity `i` maps to theater `i / 6` and rank `i % 6 + 1`:
//!
//! ```text
//! 0..=5    Air 1..6
//! 6..=11   Land 1..6
//! 12..=17  Sea 1..6
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::card::Card;
use super::theater::Theater;
use crate::core::rng::RandomSource;

/// Set of card identities over the closed universe `0..18`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand(u32);

impl Hand {
    /// Number of distinct card identities.
    pub const UNIVERSE: usize = 18;

    /// Cards dealt into a fresh hand.
    pub const DEAL_SIZE: usize = 6;

    /// Cards per theater in the universe.
    const PER_THEATER: usize = 6;

    const MASK: u32 = (1u32 << Self::UNIVERSE) - 1;

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from a raw mask; bits above the universe are dropped.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::MASK)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Add an identity. Returns `true` if it was newly added.
    ///
    /// Indices outside the universe are ignored and return `false`.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= Self::UNIVERSE || self.contains(index) {
            return false;
        }
        self.0 |= 1u32 << index;
        true
    }

    /// Remove an identity. Returns `true` if it was present.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.0 &= !(1u32 << index);
        true
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < Self::UNIVERSE && self.0 & (1u32 << index) != 0
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..Self::UNIVERSE).filter(move |&i| self.contains(i))
    }

    /// The face-up card for a universe index.
    #[must_use]
    pub fn identity_card(index: usize) -> Option<Card> {
        if index >= Self::UNIVERSE {
            return None;
        }
        let theater = Theater::ALL[index / Self::PER_THEATER];
        let rank = (index % Self::PER_THEATER) as u8 + 1;
        Some(Card::encode(true, theater.bits(), rank))
    }

    /// Cards currently in hand, in index order.
    pub fn cards(self) -> impl Iterator<Item = Card> {
        self.iter().filter_map(Self::identity_card)
    }

    /// Deal a fresh hand from `rng`. See [`random_hand`].
    pub fn random(rng: &mut impl RandomSource) -> Self {
        random_hand(rng)
    }
}

/// Draw `Hand::DEAL_SIZE` distinct identities uniformly from the universe.
///
/// Each draw picks from all eighteen indices; drawing one that is already in
/// the hand is a no-op and does not advance the count.
pub fn random_hand(rng: &mut impl RandomSource) -> Hand {
    let mut hand = Hand::empty();
    let mut draws = 0usize;

    while hand.count() < Hand::DEAL_SIZE {
        let index = rng.pick_index(Hand::UNIVERSE);
        draws += 1;
        if !hand.insert(index) {
            trace!(index, "redundant draw");
        }
    }

    debug!(draws, mask = hand.bits(), "dealt hand");
    hand
}
