//! Game state aggregate.
//!
//! ## GameState
//!
//! Everything one player knows about the game:
//! - Own hand (set over the eighteen card identities)
//! - Own and opponent theater stacks, keyed by `Theater`
//! - Middle-theater designator
//! - Reserved tactical state: containment flag, barricade/support byte
//!
//! `GameState` owns all of it; nothing is shared.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{MiddleTheater, SetupConfig};
use super::error::Result;
use super::rng::{GameRng, RandomSource};
use crate::board::TheaterStack;
use crate::cards::{random_hand, Hand, Theater};

/// Which side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Own,
    Opponent,
}

/// Packed barricade and support locations.
///
/// Low three bits hold the barricade location, the next three the support
/// location; the top two bits stay zero. Nothing reads these yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarricadeSupport(u8);

impl BarricadeSupport {
    const FIELD_MASK: u8 = 0b111;
    const SUPPORT_SHIFT: u8 = 3;

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn barricade(self) -> u8 {
        self.0 & Self::FIELD_MASK
    }

    #[must_use]
    pub const fn support(self) -> u8 {
        (self.0 >> Self::SUPPORT_SHIFT) & Self::FIELD_MASK
    }

    /// Set the barricade location (masked to three bits).
    #[must_use]
    pub const fn with_barricade(self, location: u8) -> Self {
        Self((self.0 & !Self::FIELD_MASK) | (location & Self::FIELD_MASK))
    }

    /// Set the support location (masked to three bits).
    #[must_use]
    pub const fn with_support(self, location: u8) -> Self {
        let cleared = self.0 & !(Self::FIELD_MASK << Self::SUPPORT_SHIFT);
        Self(cleared | ((location & Self::FIELD_MASK) << Self::SUPPORT_SHIFT))
    }
}

/// Complete state for one player's view of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// This player's hand.
    pub hand: Hand,

    own_theaters: [TheaterStack; 3],
    opp_theaters: [TheaterStack; 3],

    /// Middle-theater designator.
    pub middle_theater: MiddleTheater,

    /// Whether containment is active. Reserved.
    pub containment: bool,

    /// Barricade and support locations. Reserved.
    pub barricade_support: BarricadeSupport,
}

impl GameState {
    /// Create a state with the given hand and empty theaters.
    #[must_use]
    pub fn new(middle_theater: MiddleTheater, hand: Hand) -> Self {
        Self {
            hand,
            middle_theater,
            ..Self::default()
        }
    }

    /// Set up a game from designator text, dealing from system entropy.
    ///
    /// ```
    /// use als_board::core::{GameState, MiddleTheater};
    ///
    /// let state = GameState::default_game_state("10").unwrap();
    /// assert_eq!(state.middle_theater, MiddleTheater::Sea);
    /// assert_eq!(state.hand.count(), 6);
    /// ```
    pub fn default_game_state(middle_theater: &str) -> Result<Self> {
        Self::default_game_state_with(middle_theater, &mut GameRng::from_entropy())
    }

    /// Set up a game from designator text, dealing from `rng`.
    pub fn default_game_state_with(
        middle_theater: &str,
        rng: &mut impl RandomSource,
    ) -> Result<Self> {
        let middle_theater = MiddleTheater::parse(middle_theater)?;
        Ok(Self::deal(middle_theater, rng))
    }

    /// Set up a game from a full configuration.
    #[must_use]
    pub fn from_config(config: &SetupConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "setting up game");
        Self::deal(config.middle_theater, &mut rng)
    }

    fn deal(middle_theater: MiddleTheater, rng: &mut impl RandomSource) -> Self {
        let state = Self::new(middle_theater, random_hand(rng));
        debug!(middle = %state.middle_theater, hand = state.hand.bits(), "game state ready");
        state
    }

    /// All three stacks for a side, indexed by `Theater::index()`.
    #[must_use]
    pub fn stacks(&self, side: Side) -> &[TheaterStack; 3] {
        match side {
            Side::Own => &self.own_theaters,
            Side::Opponent => &self.opp_theaters,
        }
    }

    #[must_use]
    pub fn stack(&self, side: Side, theater: Theater) -> &TheaterStack {
        &self.stacks(side)[theater.index()]
    }

    pub fn stack_mut(&mut self, side: Side, theater: Theater) -> &mut TheaterStack {
        let stacks = match side {
            Side::Own => &mut self.own_theaters,
            Side::Opponent => &mut self.opp_theaters,
        };
        &mut stacks[theater.index()]
    }

    /// Deepest stack on a side.
    #[must_use]
    pub fn max_depth(&self, side: Side) -> usize {
        self.stacks(side).iter().map(TheaterStack::len).max().unwrap_or(0)
    }

    /// Encode the state as a compact bincode snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameState::to_snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::error::BoardError;

    #[test]
    fn test_default_game_state() {
        let state = GameState::default_game_state("10").unwrap();

        assert_eq!(state.middle_theater, MiddleTheater::Sea);
        assert_eq!(state.hand.count(), Hand::DEAL_SIZE);
        for side in [Side::Own, Side::Opponent] {
            assert!(state.stacks(side).iter().all(TheaterStack::is_empty));
        }
        assert!(!state.containment);
        assert_eq!(state.barricade_support.bits(), 0);
    }

    #[test]
    fn test_default_game_state_rejects_bad_designator() {
        assert!(matches!(
            GameState::default_game_state("1"),
            Err(BoardError::InvalidConfiguration { .. })
        ));
        assert!(GameState::default_game_state("11").is_err());
    }

    #[test]
    fn test_injected_rng_is_deterministic() {
        let a = GameState::default_game_state_with("01", &mut GameRng::new(3)).unwrap();
        let b = GameState::default_game_state_with("01", &mut GameRng::new(3)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.middle_theater, MiddleTheater::Land);
    }

    #[test]
    fn test_from_config_with_seed() {
        let config = SetupConfig::from_designator("00").unwrap().with_seed(11);
        assert_eq!(GameState::from_config(&config), GameState::from_config(&config));
    }

    #[test]
    fn test_stacks_are_per_side() {
        let mut state = GameState::new(MiddleTheater::None, Hand::empty());
        state
            .stack_mut(Side::Opponent, Theater::Sea)
            .push(Card::encode(true, 2, 4));

        assert_eq!(state.stack(Side::Opponent, Theater::Sea).len(), 1);
        assert!(state.stack(Side::Own, Theater::Sea).is_empty());
        assert_eq!(state.max_depth(Side::Opponent), 1);
        assert_eq!(state.max_depth(Side::Own), 0);
    }

    #[test]
    fn test_barricade_support_packing() {
        let packed = BarricadeSupport::default().with_barricade(5).with_support(2);
        assert_eq!(packed.barricade(), 5);
        assert_eq!(packed.support(), 2);
        assert_eq!(packed.bits(), 0b010_101);

        let masked = packed.with_support(0xFF).with_barricade(9);
        assert_eq!(masked.support(), 7);
        assert_eq!(masked.barricade(), 1);
        assert_eq!(masked.bits() >> 6, 0);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut state = GameState::default_game_state_with("10", &mut GameRng::new(5)).unwrap();
        state.stack_mut(Side::Own, Theater::Air).push(Card::encode(true, 0, 3));
        state.stack_mut(Side::Opponent, Theater::Land).push(Card::face_down());
        state.containment = true;
        state.barricade_support = BarricadeSupport::default().with_support(4);

        let bytes = state.to_snapshot().unwrap();
        assert_eq!(GameState::from_snapshot(&bytes).unwrap(), state);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(
            GameState::from_snapshot(&[0xFF]),
            Err(BoardError::Snapshot(_))
        ));
    }
}
