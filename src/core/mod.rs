//! Core types: errors, RNG, configuration, and the game state aggregate.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{MiddleTheater, RowOrder, SetupConfig};
pub use error::{BoardError, Result};
pub use rng::{GameRng, RandomSource};
pub use state::{BarricadeSupport, GameState, Side};
