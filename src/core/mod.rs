//! Core engine types: rule configuration, RNG, and the error taxonomy.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameRules, ScoreRules};
pub use error::GameError;
pub use rng::GameRng;
