//! # set-engine
//!
//! Game engine for the card game Set.
//!
//! Players identify triples of cards where, for each of the four card
//! attributes, the three values are either all identical or all different.
//! This crate owns the rules: deck construction, dealing and table
//! management, set validity and exhaustive search, the selection state
//! machine, and scoring. Rendering and input wiring live outside; a UI
//! issues commands and redraws from the returned snapshot.
//!
//! ## Design Principles
//!
//! 1. **Engine-only**: no IO, no platform concerns, no drawing. The crate
//!    computes over in-memory state and hands back value types.
//!
//! 2. **Configuration over constants**: every tunable rule (deal sizes,
//!    table capacity, score deltas) lives in [`GameRules`], passed once at
//!    engine construction.
//!
//! 3. **Deterministic where it matters**: shuffles are seedable, and the
//!    set search scans in a fixed order, so whole games and hints are
//!    reproducible in tests.
//!
//! ## Modules
//!
//! - `cards`: attribute enums and the card value type
//! - `core`: rule configuration, RNG, error taxonomy
//! - `rules`: set validity and exhaustive search
//! - `zones`: deck (shuffled supply) and table (bounded face-up zone)
//! - `game`: selection state machine, engine, snapshots
//!
//! ## Example
//!
//! ```
//! use set_engine::{GameEngine, GameRules};
//!
//! let mut engine = GameEngine::with_seed(GameRules::default(), 42);
//! assert_eq!(engine.snapshot().cards.len(), 12);
//!
//! if let Some([a, b, c]) = engine.request_hint() {
//!     engine.toggle_card(a).unwrap();
//!     engine.toggle_card(b).unwrap();
//!     engine.toggle_card(c).unwrap();
//! }
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Count, Filling, Symbol};

pub use crate::core::{GameError, GameRng, GameRules, ScoreRules};

pub use crate::rules::{find_any_valid_set, is_valid_set};

pub use crate::zones::{Deck, Table};

pub use crate::game::{CardView, GameEngine, GameSnapshot, Highlight, Selection, SelectionStatus};
