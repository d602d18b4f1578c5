//! Set rules: triple validity and exhaustive search.
//!
//! Pure functions over card values; the engine calls them to resolve
//! selections, answer hint requests, and detect the end of the game.

pub mod matcher;

pub use matcher::{find_any_valid_set, is_valid_set};
