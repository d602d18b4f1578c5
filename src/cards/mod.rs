//! Card system: the four attribute domains and the card value type.
//!
//! ## Key Types
//!
//! - `Count`, `Color`, `Symbol`, `Filling`: closed three-value attribute enums
//! - `Card`: immutable value over the four attributes
//!
//! The full deck is the Cartesian product of the four domains: 81 distinct
//! cards, no duplicates.

pub mod attributes;
pub mod card;

pub use attributes::{Color, Count, Filling, Symbol};
pub use card::Card;
