//! Card zones: the deck (shuffled supply) and the table (face-up cards).
//!
//! Every card drawn from the deck moves to the table exactly once; the two
//! zones never share a card.

pub mod deck;
pub mod table;

pub use deck::Deck;
pub use table::Table;
