//! Recoverable error taxonomy.

use thiserror::Error;

use crate::cards::Card;

/// Errors reported by engine commands. All are recoverable by the caller;
/// invariant violations are guarded by assertions instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Adding cards would exceed the table capacity.
    #[error("table is full (capacity {capacity})")]
    TableFull { capacity: usize },

    /// A referenced card is not on the table.
    #[error("card {card} is not on the table")]
    CardNotFound { card: Card },

    /// More cards were requested while the table is full or the deck empty.
    #[error("cannot deal more cards: table full or deck exhausted")]
    NoCapacity,

    /// An all-or-nothing draw asked for more cards than remain.
    #[error("deck exhausted ({remaining} cards remain, {requested} requested)")]
    DeckExhausted { requested: usize, remaining: usize },
}
