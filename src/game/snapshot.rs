//! Read-only state snapshot for the renderer.
//!
//! The engine owns all mutable state; after each command the caller takes
//! a `GameSnapshot` and redraws from it. The snapshot carries everything a
//! renderer needs and nothing it could corrupt.

use serde::{Deserialize, Serialize};

use super::selection::SelectionStatus;
use crate::cards::Card;

/// Visual state of one table card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    /// Not part of the selection.
    Plain,
    /// Part of an unresolved selection.
    Selected,
    /// Part of a selection that resolved as a valid set.
    Matched,
    /// Part of a selection that resolved as an invalid set.
    Mismatched,
}

/// One table card together with its visual state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub card: Card,
    pub highlight: Highlight,
}

impl CardView {
    /// Is this card part of the current selection, resolved or not?
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.highlight != Highlight::Plain
    }
}

/// Observable game state after a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Face-up cards in table position order, with per-card highlights.
    pub cards: Vec<CardView>,

    /// Current score.
    pub score: i64,

    /// Undrawn cards left in the deck.
    pub deck_remaining: usize,

    /// Where the selection stands.
    pub selection: SelectionStatus,

    /// Deck exhausted and no valid set remains on the table.
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cards currently selected, in table position order.
    pub fn selected_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards
            .iter()
            .filter(|view| view.is_selected())
            .map(|view| view.card)
    }
}
