//! The player's current selection.
//!
//! Holds 0 to 3 cards chosen from the table plus a resolution tag. The
//! transitions live in `GameEngine::toggle_card`; this type only enforces
//! the local invariants (no duplicates, at most three cards, resolved
//! selections are frozen until cleared).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Where the selection stands.
///
/// `Pending` covers both the empty selection and a partial pick; a
/// selection of three is always evaluated immediately and carries one of
/// the resolved tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStatus {
    /// Fewer than three cards chosen; nothing evaluated yet.
    #[default]
    Pending,
    /// Three cards chosen and they form a valid set.
    Matched,
    /// Three cards chosen and they do not form a valid set.
    Mismatched,
}

impl SelectionStatus {
    /// Has the selection been evaluated?
    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, SelectionStatus::Matched | SelectionStatus::Mismatched)
    }
}

/// The chosen cards and their resolution tag.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    cards: SmallVec<[Card; 3]>,
    status: SelectionStatus,
}

impl Selection {
    /// Create an empty, pending selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen cards, in pick order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Resolution tag.
    #[must_use]
    pub fn status(&self) -> SelectionStatus {
        self.status
    }

    /// Number of chosen cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when nothing is chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is this card part of the selection?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Add a card. The selection must be pending, below three cards, and
    /// must not already hold the card.
    pub fn push(&mut self, card: Card) {
        debug_assert!(!self.status.is_resolved(), "resolved selection is frozen");
        debug_assert!(self.cards.len() < 3);
        debug_assert!(!self.contains(card));
        self.cards.push(card);
    }

    /// Remove a card from a pending selection.
    pub fn remove(&mut self, card: Card) {
        debug_assert!(!self.status.is_resolved(), "resolved selection is frozen");
        self.cards.retain(|&mut c| c != card);
    }

    /// Mark a full selection as matched or mismatched.
    pub fn resolve(&mut self, status: SelectionStatus) {
        debug_assert!(status.is_resolved());
        debug_assert_eq!(self.cards.len(), 3);
        self.status = status;
    }

    /// Drop all cards and return to pending.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = SelectionStatus::Pending;
    }
}
