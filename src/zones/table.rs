//! The face-up table zone.

use rustc_hash::FxHashSet;

use crate::cards::Card;
use crate::core::GameError;

/// The cards currently face-up and selectable, bounded by a capacity.
///
/// Insertion order is preserved: the exhaustive set search walks the table
/// in position order, so a stable order is what makes hints reproducible.
/// Mutations are all-or-nothing; a rejected batch leaves the table
/// untouched.
#[derive(Clone, Debug)]
pub struct Table {
    cards: Vec<Card>,
    capacity: usize,
}

impl Table {
    /// Create an empty table with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The face-up cards, in table position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards are face-up.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Maximum number of cards the table can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Is this card currently face-up?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Append cards to the table.
    ///
    /// Rejects the whole batch with `TableFull` if it would exceed the
    /// capacity; no partial insert.
    pub fn add_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        if self.cards.len() + cards.len() > self.capacity {
            return Err(GameError::TableFull {
                capacity: self.capacity,
            });
        }
        self.cards.extend_from_slice(cards);
        self.debug_assert_unique();
        Ok(())
    }

    /// Remove the named cards from the table.
    ///
    /// Rejects the whole batch with `CardNotFound` if any card is absent;
    /// no partial removal.
    pub fn remove_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        for &card in cards {
            if !self.contains(card) {
                return Err(GameError::CardNotFound { card });
            }
        }
        self.cards.retain(|c| !cards.contains(c));
        Ok(())
    }

    /// Atomically swap a matched triple for its replacements.
    ///
    /// Replacements take over the table positions of the removed cards, so
    /// the rest of the layout is undisturbed. With fewer than three
    /// replacements (deck running out) the leftover positions are removed.
    /// Fails with `CardNotFound` if any card of the triple is absent,
    /// leaving the table unchanged.
    pub fn replace_matched_triple(
        &mut self,
        triple: &[Card; 3],
        replacements: &[Card],
    ) -> Result<(), GameError> {
        debug_assert!(replacements.len() <= triple.len());

        let mut positions = [0usize; 3];
        for (slot, &card) in triple.iter().enumerate() {
            positions[slot] = self
                .cards
                .iter()
                .position(|&c| c == card)
                .ok_or(GameError::CardNotFound { card })?;
        }

        let mut vacated: Vec<usize> = Vec::new();
        for (slot, &pos) in positions.iter().enumerate() {
            if let Some(&replacement) = replacements.get(slot) {
                self.cards[pos] = replacement;
            } else {
                vacated.push(pos);
            }
        }

        // Remove leftover positions back-to-front so indices stay valid.
        vacated.sort_unstable();
        for pos in vacated.into_iter().rev() {
            self.cards.remove(pos);
        }

        self.debug_assert_unique();
        Ok(())
    }

    /// Duplicate cards on the table are a programming error.
    fn debug_assert_unique(&self) {
        if cfg!(debug_assertions) {
            let unique: FxHashSet<Card> = self.cards.iter().copied().collect();
            debug_assert_eq!(unique.len(), self.cards.len(), "duplicate card on table");
        }
    }
}
