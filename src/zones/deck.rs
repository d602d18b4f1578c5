//! The shuffled card supply.

use crate::cards::Card;
use crate::core::{GameError, GameRng};

/// The not-yet-dealt supply: a random permutation of the 81 cards plus a
/// cursor marking how many have been drawn.
///
/// The cursor only moves forward. Drawing past the end yields fewer cards
/// than asked for; exhaustion is a normal terminal condition, not an error.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a full 81-card deck in a random permutation.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Card::full_deck();
        rng.shuffle(&mut cards);
        Self { cards, cursor: 0 }
    }

    /// Draw up to `n` cards from the front of the unseen portion.
    ///
    /// Returns fewer than `n` (possibly none) when the supply runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let end = (self.cursor + n).min(self.cards.len());
        let drawn = self.cards[self.cursor..end].to_vec();
        self.cursor = end;
        drawn
    }

    /// Draw exactly `n` cards, or fail without drawing any.
    ///
    /// For callers that must distinguish exhaustion from a partial draw.
    pub fn draw_exact(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if self.remaining() < n {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining: self.remaining(),
            });
        }
        Ok(self.draw(n))
    }

    /// Number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// True once every card has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_fresh_deck_holds_81() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);

        assert_eq!(deck.remaining(), 81);
        assert!(!deck.is_exhausted());
    }

    #[test]
    fn test_drawing_everything_yields_unique_cards_and_exhausts() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);

        let mut seen = FxHashSet::default();
        while !deck.is_exhausted() {
            for card in deck.draw(12) {
                assert!(seen.insert(card), "duplicate card drawn");
            }
        }

        assert_eq!(seen.len(), 81);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_draw_past_the_end_is_partial_then_empty() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);

        deck.draw(78);
        assert_eq!(deck.remaining(), 3);

        let last = deck.draw(12);
        assert_eq!(last.len(), 3);
        assert!(deck.is_exhausted());

        // Further draws stay empty, no error.
        assert!(deck.draw(3).is_empty());
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_draw_exact_fails_without_consuming() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);
        deck.draw(80);

        let err = deck.draw_exact(2).unwrap_err();
        assert_eq!(
            err,
            GameError::DeckExhausted {
                requested: 2,
                remaining: 1
            }
        );
        // The failed draw left the cursor alone.
        assert_eq!(deck.remaining(), 1);
        assert_eq!(deck.draw_exact(1).unwrap().len(), 1);
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let mut deck1 = Deck::shuffled(&mut rng1);
        let mut deck2 = Deck::shuffled(&mut rng2);

        assert_eq!(deck1.draw(81), deck2.draw(81));
    }
}
