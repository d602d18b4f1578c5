//! The card value type and the full deck product.

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Count, Filling, Symbol};

/// A single Set card: one value for each of the four attributes.
///
/// Cards are immutable values; identity is equality over the four
/// attributes. The full deck holds every combination exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub count: Count,
    pub color: Color,
    pub symbol: Symbol,
    pub filling: Filling,
}

impl Card {
    /// Create a card from its four attribute values.
    #[must_use]
    pub const fn new(count: Count, color: Color, symbol: Symbol, filling: Filling) -> Self {
        Self {
            count,
            color,
            symbol,
            filling,
        }
    }

    /// The full deck: the Cartesian product of the four attribute domains,
    /// 81 distinct cards in canonical order.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(81);
        for count in Count::ALL {
            for color in Color::ALL {
                for symbol in Symbol::ALL {
                    for filling in Filling::ALL {
                        deck.push(Card::new(count, color, symbol, filling));
                    }
                }
            }
        }
        deck
    }

    /// Dense canonical id in `0..81`, the card's position in `full_deck()`.
    ///
    /// Stable across runs; usable as an array index or wire id.
    #[must_use]
    pub const fn index(self) -> usize {
        ((self.count as usize * 3 + self.color as usize) * 3 + self.symbol as usize) * 3
            + self.filling as usize
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} {} {} {}]",
            self.count, self.color, self.symbol, self.filling
        )
    }
}
