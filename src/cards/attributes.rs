//! The four card attributes.
//!
//! Every attribute is a closed enum with exactly three values. The deck is
//! the Cartesian product of the four domains, so keeping these enums closed
//! is what guarantees the 81-card deck and the combinatorics built on it.

use serde::{Deserialize, Serialize};

/// Number of symbols printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// All values, in canonical order.
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    /// Numeric value, for renderers that repeat the symbol.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Count::One => 1,
            Count::Two => 2,
            Count::Three => 3,
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Symbol color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    /// All values, in canonical order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        };
        write!(f, "{name}")
    }
}

/// Shape of the printed symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Rhombus,
    RoundedRectangle,
    Wave,
}

impl Symbol {
    /// All values, in canonical order.
    pub const ALL: [Symbol; 3] = [Symbol::Rhombus, Symbol::RoundedRectangle, Symbol::Wave];
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Symbol::Rhombus => "rhombus",
            Symbol::RoundedRectangle => "rounded-rectangle",
            Symbol::Wave => "wave",
        };
        write!(f, "{name}")
    }
}

/// How the symbol is filled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Filling {
    Full,
    Partly,
    None,
}

impl Filling {
    /// All values, in canonical order.
    pub const ALL: [Filling; 3] = [Filling::Full, Filling::Partly, Filling::None];
}

impl std::fmt::Display for Filling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Filling::Full => "full",
            Filling::Partly => "partly",
            Filling::None => "none",
        };
        write!(f, "{name}")
    }
}
