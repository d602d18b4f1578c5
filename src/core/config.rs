//! Rule configuration.
//!
//! All tunable rule constants live in one immutable `GameRules` value passed
//! to the engine at construction. The defaults are the classic rules: a
//! 12-card opening deal, 3-card replenishment, a 24-card table, and the
//! usual score penalties for dealing and hints.
//!
//! Keeping the constants in a value (rather than scattered globals) lets
//! rule variants be tested in isolation.

use serde::{Deserialize, Serialize};

/// Score deltas applied by engine commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    /// Awarded when a selection resolves as a valid set.
    pub on_match: i64,

    /// Applied when a selection resolves as an invalid set. Negative.
    pub on_mismatch: i64,

    /// Applied on every successful `deal_more_cards`. Negative.
    pub on_dealing_more_cards: i64,

    /// Applied on every `request_hint`. Negative.
    pub on_getting_help: i64,

    /// Lower bound for the score. `None` lets the score go negative.
    pub floor: Option<i64>,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            on_match: 50,
            on_mismatch: -20,
            on_dealing_more_cards: -10,
            on_getting_help: -50,
            floor: None,
        }
    }
}

/// Complete rule configuration for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Cards dealt to the table when a game starts.
    pub cards_dealing_on_start: usize,

    /// Cards dealt by each `deal_more_cards` and match replacement.
    pub cards_dealing_during_game: usize,

    /// Selection size that triggers evaluation. Must be 3: set validity is
    /// defined over triples.
    pub cards_to_select: usize,

    /// Maximum number of cards the table can hold.
    pub table_max_size: usize,

    /// Score deltas.
    pub score: ScoreRules,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            cards_dealing_on_start: 12,
            cards_dealing_during_game: 3,
            cards_to_select: 3,
            table_max_size: 24,
            score: ScoreRules::default(),
        }
    }
}

impl GameRules {
    /// Create the default rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening deal size.
    #[must_use]
    pub fn with_opening_deal(mut self, cards: usize) -> Self {
        self.cards_dealing_on_start = cards;
        self
    }

    /// Set the mid-game deal size.
    #[must_use]
    pub fn with_deal_size(mut self, cards: usize) -> Self {
        self.cards_dealing_during_game = cards;
        self
    }

    /// Set the table capacity.
    #[must_use]
    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_max_size = capacity;
        self
    }

    /// Replace the score deltas.
    #[must_use]
    pub fn with_score_rules(mut self, score: ScoreRules) -> Self {
        self.score = score;
        self
    }

    /// Clamp the score at `floor`.
    #[must_use]
    pub fn with_score_floor(mut self, floor: i64) -> Self {
        self.score.floor = Some(floor);
        self
    }

    /// Assert internal consistency. Called at engine construction;
    /// violations are programming errors, not recoverable conditions.
    pub fn validate(&self) {
        assert_eq!(
            self.cards_to_select, 3,
            "set validity is defined over triples"
        );
        assert!(
            self.cards_dealing_during_game >= 1,
            "mid-game deals must deal at least one card"
        );
        assert!(
            self.cards_dealing_on_start <= self.table_max_size,
            "opening deal must fit the table"
        );
        assert!(
            self.cards_dealing_on_start <= 81,
            "opening deal must fit the deck"
        );
    }
}
