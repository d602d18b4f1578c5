//! The game engine: sole owner of deck, table, selection and score.
//!
//! External callers issue discrete commands (`toggle_card`,
//! `deal_more_cards`, `request_hint`, `start_new_game`); the engine mutates
//! its state and the caller reads back a [`GameSnapshot`]. Everything is
//! synchronous and single-owner; callers embedding the engine in a
//! threaded UI serialize access themselves.

use crate::cards::Card;
use crate::core::{GameError, GameRng, GameRules};
use crate::rules::{find_any_valid_set, is_valid_set};
use crate::zones::{Deck, Table};

use super::selection::{Selection, SelectionStatus};
use super::snapshot::{CardView, GameSnapshot, Highlight};

/// One game of Set: shuffled deck, face-up table, the player's selection,
/// and the score.
#[derive(Clone, Debug)]
pub struct GameEngine {
    rules: GameRules,
    rng: GameRng,
    deck: Deck,
    table: Table,
    selection: Selection,
    score: i64,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded shuffle and deal the
    /// opening table.
    ///
    /// Panics if `rules` is internally inconsistent (see
    /// [`GameRules::validate`]).
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self::from_rng(rules, GameRng::from_entropy())
    }

    /// Create an engine with a fixed seed. Same seed, same deck order,
    /// same game.
    #[must_use]
    pub fn with_seed(rules: GameRules, seed: u64) -> Self {
        Self::from_rng(rules, GameRng::new(seed))
    }

    fn from_rng(rules: GameRules, mut rng: GameRng) -> Self {
        rules.validate();
        let deck = Deck::shuffled(&mut rng);
        let mut engine = Self {
            rules,
            rng,
            deck,
            table: Table::new(rules.table_max_size),
            selection: Selection::new(),
            score: 0,
        };
        engine.deal_opening_table();
        engine
    }

    /// Throw the current game away: fresh shuffle, fresh opening deal,
    /// empty selection, score 0.
    pub fn start_new_game(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.table = Table::new(self.rules.table_max_size);
        self.selection = Selection::new();
        self.score = 0;
        self.deal_opening_table();
    }

    fn deal_opening_table(&mut self) {
        let opening = self.deck.draw(self.rules.cards_dealing_on_start);
        self.table
            .add_cards(&opening)
            .expect("validated rules: opening deal fits the table");
    }

    /// Select or deselect a table card.
    ///
    /// Drives the selection state machine:
    /// - below three cards, an unselected card is added; reaching three
    ///   evaluates the triple and applies the match reward or mismatch
    ///   penalty;
    /// - below three cards, an already-selected card is deselected;
    /// - after a match, the matched triple leaves the table (replaced from
    ///   the deck while it lasts) and a fresh selection begins with the
    ///   toggled card, or empty if the toggled card left with the triple;
    /// - after a mismatch, the old selection is dropped and a fresh one
    ///   begins with the toggled card.
    ///
    /// Fails with `CardNotFound` if the card is not face-up on the table.
    pub fn toggle_card(&mut self, card: Card) -> Result<SelectionStatus, GameError> {
        if !self.table.contains(card) {
            return Err(GameError::CardNotFound { card });
        }

        match self.selection.status() {
            SelectionStatus::Matched => {
                self.replace_matched_selection();
                if self.table.contains(card) {
                    self.selection.push(card);
                }
            }
            SelectionStatus::Mismatched => {
                self.selection.clear();
                self.selection.push(card);
            }
            SelectionStatus::Pending => {
                if self.selection.contains(card) {
                    self.selection.remove(card);
                } else {
                    self.selection.push(card);
                    if self.selection.len() == self.rules.cards_to_select {
                        self.resolve_selection();
                    }
                }
            }
        }

        Ok(self.selection.status())
    }

    /// Deal up to `cards_dealing_during_game` more cards, clamped to the
    /// remaining table capacity and deck supply, and apply the dealing
    /// penalty. Returns how many cards were dealt.
    ///
    /// Fails with `NoCapacity` when the table is already full or the deck
    /// is exhausted; no penalty is applied on failure.
    pub fn deal_more_cards(&mut self) -> Result<usize, GameError> {
        let capacity_left = self.rules.table_max_size - self.table.len();
        if capacity_left == 0 || self.deck.is_exhausted() {
            return Err(GameError::NoCapacity);
        }

        let request = self.rules.cards_dealing_during_game.min(capacity_left);
        let cards = self.deck.draw(request);
        self.table
            .add_cards(&cards)
            .expect("deal clamped to remaining capacity");
        self.bump_score(self.rules.score.on_dealing_more_cards);
        Ok(cards.len())
    }

    /// Find a valid set on the table, at a score cost.
    ///
    /// Applies the help penalty on every call, then returns the first
    /// valid triple in table position order, or `None` when no set exists.
    /// Neither table nor selection is touched.
    pub fn request_hint(&mut self) -> Option<[Card; 3]> {
        self.bump_score(self.rules.score.on_getting_help);
        find_any_valid_set(self.table.cards())
    }

    /// The game is over once the deck is exhausted and the table holds no
    /// valid set.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.deck.is_exhausted() && find_any_valid_set(self.table.cards()).is_none()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// The rules this game was created with.
    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Undrawn cards left in the deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// The face-up cards, in table position order.
    #[must_use]
    pub fn table_cards(&self) -> &[Card] {
        self.table.cards()
    }

    /// Where the selection stands.
    #[must_use]
    pub fn selection_status(&self) -> SelectionStatus {
        self.selection.status()
    }

    /// Observable state for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let status = self.selection.status();
        let cards = self
            .table
            .cards()
            .iter()
            .map(|&card| {
                let highlight = if self.selection.contains(card) {
                    match status {
                        SelectionStatus::Pending => Highlight::Selected,
                        SelectionStatus::Matched => Highlight::Matched,
                        SelectionStatus::Mismatched => Highlight::Mismatched,
                    }
                } else {
                    Highlight::Plain
                };
                CardView { card, highlight }
            })
            .collect();

        GameSnapshot {
            cards,
            score: self.score,
            deck_remaining: self.deck.remaining(),
            selection: status,
            game_over: self.is_game_over(),
        }
    }

    /// Evaluate a full selection and apply the score delta.
    fn resolve_selection(&mut self) {
        let cards = self.selection.cards();
        debug_assert_eq!(cards.len(), 3);
        let (a, b, c) = (cards[0], cards[1], cards[2]);

        if is_valid_set(a, b, c) {
            self.selection.resolve(SelectionStatus::Matched);
            self.bump_score(self.rules.score.on_match);
        } else {
            self.selection.resolve(SelectionStatus::Mismatched);
            self.bump_score(self.rules.score.on_mismatch);
        }
    }

    /// Remove a matched triple from the table, dealing replacements while
    /// the deck lasts, and empty the selection.
    fn replace_matched_selection(&mut self) {
        let cards = self.selection.cards();
        debug_assert_eq!(cards.len(), 3);
        let triple = [cards[0], cards[1], cards[2]];

        let replacements = self.deck.draw(triple.len());
        self.table
            .replace_matched_triple(&triple, &replacements)
            .expect("resolved selection references table cards");
        self.selection.clear();
    }

    fn bump_score(&mut self, delta: i64) {
        self.score += delta;
        if let Some(floor) = self.rules.score.floor {
            self.score = self.score.max(floor);
        }
    }
}
