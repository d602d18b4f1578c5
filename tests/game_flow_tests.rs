//! End-to-end command scenarios against the public engine API.

use set_engine::{
    find_any_valid_set, is_valid_set, Card, GameEngine, GameError, GameRules, Highlight,
    SelectionStatus,
};

fn engine() -> GameEngine {
    GameEngine::with_seed(GameRules::default(), 42)
}

/// Deal until the table holds a valid set. Any 21-card table contains one,
/// so with the default 24-card table this always terminates.
fn deal_until_set(engine: &mut GameEngine) -> [Card; 3] {
    loop {
        if let Some(triple) = find_any_valid_set(engine.table_cards()) {
            return triple;
        }
        engine.deal_more_cards().unwrap();
    }
}

/// First triple on the table that is not a valid set. With four or more
/// cards one always exists: the completion of any pair is unique.
fn find_invalid_triple(cards: &[Card]) -> [Card; 3] {
    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if !is_valid_set(cards[i], cards[j], cards[k]) {
                    return [cards[i], cards[j], cards[k]];
                }
            }
        }
    }
    panic!("table of {n} cards with every triple valid");
}

#[test]
fn new_game_observable_state() {
    let engine = engine();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.cards.len(), 12);
    assert_eq!(snapshot.deck_remaining, 69);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.selection, SelectionStatus::Pending);
    assert!(!snapshot.game_over);
    assert!(snapshot.cards.iter().all(|v| v.highlight == Highlight::Plain));
}

#[test]
fn matching_a_valid_set_scores_and_replenishes() {
    let mut engine = engine();
    let triple = deal_until_set(&mut engine);
    let score_before = engine.score();
    let table_before = engine.table_cards().len();

    for card in triple {
        engine.toggle_card(card).unwrap();
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.selection, SelectionStatus::Matched);
    assert_eq!(snapshot.score, score_before + engine.rules().score.on_match);
    for card in triple {
        let view = snapshot.cards.iter().find(|v| v.card == card).unwrap();
        assert_eq!(view.highlight, Highlight::Matched);
    }

    // The next toggle swaps the triple out and replenishes the table.
    let fresh = engine
        .table_cards()
        .iter()
        .copied()
        .find(|c| !triple.contains(c))
        .unwrap();
    engine.toggle_card(fresh).unwrap();

    assert_eq!(engine.table_cards().len(), table_before);
    for card in triple {
        assert!(!engine.table_cards().contains(&card));
    }
}

#[test]
fn mismatch_penalizes_and_next_toggle_starts_fresh() {
    let mut engine = engine();
    let triple = find_invalid_triple(engine.table_cards());
    let on_mismatch = engine.rules().score.on_mismatch;

    for card in triple {
        engine.toggle_card(card).unwrap();
    }

    assert_eq!(engine.selection_status(), SelectionStatus::Mismatched);
    assert_eq!(engine.score(), on_mismatch);
    // A mismatch removes nothing from the table.
    assert_eq!(engine.table_cards().len(), 12);

    // Fourth toggle: old selection cleared, only the new card selected.
    let fresh = engine
        .table_cards()
        .iter()
        .copied()
        .find(|c| !triple.contains(c))
        .unwrap();
    engine.toggle_card(fresh).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.selection, SelectionStatus::Pending);
    assert_eq!(snapshot.selected_cards().collect::<Vec<_>>(), vec![fresh]);
}

#[test]
fn hint_on_an_empty_table_reports_no_set() {
    // A rule variant with no opening deal gives a table guaranteed to hold
    // no set.
    let rules = GameRules::new().with_opening_deal(0);
    let mut engine = GameEngine::with_seed(rules, 42);

    let hint = engine.request_hint();

    assert_eq!(hint, None);
    assert_eq!(engine.score(), engine.rules().score.on_getting_help);
    assert!(engine.table_cards().is_empty());
    assert_eq!(engine.selection_status(), SelectionStatus::Pending);
}

#[test]
fn hint_reports_a_triple_that_passes_the_matcher() {
    let mut engine = engine();
    deal_until_set(&mut engine);

    let [a, b, c] = engine.request_hint().expect("table holds a set");

    assert!(is_valid_set(a, b, c));
    assert!(engine.table_cards().contains(&a));
    assert!(engine.table_cards().contains(&b));
    assert!(engine.table_cards().contains(&c));
}

#[test]
fn dealing_stops_at_table_capacity() {
    let mut engine = engine();

    // 12 on the table, capacity 24: four deals of 3 fit.
    for _ in 0..4 {
        assert_eq!(engine.deal_more_cards().unwrap(), 3);
    }
    assert_eq!(engine.table_cards().len(), 24);

    let err = engine.deal_more_cards().unwrap_err();
    assert_eq!(err, GameError::NoCapacity);
}

#[test]
fn playing_to_the_end_exhausts_deck_and_flags_game_over() {
    let mut engine = engine();
    let mut matched = 0usize;

    loop {
        if let Some(triple) = find_any_valid_set(engine.table_cards()) {
            // A set remains, so the game cannot be over yet.
            assert!(!engine.is_game_over());

            for card in triple {
                engine.toggle_card(card).unwrap();
            }
            assert_eq!(engine.selection_status(), SelectionStatus::Matched);
            matched += 1;

            // Clear the resolved selection with one more toggle. Toggling
            // a surviving card leaves it selected; toggle again to drop
            // it. With no survivors, toggling a matched card just clears.
            match engine
                .table_cards()
                .iter()
                .copied()
                .find(|c| !triple.contains(c))
            {
                Some(survivor) => {
                    engine.toggle_card(survivor).unwrap();
                    engine.toggle_card(survivor).unwrap();
                }
                None => {
                    engine.toggle_card(triple[0]).unwrap();
                }
            }
            assert_eq!(engine.selection_status(), SelectionStatus::Pending);
        } else {
            match engine.deal_more_cards() {
                Ok(_) => {}
                Err(GameError::NoCapacity) => break,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }

    // The table can only be starved of sets by an empty deck; a full
    // 24-card table always holds one.
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.deck_remaining, 0);
    assert!(snapshot.game_over);
    assert!(engine.is_game_over());
    assert_eq!(find_any_valid_set(engine.table_cards()), None);

    // Every card is accounted for: matched triples left the game, the
    // rest is still face-up.
    assert_eq!(matched * 3 + engine.table_cards().len(), 81);
}

#[test]
fn start_new_game_resets_after_play() {
    let mut engine = engine();
    engine.deal_more_cards().unwrap();
    engine.request_hint();
    let card = engine.table_cards()[0];
    engine.toggle_card(card).unwrap();

    engine.start_new_game();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.cards.len(), 12);
    assert_eq!(snapshot.deck_remaining, 69);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.selection, SelectionStatus::Pending);
}

#[test]
fn score_floor_variant_never_goes_below_zero() {
    let rules = GameRules::default().with_score_floor(0);
    let mut engine = GameEngine::with_seed(rules, 42);

    engine.request_hint();
    engine.deal_more_cards().unwrap();

    assert_eq!(engine.score(), 0);
}

#[test]
fn snapshot_serializes_and_round_trips() {
    let mut engine = engine();
    let card = engine.table_cards()[0];
    engine.toggle_card(card).unwrap();

    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: set_engine::GameSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, snapshot);
    assert_eq!(back.selected_cards().collect::<Vec<_>>(), vec![card]);
}
