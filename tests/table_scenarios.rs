//! Table scenario tests.
//!
//! These walk the documented command sequences end to end on small corpora
//! with a pinned (identity) shuffle, so deck order is the corpus order.

use pathology_cards::cards::{CardDefinition, CardId, CardRegistry, Category};
use pathology_cards::core::{GameConfig, IdentityShuffle};
use pathology_cards::game::{Command, Game, Outcome};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a corpus of named cards; ids follow the slice order.
fn corpus(cards: &[(&str, Category)]) -> CardRegistry {
    let mut registry = CardRegistry::new();
    for (i, (name, category)) in cards.iter().enumerate() {
        let id = CardId::new(u32::try_from(i + 1).unwrap());
        registry.register(CardDefinition::new(id, *name, format!("{name} description"), *category));
    }
    registry
}

fn game(cards: &[(&str, Category)]) -> Game<IdentityShuffle> {
    init_logging();
    Game::with_shuffler(corpus(cards), GameConfig::new(), IdentityShuffle)
}

fn id(game: &Game<IdentityShuffle>, name: &str) -> CardId {
    game.registry()
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.id)
        .unwrap()
}

fn names(game: &Game<IdentityShuffle>, ids: Vec<CardId>) -> Vec<String> {
    ids.into_iter()
        .map(|id| game.registry().get(id).unwrap().name.clone())
        .collect()
}

const G: Category = Category::CongenitalGenetic;
const O: Category = Category::OperationalControl;

// =============================================================================
// Documented scenarios
// =============================================================================

/// Round trip through search: jumping back restores the previous card and
/// leaves the jumped-away card on top of the deck.
#[test]
fn test_search_jump_round_trip() {
    let mut game = game(&[("A", G), ("B", G), ("C", G)]);
    let (a, c) = (id(&game, "A"), id(&game, "C"));

    assert_eq!(names(&game, game.state().deck().to_vec()), vec!["A", "B", "C"]);

    game.draw_next();
    assert_eq!(game.state().current(), Some(a));
    assert_eq!(names(&game, game.state().deck().to_vec()), vec!["B", "C"]);

    game.search_jump_to(c);
    assert_eq!(game.state().current(), Some(c));
    assert_eq!(names(&game, game.state().deck().to_vec()), vec!["A", "B"]);

    game.search_jump_to(a);
    assert_eq!(game.state().current(), Some(a));
    assert_eq!(names(&game, game.state().deck().to_vec()), vec!["C", "B"]);
}

/// Drawing from an empty deck empties the table slot without failing.
#[test]
fn test_draw_exhaustion() {
    let mut game = game(&[("A", G)]);

    game.draw_next();
    assert_eq!(game.keep(), Outcome::NothingToDraw);
    assert!(game.state().deck().is_empty());
    assert_eq!(game.state().current(), None);
    assert_eq!(game.state().selected(), None);

    assert_eq!(game.draw_next(), Outcome::NothingToDraw);
    assert_eq!(game.state().current(), None);
    assert_eq!(game.state().selected(), None);
}

/// Changing the filter sends buried discards back to the deck and keeps
/// only the top card on the pile.
#[test]
fn test_filter_reshuffle() {
    let mut game = game(&[("X", G), ("Y", G), ("Z", G), ("W", G)]);
    let (x, y, z) = (id(&game, "X"), id(&game, "Y"), id(&game, "Z"));

    game.draw_next();
    game.discard();
    game.discard();
    game.discard();
    assert_eq!(game.state().discard().to_vec(), vec![x, y, z]);

    game.set_category_filter(Some(G));

    assert_eq!(game.state().discard().to_vec(), vec![z]);
    assert!(game.state().deck().contains(x));
    assert!(game.state().deck().contains(y));
    assert_eq!(game.state().current(), Some(id(&game, "W")));
}

/// Keep a card, then discard it from the hand: focus returns to the table.
#[test]
fn test_keep_then_discard() {
    let mut game = game(&[("A", G), ("B", G)]);
    let (a, b) = (id(&game, "A"), id(&game, "B"));

    game.draw_next();
    assert_eq!(game.state().current(), Some(a));

    game.keep();
    assert_eq!(game.state().hand().to_vec(), vec![a]);
    assert_eq!(game.state().current(), Some(b));
    assert!(game.state().deck().is_empty());

    game.select_card(a);
    game.discard();
    assert!(game.state().hand().is_empty());
    assert_eq!(game.state().discard().to_vec(), vec![a]);
    assert_eq!(game.state().selected(), Some(b));
}

/// Discard with nothing selected leaves the state byte-for-byte unchanged.
#[test]
fn test_discard_without_selection_is_noop() {
    let mut game = game(&[("A", G), ("B", O)]);
    assert_eq!(game.state().selected(), None);

    let before = serde_json::to_string(game.state()).unwrap();
    assert_eq!(game.discard(), Outcome::Ignored);
    let after = serde_json::to_string(game.state()).unwrap();

    assert_eq!(before, after);
}

// =============================================================================
// Filter behaviour
// =============================================================================

/// Draws skip cards outside the filter but leave them in deck order.
#[test]
fn test_filtered_draws_skip_other_categories() {
    let mut game = game(&[("A", G), ("B", O), ("C", G), ("D", O)]);

    game.set_category_filter(Some(O));
    assert_eq!(game.draw_next(), Outcome::Drawn(id(&game, "B")));
    assert_eq!(game.keep(), Outcome::Drawn(id(&game, "D")));
    assert_eq!(game.keep(), Outcome::NothingToDraw);

    assert_eq!(names(&game, game.state().deck().to_vec()), vec!["A", "C"]);

    game.set_category_filter(None);
    assert_eq!(game.draw_next(), Outcome::Drawn(id(&game, "A")));
}

/// A mismatched current card lands on the discard pile as its new top.
#[test]
fn test_filter_discards_mismatched_current() {
    let mut game = game(&[("A", G), ("B", O), ("C", G)]);
    let (a, b) = (id(&game, "A"), id(&game, "B"));

    game.draw_next();
    let outcome = game.set_category_filter(Some(O));

    assert_eq!(outcome, Outcome::Drawn(b));
    assert_eq!(game.state().discard_top(), Some(a));
    assert_eq!(game.view().category_filter, Some(O));
}

/// Reclaiming a card outside the active filter lifts the filter.
#[test]
fn test_reclaim_outside_filter_lifts_it() {
    let mut game = game(&[("A", G), ("B", O), ("C", G)]);
    let a = id(&game, "A");

    game.draw_next();
    game.set_category_filter(Some(O)); // A discarded, B drawn

    assert_eq!(game.reclaim_from_discard(), Outcome::Promoted(a));
    assert_eq!(game.state().category_filter(), None);
    assert_eq!(game.state().check_invariants(game.registry()), Ok(()));
}

// =============================================================================
// Discard pile and selection
// =============================================================================

/// The discard top can be focused, buried discards cannot.
#[test]
fn test_only_discard_top_is_selectable() {
    let mut game = game(&[("A", G), ("B", G), ("C", G)]);
    let (a, b) = (id(&game, "A"), id(&game, "B"));

    game.draw_next();
    game.discard();
    game.discard(); // discard [A, B], current C

    assert_eq!(game.select_card(a), Outcome::Ignored);
    assert_eq!(game.select_card(b), Outcome::Selected(b));
    assert!(game.view().is_discard_top_selected());
}

/// Reclaim with a hand card selected sends that card to the top of the deck.
#[test]
fn test_reclaim_with_hand_selection() {
    let mut game = game(&[("A", G), ("B", G), ("C", G), ("D", G)]);
    let (a, b, c) = (id(&game, "A"), id(&game, "B"), id(&game, "C"));

    game.draw_next();
    game.keep(); // hand [A], current B
    game.discard(); // discard [B], current C
    game.select_card(a);

    assert_eq!(game.reclaim_from_discard(), Outcome::Promoted(b));
    assert_eq!(game.state().deck().to_vec()[..2], [a, c]);
    assert!(game.state().hand().is_empty());
    assert_eq!(game.state().selected(), Some(b));
}

/// Commands dispatched through `apply` match the convenience methods.
#[test]
fn test_apply_dispatch() {
    let mut game = game(&[("A", G), ("B", G)]);
    let a = id(&game, "A");

    assert_eq!(game.apply(Command::DrawNext), Outcome::Drawn(a));
    assert_eq!(game.apply(Command::Select(a)), Outcome::Selected(a));
    assert_eq!(game.apply(Command::Keep), Outcome::Drawn(id(&game, "B")));
    assert_eq!(game.history().len(), 4);
}

/// The view hides the deck and all but the top of the discard pile.
#[test]
fn test_view_snapshot() {
    let mut game = game(&[("A", G), ("B", G), ("C", O)]);

    game.draw_next();
    game.keep();
    game.discard();

    let view = game.view();
    assert_eq!(view.deck_count, 0);
    assert_eq!(view.current.map(|c| c.name.as_str()), Some("C"));
    assert_eq!(view.hand.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["A"]);
    assert_eq!(view.discard_count, 1);
    assert_eq!(view.discard_top.map(|c| c.name.as_str()), Some("B"));
    assert!(view.can_keep());
    assert!(view.animating);
}
