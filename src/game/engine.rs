//! The game driver.
//!
//! `Game` ties the corpus, the table state, the shuffler and the draw
//! animation together and is the only thing the presentation layer talks
//! to. All commands go through `apply`, which records them in the history.

use im::Vector;

use super::animation::{AnimationTicket, DrawAnimation};
use super::command::{Command, CommandRecord, Outcome};
use super::state::GameState;
use super::view::TableView;
use crate::cards::{CardId, CardRegistry, Category};
use crate::collaborators::LeadCard;
use crate::core::{GameConfig, GameRng, Shuffler};
use crate::search::{search_cards, SearchHit};

/// One player's game.
///
/// ## Example
///
/// ```
/// use pathology_cards::cards::CardRegistry;
/// use pathology_cards::core::GameConfig;
/// use pathology_cards::game::{Game, Outcome};
///
/// let registry = CardRegistry::builtin().unwrap();
/// let mut game = Game::new(registry, GameConfig::new().with_seed(42));
///
/// let Outcome::Drawn(card) = game.draw_next() else { panic!("deck is full") };
/// game.keep();
///
/// assert_eq!(game.state().hand().to_vec(), vec![card]);
/// assert!(game.state().check_invariants(game.registry()).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Game<R: Shuffler = GameRng> {
    config: GameConfig,
    registry: CardRegistry,
    state: GameState,
    shuffler: R,
    animation: DrawAnimation,
    history: Vector<CommandRecord>,
}

impl Game<GameRng> {
    /// Create a game shuffled by a `GameRng`, seeded from the config.
    ///
    /// The first deal happens immediately.
    #[must_use]
    pub fn new(registry: CardRegistry, config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::debug!("game rng seed {}", rng.seed());
        Self::with_shuffler(registry, config, rng)
    }
}

impl<R: Shuffler> Game<R> {
    /// Create a game with an explicit shuffler.
    ///
    /// The first deal happens immediately.
    #[must_use]
    pub fn with_shuffler(registry: CardRegistry, config: GameConfig, shuffler: R) -> Self {
        let mut game = Self {
            config,
            registry,
            state: GameState::new(),
            shuffler,
            animation: DrawAnimation::new(),
            history: Vector::new(),
        };
        game.apply(Command::NewGame);
        game
    }

    /// Apply one command.
    ///
    /// Never fails: commands that do not fit the current state are ignored
    /// and are not recorded in the history.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let registry = &self.registry;
        let outcome = match command {
            Command::NewGame => self.state.new_game(registry, &mut self.shuffler),
            Command::DrawNext => self.state.draw_next(registry),
            Command::Keep => self.state.keep(registry),
            Command::Discard => self.state.discard_selected(registry),
            Command::Select(card) => self.state.select(card),
            Command::ReclaimFromDiscard => self.state.reclaim_from_discard(registry),
            Command::SearchJumpTo(card) => self.state.search_jump_to(card, registry),
            Command::SetCategoryFilter(category) => {
                self.state
                    .set_category_filter(category, registry, &mut self.shuffler)
            }
        };

        match outcome {
            Outcome::Dealt => {
                self.animation.cancel();
                self.history.clear();
            }
            Outcome::Drawn(_) => {
                self.animation.start();
            }
            _ => {}
        }

        log::debug!("{command:?} -> {outcome:?}");
        if outcome.is_ignored() {
            return outcome;
        }
        self.history.push_back(CommandRecord {
            sequence: u32::try_from(self.history.len()).unwrap_or(u32::MAX),
            command,
            outcome,
        });
        outcome
    }

    // === Commands ===

    pub fn new_game(&mut self) -> Outcome {
        self.apply(Command::NewGame)
    }

    pub fn draw_next(&mut self) -> Outcome {
        self.apply(Command::DrawNext)
    }

    pub fn keep(&mut self) -> Outcome {
        self.apply(Command::Keep)
    }

    pub fn discard(&mut self) -> Outcome {
        self.apply(Command::Discard)
    }

    pub fn select_card(&mut self, card: CardId) -> Outcome {
        self.apply(Command::Select(card))
    }

    pub fn reclaim_from_discard(&mut self) -> Outcome {
        self.apply(Command::ReclaimFromDiscard)
    }

    pub fn search_jump_to(&mut self, card: CardId) -> Outcome {
        self.apply(Command::SearchJumpTo(card))
    }

    pub fn set_category_filter(&mut self, category: Option<Category>) -> Outcome {
        self.apply(Command::SetCategoryFilter(category))
    }

    // === Animation ===

    /// Ticket of the running draw animation.
    #[must_use]
    pub fn animation_ticket(&self) -> Option<AnimationTicket> {
        self.animation.ticket()
    }

    /// Called by the presentation layer when an animation timer fires.
    ///
    /// Stale tickets from earlier draws are ignored.
    pub fn finish_animation(&mut self, ticket: AnimationTicket) -> bool {
        self.animation.finish(ticket)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    // === Queries ===

    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView::new(&self.registry, &self.state, self.animation.is_active())
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn shuffler(&self) -> &R {
        &self.shuffler
    }

    /// Commands applied since the last deal, the deal included.
    ///
    /// Ignored commands are left out, so the history grows only with
    /// state changes.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Free-text search over the whole corpus.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        search_cards(&self.registry, query, &self.config.search)
    }

    /// Hand cards as `{id, name}` pairs for a lead record.
    #[must_use]
    pub fn lead_cards(&self) -> Vec<LeadCard> {
        self.state
            .hand()
            .iter()
            .filter_map(|id| self.registry.get(id))
            .map(LeadCard::from)
            .collect()
    }
}
