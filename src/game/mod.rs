//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod legal;
mod policy;

pub use actions::Action;
pub use policy::choose_action;

/// Number of seats at the table. Matatu is strictly two-handed.
pub const PLAYERS: usize = 2;

/// Index of the player facing `player` across the table.
pub(crate) const fn opponent(player: usize) -> usize {
    player ^ 1
}

/// One Matatu hand in progress.
///
/// The game owns the stock, the discard pile, both hands, and the random
/// source. A fixed seed reproduces the entire hand: the deal, and every
/// reshuffle of the discard pile, draw from the same [`ChaCha8Rng`].
///
/// State moves exclusively through [`Game::apply`]; queries never mutate.
/// The fields are public so that drivers and tests can inspect (or stage)
/// positions directly, but mutating them outside the transition function
/// voids the invariants the engine maintains.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Draw stock. Stored back-to-front: `pop` yields the next card drawn.
    pub stock: Vec<Card>,
    /// Discard pile. A stack; the top card is the last element.
    pub discard: Vec<Card>,
    /// Both hands, indexed by player.
    pub hands: [Hand; PLAYERS],
    /// The player to act, 0 or 1.
    pub current_player: usize,
    /// Suit of the card burned at deal time. The seven of this suit is the
    /// cutting card.
    pub cut_suit: Suit,
    /// Accumulated forced-draw penalty from played twos.
    pub pending_draw: usize,
    /// Suit declared by a resolved ace, if any. Cleared whenever a non-ace
    /// card is played.
    pub declared_suit: Option<Suit>,
    /// The player who must declare a suit before anything else is legal for
    /// them, set while an ace sits unresolved on the discard pile.
    pub awaiting_declare: Option<usize>,
    /// The winner of the hand, once decided. Terminal: no further
    /// transitions apply.
    pub winner: Option<usize>,
    /// Random number generator, used by the deal and by reshuffles.
    pub rng: ChaCha8Rng,
}

impl Game {
    /// Deals a new hand with the given seed.
    ///
    /// The shuffled deck loses its first card to fix the cut suit (the
    /// burned card leaves play entirely), the next card seeds the discard
    /// pile, and each player receives `options.hand_size` cards dealt
    /// alternately, player 0 first. The remainder becomes the stock.
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for more cards than the deck
    /// holds.
    ///
    /// # Example
    ///
    /// ```
    /// use matatu::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42)?;
    /// assert_eq!(game.hands[0].len(), 7);
    /// assert_eq!(game.stock.len(), 36);
    /// # Ok::<(), matatu::DealError>(())
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = full_deck(&mut rng);

        // The shuffled deck is reversed once so that `pop` deals from the
        // top for the rest of the hand.
        deck.reverse();

        let burned = deck.pop().ok_or(DealError::NotEnoughCards)?;
        let cut_suit = burned.suit;

        let first_discard = deck.pop().ok_or(DealError::NotEnoughCards)?;

        let mut hands = [Hand::new(), Hand::new()];
        for _ in 0..options.hand_size {
            for hand in &mut hands {
                hand.push(deck.pop().ok_or(DealError::NotEnoughCards)?);
            }
        }

        Ok(Self {
            options,
            stock: deck,
            discard: alloc::vec![first_discard],
            hands,
            current_player: 0,
            cut_suit,
            pending_draw: 0,
            declared_suit: None,
            awaiting_declare: None,
            winner: None,
            rng,
        })
    }

    /// Returns the top card of the discard pile.
    ///
    /// # Panics
    ///
    /// Panics if the discard pile is empty. The deal seeds it with one card
    /// and every transition leaves at least one, so this only happens after
    /// direct field manipulation.
    #[must_use]
    pub fn top_discard(&self) -> Card {
        *self
            .discard
            .last()
            .expect("discard pile is never empty after the deal")
    }

    /// The cutting card: the seven of the cut suit.
    #[must_use]
    pub const fn cut_card(&self) -> Card {
        Card::new(self.cut_suit, Rank::Seven)
    }

    /// Returns whether `player` may cut: their hand holds the cutting card
    /// and totals no more than the cut threshold.
    #[must_use]
    pub fn can_cut(&self, player: usize) -> bool {
        let hand = &self.hands[player];
        hand.contains(self.cut_card()) && hand.points() <= self.options.cut_threshold
    }

    /// Number of cards in play across stock, discard, and both hands.
    ///
    /// Constant for the lifetime of a hand: one less than [`DECK_SIZE`]
    /// under the default options, the burned cut-reveal card being the
    /// difference.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.stock.len()
            + self.discard.len()
            + self.hands.iter().map(Hand::len).sum::<usize>()
    }

    /// Takes the next card from the stock, recycling the discard pile if
    /// the stock is exhausted.
    ///
    /// Returns `None` only when the stock is empty and there is nothing to
    /// recycle (the discard pile holds just its top card).
    pub(crate) fn take_from_stock(&mut self) -> Option<Card> {
        if self.stock.is_empty() {
            self.recycle_discard();
        }
        self.stock.pop()
    }

    /// Moves all of the discard pile except its top card into a reshuffled
    /// stock. The former top card remains as the sole discard.
    fn recycle_discard(&mut self) {
        let Some(top) = self.discard.pop() else {
            return;
        };
        self.stock.append(&mut self.discard);
        self.stock.shuffle(&mut self.rng);
        self.discard.push(top);
    }
}

/// Builds and shuffles the 52-card deck.
fn full_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards.shuffle(rng);
    cards
}
