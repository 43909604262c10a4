//! The transition function: applying one chosen action to the game.

use crate::card::{Card, Rank, Suit};
use crate::error::ActionError;

use super::{Game, opponent};

/// One player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play a card from the hand onto the discard pile.
    Play {
        /// The card to play.
        card: Card,
        /// Unused at play time under the two-phase ace rule: an ace is
        /// played bare and the suit follows as a separate
        /// [`Action::Declare`]. Present for forward compatibility with a
        /// one-step variant.
        declared_suit: Option<Suit>,
    },
    /// Draw from the stock: the accumulated penalty if one stands,
    /// otherwise a single card.
    Draw,
    /// Skip the turn without drawing.
    Pass,
    /// End the hand early by cutting with the seven of the cut suit.
    Cut,
    /// Declare the suit for a previously played ace.
    Declare(Suit),
}

impl Game {
    /// Applies one action for the current player.
    ///
    /// Once a winner is set the game is terminal and `apply` returns `Ok`
    /// without touching the state. A rejected action also leaves the state
    /// unchanged; the caller shows the reason and lets the actor choose
    /// again.
    ///
    /// Play does not re-check rank/suit legality: callers are expected to
    /// pre-filter through [`Game::legal_plays`]. Only membership in the
    /// acting hand is enforced.
    ///
    /// # Errors
    ///
    /// Returns the invalid-operation reason: an action other than
    /// [`Action::Declare`] while a declaration is pending, a declaration
    /// while none is pending, a played card absent from the hand, or a cut
    /// without the cutting card or over the point threshold.
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        if self.winner.is_some() {
            return Ok(());
        }

        match action {
            Action::Play { card, .. } => self.play(card),
            Action::Draw => self.draw(),
            Action::Pass => self.pass(),
            Action::Cut => self.cut(),
            Action::Declare(suit) => self.declare(suit),
        }
    }

    /// Plays `card` from the current player's hand.
    fn play(&mut self, card: Card) -> Result<(), ActionError> {
        let player = self.current_player;

        self.hands[player]
            .remove(card)
            .ok_or(ActionError::CardNotInHand)?;

        // Any play supersedes a standing declaration; only a subsequent
        // ace re-establishes one.
        self.declared_suit = None;
        self.discard.push(card);

        match card.rank {
            Rank::Two => {
                self.pending_draw += 2;
                self.current_player = opponent(player);
            }
            // Extra turn: the same player acts again.
            Rank::Eight | Rank::Jack => {}
            Rank::Ace => {
                // Two-phase ace: the suit declaration is a separate action,
                // and the win check waits for it.
                self.awaiting_declare = Some(player);
                return Ok(());
            }
            Rank::Seven if card.suit == self.cut_suit => {
                let total = self.hands[player].points();
                if total <= self.options.cut_threshold {
                    self.winner = Some(self.cut_winner(player, total));
                    return Ok(());
                }
                // Too many points to cut: the seven falls as an ordinary
                // play.
                self.current_player = opponent(player);
            }
            _ => {
                self.current_player = opponent(player);
            }
        }

        if self.hands[player].is_empty() {
            self.winner = Some(player);
        }
        Ok(())
    }

    /// Draws the pending penalty, or a single card if none stands.
    fn draw(&mut self) -> Result<(), ActionError> {
        if self.awaiting_declare.is_some() {
            return Err(ActionError::DeclarePending);
        }

        let count = if self.pending_draw > 0 {
            self.pending_draw
        } else {
            1
        };
        self.pending_draw = 0;

        let player = self.current_player;
        for _ in 0..count {
            // Stops short when the stock is dry and the discard pile has
            // nothing left to recycle.
            let Some(card) = self.take_from_stock() else {
                break;
            };
            self.hands[player].push(card);
        }

        self.current_player = opponent(player);
        Ok(())
    }

    /// Advances the turn without drawing.
    fn pass(&mut self) -> Result<(), ActionError> {
        if self.awaiting_declare.is_some() {
            return Err(ActionError::DeclarePending);
        }
        self.current_player = opponent(self.current_player);
        Ok(())
    }

    /// Cuts: ends the hand by comparing point totals.
    fn cut(&mut self) -> Result<(), ActionError> {
        if self.awaiting_declare.is_some() {
            return Err(ActionError::DeclarePending);
        }

        let player = self.current_player;
        let cut_card = self.cut_card();

        if !self.hands[player].contains(cut_card) {
            return Err(ActionError::MissingCutCard);
        }
        if self.hands[player].points() > self.options.cut_threshold {
            return Err(ActionError::OverCutThreshold);
        }

        // The cutting card goes face up on the pile; the comparison uses
        // the points left behind in the hand.
        self.hands[player].remove(cut_card);
        self.discard.push(cut_card);

        let remaining = self.hands[player].points();
        self.winner = Some(self.cut_winner(player, remaining));
        Ok(())
    }

    /// Declares the suit for a pending ace.
    fn declare(&mut self, suit: Suit) -> Result<(), ActionError> {
        let player = self.current_player;
        if self.awaiting_declare != Some(player) {
            return Err(ActionError::NoDeclarePending);
        }

        self.declared_suit = Some(suit);
        self.awaiting_declare = None;

        if self.hands[player].is_empty() {
            // The ace that forced this declaration was the last card.
            self.winner = Some(player);
        } else {
            // A resolved ace grants no extra turn.
            self.current_player = opponent(player);
        }
        Ok(())
    }

    /// Resolves a cut for `player` whose remaining hand totals `points`:
    /// strictly fewer points than the opponent wins, a tie goes to the
    /// opponent.
    fn cut_winner(&self, player: usize, points: u32) -> usize {
        if points < self.hands[opponent(player)].points() {
            player
        } else {
            opponent(player)
        }
    }
}
