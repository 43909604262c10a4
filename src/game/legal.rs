//! The legality evaluator.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

use super::Game;

impl Game {
    /// Computes the cards `player` may play right now, in hand order.
    ///
    /// The result is empty when the hand is over, when the player owes a
    /// suit declaration, or when a pending draw stands and the hand holds
    /// no two to stack on it (forcing a [`Action::Draw`](super::Action)).
    ///
    /// While the hand's points exceed the cut threshold, the seven of the
    /// cut suit is withheld even if it matches by rank or suit: it can only
    /// leave the hand through an explicit cut once the points come down.
    #[must_use]
    pub fn legal_plays(&self, player: usize) -> Vec<Card> {
        if self.winner.is_some() || self.awaiting_declare == Some(player) {
            return Vec::new();
        }

        let hand = &self.hands[player];

        // A pending draw narrows the choice to stacking twos.
        if self.pending_draw > 0 {
            return hand
                .cards()
                .iter()
                .copied()
                .filter(|c| c.rank == Rank::Two)
                .collect();
        }

        let reserve_cut_card = hand.points() > self.options.cut_threshold;
        let cut_card = self.cut_card();

        hand.cards()
            .iter()
            .copied()
            .filter(|&c| self.matches_top(c))
            .filter(|&c| !(reserve_cut_card && c == cut_card))
            .collect()
    }

    /// Whether a card may be placed on the current discard: rank match,
    /// ace (wild), or suit match against the declared suit if one stands,
    /// the top card's suit otherwise.
    fn matches_top(&self, card: Card) -> bool {
        let top = self.top_discard();
        let effective_suit = self.declared_suit.unwrap_or(top.suit);
        card.rank == top.rank || card.rank == Rank::Ace || card.suit == effective_suit
    }
}
