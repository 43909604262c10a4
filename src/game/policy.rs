//! The greedy heuristic policy driving the non-human side.

use crate::card::{Rank, Suit};
use crate::hand::Hand;

use super::{Action, Game};

/// Chooses an action for `player`.
///
/// A pure function of the game's public surface (the legality evaluator,
/// hand points, the cut suit); it never fails and never returns an action
/// the engine would reject. Decision order:
///
/// 1. Resolve a pending declaration with the majority suit in hand.
/// 2. Cut opportunistically whenever eligible, even if plays exist.
/// 3. Draw when nothing is legal.
/// 4. Under a pending draw, chain a two rather than absorb the penalty.
/// 5. Unload specials in the fixed order two, eight, jack, ace. An ace is
///    played bare; the declaration follows on the next invocation.
/// 6. Otherwise unload the legal card with the highest rank ordinal. This
///    is rank order, not point value; it is deliberately not
///    points-minimizing.
#[must_use]
pub fn choose_action(game: &Game, player: usize) -> Action {
    if game.awaiting_declare == Some(player) {
        return Action::Declare(majority_suit(&game.hands[player]));
    }

    let plays = game.legal_plays(player);

    if game.can_cut(player) {
        return Action::Cut;
    }

    if plays.is_empty() {
        return Action::Draw;
    }

    if game.pending_draw > 0 {
        if let Some(&two) = plays.iter().find(|c| c.rank == Rank::Two) {
            return play(two);
        }
    }

    for rank in [Rank::Two, Rank::Eight, Rank::Jack, Rank::Ace] {
        if let Some(&card) = plays.iter().find(|c| c.rank == rank) {
            return play(card);
        }
    }

    let card = plays
        .into_iter()
        .max_by_key(|c| c.rank)
        .expect("plays is non-empty here");
    play(card)
}

const fn play(card: crate::card::Card) -> Action {
    Action::Play {
        card,
        declared_suit: None,
    }
}

/// The suit with the most cards in hand; ties go to the first maximal suit
/// in [`Suit::ALL`] order.
fn majority_suit(hand: &Hand) -> Suit {
    let mut counts = [0_usize; 4];
    for card in hand.cards() {
        counts[card.suit as usize] += 1;
    }

    let mut best = Suit::Clubs;
    for suit in Suit::ALL {
        if counts[suit as usize] > counts[best as usize] {
            best = suit;
        }
    }
    best
}
