//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing a new hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The options ask for more cards than the deck holds.
    #[error("not enough cards in the deck for the requested hand size")]
    NotEnoughCards,
}

/// Errors that can occur when applying an action.
///
/// Every variant is an "invalid operation for the current state" report: the
/// state is left unchanged and control returns to the same actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A suit must be declared before any other action.
    #[error("a suit must be declared before any other action")]
    DeclarePending,
    /// No suit declaration is pending.
    #[error("no suit declaration is pending")]
    NoDeclarePending,
    /// The played card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// The hand does not hold the seven of the cut suit.
    #[error("hand does not hold the seven of the cut suit")]
    MissingCutCard,
    /// The hand's points exceed the cut threshold.
    #[error("hand points exceed the cut threshold")]
    OverCutThreshold,
}

/// Errors that can occur while parsing the textual card encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is too short to name a card.
    #[error("card token is too short")]
    TooShort,
    /// The rank symbol is not one of `A`, `2`..`9`, `10`, `J`, `Q`, `K`.
    #[error("unrecognized rank symbol")]
    UnknownRank,
    /// The suit symbol is not one of `C`, `D`, `H`, `S`.
    #[error("unrecognized suit symbol")]
    UnknownSuit,
}
