//! A two-player Matatu card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type holding one hand in progress: the
//! stock, the discard pile, both hands, and the pending-effect flags. The
//! legality evaluator ([`Game::legal_plays`]) computes what the player to
//! act may play, the transition function ([`Game::apply`]) applies one
//! chosen [`Action`], and [`choose_action`] is the greedy heuristic that
//! drives the non-human side.
//!
//! A fixed seed reproduces an entire hand, deal and reshuffles included.
//!
//! # Example
//!
//! ```
//! use matatu::{Game, GameOptions, choose_action};
//!
//! let mut game = Game::new(GameOptions::default(), 42)?;
//! while game.winner.is_none() {
//!     let action = choose_action(&game, game.current_player);
//!     game.apply(action)?;
//! #   break;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, DealError, ParseCardError};
pub use game::{Action, Game, PLAYERS, choose_action};
pub use hand::Hand;
pub use options::GameOptions;
