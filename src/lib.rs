//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides the game-rules primitives (deck generation, shuffling,
//! dealing, hand scoring, and the dealer's drawing policy) and a [`Session`]
//! type that owns one player's round state and composes them into
//! `start_round`, `hit`, and `stand`.
//!
//! # Example
//!
//! ```
//! use bjlite::{RoundOutcome, Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default(), 42);
//! session.start_round().unwrap();
//! while session.player_value() < 17 {
//!     session.hit().unwrap();
//! }
//! session.stand().unwrap();
//!
//! let result = session.settle().unwrap();
//! assert_eq!(result.player_value, session.player_value());
//! assert_eq!(result.dealer_value, session.dealer_value());
//! assert!(session.dealer_value() >= 17);
//! if result.player_bust {
//!     assert_eq!(result.outcome, RoundOutcome::Lose);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, deal_card, generate_deck, shuffle_deck};
pub use error::{ActionError, DealError, SettleError};
pub use hand::{BLACKJACK, Hand, hand_value};
pub use options::SessionOptions;
pub use result::{RoundOutcome, RoundResult};
pub use session::{DealerPolicy, DealerState, RoundState, Session};
