//! Session controller and round flow.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::{Deck, generate_deck, shuffle_deck};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::SessionOptions;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DealerPolicy;
pub use state::{DealerState, RoundState};

/// A single-player blackjack session.
///
/// The session exclusively owns the deck, both hands, and the round state.
/// Every mutation goes through `&mut self`, so a card can never be dealt
/// twice or lost between the deck and the hands.
///
/// # Example
///
/// ```
/// use bjlite::{RoundState, Session, SessionOptions};
///
/// let mut session = Session::new(SessionOptions::default(), 42);
/// session.start_round().unwrap();
/// assert_eq!(session.player_hand().len(), 2);
/// assert_eq!(session.cards_remaining(), 48);
///
/// session.stand().unwrap();
/// assert_eq!(session.state(), RoundState::RoundOver);
/// assert!(session.dealer_value() >= 17);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    /// Session options.
    options: SessionOptions,
    /// Cards left to deal this round.
    deck: Deck,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// Whether the player has stood this round.
    player_stood: bool,
    /// Current round state.
    state: RoundState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// The session starts with a shuffled deck and empty hands; call
    /// [`Session::start_round`] to deal.
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = shuffle_deck(generate_deck(), &mut rng);

        Self {
            options,
            deck,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            player_stood: false,
            state: RoundState::WaitingForDeal,
            rng,
        }
    }

    /// Starts a new round with a freshly shuffled deck.
    ///
    /// Any previous round is discarded. Two cards are dealt to the player,
    /// then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] only if the opening four cards cannot
    /// be dealt, which a full deck always can.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        let deck = shuffle_deck(generate_deck(), &mut self.rng);
        self.start_round_with_deck(deck)
    }

    /// Starts a new round dealing from a prepared deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck holds fewer than four
    /// cards. The dealt cards are then put back, the hands are left empty,
    /// and the session waits for a new deal.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), DealError> {
        self.deck = deck;
        self.player_hand = Hand::new();
        self.dealer_hand = Hand::new();
        self.player_stood = false;
        self.state = RoundState::WaitingForDeal;

        if let Err(err) = self.deal_opening_hands() {
            let dealt: Vec<Card> = self
                .player_hand
                .cards()
                .iter()
                .chain(self.dealer_hand.cards())
                .copied()
                .collect();
            self.deck = Deck::from_draw_order(&dealt);
            self.player_hand = Hand::new();
            self.dealer_hand = Hand::new();
            return Err(err);
        }

        self.state = RoundState::PlayerTurn;
        debug!(
            player_value = self.player_hand.value(),
            dealer_value = self.dealer_hand.value(),
            remaining = self.deck.len(),
            "dealt new round"
        );

        Ok(())
    }

    /// Deals two cards to the player, then two to the dealer.
    fn deal_opening_hands(&mut self) -> Result<(), DealError> {
        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }
        Ok(())
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, DealError> {
        self.deck.deal().inspect_err(|_| {
            warn!(state = ?self.state, "deck exhausted");
        })
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the player's hand value.
    #[must_use]
    pub fn player_value(&self) -> u16 {
        self.player_hand.value()
    }

    /// Returns the dealer's hand value.
    #[must_use]
    pub fn dealer_value(&self) -> u16 {
        self.dealer_hand.value()
    }

    /// Returns whether the player has stood this round.
    #[must_use]
    pub const fn player_stood(&self) -> bool {
        self.player_stood
    }
}
