//! Deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered pile of cards. The top of the deck is the last card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in suit-major, rank-minor order.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, Rank::Ace));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from cards listed in the order they will be drawn.
    ///
    /// `cards[0]` is dealt first.
    #[must_use]
    pub fn from_draw_order(cards: &[Card]) -> Self {
        let mut cards = cards.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place.
    ///
    /// [`SliceRandom::shuffle`] is a Fisher-Yates backward pass, so every
    /// ordering is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if there are no cards left.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::EmptyDeck)
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Produces a fresh, unshuffled 52-card deck.
#[must_use]
pub fn generate_deck() -> Deck {
    Deck::new()
}

/// Returns the deck in a uniformly random order.
///
/// # Example
///
/// ```
/// use bjlite::{generate_deck, shuffle_deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let deck = shuffle_deck(generate_deck(), &mut rng);
/// assert_eq!(deck.len(), 52);
/// ```
#[must_use]
pub fn shuffle_deck<R: Rng + ?Sized>(mut deck: Deck, rng: &mut R) -> Deck {
    deck.shuffle(rng);
    deck
}

/// Removes and returns the top card of the deck.
///
/// # Errors
///
/// Returns [`DealError::EmptyDeck`] if the deck has no cards.
pub fn deal_card(deck: &mut Deck) -> Result<Card, DealError> {
    deck.deal()
}
