extern crate alloc;

use alloc::vec::Vec;

use tracing::{debug, trace, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, SettleError};
use crate::hand::Hand;
use crate::options::SessionOptions;
use crate::result::{RoundOutcome, RoundResult};

use super::{DealerState, RoundState, Session};

/// The dealer's fixed drawing rule.
///
/// The dealer draws while the hand is below `stands_on` and stands once it
/// reaches it. With `stand_on_soft` disabled, a soft total equal to
/// `stands_on` also draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    /// Hand value at which the dealer stops drawing.
    pub stands_on: u16,
    /// Whether the dealer stands on a soft total equal to `stands_on`.
    pub stand_on_soft: bool,
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self {
            stands_on: 17,
            stand_on_soft: true,
        }
    }
}

impl From<&SessionOptions> for DealerPolicy {
    fn from(options: &SessionOptions) -> Self {
        Self {
            stands_on: options.dealer_stands_on,
            stand_on_soft: options.stand_on_soft,
        }
    }
}

impl DealerPolicy {
    /// Returns the state the dealer is in for the given hand.
    #[must_use]
    pub fn state(&self, hand: &Hand) -> DealerState {
        let value = hand.value();
        let hits_soft = value == self.stands_on && hand.is_soft() && !self.stand_on_soft;
        if value < self.stands_on || hits_soft {
            DealerState::Drawing
        } else {
            DealerState::Standing
        }
    }

    /// Draws cards into the dealer's hand until the policy stands.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck runs out while the dealer
    /// must still draw. Cards drawn before that stay in the hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::{Card, Deck, DealerPolicy, Hand, Rank, Suit};
    ///
    /// let mut hand: Hand = [
    ///     Card::new(Suit::Hearts, Rank::Six),
    ///     Card::new(Suit::Clubs, Rank::Five),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let mut deck = Deck::from_draw_order(&[
    ///     Card::new(Suit::Spades, Rank::Nine),
    ///     Card::new(Suit::Diamonds, Rank::King),
    /// ]);
    ///
    /// let drawn = DealerPolicy::default().play(&mut hand, &mut deck).unwrap();
    /// assert_eq!(drawn, vec![Card::new(Suit::Spades, Rank::Nine)]);
    /// assert_eq!(hand.value(), 20);
    /// assert_eq!(deck.len(), 1);
    /// ```
    pub fn play(&self, hand: &mut Hand, deck: &mut Deck) -> Result<Vec<Card>, DealError> {
        let mut drawn_cards = Vec::new();

        while self.state(hand) == DealerState::Drawing {
            let card = deck.deal()?;
            hand.add_card(card);
            drawn_cards.push(card);
            trace!(%card, value = hand.value(), "dealer draws");
        }

        Ok(drawn_cards)
    }
}

impl Session {
    /// Dealer plays their hand according to the session's dealer policy.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, DealError> {
        self.state = RoundState::DealerTurn;

        let policy = DealerPolicy::from(&self.options);
        let drawn = policy
            .play(&mut self.dealer_hand, &mut self.deck)
            .inspect_err(|_| warn!("deck exhausted during dealer play"))?;

        self.state = RoundState::RoundOver;
        Ok(drawn)
    }

    /// Compares the final hands and determines the outcome.
    ///
    /// A player bust always loses; otherwise a dealer bust loses; otherwise
    /// the higher value wins and equal values push. Settling is optional:
    /// the final values can be read directly with
    /// [`Session::player_value`] and [`Session::dealer_value`].
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::InvalidState`] if the round is not over.
    pub fn settle(&self) -> Result<RoundResult, SettleError> {
        if self.state != RoundState::RoundOver {
            return Err(SettleError::InvalidState);
        }

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let player_bust = self.player_hand.is_bust();
        let dealer_bust = self.dealer_hand.is_bust();

        let outcome = if player_bust {
            RoundOutcome::Lose
        } else if dealer_bust || player_value > dealer_value {
            RoundOutcome::Win
        } else if player_value < dealer_value {
            RoundOutcome::Lose
        } else {
            RoundOutcome::Push
        };

        debug!(?outcome, player_value, dealer_value, "settled round");

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            player_bust,
            dealer_bust,
        })
    }
}
