extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{RoundState, Session};

impl Session {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust does not end the turn unless
    /// [`SessionOptions::end_turn_on_bust`](crate::SessionOptions::end_turn_on_bust)
    /// is set, in which case the round is over and the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player_hand.add_card(card);

        let value = self.player_hand.value();
        debug!(%card, value, "player hits");

        if self.options.end_turn_on_bust && self.player_hand.is_bust() {
            debug!(value, "player bust ends round");
            self.state = RoundState::RoundOver;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Runs the dealer policy to completion and returns the cards the dealer
    /// drew.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or the deck runs out
    /// while the dealer is drawing. In the latter case the session stays in
    /// [`RoundState::DealerTurn`] until a new round is started.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        self.ensure_player_turn()?;

        self.player_stood = true;
        debug!(value = self.player_hand.value(), "player stands");

        let drawn = self.dealer_play()?;
        debug!(
            drawn = drawn.len(),
            dealer_value = self.dealer_hand.value(),
            "dealer stands"
        );

        Ok(drawn)
    }
}
