//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has been dealt yet.
    WaitingForDeal,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    ///
    /// Only observable when the deck ran out while the dealer was drawing.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
}

/// Dealer policy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// Dealer must draw another card.
    Drawing,
    /// Dealer is done drawing.
    Standing,
}
