//! Session configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjlite::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_dealer_stands_on(17)
///     .with_stand_on_soft(false);
/// assert!(!options.stand_on_soft);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Hand value at which the dealer stops drawing.
    pub dealer_stands_on: u16,
    /// Whether the dealer stands on a soft hand equal to `dealer_stands_on`.
    /// When false, the dealer keeps drawing on a soft total at the threshold.
    pub stand_on_soft: bool,
    /// Whether a player bust ends the player's turn and the round.
    /// When false, the player may keep acting after busting.
    pub end_turn_on_bust: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            stand_on_soft: true,
            end_turn_on_bust: false,
        }
    }
}

impl SessionOptions {
    /// Sets the value at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u16) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets whether the dealer stands on a soft total at the threshold.
    #[must_use]
    pub const fn with_stand_on_soft(mut self, stand: bool) -> Self {
        self.stand_on_soft = stand;
        self
    }

    /// Sets whether a player bust ends the round immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_end_turn_on_bust(true);
    /// assert!(options.end_turn_on_bust);
    /// ```
    #[must_use]
    pub const fn with_end_turn_on_bust(mut self, end: bool) -> Self {
        self.end_turn_on_bust = end;
        self
    }
}
