//! Game configuration options.

/// Configuration options for a Matatu game.
///
/// The defaults are the house rules: seven cards per hand and a cut
/// threshold of 25 points.
///
/// ```
/// use matatu::GameOptions;
///
/// let options = GameOptions::default().with_hand_size(5);
/// assert_eq!(options.hand_size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt to each player.
    pub hand_size: usize,
    /// Maximum hand points at which cutting is still allowed. Above this
    /// threshold the seven of the cut suit is also withheld from ordinary
    /// play.
    pub cut_threshold: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            cut_threshold: 25,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use matatu::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the cut threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use matatu::GameOptions;
    ///
    /// let options = GameOptions::default().with_cut_threshold(30);
    /// assert_eq!(options.cut_threshold, 30);
    /// ```
    #[must_use]
    pub const fn with_cut_threshold(mut self, threshold: u32) -> Self {
        self.cut_threshold = threshold;
        self
    }
}
