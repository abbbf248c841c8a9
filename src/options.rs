//! Game configuration options.

/// Deal ceiling: number of top-level rounds before the game is force-ended.
pub const MAX_DEALS: u32 = 100;

/// Number of face-down cards each player commits to a war.
pub const WAR_FACE_DOWN: usize = 3;

/// Configuration options for a War game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_max_deals(40)
///     .with_war_face_down(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of top-level rounds after which the game is force-ended by
    /// comparing hand sizes.
    pub max_deals: u32,
    /// Number of face-down cards each player commits to a war (fewer if a
    /// hand runs short).
    pub war_face_down: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_deals: MAX_DEALS,
            war_face_down: WAR_FACE_DOWN,
        }
    }
}

impl GameOptions {
    /// Sets the deal ceiling.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_deals(10);
    /// assert_eq!(options.max_deals, 10);
    /// ```
    #[must_use]
    pub const fn with_max_deals(mut self, max_deals: u32) -> Self {
        self.max_deals = max_deals;
        self
    }

    /// Sets the number of face-down cards committed to a war.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_face_down(1);
    /// assert_eq!(options.war_face_down, 1);
    /// ```
    #[must_use]
    pub const fn with_war_face_down(mut self, war_face_down: usize) -> Self {
        self.war_face_down = war_face_down;
        self
    }
}
