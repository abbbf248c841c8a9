//! Game phase types.

/// Coarse lifecycle phase of a [`Game`](super::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No playable hands: nothing dealt yet, or a previous game drained a
    /// hand. [`Game::next_round`](super::Game::next_round) deals here.
    NeedsDeal,
    /// Both hands hold cards and rounds can be played.
    InProgress,
    /// The game reached a terminal result.
    GameOver,
}
