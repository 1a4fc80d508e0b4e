/// Top-level state of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// A game is in progress
    Active,
    /// Menu or game over; the Play control is shown
    Inactive,
}
