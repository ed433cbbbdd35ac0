//! Reasons a move can be rejected.

/// Error returned when a move cannot be applied.
///
/// Input-driven front ends treat every variant as a silent no-op; the
/// variants exist so callers and tests can tell rejections apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    AlreadyOccupied(usize),

    /// The cell index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The game already has a winner or the board is exhausted.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
