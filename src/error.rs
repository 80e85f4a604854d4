use crate::engine::Outcome;

/// Errors returned by the game engine
///
/// A drop into a full column is not an error, see [`Placement::Rejected`].
///
/// [`Placement::Rejected`]: crate::engine::Placement::Rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The board would have no rows or no columns, or too many cells to address
    #[error("invalid board size {height}x{width}, height and width must both be at least 1 and their product must fit in a usize")]
    InvalidDimension { height: usize, width: usize },

    /// The column does not exist on this board
    #[error("column {column} out of range, columns must be less than {width}")]
    OutOfRange { column: usize, width: usize },

    /// A piece was dropped after the game ended
    #[error("the game is over: {outcome}")]
    GameOver { outcome: Outcome },
}
