use lexigrid_core::Position;

/// Errors returned when applying player input to a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The position lies outside the grid.
    #[display("position {pos} is outside the grid")]
    OutOfBounds {
        /// The rejected position.
        pos: Position,
    },
    /// The cell is blocked and cannot hold a letter.
    #[display("cell {pos} is blocked")]
    BlockedCell {
        /// The rejected position.
        pos: Position,
    },
    /// The entered character is not a letter `A-Z`.
    #[display("{ch:?} is not a letter A-Z")]
    InvalidLetter {
        /// The rejected character.
        ch: char,
    },
}
