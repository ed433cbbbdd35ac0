//! The 3x3 board.

use crate::error::MoveError;
use crate::player::{Mark, Square};
use crate::position::Position;
use crate::{CELL_COUNT, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Once a cell holds a mark it is never overwritten; only [`Board::clear`]
/// and [`Board::reset`] empty cells again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` in the cell, returning whether the board changed.
    ///
    /// Occupied and out-of-range cells leave the board untouched.
    #[instrument(skip(self))]
    pub fn mark(&mut self, cell: usize, mark: Mark) -> bool {
        self.try_mark(cell, mark).is_ok()
    }

    /// Places `mark` in the cell, reporting why the move was refused.
    #[instrument(skip(self))]
    pub fn try_mark(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        let square = self
            .squares
            .get_mut(cell)
            .ok_or(MoveError::OutOfRange(cell))?;

        if *square != Square::Empty {
            debug!(cell, "Cell already occupied");
            return Err(MoveError::AlreadyOccupied(cell));
        }

        *square = Square::Occupied(mark);
        Ok(())
    }

    /// Empties a single cell.
    #[instrument(skip(self))]
    pub fn clear(&mut self, cell: usize) {
        if let Some(square) = self.squares.get_mut(cell) {
            *square = Square::Empty;
        }
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }

    /// Snapshot of all nine cells.
    pub fn state(&self) -> [Square; CELL_COUNT] {
        self.squares
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Gets the square at a named position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True iff some winning line holds three identical marks.
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns the mark that completed a line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
