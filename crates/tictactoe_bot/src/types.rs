//! Core domain types for the tic-tac-toe bot.

use super::error::{InvalidMoveError, MalformedBoardError};
use super::position::Position;
use super::symbols::SymbolSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed on the board by either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Cross (`×`), moves first on an empty board.
    Cross,
    /// Zero (`￮`).
    Zero,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Zero,
            Mark::Zero => Mark::Cross,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 board.
///
/// Boards are `Copy` values. [`Board::with_move`] returns a new board and
/// never touches the receiver, so search branches cannot alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Parses a board written with the default [`SymbolSet`].
    pub fn parse(text: &str) -> Result<Self, MalformedBoardError> {
        Self::parse_with(text, &SymbolSet::default())
    }

    /// Parses a board written with the given symbols.
    ///
    /// The text must hold exactly nine characters (not bytes), one per
    /// square in row-major order.
    #[instrument(skip(symbols))]
    pub fn parse_with(text: &str, symbols: &SymbolSet) -> Result<Self, MalformedBoardError> {
        let found = text.chars().count();
        if found != 9 {
            return Err(MalformedBoardError::WrongLength { found });
        }

        let mut squares = [Square::Empty; 9];
        for (index, symbol) in text.chars().enumerate() {
            squares[index] = symbols
                .square_for(symbol)
                .ok_or(MalformedBoardError::UnknownSymbol { symbol, index })?;
        }

        Ok(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns true when no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Boards reached by placing `mark` on each empty square, in index order.
    pub fn successors(&self, mark: Mark) -> impl Iterator<Item = (Position, Board)> + '_ {
        self.empty_positions().map(move |pos| {
            let mut next = *self;
            next.squares[pos.to_index()] = Square::Occupied(mark);
            (pos, next)
        })
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// # Errors
    ///
    /// Fails when `index` is outside 0-8 or the square is already taken.
    pub fn with_move(&self, index: usize, mark: Mark) -> Result<Self, InvalidMoveError> {
        let position =
            Position::from_index(index).ok_or(InvalidMoveError::OutOfBounds { index })?;
        self.with_mark(position, mark)
    }

    /// Same as [`Board::with_move`] for an already-validated position.
    pub fn with_mark(&self, position: Position, mark: Mark) -> Result<Self, InvalidMoveError> {
        super::contracts::SquareIsEmpty::check(self, position)?;
        let mut next = *self;
        next.squares[position.to_index()] = Square::Occupied(mark);
        Ok(next)
    }

    /// Writes the board back into its single-line text form.
    pub fn render(&self, symbols: &SymbolSet) -> String {
        self.squares.iter().map(|s| symbols.symbol_for(*s)).collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their index so a player can name them.
    pub fn display(&self, symbols: &SymbolSet) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&pos.to_string()),
                    occupied => result.push(symbols.symbol_for(occupied)),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = MalformedBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_symbols() {
        let board = Board::parse("×× ￮￮    ").unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::Cross));
        assert_eq!(board.get(Position::TopRight), Square::Empty);
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::Zero));
        assert_eq!(board.count(Mark::Cross), 2);
        assert_eq!(board.count(Mark::Zero), 2);
    }

    #[test]
    fn test_parse_counts_chars_not_bytes() {
        // Nine glyphs, but far more than nine bytes.
        let text = "×￮×￮×￮×￮×";
        assert!(text.len() > 9);
        assert!(Board::parse(text).is_ok());
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            Board::parse("××"),
            Err(MalformedBoardError::WrongLength { found: 2 })
        );
        assert_eq!(
            Board::parse("          "),
            Err(MalformedBoardError::WrongLength { found: 10 })
        );
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert_eq!(
            Board::parse("××X      "),
            Err(MalformedBoardError::UnknownSymbol {
                symbol: 'X',
                index: 2
            })
        );
    }

    #[test]
    fn test_render_inverts_parse() {
        let text = "×￮ ￮× ×  ";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.render(&SymbolSet::default()), text);
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_move(4, Mark::Cross).unwrap();
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Mark::Cross));
    }

    #[test]
    fn test_with_move_rejects_occupied() {
        let board = Board::new().with_move(4, Mark::Cross).unwrap();
        assert_eq!(
            board.with_move(4, Mark::Zero),
            Err(InvalidMoveError::SquareOccupied {
                position: Position::Center
            })
        );
    }

    #[test]
    fn test_with_move_rejects_out_of_bounds() {
        assert_eq!(
            Board::new().with_move(9, Mark::Cross),
            Err(InvalidMoveError::OutOfBounds { index: 9 })
        );
    }

    #[test]
    fn test_is_full() {
        assert!(!Board::new().is_full());
        assert!(Board::parse("×￮××￮￮￮××").unwrap().is_full());
    }

    #[test]
    fn test_display_grid() {
        let board = Board::parse("×   ￮    ").unwrap();
        assert_eq!(
            board.display(&SymbolSet::default()),
            "×|1|2\n-+-+-\n3|￮|5\n-+-+-\n6|7|8"
        );
    }
}
