//! Win detection.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// One of the eight winning lines.
///
/// The declaration order is the external line numbering: rows top to
/// bottom (0-2), columns left to right (3-5), then the main diagonal (6)
/// and the anti-diagonal (7). Renderers rely on these numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum WinLine {
    /// Squares 0, 1, 2.
    TopRow,
    /// Squares 3, 4, 5.
    MiddleRow,
    /// Squares 6, 7, 8.
    BottomRow,
    /// Squares 0, 3, 6.
    LeftColumn,
    /// Squares 1, 4, 7.
    CenterColumn,
    /// Squares 2, 5, 8.
    RightColumn,
    /// Squares 0, 4, 8.
    MainDiagonal,
    /// Squares 2, 4, 6.
    AntiDiagonal,
}

impl WinLine {
    /// All lines in table order.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// Table index (0-7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Line with the given table index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// True when all three squares hold `mark`.
    pub fn is_held_by(self, board: &Board, mark: Mark) -> bool {
        self.positions()
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark))
    }
}

impl From<WinLine> for u8 {
    fn from(line: WinLine) -> Self {
        line.index() as u8
    }
}

impl TryFrom<u8> for WinLine {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(usize::from(value))
            .ok_or_else(|| format!("Winning line index {} is out of range (must be 0-7)", value))
    }
}

/// Returns the first line, in table order, completed by `mark`.
///
/// Several lines can be complete at once; the lowest-numbered one wins.
pub fn line_complete(board: &Board, mark: Mark) -> Option<WinLine> {
    WinLine::ALL
        .into_iter()
        .find(|line| line.is_held_by(board, mark))
}
