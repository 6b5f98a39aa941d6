//! Characters used in the single-line board text.

use super::error::ConfigError;
use super::types::{Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The three characters of the board text format.
///
/// Defaults to the glyphs drawn by the desktop UI: `×`, `￮` and a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SymbolSet {
    /// Character for a cross.
    #[serde(default = "default_cross")]
    cross: char,
    /// Character for a zero.
    #[serde(default = "default_zero")]
    zero: char,
    /// Character for an empty square.
    #[serde(default = "default_empty")]
    empty: char,
}

fn default_cross() -> char {
    '×'
}

fn default_zero() -> char {
    '￮'
}

fn default_empty() -> char {
    ' '
}

impl SymbolSet {
    /// Creates a symbol set, rejecting repeated characters.
    pub fn new(cross: char, zero: char, empty: char) -> Result<Self, ConfigError> {
        let set = Self { cross, zero, empty };
        set.validate()?;
        Ok(set)
    }

    /// Checks that the three characters are pairwise distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cross == self.zero || self.cross == self.empty || self.zero == self.empty {
            return Err(ConfigError::new(format!(
                "Board symbols must be distinct, got cross={:?} zero={:?} empty={:?}",
                self.cross, self.zero, self.empty
            )));
        }
        Ok(())
    }

    /// Maps a character to the square it denotes.
    pub fn square_for(&self, symbol: char) -> Option<Square> {
        match symbol {
            c if c == self.cross => Some(Square::Occupied(Mark::Cross)),
            c if c == self.zero => Some(Square::Occupied(Mark::Zero)),
            c if c == self.empty => Some(Square::Empty),
            _ => None,
        }
    }

    /// Maps a square to its character.
    pub fn symbol_for(&self, square: Square) -> char {
        match square {
            Square::Empty => self.empty,
            Square::Occupied(Mark::Cross) => self.cross,
            Square::Occupied(Mark::Zero) => self.zero,
        }
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            cross: default_cross(),
            zero: default_zero(),
            empty: default_empty(),
        }
    }
}
