//! Terminal-state rules: completed lines and full boards.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, line_complete};
