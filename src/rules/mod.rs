//! Game rules for Omok
//!
//! Five or more stones in a row wins. There are no captures, no forbidden
//! moves and no draw detection.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, run_length, winning_line, DIRECTIONS, WIN_LENGTH};
