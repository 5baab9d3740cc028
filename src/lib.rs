//! Omok: two-player five-in-a-row on a 15x15 board
//!
//! - Black moves first and players alternate
//! - Five or more stones in a row (any of four directions) wins
//! - The last move can be undone; reset starts a fresh game
//!
//! # Architecture
//!
//! - [`board`]: Board grid, stones and positions
//! - [`rules`]: Win detection
//! - [`game`]: Game state with placement, undo and reset
//! - [`config`]: Presentation settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use omok::{GameState, GameStatus, Stone};
//!
//! let mut game = GameState::new();
//! for x in 0..4 {
//!     game.place(x, 0).unwrap(); // Black
//!     game.place(x, 1).unwrap(); // White
//! }
//! let placed = game.place(4, 0).unwrap();
//! assert!(placed.won);
//! assert_eq!(game.status(), GameStatus::Won(Stone::Black));
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use game::{GameError, GameState, GameStatus, InvalidReason, Move, Placed};
