//! GUI module for the Omok game
//!
//! Draws the board with egui/eframe and forwards clicks and button presses
//! to [`crate::game::GameState`].

mod app;
mod board_view;
mod theme;

pub use app::OmokApp;
pub use board_view::pixel_to_cell;
