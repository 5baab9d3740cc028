//! Board rendering and click translation for the Omok GUI
//!
//! Each of the 15x15 cells is a square of `cell_size` points with the grid
//! lines running through the cell centres. A click maps to the cell it lands
//! in by flooring the offset from the board's top-left corner.

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::config::AppConfig;
use crate::game::GameState;

use super::theme::*;

/// Map an offset from the board origin to (column, row).
///
/// The result is not bounds checked; the game state rejects anything off
/// the board.
pub fn pixel_to_cell(offset: Vec2, cell_size: f32) -> (i32, i32) {
    let x = (offset.x / cell_size).floor() as i32;
    let y = (offset.y / cell_size).floor() as i32;
    (x, y)
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl BoardView {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            board_rect: Rect::NOTHING,
        }
    }

    /// Side length of the drawn board
    pub fn board_extent(&self) -> f32 {
        self.cell_size * BOARD_SIZE as f32
    }

    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, game: &GameState, config: &AppConfig) -> Option<(i32, i32)> {
        let extent = self.board_extent();
        ui.add_space(BOARD_PADDING);
        let (response, painter) = ui.allocate_painter(Vec2::splat(extent), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(2), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_stones(&painter, game.board());

        if config.show_last_move {
            if let Some(mv) = game.last_move() {
                self.draw_last_move_marker(&painter, mv.pos);
            }
        }

        if config.highlight_winning_line {
            if let Some(line) = game.winning_line() {
                self.draw_winning_line(&painter, &line);
            }
        }

        // No hover or clicks once the game is won
        if game.is_over() {
            return None;
        }

        if config.show_hover_preview {
            if let Some(pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                if game.board().is_empty(pos) {
                    self.draw_hover_preview(&painter, pos, game.turn());
                }
            }
        }

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .map(|p| pixel_to_cell(p - self.board_rect.min, self.cell_size));
        }

        None
    }

    /// Draw the 15x15 grid lines through cell centres
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let half = self.cell_size / 2.0;
        let far = self.board_extent() - half;

        for i in 0..BOARD_SIZE {
            let offset = half + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, half);
            let end = self.board_rect.min + Vec2::new(offset, far);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(half, offset);
            let end = self.board_rect.min + Vec2::new(far, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Redraw every stone from the current board
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (pos, stone) in board.stones() {
            self.draw_stone(painter, pos, stone);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let fill = match stone {
            Stone::Black => BLACK_STONE,
            Stone::White => WHITE_STONE,
            Stone::Empty => return,
        };
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        painter.circle_filled(center + Vec2::splat(SHADOW_OFFSET), radius, stone_shadow());
        painter.circle(center, radius, fill, Stroke::new(STONE_OUTLINE_WIDTH, STONE_OUTLINE));
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let color = match turn {
            Stone::Black => hover_black(),
            Stone::White => hover_white(),
            Stone::Empty => return,
        };
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(self.board_to_screen(pos), radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let (x, y) = pixel_to_cell(screen_pos - self.board_rect.min, self.cell_size);
        Pos::checked(x, y)
    }

    /// Centre of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let half = self.cell_size / 2.0;
        let x = self.board_rect.min.x + half + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + half + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
