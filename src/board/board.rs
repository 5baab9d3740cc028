//! Grid storage for the 15x15 board

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board, indexed as `cells[y][x]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.y as usize][pos.x as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone. Only the game state mutates the board.
    #[inline]
    pub(crate) fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.y as usize][pos.x as usize] = stone;
    }

    /// Remove a stone
    #[inline]
    pub(crate) fn remove_stone(&mut self, pos: Pos) {
        self.cells[pos.y as usize][pos.x as usize] = Stone::Empty;
    }

    /// Iterate over every occupied cell in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .map(move |pos| (pos, self.get(pos)))
            .filter(|&(_, stone)| stone != Stone::Empty)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&s| s != Stone::Empty)
            .count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
