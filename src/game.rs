//! Game state: board, turn and move history
//!
//! [`GameState`] is the only owner of the board. Placement, undo and reset go
//! through it; the front end reads the board and history back to redraw.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::board::{Board, Pos, Stone};
use crate::rules::win::{check_win, winning_line};

/// A stone that was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub color: Stone,
}

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
}

/// Outcome of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub mv: Move,
    /// The move completed five in a row. The turn was not advanced.
    pub won: bool,
}

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfBounds,
    Occupied,
    GameOver,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidReason::OutOfBounds => "outside the board",
            InvalidReason::Occupied => "cell already occupied",
            InvalidReason::GameOver => "game is over",
        })
    }
}

/// Rejected operations. Neither changes any state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move at ({x}, {y}): {reason}")]
    InvalidMove { x: i32, y: i32, reason: InvalidReason },

    #[error("nothing to undo")]
    EmptyHistory,
}

/// Board, turn and history for one game
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Stone,
    history: Vec<Move>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Stone::Black,
            history: Vec::with_capacity(crate::board::TOTAL_CELLS),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color that places the next stone. After a win this stays the winner.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Moves in the order they were played
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Derived from the last move: placements stop after a win, so only the
    /// most recent stone can have completed a line.
    pub fn status(&self) -> GameStatus {
        match self.history.last() {
            Some(mv) if check_win(&self.board, mv.pos, mv.color) => GameStatus::Won(mv.color),
            _ => GameStatus::InProgress,
        }
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.status() {
            GameStatus::Won(color) => Some(color),
            GameStatus::InProgress => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Cells of the winning run, if the game has been won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let mv = self.history.last()?;
        winning_line(&self.board, mv.pos, mv.color)
    }

    /// Place the current turn's stone at column `x`, row `y`.
    ///
    /// Coordinates are signed so that raw input can be passed straight
    /// through; anything off the board is rejected.
    pub fn place(&mut self, x: i32, y: i32) -> Result<Placed, GameError> {
        let invalid = |reason| GameError::InvalidMove { x, y, reason };

        if self.is_over() {
            trace!(x, y, "placement refused after win");
            return Err(invalid(InvalidReason::GameOver));
        }

        let pos = Pos::checked(x, y).ok_or_else(|| invalid(InvalidReason::OutOfBounds))?;
        if !self.board.is_empty(pos) {
            trace!(x, y, "placement refused on occupied cell");
            return Err(invalid(InvalidReason::Occupied));
        }

        let color = self.turn;
        self.board.place_stone(pos, color);
        let mv = Move { pos, color };
        self.history.push(mv);

        let won = check_win(&self.board, pos, color);
        if won {
            info!(x, y, winner = color.name(), moves = self.history.len(), "five in a row");
        } else {
            self.turn = color.opponent();
            debug!(x, y, color = color.name(), "stone placed");
        }

        Ok(Placed { mv, won })
    }

    /// Take back the most recent stone and give the turn back to its color.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let mv = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.board.remove_stone(mv.pos);
        self.turn = mv.color;
        debug!(x = mv.pos.x, y = mv.pos.y, color = mv.color.name(), "move undone");
        Ok(mv)
    }

    /// Clear the board and start over with Black to move
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.turn = Stone::Black;
        info!("game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};

    /// Play `moves` alternately starting with whoever is to move
    fn play(game: &mut GameState, moves: &[(i32, i32)]) -> Vec<Placed> {
        moves
            .iter()
            .map(|&(x, y)| game.place(x, y).expect("legal move"))
            .collect()
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert!(game.board().is_board_empty());
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_place_sets_cell_and_history() {
        let mut game = GameState::new();
        let placed = game.place(3, 5).unwrap();

        assert_eq!(placed, Placed { mv: Move { pos: Pos::new(3, 5), color: Stone::Black }, won: false });
        assert_eq!(game.board().get(Pos::new(3, 5)), Stone::Black);
        assert_eq!(game.history(), &[placed.mv]);
        assert_eq!(game.turn(), Stone::White);
    }

    #[test]
    fn test_every_empty_cell_accepts_a_stone() {
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let mut game = GameState::new();
            let placed = game.place(pos.x as i32, pos.y as i32).unwrap();
            assert!(!placed.won);
            assert_eq!(game.board().get(pos), Stone::Black);
        }
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = GameState::new();
        let placed = play(&mut game, &[(0, 0), (5, 5), (1, 0), (5, 6), (2, 0), (5, 7)]);
        let colors: Vec<_> = placed.iter().map(|p| p.mv.color).collect();
        assert_eq!(
            colors,
            vec![Stone::Black, Stone::White, Stone::Black, Stone::White, Stone::Black, Stone::White]
        );
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = GameState::new();
        game.place(7, 7).unwrap();
        let before = game.clone();

        let err = game.place(7, 7).unwrap_err();
        assert_eq!(err, GameError::InvalidMove { x: 7, y: 7, reason: InvalidReason::Occupied });
        assert_eq!(game.board(), before.board());
        assert_eq!(game.history(), before.history());
        assert_eq!(game.turn(), before.turn());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameState::new();
        let size = BOARD_SIZE as i32;
        for (x, y) in [(-1, 0), (0, -1), (size, 0), (0, size), (100, -100)] {
            let err = game.place(x, y).unwrap_err();
            assert!(matches!(
                err,
                GameError::InvalidMove { reason: InvalidReason::OutOfBounds, .. }
            ));
        }
        assert!(game.board().is_board_empty());
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_horizontal_win_stops_play() {
        let mut game = GameState::new();
        play(&mut game, &[(0, 0), (0, 5), (1, 0), (1, 5), (2, 0), (2, 5), (3, 0), (3, 5)]);
        let placed = game.place(4, 0).unwrap();

        assert!(placed.won);
        assert_eq!(game.status(), GameStatus::Won(Stone::Black));
        assert_eq!(game.winner(), Some(Stone::Black));
        // Turn is not advanced on a win
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.winning_line().map(|l| l.len()), Some(5));

        let before = game.clone();
        let err = game.place(10, 10).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove { reason: InvalidReason::GameOver, .. }));
        assert_eq!(game.board(), before.board());
        assert_eq!(game.history(), before.history());
    }

    #[test]
    fn test_undo_empty_history() {
        let mut game = GameState::new();
        assert_eq!(game.undo(), Err(GameError::EmptyHistory));
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_undo_restores_turn_and_cell() {
        let mut game = GameState::new();
        play(&mut game, &[(4, 4), (5, 5)]);

        let undone = game.undo().unwrap();
        assert_eq!(undone, Move { pos: Pos::new(5, 5), color: Stone::White });
        assert!(game.board().is_empty(Pos::new(5, 5)));
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.move_count(), game.board().stone_count());
    }

    #[test]
    fn test_undo_then_replace_round_trip() {
        let mut game = GameState::new();
        play(&mut game, &[(4, 4), (5, 5), (6, 6)]);
        let snapshot = game.board().clone();

        let undone = game.undo().unwrap();
        let placed = game.place(undone.pos.x as i32, undone.pos.y as i32).unwrap();

        assert_eq!(placed.mv, undone);
        assert_eq!(game.board(), &snapshot);
    }

    #[test]
    fn test_undo_winning_move_resumes_game() {
        let mut game = GameState::new();
        play(&mut game, &[(0, 0), (9, 9), (1, 1), (9, 10), (2, 2), (9, 11), (3, 3), (8, 12)]);
        assert!(game.place(4, 4).unwrap().won);

        let undone = game.undo().unwrap();
        assert_eq!(undone.color, Stone::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.turn(), Stone::Black);
        assert!(game.winning_line().is_none());

        // Play resumes
        assert!(game.place(4, 4).unwrap().won);
    }

    #[test]
    fn test_reset_from_won_game() {
        let mut game = GameState::new();
        play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0)]);
        assert!(game.is_over());

        game.reset();
        assert!(game.board().is_board_empty());
        assert!(game.history().is_empty());
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.place(4, 0).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidMove { x: 3, y: 15, reason: InvalidReason::OutOfBounds };
        assert_eq!(err.to_string(), "invalid move at (3, 15): outside the board");
        assert_eq!(GameError::EmptyHistory.to_string(), "nothing to undo");
    }
}
