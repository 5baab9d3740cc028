//! Win condition checking
//!
//! A placement wins when it completes a run of five or more same-color stones
//! horizontally, vertically or along either diagonal. Overlines count.
//! Only the stone just placed is examined, scanning at most four cells each
//! way, so the check never looks past what a run of five through that stone
//! could cover.

use crate::board::{Board, Pos, Stone};

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Longest scan in one direction from the placed stone
const MAX_REACH: i32 = WIN_LENGTH as i32 - 1;

/// Direction vectors as (dx, dy)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Number of consecutive `color` stones from `pos` walking `(dx, dy)`,
/// excluding `pos` itself. Stops at the board edge, at an empty cell or at
/// an opponent stone.
fn reach(board: &Board, pos: Pos, color: Stone, dx: i32, dy: i32) -> i32 {
    let mut count = 0;
    for step in 1..=MAX_REACH {
        match pos.offset(dx, dy, step) {
            Some(next) if board.get(next) == color => count += 1,
            _ => break,
        }
    }
    count
}

/// Length of the run through `pos` along `(dx, dy)`, counting `pos` itself.
///
/// The result is capped at nine (four each way plus the centre).
pub fn run_length(board: &Board, pos: Pos, color: Stone, dx: i32, dy: i32) -> usize {
    (1 + reach(board, pos, color, dx, dy) + reach(board, pos, color, -dx, -dy)) as usize
}

/// Check whether a `color` stone at `pos` completes five in a row.
///
/// `pos` is assumed to hold `color` already; its own cell is not read.
#[inline]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| run_length(board, pos, color, dx, dy) >= WIN_LENGTH)
}

/// Cells of the winning run through `pos`, from the negative end to the
/// positive end of the first winning direction.
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty {
        return None;
    }

    for &(dx, dy) in &DIRECTIONS {
        let back = reach(board, pos, color, -dx, -dy);
        let forward = reach(board, pos, color, dx, dy);

        if (1 + back + forward) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .filter_map(|step| pos.offset(dx, dy, step))
                .collect();
            return Some(line);
        }
    }
    None
}
