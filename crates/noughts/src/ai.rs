//! Computer opponent: win if possible, else block, else play at random.
//!
//! The opponent looks exactly one move ahead. It has no defense against
//! forks, which keeps it beatable.

use crate::position::Position;
use crate::rng::MoveRng;
use crate::rules::LINES;
use crate::types::{Board, Mark, Player, Square};
use tracing::{debug, instrument};

/// Finds a move that completes a line for `player`.
///
/// Scans the 8 lines in their fixed order and returns the empty square of
/// the first line holding exactly two of `player`'s marks and one empty
/// square. The scan order is the tie-break when several lines qualify.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, player: Mark) -> Option<Position> {
    for line in LINES {
        let mut own = 0;
        let mut open = None;
        for pos in line {
            match board.get(pos) {
                Square::Occupied(p) if p == player => own += 1,
                Square::Empty => open = Some(pos),
                Square::Occupied(_) => {}
            }
        }
        if own == 2
            && let Some(pos) = open
        {
            return Some(pos);
        }
    }

    None
}

/// Chooses the computer's move. The computer always plays O.
///
/// Priority, evaluated in order:
/// 1. complete a line for O (take the win);
/// 2. complete a line for X (block the human);
/// 3. a uniformly random empty square from the injected RNG.
///
/// Returns `None` only when the board is full, which the turn protocol
/// never allows to happen.
#[instrument(skip(board, rng))]
pub fn choose_move(board: &Board, rng: &mut MoveRng) -> Option<Position> {
    if let Some(pos) = winning_move(board, Player::O) {
        debug!(position = %pos, "taking the win");
        return Some(pos);
    }

    if let Some(pos) = winning_move(board, Player::X) {
        debug!(position = %pos, "blocking the opponent");
        return Some(pos);
    }

    let open = Position::valid_moves(board);
    let pos = rng.choose(&open).copied();
    debug!(position = ?pos, open = open.len(), "random move");
    pos
}
