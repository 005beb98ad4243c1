use crate::logic::board::{Board, Move};
use crate::logic::player::PlayerRotation;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
    #[error("the game is already decided")]
    GameOver,
    #[error("move at ({row}, {col}) carries no player label")]
    Unlabelled { row: usize, col: usize },
    #[error("label '{0}' does not belong to either player")]
    UnknownPlayer(char),
    #[error("board is {found}x{found}, expected {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Checks that `mv` targets an empty, in-range cell of an undecided game.
pub fn validate_move(board: &Board, has_winner: bool, mv: &Move) -> Result<(), MoveError> {
    let Some(cell) = board.get(mv.row, mv.col) else {
        return Err(MoveError::OutOfBounds {
            row: mv.row,
            col: mv.col,
            size: board.size(),
        });
    };

    if has_winner {
        return Err(MoveError::GameOver);
    }

    if cell.is_played() {
        return Err(MoveError::Occupied {
            row: mv.row,
            col: mv.col,
        });
    }

    Ok(())
}

/// Checks that `mv` is labelled with one of the two players' symbols.
pub fn validate_label(players: &PlayerRotation, mv: &Move) -> Result<char, MoveError> {
    let label = mv.label.ok_or(MoveError::Unlabelled {
        row: mv.row,
        col: mv.col,
    })?;
    players
        .find(label)
        .map(|player| player.label)
        .ok_or(MoveError::UnknownPlayer(label))
}

/// Checks that every label on an injected board belongs to a player.
pub fn validate_position(
    board: &Board,
    expected_size: usize,
    players: &PlayerRotation,
) -> Result<(), MoveError> {
    if board.size() != expected_size {
        return Err(MoveError::SizeMismatch {
            expected: expected_size,
            found: board.size(),
        });
    }

    for cell in board.cells().iter().filter(|cell| cell.is_played()) {
        validate_label(players, cell)?;
    }
    Ok(())
}
