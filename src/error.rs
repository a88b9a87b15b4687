use crate::facelets::{InputError, ValidationError};
use crate::piece::PieceError;
use crate::turn::TurnParseError;
use thiserror::Error;

/// Any failure from reading a cube or a move list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The facelet string has the wrong length or an unknown letter.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The faces don't describe a cube.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A piece shows colors from opposite faces.
    #[error(transparent)]
    Piece(#[from] PieceError),
    /// A move token isn't one of the twelve turns.
    #[error(transparent)]
    Turn(#[from] TurnParseError),
}
