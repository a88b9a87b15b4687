#![warn(clippy::all, clippy::pedantic)]
// Run with `cargo clippy --all -- -D warnings`.
#![deny(missing_docs)]
//! A 3x3x3 cube modeled as 20 pieces, with the twelve face turns as
//! permutations over them, and a reader for 54-letter facelet strings.
//!
//! ```
//! use piece_cube_rs::{Cube, Turn};
//!
//! let mut cube = Cube::new();
//! cube.apply(Turn::R);
//! cube.apply(Turn::RI);
//! assert!(cube.is_solved());
//! ```

pub mod color;
pub mod cube;
mod error;
pub mod face;
pub mod facelets;
mod layout;
pub mod piece;
pub mod replay;
pub mod turn;

pub use color::{color_name, group_of, Color, Group};
pub use cube::Cube;
pub use error::Error;
pub use face::Face;
pub use facelets::{
    compose, decompose, decompose_codes, validate, Faces, InputError, ValidationError,
};
pub use layout::FACELET_COUNT;
pub use piece::{Piece, PieceError, PieceId, Sticker};
pub use replay::{play, Frame, Replay, ReplayOptions};
pub use turn::{parse_moves, Turn, TurnParseError, TurnType};
