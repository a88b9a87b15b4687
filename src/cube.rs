//! The piece store: 20 pieces plus the six fixed centers.

use crate::color::Color;
use crate::error::Error;
use crate::face::Face;
use crate::facelets::{compose, decompose, validate, Faces};
use crate::layout::{Cell, LAYOUT};
use crate::piece::{Piece, PieceError, PieceId, Sticker};
use log::debug;
use std::fmt;

/// A 3x3x3 cube stored piece by piece.
///
/// Pieces are mutated in place by [`Cube::apply`] and by the validated edit
/// entry points. Centers never move; they are only set when the cube is read
/// from facelets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pieces: [Piece; 20],
    centers: [Color; 6],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// A solved cube, Yellow up and Blue in front.
    #[must_use]
    pub fn new() -> Self {
        Cube {
            pieces: PieceId::ALL.map(Piece::solved),
            centers: Face::ALL.map(Face::color),
        }
    }

    /// Returns the colors shown by |id|.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Piece {
        self.pieces[id.index()]
    }

    /// Replaces the colors of |id|, if |piece| could physically sit there.
    /// On error the cube is left untouched.
    pub fn set(&mut self, id: PieceId, piece: Piece) -> Result<(), PieceError> {
        piece.check(id).inspect_err(|e| debug!("Rejecting edit: {e}"))?;
        self.pieces[id.index()] = piece;
        Ok(())
    }

    /// Edits a piece given its identifier token and raw color codes, e.g.
    /// `edit_piece("FU", &[1, 5])`. On error the cube is left untouched.
    pub fn edit_piece(&mut self, id: &str, codes: &[u8]) -> Result<(), PieceError> {
        let id: PieceId = id.parse()?;
        let colors = codes
            .iter()
            .map(|&code| Color::from_code(code).ok_or(PieceError::InvalidColorCode(code)))
            .collect::<Result<Vec<_>, _>>()?;
        self.set(id, Piece::from_colors(&colors)?)
    }

    pub(crate) fn sticker(&self, sticker: Sticker) -> Color {
        self.pieces[sticker.piece.index()].colors()[sticker.index]
    }

    pub(crate) fn set_sticker(&mut self, sticker: Sticker, color: Color) {
        self.pieces[sticker.piece.index()].colors_mut()[sticker.index] = color;
    }

    /// The center color of |face|.
    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.centers[face.index()]
    }

    /// The 9 colors of |face|, row-major as in the unfolded diagram.
    #[must_use]
    pub fn face(&self, face: Face) -> [Color; 9] {
        LAYOUT[face.index()].map(|cell| match cell {
            Cell::Center(face) => self.center(face),
            Cell::Sticker(sticker) => self.sticker(sticker),
        })
    }

    /// All six faces, in reading order.
    #[must_use]
    pub fn faces(&self) -> Faces {
        Face::ALL.map(|face| self.face(face))
    }

    /// Whether every facelet matches the center of its face.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.face(face).iter().all(|&c| c == self.center(face)))
    }

    /// Builds a cube from decomposed faces.
    ///
    /// The faces are validated first, then each piece is assembled from the
    /// facelets that show it and checked like a manual edit.
    pub fn from_faces(faces: &Faces) -> Result<Self, Error> {
        validate(faces)?;
        let mut cube = Cube::new();
        for face in Face::ALL {
            for (cell, &color) in LAYOUT[face.index()].iter().zip(&faces[face.index()]) {
                match *cell {
                    Cell::Center(center) => cube.centers[center.index()] = color,
                    Cell::Sticker(sticker) => cube.set_sticker(sticker, color),
                }
            }
        }
        for id in PieceId::ALL {
            cube.get(id).check(id)?;
        }
        debug!("Read cube with centers {:?}", cube.centers);
        Ok(cube)
    }

    /// Parses, validates and builds a cube from a 54-letter facelet string.
    pub fn from_facelets(input: &str) -> Result<Self, Error> {
        Self::from_faces(&decompose(input)?)
    }

    /// The facelet string for this cube, readable by [`Cube::from_facelets`].
    #[must_use]
    pub fn to_facelet_string(&self) -> String {
        compose(&self.faces())
    }
}

impl fmt::Display for Cube {
    /// Draws the unfolded cube:
    ///
    /// ```text
    ///     YYY
    ///     YYY
    ///     YYY
    /// OOO BBB RRR GGG
    /// OOO BBB RRR GGG
    /// OOO BBB RRR GGG
    ///     WWW
    ///     WWW
    ///     WWW
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces = self.faces();
        let row = |face: Face, row: usize| -> String {
            faces[face.index()][row * 3..row * 3 + 3]
                .iter()
                .map(|c| c.letter())
                .collect()
        };
        for i in 0..3 {
            writeln!(f, "    {}", row(Face::U, i))?;
        }
        for i in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::L, i),
                row(Face::F, i),
                row(Face::R, i),
                row(Face::B, i)
            )?;
        }
        for i in 0..3 {
            writeln!(f, "    {}", row(Face::D, i))?;
        }
        Ok(())
    }
}
