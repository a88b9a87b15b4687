//! The 20 movable pieces and the colors they show.
//!
//! [`PieceId::facings`] is the one table saying which direction each color
//! index of a piece faces. The renderer, the facelet reader and the rotation
//! engine all go through it.

use crate::color::{Color, Group};
use crate::face::Face;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed locations of the cube's corner and edge pieces, named by the
/// faces they touch. The letter order is the index order of the piece's colors.
#[allow(clippy::upper_case_acronyms, missing_docs)]
#[derive(Clone, Copy, Debug, PartialOrd, Ord, Eq, PartialEq, Hash)]
pub enum PieceId {
    // Upper layer.
    FU,
    FRU,
    RU,
    RBU,
    BU,
    BLU,
    LU,
    LFU,
    // Middle layer.
    FR,
    BR,
    BL,
    FL,
    // Lower layer.
    FD,
    FRD,
    RD,
    RBD,
    BD,
    BLD,
    LD,
    LFD,
}

const FACINGS: [&[Face]; 20] = [
    &[Face::F, Face::U],
    &[Face::F, Face::R, Face::U],
    &[Face::R, Face::U],
    &[Face::R, Face::B, Face::U],
    &[Face::B, Face::U],
    &[Face::B, Face::L, Face::U],
    &[Face::L, Face::U],
    &[Face::L, Face::F, Face::U],
    &[Face::F, Face::R],
    &[Face::B, Face::R],
    &[Face::B, Face::L],
    &[Face::F, Face::L],
    &[Face::F, Face::D],
    &[Face::F, Face::R, Face::D],
    &[Face::R, Face::D],
    &[Face::R, Face::B, Face::D],
    &[Face::B, Face::D],
    &[Face::B, Face::L, Face::D],
    &[Face::L, Face::D],
    &[Face::L, Face::F, Face::D],
];

const NAMES: [&str; 20] = [
    "FU", "FRU", "RU", "RBU", "BU", "BLU", "LU", "LFU", "FR", "BR", "BL", "FL", "FD", "FRD", "RD",
    "RBD", "BD", "BLD", "LD", "LFD",
];

impl PieceId {
    /// Every piece, in storage order.
    pub const ALL: [PieceId; 20] = [
        PieceId::FU,
        PieceId::FRU,
        PieceId::RU,
        PieceId::RBU,
        PieceId::BU,
        PieceId::BLU,
        PieceId::LU,
        PieceId::LFU,
        PieceId::FR,
        PieceId::BR,
        PieceId::BL,
        PieceId::FL,
        PieceId::FD,
        PieceId::FRD,
        PieceId::RD,
        PieceId::RBD,
        PieceId::BD,
        PieceId::BLD,
        PieceId::LD,
        PieceId::LFD,
    ];

    /// Position of this piece in [`PieceId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The identifier token, e.g. `"FRU"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// The direction each color index of this piece faces.
    #[must_use]
    pub fn facings(self) -> &'static [Face] {
        FACINGS[self.index()]
    }

    /// Whether this piece touches three faces.
    #[must_use]
    pub fn is_corner(self) -> bool {
        self.facings().len() == 3
    }

    /// The color index of this piece that faces |face|, if it touches it at all.
    #[must_use]
    pub fn facing_index(self, face: Face) -> Option<usize> {
        self.facings().iter().position(|&f| f == face)
    }

    /// Finds the piece touching exactly |faces|, in any order.
    #[must_use]
    pub fn touching(faces: &[Face]) -> Option<PieceId> {
        Self::ALL.into_iter().find(|piece| {
            let facings = piece.facings();
            facings.len() == faces.len() && faces.iter().all(|face| facings.contains(face))
        })
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PieceId {
    type Err = PieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|piece| piece.name() == s)
            .ok_or_else(|| PieceError::UnknownPiece(s.to_owned()))
    }
}

/// A single color slot: index |index| of piece |piece|.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sticker {
    /// The piece holding the color.
    pub piece: PieceId,
    /// Index into the piece's colors, see [`PieceId::facings`].
    pub index: usize,
}

/// Colors currently shown by a piece, in the order given by its identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    /// Two colors.
    Edge([Color; 2]),
    /// Three colors.
    Corner([Color; 3]),
}

impl Piece {
    /// The piece that sits at |id| on a solved cube.
    #[must_use]
    pub fn solved(id: PieceId) -> Self {
        match id.facings() {
            &[a, b] => Piece::Edge([a.color(), b.color()]),
            &[a, b, c] => Piece::Corner([a.color(), b.color(), c.color()]),
            _ => unreachable!("pieces touch two or three faces"),
        }
    }

    /// Builds a piece from a list of 2 or 3 colors.
    pub fn from_colors(colors: &[Color]) -> Result<Self, PieceError> {
        match *colors {
            [a, b] => Ok(Piece::Edge([a, b])),
            [a, b, c] => Ok(Piece::Corner([a, b, c])),
            _ => Err(PieceError::BadLength(colors.len())),
        }
    }

    /// The colors, indexed as in [`PieceId::facings`].
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        match self {
            Piece::Edge(colors) => colors,
            Piece::Corner(colors) => colors,
        }
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [Color] {
        match self {
            Piece::Edge(colors) => colors,
            Piece::Corner(colors) => colors,
        }
    }

    /// Checks that this piece could physically sit at |id|: the right number
    /// of colors, and no two colors from opposite faces.
    pub fn check(&self, id: PieceId) -> Result<(), PieceError> {
        let colors = self.colors();
        if colors.len() != id.facings().len() {
            return Err(PieceError::WrongArity {
                piece: id,
                expected: id.facings().len(),
                actual: colors.len(),
            });
        }
        let mut seen: [Option<Color>; 3] = [None; 3];
        for &color in colors {
            let group = color.group() as usize;
            if let Some(other) = seen[group] {
                return Err(PieceError::OppositeColors {
                    piece: id,
                    first: other,
                    second: color,
                    group: color.group(),
                });
            }
            seen[group] = Some(color);
        }
        Ok(())
    }
}

/// Why a piece edit was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// The identifier isn't one of the 20 piece tokens.
    #[error("Unknown piece {0:?}")]
    UnknownPiece(String),
    /// A piece needs 2 or 3 colors.
    #[error("A piece has 2 or 3 colors, got {0}")]
    BadLength(usize),
    /// The number of colors doesn't match the piece kind.
    #[error("Piece {piece} has {expected} colors but {actual} were given")]
    WrongArity {
        /// The edited piece.
        piece: PieceId,
        /// Colors the piece holds.
        expected: usize,
        /// Colors supplied.
        actual: usize,
    },
    /// A color code outside 0..=5.
    #[error("Invalid color code {0}, expected a value between 0 and 5")]
    InvalidColorCode(u8),
    /// Two colors that belong on opposite faces.
    #[error("Piece {piece} cannot show both {first:?} and {second:?} ({group:?})")]
    OppositeColors {
        /// The edited piece.
        piece: PieceId,
        /// The earlier color of the group.
        first: Color,
        /// The later color of the group.
        second: Color,
        /// The group both colors belong to.
        group: Group,
    },
}

#[cfg(test)]
mod tests {

    #[test]
    fn test_names_match_facings() {
        use crate::piece::PieceId;
        for piece in PieceId::ALL {
            let letters: String = piece.facings().iter().map(|f| f.letter()).collect();
            assert_eq!(piece.name(), letters);
            assert_eq!(Ok(piece), piece.name().parse::<PieceId>());
        }
    }

    #[test]
    fn test_every_piece_is_distinct() {
        use crate::piece::PieceId;
        for piece in PieceId::ALL {
            assert_eq!(Some(piece), PieceId::touching(piece.facings()));
            let mut reversed = piece.facings().to_vec();
            reversed.reverse();
            assert_eq!(Some(piece), PieceId::touching(&reversed));
        }
        assert_eq!(8, PieceId::ALL.iter().filter(|p| p.is_corner()).count());
    }

    #[test]
    fn test_unknown_piece() {
        use crate::piece::{PieceError, PieceId};
        assert_eq!(
            Err(PieceError::UnknownPiece("FLU".to_owned())),
            "FLU".parse::<PieceId>()
        );
    }

    #[test]
    fn test_solved_piece() {
        use crate::color::Color;
        use crate::piece::{Piece, PieceId};
        assert_eq!(
            Piece::Corner([Color::Blue, Color::Red, Color::Yellow]),
            Piece::solved(PieceId::FRU)
        );
        assert_eq!(Piece::Edge([Color::Green, Color::Red]), Piece::solved(PieceId::BR));
        for piece in PieceId::ALL {
            assert_eq!(Ok(()), Piece::solved(piece).check(piece));
        }
    }

    #[test]
    fn test_check() {
        use crate::color::{Color, Group};
        use crate::piece::{Piece, PieceError, PieceId};
        assert_eq!(
            Err(PieceError::OppositeColors {
                piece: PieceId::FU,
                first: Color::White,
                second: Color::Yellow,
                group: Group::WhiteYellow,
            }),
            Piece::Edge([Color::White, Color::Yellow]).check(PieceId::FU)
        );
        assert_eq!(
            Err(PieceError::WrongArity {
                piece: PieceId::FRU,
                expected: 3,
                actual: 2,
            }),
            Piece::Edge([Color::Blue, Color::Yellow]).check(PieceId::FRU)
        );
        assert_eq!(
            Ok(()),
            Piece::Corner([Color::Red, Color::White, Color::Green]).check(PieceId::BLD)
        );
    }
}
