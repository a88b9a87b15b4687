//! Where each of the 54 facelets lives in the piece model.
//!
//! Faces are laid out as in the unfolded diagram, Up above, then Left, Front,
//! Right and Back side by side, then Down:
//!
//! ```text
//!     YYY
//!     YYY
//!     YYY
//! OOO BBB RRR GGG
//! OOO BBB RRR GGG
//! OOO BBB RRR GGG
//!     WWW
//!     WWW
//!     WWW
//! ```

use crate::face::Face;
use crate::piece::{PieceId, Sticker};
use lazy_static::lazy_static;

/// What one cell of a face grid shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// The fixed center of the face.
    Center(Face),
    /// A color held by a piece.
    Sticker(Sticker),
}

use PieceId::*;

// Pieces behind each cell, row-major, faces in reading order. None is the center.
#[rustfmt::skip]
const GRID: [[Option<PieceId>; 9]; 6] = [
    // U
    [
        Some(BLU), Some(BU), Some(RBU),
        Some(LU), None, Some(RU),
        Some(LFU), Some(FU), Some(FRU),
    ],
    // L
    [
        Some(BLU), Some(LU), Some(LFU),
        Some(BL), None, Some(FL),
        Some(BLD), Some(LD), Some(LFD),
    ],
    // F
    [
        Some(LFU), Some(FU), Some(FRU),
        Some(FL), None, Some(FR),
        Some(LFD), Some(FD), Some(FRD),
    ],
    // R
    [
        Some(FRU), Some(RU), Some(RBU),
        Some(FR), None, Some(BR),
        Some(FRD), Some(RD), Some(RBD),
    ],
    // B
    [
        Some(RBU), Some(BU), Some(BLU),
        Some(BR), None, Some(BL),
        Some(RBD), Some(BD), Some(BLD),
    ],
    // D
    [
        Some(LFD), Some(FD), Some(FRD),
        Some(LD), None, Some(RD),
        Some(BLD), Some(BD), Some(RBD),
    ],
];

lazy_static! {
    /// Each face's 9 cells, with piece indices resolved through [`PieceId::facing_index`].
    pub(crate) static ref LAYOUT: [[Cell; 9]; 6] = Face::ALL.map(|face| {
        GRID[face.index()].map(|piece| match piece {
            None => Cell::Center(face),
            Some(piece) => Cell::Sticker(Sticker {
                piece,
                index: piece
                    .facing_index(face)
                    .expect("every piece in a face grid touches that face"),
            }),
        })
    });
}

/// Number of facelets in a facelet string.
pub const FACELET_COUNT: usize = 54;

/// Maps a position in a facelet string to a (face, cell) pair.
///
/// The string follows the unfolded diagram line by line: 9 Up facelets, then
/// three lines of 12 running across Left, Front, Right and Back, then 9 Down
/// facelets.
pub(crate) fn slot(position: usize) -> (Face, usize) {
    match position {
        0..=8 => (Face::U, position),
        45.. => (Face::D, position - 45),
        _ => {
            let band = position - 9;
            let row = band / 12;
            let face = Face::ALL[1 + (band % 12) / 3];
            (face, row * 3 + band % 3)
        }
    }
}

#[cfg(test)]
mod tests {

    #[test]
    fn test_layout_covers_every_sticker_once() {
        use crate::layout::{Cell, LAYOUT};
        use crate::piece::PieceId;
        use std::collections::HashSet;
        let stickers: Vec<_> = LAYOUT
            .iter()
            .flatten()
            .filter_map(|cell| match cell {
                Cell::Sticker(sticker) => Some(*sticker),
                Cell::Center(_) => None,
            })
            .collect();
        let unique: HashSet<_> = stickers.iter().copied().collect();
        let expected: usize = PieceId::ALL.iter().map(|p| p.facings().len()).sum();
        assert_eq!(48, expected);
        assert_eq!(expected, stickers.len());
        assert_eq!(expected, unique.len());
    }

    #[test]
    fn test_centers() {
        use crate::face::Face;
        use crate::layout::{Cell, LAYOUT};
        for face in Face::ALL {
            assert_eq!(Cell::Center(face), LAYOUT[face.index()][4]);
        }
    }

    #[test]
    fn test_slot() {
        use crate::face::Face;
        use crate::layout::{slot, FACELET_COUNT};
        use std::collections::HashSet;
        assert_eq!((Face::U, 0), slot(0));
        assert_eq!((Face::U, 8), slot(8));
        assert_eq!((Face::L, 0), slot(9));
        assert_eq!((Face::F, 0), slot(12));
        assert_eq!((Face::B, 2), slot(20));
        assert_eq!((Face::L, 3), slot(21));
        assert_eq!((Face::B, 8), slot(44));
        assert_eq!((Face::D, 0), slot(45));
        assert_eq!((Face::D, 8), slot(53));
        let all: HashSet<_> = (0..FACELET_COUNT).map(slot).collect();
        assert_eq!(FACELET_COUNT, all.len());
    }
}
