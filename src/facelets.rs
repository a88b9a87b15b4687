//! Reading facelet strings into face grids and checking them for structural validity.

use crate::color::Color;
use crate::face::Face;
use crate::layout::{slot, FACELET_COUNT};
use log::debug;
use thiserror::Error;

/// Six faces of nine colors each, in [`Face::ALL`] order, each face row-major.
pub type Faces = [[Color; 9]; 6];

/// Why a facelet string couldn't be decomposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input doesn't hold exactly one entry per facelet.
    #[error("Expected 54 facelets but got {0}")]
    Shape(usize),
    /// A character that isn't one of W, B, R, G, O, Y.
    #[error("Unrecognized color {letter:?} at position {position}")]
    Encoding {
        /// The offending character.
        letter: char,
        /// Its position in the input, counted in characters.
        position: usize,
    },
    /// A numeric code outside 0..=5.
    #[error("Unrecognized color code {code} at position {position}")]
    EncodingCode {
        /// The offending code.
        code: u8,
        /// Its position in the input.
        position: usize,
    },
}

/// Why decomposed faces don't describe a cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two faces share a center color.
    #[error("Faces do not each have a distinct color")]
    DuplicateCenters,
    /// Some color isn't used for exactly nine facelets.
    #[error("Not all colors appear exactly 9 times ({color:?} appears {count} times)")]
    FaceletCount {
        /// The first color with a wrong count.
        color: Color,
        /// How often it appears.
        count: usize,
    },
}

fn place(colors: impl Iterator<Item = Color>) -> Faces {
    let mut faces = [[Color::White; 9]; 6];
    for (position, color) in colors.enumerate() {
        let (face, cell) = slot(position);
        faces[face.index()][cell] = color;
    }
    faces
}

/// Splits a 54-letter facelet string into its six faces.
///
/// The string is read the way the unfolded cube is printed: the Up face, then
/// three lines running across Left, Front, Right and Back, then the Down face.
pub fn decompose(input: &str) -> Result<Faces, InputError> {
    let length = input.chars().count();
    if length != FACELET_COUNT {
        debug!("Rejecting facelet string of length {length}");
        return Err(InputError::Shape(length));
    }
    let colors = input
        .chars()
        .enumerate()
        .map(|(position, letter)| {
            Color::from_letter(letter).ok_or(InputError::Encoding { letter, position })
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| debug!("Rejecting facelet string: {e}"))?;
    Ok(place(colors.into_iter()))
}

/// Same as [`decompose`], for input given as numeric color codes.
pub fn decompose_codes(codes: &[u8]) -> Result<Faces, InputError> {
    if codes.len() != FACELET_COUNT {
        return Err(InputError::Shape(codes.len()));
    }
    let colors = codes
        .iter()
        .enumerate()
        .map(|(position, &code)| {
            Color::from_code(code).ok_or(InputError::EncodingCode { code, position })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(place(colors.into_iter()))
}

/// Writes |faces| back out in the order [`decompose`] reads them.
#[must_use]
pub fn compose(faces: &Faces) -> String {
    (0..FACELET_COUNT)
        .map(|position| {
            let (face, cell) = slot(position);
            faces[face.index()][cell].letter()
        })
        .collect()
}

/// Checks that every face has its own center color and every color shows up
/// nine times. Only the first failing check is reported, centers first.
///
/// This is a structural check: it doesn't tell whether the cube is solvable.
pub fn validate(faces: &Faces) -> Result<(), ValidationError> {
    let mut centers = [false; 6];
    for face in Face::ALL {
        let center = faces[face.index()][4];
        if std::mem::replace(&mut centers[usize::from(center.code())], true) {
            debug!("Face {face} repeats center {center:?}");
            return Err(ValidationError::DuplicateCenters);
        }
    }

    let mut counts = [0usize; 6];
    for color in faces.iter().flatten() {
        counts[usize::from(color.code())] += 1;
    }
    if let Some((color, &count)) = Color::ALL
        .iter()
        .zip(&counts)
        .find(|(_, count)| **count != 9)
    {
        return Err(ValidationError::FaceletCount {
            color: *color,
            count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    const SCRAMBLED: &str = "GRBYWYWWORRRBBGWBYOBYWROBBRWOGOGOWGYRGWOROGOGBWBYYGRYY";

    #[test]
    fn test_decompose_shape() {
        use crate::facelets::{decompose, decompose_codes, InputError};
        assert_eq!(Err(InputError::Shape(14)), decompose("mon beau sapin"));
        assert_eq!(Err(InputError::Shape(53)), decompose(&SCRAMBLED[1..]));
        assert_eq!(
            Err(InputError::Shape(55)),
            decompose(&format!("{SCRAMBLED}Y"))
        );
        assert_eq!(Err(InputError::Shape(0)), decompose(""));
        assert_eq!(Err(InputError::Shape(3)), decompose_codes(&[1, 2, 3]));
    }

    #[test]
    fn test_decompose_encoding() {
        use crate::facelets::{decompose, decompose_codes, InputError};
        let input = format!("{}1", &SCRAMBLED[..53]);
        assert_eq!(
            Err(InputError::Encoding {
                letter: '1',
                position: 53
            }),
            decompose(&input)
        );
        let input = format!("g{}", &SCRAMBLED[1..]);
        assert_eq!(
            Err(InputError::Encoding {
                letter: 'g',
                position: 0
            }),
            decompose(&input)
        );
        let mut codes = [0u8; 54];
        codes[7] = 6;
        assert_eq!(
            Err(InputError::EncodingCode {
                code: 6,
                position: 7
            }),
            decompose_codes(&codes)
        );
    }

    #[test]
    fn test_decompose() {
        use crate::facelets::decompose;
        let faces = decompose(SCRAMBLED).unwrap();
        let codes = faces.map(|face| face.map(|color| color.code()));
        assert_eq!(
            [
                [3, 2, 1, 5, 0, 5, 0, 0, 4],
                [2, 2, 2, 0, 2, 4, 0, 3, 5],
                [1, 1, 3, 1, 1, 2, 2, 3, 0],
                [0, 1, 5, 0, 4, 3, 4, 2, 4],
                [4, 1, 5, 4, 3, 4, 3, 4, 3],
                [1, 0, 1, 5, 5, 3, 2, 5, 5],
            ],
            codes
        );
    }

    #[test]
    fn test_decompose_codes_matches_letters() {
        use crate::color::Color;
        use crate::facelets::{decompose, decompose_codes};
        let codes: Vec<u8> = SCRAMBLED
            .chars()
            .map(|c| Color::from_letter(c).unwrap().code())
            .collect();
        assert_eq!(decompose(SCRAMBLED), decompose_codes(&codes));
    }

    #[test]
    fn test_compose() {
        use crate::facelets::{compose, decompose};
        assert_eq!(SCRAMBLED, compose(&decompose(SCRAMBLED).unwrap()));
    }

    #[test]
    fn test_validate_duplicate_centers() {
        use crate::facelets::{decompose, validate, ValidationError};
        // Left and Front are both centered Blue, and the counts are right.
        let faces =
            decompose("YYYYYYYYYOOOOOOOOOBBBBBBBBBRRRRRRRRRGGGGGGGGGWWWWWWWWW").unwrap();
        assert_eq!(Err(ValidationError::DuplicateCenters), validate(&faces));
        // Counts are wrong too, centers still win.
        let faces = decompose(&"Y".repeat(54)).unwrap();
        assert_eq!(Err(ValidationError::DuplicateCenters), validate(&faces));
    }

    #[test]
    fn test_validate_counts() {
        use crate::color::Color;
        use crate::facelets::{decompose, validate, ValidationError};
        let faces =
            decompose("YYYYYYYYYOOOOOOOOOOOOOOOBBBRRRGGGOOOOOOOOOOOOWWWWWWWWW").unwrap();
        assert_eq!(
            Err(ValidationError::FaceletCount {
                color: Color::Blue,
                count: 3
            }),
            validate(&faces)
        );
    }

    #[test]
    fn test_validate_ok() {
        use crate::facelets::{decompose, validate};
        let faces =
            decompose("YYYYYYYYYOOOBBBRRRGGGOOOBBBRRRGGGOOOBBBRRRGGGWWWWWWWWW").unwrap();
        assert_eq!(Ok(()), validate(&faces));
        assert_eq!(Ok(()), validate(&decompose(SCRAMBLED).unwrap()));
    }
}
