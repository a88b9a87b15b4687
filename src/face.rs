//! The six faces of the cube and how quarter turns move directions around.

use crate::color::Color;
use std::fmt;

/// All the faces on a Rubik's cube, in the order they are read and rendered.
#[derive(Clone, Copy, Debug, PartialOrd, Ord, Eq, PartialEq, Hash)]
pub enum Face {
    /// Up.
    U,
    /// Left.
    L,
    /// Front.
    F,
    /// Right.
    R,
    /// Back.
    B,
    /// Down.
    D,
}

impl Face {
    /// Faces in reading order: Up, Left, Front, Right, Back, Down.
    pub const ALL: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

    /// Position of this face in [`Face::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Center color of this face on a solved cube.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Face::U => Color::Yellow,
            Face::L => Color::Orange,
            Face::F => Color::Blue,
            Face::R => Color::Red,
            Face::B => Color::Green,
            Face::D => Color::White,
        }
    }

    /// The letter naming this face.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
        }
    }

    /// Returns the face named by |letter|.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.letter() == letter)
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::R => Face::L,
            Face::B => Face::F,
            Face::D => Face::U,
        }
    }

    // The four directions around this face, listed so that a clockwise quarter
    // turn (looking at the face from outside) sends each one to the next.
    fn ring(self) -> [Face; 4] {
        match self {
            Face::U => [Face::F, Face::L, Face::B, Face::R],
            Face::D => [Face::F, Face::R, Face::B, Face::L],
            Face::R => [Face::F, Face::U, Face::B, Face::D],
            Face::L => [Face::F, Face::D, Face::B, Face::U],
            Face::F => [Face::U, Face::R, Face::D, Face::L],
            Face::B => [Face::U, Face::L, Face::D, Face::R],
        }
    }

    /// Returns the direction this one points after |quarter_turns| clockwise
    /// quarter turns of the |axis| face. The axis and its opposite are fixed.
    #[must_use]
    pub fn turned(self, axis: Face, quarter_turns: usize) -> Face {
        let ring = axis.ring();
        match ring.iter().position(|&face| face == self) {
            Some(i) => ring[(i + quarter_turns) % ring.len()],
            None => self,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
