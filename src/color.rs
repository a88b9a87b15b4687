//! Sticker colors and the opposition groups they fall into.

use std::fmt;

/// The six sticker colors. The discriminant is the color's numeric code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Code 0, the Down center on a solved cube.
    White = 0,
    /// Code 1, the Front center on a solved cube.
    Blue = 1,
    /// Code 2, the Right center on a solved cube.
    Red = 2,
    /// Code 3, the Back center on a solved cube.
    Green = 3,
    /// Code 4, the Left center on a solved cube.
    Orange = 4,
    /// Code 5, the Up center on a solved cube.
    Yellow = 5,
}

/// Pairs of colors that sit on opposite faces. No piece may show two colors of the same group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// White and Yellow.
    WhiteYellow = 0,
    /// Red and Orange.
    RedOrange = 1,
    /// Blue and Green.
    BlueGreen = 2,
}

impl Color {
    /// All colors, ordered by code.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Orange,
        Color::Yellow,
    ];

    /// Returns the color for |code|, or None if it isn't in 0..=5.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// The numeric code of this color.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the color written as |letter| in a facelet string.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'W' => Some(Color::White),
            'B' => Some(Color::Blue),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'O' => Some(Color::Orange),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }

    /// The letter used for this color in facelet strings and renderings.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
        }
    }

    /// Human readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
        }
    }

    /// The opposition group this color belongs to.
    #[must_use]
    pub fn group(self) -> Group {
        match self {
            Color::White | Color::Yellow => Group::WhiteYellow,
            Color::Red | Color::Orange => Group::RedOrange,
            Color::Blue | Color::Green => Group::BlueGreen,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Name of the color with numeric |code|.
#[must_use]
pub fn color_name(code: u8) -> Option<&'static str> {
    Color::from_code(code).map(Color::name)
}

/// Group of the color with numeric |code|. None for codes outside 0..=5.
#[must_use]
pub fn group_of(code: u8) -> Option<Group> {
    Color::from_code(code).map(Color::group)
}

#[cfg(test)]
mod tests {

    #[test]
    fn test_codes_round_trip() {
        use crate::color::Color;
        for (code, color) in (0u8..).zip(Color::ALL) {
            assert_eq!(code, color.code());
            assert_eq!(Some(color), Color::from_code(code));
            assert_eq!(Some(color), Color::from_letter(color.letter()));
        }
        assert_eq!(None, Color::from_code(6));
        assert_eq!(None, Color::from_letter('w'));
    }

    #[test]
    fn test_color_name() {
        use crate::color::color_name;
        assert_eq!(Some("White"), color_name(0));
        assert_eq!(Some("Orange"), color_name(4));
        assert_eq!(None, color_name(9));
    }

    #[test]
    fn test_group_of() {
        use crate::color::{group_of, Group};
        assert_eq!(Some(Group::WhiteYellow), group_of(0));
        assert_eq!(Some(Group::WhiteYellow), group_of(5));
        assert_eq!(Some(Group::RedOrange), group_of(2));
        assert_eq!(Some(Group::RedOrange), group_of(4));
        assert_eq!(Some(Group::BlueGreen), group_of(1));
        assert_eq!(Some(Group::BlueGreen), group_of(3));
        assert_eq!(None, group_of(6));
        assert_eq!(None, group_of(u8::MAX));
    }
}
