//! The twelve face turns.
//!
//! Every turn is stored as a handful of 4-cycles over stickers, computed once
//! from [`PieceId::facings`] and [`Face::turned`]. A sticker moves to the piece
//! touching the turned images of its piece's faces, at the index facing the
//! turned image of its own direction, so corner twists and edge flips fall out
//! of the geometry instead of being written down per turn.

use crate::cube::Cube;
use crate::face::Face;
use crate::piece::{PieceId, Sticker};
use lazy_static::lazy_static;
use log::trace;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two ways a face can turn.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TurnType {
    /// Clockwise, looking at the face from outside.
    Forward,
    /// Counter-clockwise. Written with an `i` suffix.
    Backward,
}

impl TurnType {
    fn quarter_turns(self) -> usize {
        match self {
            TurnType::Forward => 1,
            TurnType::Backward => 3,
        }
    }
}

/// A quarter turn of one face.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Turn {
    /// The face being turned.
    pub face: Face,
    /// Which way it turns.
    pub turn_type: TurnType,
}

impl Turn {
    /// Left, clockwise.
    pub const L: Turn = Turn::new(Face::L, TurnType::Forward);
    /// Left, counter-clockwise.
    pub const LI: Turn = Turn::new(Face::L, TurnType::Backward);
    /// Right, clockwise.
    pub const R: Turn = Turn::new(Face::R, TurnType::Forward);
    /// Right, counter-clockwise.
    pub const RI: Turn = Turn::new(Face::R, TurnType::Backward);
    /// Front, clockwise.
    pub const F: Turn = Turn::new(Face::F, TurnType::Forward);
    /// Front, counter-clockwise.
    pub const FI: Turn = Turn::new(Face::F, TurnType::Backward);
    /// Back, clockwise.
    pub const B: Turn = Turn::new(Face::B, TurnType::Forward);
    /// Back, counter-clockwise.
    pub const BI: Turn = Turn::new(Face::B, TurnType::Backward);
    /// Up, clockwise.
    pub const U: Turn = Turn::new(Face::U, TurnType::Forward);
    /// Up, counter-clockwise.
    pub const UI: Turn = Turn::new(Face::U, TurnType::Backward);
    /// Down, clockwise.
    pub const D: Turn = Turn::new(Face::D, TurnType::Forward);
    /// Down, counter-clockwise.
    pub const DI: Turn = Turn::new(Face::D, TurnType::Backward);

    /// All twelve turns.
    pub const ALL: [Turn; 12] = [
        Turn::L,
        Turn::LI,
        Turn::R,
        Turn::RI,
        Turn::F,
        Turn::FI,
        Turn::B,
        Turn::BI,
        Turn::U,
        Turn::UI,
        Turn::D,
        Turn::DI,
    ];

    /// Makes a turn of |face| in direction |turn_type|.
    #[must_use]
    pub const fn new(face: Face, turn_type: TurnType) -> Self {
        Turn { face, turn_type }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        let turn_type = match self.turn_type {
            TurnType::Forward => TurnType::Backward,
            TurnType::Backward => TurnType::Forward,
        };
        Turn::new(self.face, turn_type)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn_type {
            TurnType::Forward => write!(f, "{}", self.face),
            TurnType::Backward => write!(f, "{}i", self.face),
        }
    }
}

/// A move token that doesn't name one of the twelve turns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown move {0:?}, expected one of L R F B U D optionally followed by i")]
pub struct TurnParseError(pub String);

impl FromStr for Turn {
    type Err = TurnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| TurnParseError(s.to_owned()))?;
        let turn_type = match chars.as_str() {
            "" => TurnType::Forward,
            "i" | "'" => TurnType::Backward,
            _ => return Err(TurnParseError(s.to_owned())),
        };
        Ok(Turn::new(face, turn_type))
    }
}

/// Parses a move list such as `"R U Ri Ui"`. Tokens are separated by
/// whitespace or commas.
pub fn parse_moves(input: &str) -> Result<Vec<Turn>, TurnParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

////////////////////////////////////
// Utils for building turn tables //
////////////////////////////////////

lazy_static! {
    /// Each entry maps from a turn to the sticker cycles it performs. Within a
    /// cycle, each slot receives the color of the slot after it.
    static ref CYCLES: HashMap<Turn, Vec<[Sticker; 4]>> = Turn::ALL
        .into_iter()
        .map(|turn| (turn, sticker_cycles(turn)))
        .collect();
}

/// Returns the slot the color at |sticker| moves to when |turn| is done.
fn destination(sticker: Sticker, turn: Turn) -> Sticker {
    let quarter_turns = turn.turn_type.quarter_turns();
    let facings = sticker.piece.facings();
    let moved: Vec<Face> = facings
        .iter()
        .map(|face| face.turned(turn.face, quarter_turns))
        .collect();
    let piece = PieceId::touching(&moved).expect("turns map pieces onto pieces");
    let facing = facings[sticker.index].turned(turn.face, quarter_turns);
    Sticker {
        piece,
        index: piece
            .facing_index(facing)
            .expect("turned piece faces the turned direction"),
    }
}

fn sticker_cycles(turn: Turn) -> Vec<[Sticker; 4]> {
    let mut seen = HashSet::new();
    let mut cycles = Vec::new();
    for piece in PieceId::ALL
        .into_iter()
        .filter(|piece| piece.facing_index(turn.face).is_some())
    {
        for index in 0..piece.facings().len() {
            let start = Sticker { piece, index };
            if seen.contains(&start) {
                continue;
            }
            let mut cycle = [start; 4];
            for i in 1..cycle.len() {
                cycle[i] = destination(cycle[i - 1], turn);
            }
            debug_assert_eq!(start, destination(cycle[3], turn));
            cycle.reverse();
            seen.extend(cycle);
            cycles.push(cycle);
        }
    }
    cycles
}

//////////////////////////////////
// Utils for turning the pieces //
//////////////////////////////////

/// Helper for saying whether |turn| right after |last| is wasted effort.
fn is_wasteful(turn: Turn, last: Option<Turn>) -> bool {
    // Two turns of one face in a row cancel out or make a half turn.
    last.is_some_and(|last| last.face == turn.face)
}

impl Cube {
    /// Turns one face. Turns only relabel colors that are already on the
    /// cube, so they never fail and never re-validate.
    pub fn apply(&mut self, turn: Turn) {
        trace!("Applying {turn}");
        for cycle in &CYCLES[&turn] {
            let start = self.sticker(cycle[0]);
            for i in 0..cycle.len() - 1 {
                self.set_sticker(cycle[i], self.sticker(cycle[i + 1]));
            }
            self.set_sticker(cycle[cycle.len() - 1], start);
        }
    }

    /// Applies |turns| in order.
    pub fn apply_all(&mut self, turns: &[Turn]) {
        for &turn in turns {
            self.apply(turn);
        }
    }

    /// Applies |length| random turns drawn from a generator seeded with
    /// |seed|, and returns them. No face is turned twice in a row.
    pub fn scramble(&mut self, length: usize, seed: u64) -> Vec<Turn> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut turns: Vec<Turn> = Vec::with_capacity(length);
        while turns.len() < length {
            let turn = Turn::ALL[rng.usize(..Turn::ALL.len())];
            if !is_wasteful(turn, turns.last().copied()) {
                turns.push(turn);
            }
        }
        self.apply_all(&turns);
        turns
    }
}
