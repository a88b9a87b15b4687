//! Replaying a move list on a cube one turn at a time, for tutorials.

use crate::cube::Cube;
use crate::turn::Turn;
use log::info;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// How [`play`] shows a replay.
#[derive(typed_builder::TypedBuilder, Clone, Debug)]
pub struct ReplayOptions {
    /// Pause between two frames. Two frames per second by default.
    #[builder(default = Duration::from_millis(500))]
    pub delay: Duration,

    /// Clear the terminal before each frame.
    #[builder(default = false)]
    pub clear_screen: bool,

    /// Print the move that produced each frame below it.
    #[builder(default = true)]
    pub show_move: bool,
}

/// The cube after some prefix of the move list.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Number of moves applied so far.
    pub step: usize,
    /// The move that produced this frame. None for the starting position.
    pub turn: Option<Turn>,
    /// The cube at this step.
    pub cube: Cube,
}

/// Iterator over the frames of a replay: the starting cube, then the cube
/// after each move.
pub struct Replay<'a> {
    cube: Cube,
    turns: &'a [Turn],
    step: usize,
}

impl<'a> Replay<'a> {
    /// Replays |turns| starting from |cube|.
    #[must_use]
    pub fn new(cube: Cube, turns: &'a [Turn]) -> Self {
        Replay {
            cube,
            turns,
            step: 0,
        }
    }
}

impl Iterator for Replay<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.step > self.turns.len() {
            return None;
        }
        let turn = match self.step {
            0 => None,
            step => {
                let turn = self.turns[step - 1];
                self.cube.apply(turn);
                Some(turn)
            }
        };
        let frame = Frame {
            step: self.step,
            turn,
            cube: self.cube.clone(),
        };
        self.step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.turns.len() + 1).saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

/// Writes every frame of |replay| to |out|, pausing between frames.
pub fn play<W: Write>(
    replay: Replay<'_>,
    options: &ReplayOptions,
    out: &mut W,
) -> io::Result<()> {
    let frames = replay.size_hint().0;
    info!("Replaying {} moves", frames.saturating_sub(1));
    for frame in replay {
        if frame.step > 0 {
            thread::sleep(options.delay);
        }
        if options.clear_screen {
            write!(out, "\x1b[2J\x1b[H")?;
        }
        write!(out, "{}", frame.cube)?;
        if let (true, Some(turn)) = (options.show_move, frame.turn) {
            writeln!(out, "{turn}")?;
        }
        out.flush()?;
    }
    Ok(())
}
