#![warn(clippy::all, clippy::pedantic)]
// Run with `cargo clippy --all -- -D warnings`.
//! Command line tools for reading, turning and replaying cubes.

use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::{info, LevelFilter};
use piece_cube_rs::{parse_moves, play, Cube, Error, Replay, ReplayOptions};
use rayon::prelude::*;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Log more: -v for info, -vv for debug, -vvv for trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a cube, solved unless a facelet string is given.
    Show {
        /// 54 letters from W B R G O Y.
        facelets: Option<String>,
    },
    /// Validate facelet strings, one per line.
    Check {
        /// File to read from. Reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Apply a move list and print the result.
    Apply {
        /// 54 letters from W B R G O Y.
        facelets: String,
        /// Moves such as "R U Ri Ui".
        moves: String,
    },
    /// Replay a move list frame by frame.
    Tutorial {
        /// 54 letters from W B R G O Y.
        facelets: String,
        /// Moves such as "R U Ri Ui".
        moves: String,
        /// Pause between frames, in milliseconds.
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
        /// Clear the terminal before each frame.
        #[arg(long)]
        clear: bool,
    },
    /// Scramble a solved cube.
    Scramble {
        /// Number of turns.
        #[arg(long, default_value_t = 25)]
        length: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Cube(#[from] Error),
    #[error("Could not read input: {0}")]
    Io(#[from] io::Error),
}

/// Reads a cube from |facelets|, or returns a solved one.
fn read_cube(facelets: Option<&str>) -> Result<Cube, Error> {
    facelets.map_or_else(|| Ok(Cube::new()), Cube::from_facelets)
}

/// Validates every non-blank line of |input|. Results come back in line order.
fn check_lines(input: &str) -> Vec<(usize, Result<Cube, Error>)> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();
    lines
        .into_par_iter()
        .map(|(number, line)| (number, Cube::from_facelets(line)))
        .collect()
}

fn run(command: Commands) -> Result<ExitCode, CliError> {
    match command {
        Commands::Show { facelets } => {
            print!("{}", read_cube(facelets.as_deref())?);
        }
        Commands::Check { file } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut input = String::new();
                    io::stdin().read_to_string(&mut input)?;
                    input
                }
            };
            let results = check_lines(&input);
            let failures = results.iter().filter(|(_, r)| r.is_err()).count();
            for (number, result) in &results {
                match result {
                    Ok(_) => println!("line {number}: ok"),
                    Err(e) => println!("line {number}: {e}"),
                }
            }
            info!("Checked {} cubes, {failures} invalid", results.len());
            if failures > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Apply { facelets, moves } => {
            let mut cube = Cube::from_facelets(&facelets)?;
            cube.apply_all(&parse_moves(&moves).map_err(Error::from)?);
            print!("{cube}");
            println!("{}", cube.to_facelet_string());
        }
        Commands::Tutorial {
            facelets,
            moves,
            delay_ms,
            clear,
        } => {
            let cube = Cube::from_facelets(&facelets)?;
            let turns = parse_moves(&moves).map_err(Error::from)?;
            let options = ReplayOptions::builder()
                .delay(Duration::from_millis(delay_ms))
                .clear_screen(clear)
                .build();
            play(Replay::new(cube, &turns), &options, &mut io::stdout().lock())?;
        }
        Commands::Scramble { length, seed } => {
            let seed = seed.unwrap_or_else(|| fastrand::u64(..));
            info!("Scrambling with seed {seed}");
            let mut cube = Cube::new();
            let turns = cube.scramble(length, seed);
            let tokens: Vec<String> = turns.iter().map(ToString::to_string).collect();
            println!("{}", tokens.join(" "));
            print!("{cube}");
            println!("{}", cube.to_facelet_string());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {

    #[test]
    fn test_check_lines() {
        use crate::check_lines;
        let input = "YYYYYYYYYOOOBBBRRRGGGOOOBBBRRRGGGOOOBBBRRRGGGWWWWWWWWW\n\
                     \n\
                     YYY\n\
                     GRBYWYWWORRRBBGWBYOBYWROBBRWOGOGOWGYRGWOROGOGBWBYYGRYY\n";
        let results = check_lines(input);
        let numbers: Vec<usize> = results.iter().map(|(n, _)| *n).collect();
        assert_eq!(vec![1, 3, 4], numbers);
        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_err());
        assert!(results[2].1.is_ok());
    }

    #[test]
    fn test_read_cube() {
        use crate::read_cube;
        assert!(read_cube(None).unwrap().is_solved());
        assert!(read_cube(Some("W")).is_err());
    }

    #[test]
    fn test_cli_parses() {
        use crate::{Cli, Commands};
        use clap::Parser;
        let cli = Cli::try_parse_from(["cube", "-vv", "scramble", "--length", "10"]).unwrap();
        assert_eq!(2, cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Scramble {
                length: 10,
                seed: None
            }
        ));
    }
}
