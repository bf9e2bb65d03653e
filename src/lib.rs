use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, trace};

/// Number of positions on the dial, marked 0 to 99.
pub const DIAL_SIZE: u32 = 100;
/// Position the dial points at before the first turn.
pub const START_POSITION: u32 = 50;

#[derive(Debug)]
pub enum Error {
    EmptyTurnText,
    InvalidTurnDistance(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyTurnText => write!(f, "Can't read turn from empty text."),
            Error::InvalidTurnDistance(s) => write!(
                f,
                "Invalid text({}) for turn, expect a direction followed by a distance.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Print the time spent on parsing the input as well.
    #[arg(short, long)]
    pub verbose: bool,
    pub input_path: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct PartCLIArgs {
    pub input_path: PathBuf,
}

/// One rotation of the dial, negative steps turn it left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    steps: i64,
}

impl Turn {
    pub fn new(steps: i64) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }
}

impl TryFrom<&str> for Turn {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let text = value.trim();
        let mut chars = text.chars();
        let dir = chars.next().ok_or(Error::EmptyTurnText)?;
        let distance = chars
            .as_str()
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidTurnDistance(text.to_string()))?;
        let distance = i64::from(distance);

        Ok(Turn::new(if dir == 'L' { -distance } else { distance }))
    }
}

/// Turns the dial at `position` by `steps`, returns the new position and how
/// many times the dial pointed at 0 during the rotation (the last click included).
///
/// A left turn is computed as a right turn on the mirrored dial, where
/// position `p` becomes `(DIAL_SIZE - p) % DIAL_SIZE`.
pub fn apply(position: u32, steps: i64) -> (u32, u64) {
    let size = u64::from(DIAL_SIZE);
    let mirror = |p: u64| (size - p % size) % size;

    let position = u64::from(position) % size;
    let is_left = steps < 0;
    let start = if is_left { mirror(position) } else { position };
    let advanced = start + steps.unsigned_abs();
    let crossings = advanced / size;
    let end = advanced % size;
    let end = if is_left { mirror(end) } else { end };

    // end < DIAL_SIZE, always fits.
    (end as u32, crossings)
}

#[derive(Debug, Clone)]
pub struct Dial {
    position: u32,
}

impl Default for Dial {
    fn default() -> Self {
        Self::new(START_POSITION)
    }
}

impl Dial {
    pub fn new(position: u32) -> Self {
        Self {
            position: position % DIAL_SIZE,
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    /// Returns the number of times 0 is passed or landed on.
    pub fn turn(&mut self, turn: &Turn) -> u64 {
        let (position, crossings) = apply(self.position, turn.steps());
        trace!(
            "Turn {} moved dial from {} to {}, crossed 0 {} time(s).",
            turn.steps(),
            self.position,
            position,
            crossings
        );
        self.position = position;
        crossings
    }
}

/// Count of turns which leave the dial pointing at 0.
pub fn landing_count(turns: &[Turn], start: u32) -> usize {
    let mut dial = Dial::new(start);
    turns
        .iter()
        .map(|turn| {
            dial.turn(turn);
            dial.position()
        })
        .filter(|&position| position == 0)
        .count()
}

/// Count of every click that leaves the dial pointing at 0, over all turns.
pub fn crossing_count(turns: &[Turn], start: u32) -> u64 {
    let mut dial = Dial::new(start);
    turns.iter().map(|turn| dial.turn(turn)).sum()
}

pub fn read_turns<P: AsRef<Path>>(path: P) -> Result<Vec<Turn>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    debug!("Reading turns from {}.", path.as_ref().display());

    let mut turns = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if s.trim().is_empty() {
            continue;
        }

        let turn = Turn::try_from(s.as_str()).with_context(|| {
            format!(
                "Failed to read turn from line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        turns.push(turn);
    }

    debug!("Read {} turn(s).", turns.len());
    Ok(turns)
}
