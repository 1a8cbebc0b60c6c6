use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod graph;
pub mod solver;

pub use graph::{Elevation, HillGraph, HillGraphBuilder};
pub use solver::{PathSolver, PathTrace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize),
    MultipleStartPosition(Position, Position),
    MultipleEndPosition(Position, Position),
    InvalidCharForMap(char),
    NoStartPosition,
    NoEndPosition,
    VertexOutOfRange(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleEndPosition(last_pos, pos) => write!(
                f,
                "Expect only one end position, given two({}, {}).",
                last_pos, pos
            ),
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::NoStartPosition => write!(f, "No start position in map."),
            Error::NoEndPosition => write!(f, "No end position in map."),
            Error::VertexOutOfRange(vertex, vertex_n) => write!(
                f,
                "Vertex {} is out of range, map only has {} vertices.",
                vertex, vertex_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Print the map with the found path drawn on it.
    #[arg(long)]
    pub show_path: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// Directions ordered so that neighbors come out in ascending vertex order.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Left,
            Direction::Right,
            Direction::Down,
        ];

        &ALL_DIRECTIONS
    }

    pub fn arrow(&self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Left => '<',
            Direction::Right => '>',
            Direction::Down => 'v',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            _ => None,
        }
    }

    /// Direction of a single orthogonal step from `self` to `other`.
    pub fn dir_to(&self, other: &Position) -> Option<Direction> {
        Direction::all_dirs()
            .iter()
            .copied()
            .find(|dir| self.neighbor(*dir).is_some_and(|pos| pos == *other))
    }
}

/// Installs `env_logger` on stderr, `warn` by default and `RUST_LOG` overrides.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<HillGraph> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = HillGraphBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder
            .add_row(line.as_str())
            .with_context(|| format!("Failed to parse line {} as map row.", ind + 1))?;
    }

    Ok(builder.build()?)
}
