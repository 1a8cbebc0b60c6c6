use std::str::FromStr;

use crate::{Direction, Error, Position};

/// Height of one map cell, `a` is the lowest and `z` the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elevation(u8);

impl TryFrom<char> for Elevation {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'a'..='z' => Ok(Self(value as u8 - b'a')),
            other => Err(Error::InvalidCharForMap(other)),
        }
    }
}

impl Elevation {
    pub const LOWEST: Elevation = Elevation(0);
    pub const HIGHEST: Elevation = Elevation(b'z' - b'a');

    /// A step may climb at most one level, and may drop any number of levels.
    pub fn can_step_to(&self, next: Elevation) -> bool {
        next.0 <= self.0 + 1
    }

    pub fn as_char(&self) -> char {
        char::from(b'a' + self.0)
    }
}

/// Directed graph of a height map, vertices are cells in row-major order.
#[derive(Debug)]
pub struct HillGraph {
    elevations: Vec<Elevation>,
    adjacency: Vec<Vec<usize>>,
    row_n: usize,
    col_n: usize,
    start: usize,
    end: usize,
}

impl FromStr for HillGraph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = HillGraphBuilder::new();
        for line in s.lines() {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

impl HillGraph {
    pub fn vertex_n(&self) -> usize {
        self.elevations.len()
    }

    pub fn edge_n(&self) -> usize {
        self.adjacency.iter().map(|dsts| dsts.len()).sum()
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn elevation(&self, vertex: usize) -> Option<Elevation> {
        self.elevations.get(vertex).copied()
    }

    /// Vertices reachable from `vertex` in a single step.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(vertex)
            .map(|dsts| dsts.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).contains(&to)
    }

    pub fn position(&self, vertex: usize) -> Option<Position> {
        if vertex < self.vertex_n() {
            Some(Position::new(vertex / self.col_n, vertex % self.col_n))
        } else {
            None
        }
    }

    pub fn vertex_at(&self, pos: &Position) -> Option<usize> {
        if pos.r() < self.row_n && pos.c() < self.col_n {
            Some(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }

    pub fn vertices_with<'a, F>(&'a self, pred: F) -> impl Iterator<Item = usize> + 'a
    where
        F: Fn(Elevation) -> bool + 'a,
    {
        self.elevations
            .iter()
            .enumerate()
            .filter(move |(_, elevation)| pred(**elevation))
            .map(|(vertex, _)| vertex)
    }
}

#[derive(Debug, Default)]
pub struct HillGraphBuilder {
    elevations: Vec<Elevation>,
    row_n: usize,
    col_n: Option<usize>,
    start: Option<usize>,
    end: Option<usize>,
    blank_row_seen: bool,
}

impl HillGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row of the map. Blank rows are only allowed after the last row.
    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if text.is_empty() {
            self.blank_row_seen = true;
            return Ok(());
        }
        if self.blank_row_seen {
            return Err(Error::InconsistentRow(self.col_n.unwrap_or(this_col_n), 0));
        }

        let col_n = *self.col_n.get_or_insert(this_col_n);
        if col_n != this_col_n {
            return Err(Error::InconsistentRow(col_n, this_col_n));
        }

        let mut row = Vec::with_capacity(col_n);
        let (mut row_start, mut row_end) = (None, None);
        for (ind, c) in text.chars().enumerate() {
            let vertex = self.elevations.len() + ind;
            let elevation = match c {
                'S' => {
                    if let Some(last) = self.start.or(row_start) {
                        return Err(Error::MultipleStartPosition(
                            self.position(last),
                            self.position(vertex),
                        ));
                    }

                    row_start = Some(vertex);
                    Elevation::LOWEST
                }
                'E' => {
                    if let Some(last) = self.end.or(row_end) {
                        return Err(Error::MultipleEndPosition(
                            self.position(last),
                            self.position(vertex),
                        ));
                    }

                    row_end = Some(vertex);
                    Elevation::HIGHEST
                }
                other => Elevation::try_from(other)?,
            };
            row.push(elevation);
        }

        self.start = self.start.or(row_start);
        self.end = self.end.or(row_end);
        self.elevations.extend(row);
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<HillGraph, Error> {
        let Some(start) = self.start else {
            return Err(Error::NoStartPosition);
        };
        let Some(end) = self.end else {
            return Err(Error::NoEndPosition);
        };

        let col_n = self.col_n.unwrap_or(0);
        let row_n = self.row_n;
        let elevations = self.elevations;
        let adjacency = elevations
            .iter()
            .enumerate()
            .map(|(vertex, elevation)| {
                let pos = Position::new(vertex / col_n, vertex % col_n);
                Direction::all_dirs()
                    .iter()
                    .filter_map(|dir| pos.neighbor(*dir))
                    .filter(|next_pos| next_pos.r() < row_n && next_pos.c() < col_n)
                    .map(|next_pos| next_pos.r() * col_n + next_pos.c())
                    .filter(|next| elevation.can_step_to(elevations[*next]))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let graph = HillGraph {
            elevations,
            adjacency,
            row_n,
            col_n,
            start,
            end,
        };
        log::debug!(
            "Built hill graph of {}x{} cells with {} edges, start at {}, end at {}.",
            graph.row_n,
            graph.col_n,
            graph.edge_n(),
            start,
            end
        );

        Ok(graph)
    }

    fn position(&self, vertex: usize) -> Position {
        let col_n = self.col_n.unwrap_or(1);
        Position::new(vertex / col_n, vertex % col_n)
    }
}
