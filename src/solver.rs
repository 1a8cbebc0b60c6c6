use std::{collections::VecDeque, fmt::Display};

use crate::{Elevation, Error, HillGraph, Position};

/// Discovered flags and BFS tree parents of a single search.
#[derive(Debug, Default)]
struct SearchScratch {
    discovered: Vec<bool>,
    parents: Vec<Option<usize>>,
}

impl SearchScratch {
    fn reset(&mut self, vertex_n: usize) {
        self.discovered.clear();
        self.discovered.resize(vertex_n, false);
        self.parents.clear();
        self.parents.resize(vertex_n, None);
    }

    fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }
}

/// Breadth first search over a [`HillGraph`], always towards its end vertex.
#[derive(Debug)]
pub struct PathSolver<'a> {
    graph: &'a HillGraph,
    scratch: SearchScratch,
}

impl<'a> PathSolver<'a> {
    pub fn new(graph: &'a HillGraph) -> Self {
        Self {
            graph,
            scratch: SearchScratch::default(),
        }
    }

    /// Fewest steps from `source` to the end, `None` if the end can't be reached.
    pub fn shortest_path_len(&mut self, source: usize) -> Result<Option<usize>, Error> {
        self.search(source)?;
        let end = self.graph.end();
        if end != source && self.scratch.parent(end).is_none() {
            return Ok(None);
        }

        let mut steps_n = 0;
        let mut cur = end;
        while let Some(parent) = self.scratch.parent(cur) {
            cur = parent;
            steps_n += 1;
        }
        debug_assert_eq!(cur, source);

        Ok(Some(steps_n))
    }

    /// One of the shortest paths from `source` to the end.
    pub fn shortest_path(&mut self, source: usize) -> Result<Option<PathTrace>, Error> {
        self.search(source)?;
        let end = self.graph.end();
        if end != source && self.scratch.parent(end).is_none() {
            return Ok(None);
        }

        let mut vertices = vec![end];
        let mut cur = end;
        while let Some(parent) = self.scratch.parent(cur) {
            vertices.push(parent);
            cur = parent;
        }
        vertices.reverse();

        Ok(Some(PathTrace {
            vertices,
            row_n: self.graph.row_n(),
            col_n: self.graph.col_n(),
        }))
    }

    /// The fewest steps to the end among all sources whose elevation satisfies `pred`.
    pub fn min_shortest_path_len<F>(&mut self, pred: F) -> Option<usize>
    where
        F: Fn(Elevation) -> bool,
    {
        let graph = self.graph;
        graph
            .vertices_with(pred)
            .filter_map(|source| {
                let steps_n = self.shortest_path_len(source).ok().flatten();
                log::trace!("Source {} reaches the end in {:?} steps.", source, steps_n);
                steps_n
            })
            .min()
    }

    pub fn min_shortest_path_len_from_lowest(&mut self) -> Option<usize> {
        self.min_shortest_path_len(|elevation| elevation == Elevation::LOWEST)
    }

    /// Path of [`Self::min_shortest_path_len`], ties go to the smallest source vertex.
    pub fn min_shortest_path<F>(&mut self, pred: F) -> Option<PathTrace>
    where
        F: Fn(Elevation) -> bool,
    {
        let graph = self.graph;
        let (_, best_source) = graph
            .vertices_with(pred)
            .filter_map(|source| {
                self.shortest_path_len(source)
                    .ok()
                    .flatten()
                    .map(|steps_n| (steps_n, source))
            })
            .min()?;

        self.shortest_path(best_source).ok().flatten()
    }

    pub fn min_shortest_path_from_lowest(&mut self) -> Option<PathTrace> {
        self.min_shortest_path(|elevation| elevation == Elevation::LOWEST)
    }

    fn search(&mut self, source: usize) -> Result<(), Error> {
        let graph = self.graph;
        let vertex_n = graph.vertex_n();
        if source >= vertex_n {
            return Err(Error::VertexOutOfRange(source, vertex_n));
        }

        let end = graph.end();
        self.scratch.reset(vertex_n);
        self.scratch.discovered[source] = true;
        let mut search_vertices = VecDeque::from([source]);
        let mut expanded_n = 0;
        while let Some(cur) = search_vertices.pop_front() {
            expanded_n += 1;
            for &next in graph.neighbors(cur) {
                if !self.scratch.discovered[next] {
                    self.scratch.discovered[next] = true;
                    self.scratch.parents[next] = Some(cur);
                    search_vertices.push_back(next);
                }

                // Only the rest of this vertex is skipped, the queue still drains.
                if next == end {
                    break;
                }
            }
        }
        log::debug!(
            "Expanded {} of {} vertices searching from {}, end found: {}.",
            expanded_n,
            vertex_n,
            source,
            self.scratch.discovered[end]
        );

        Ok(())
    }
}

/// Vertices of a found path, from its source to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTrace {
    vertices: Vec<usize>,
    row_n: usize,
    col_n: usize,
}

impl PathTrace {
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn steps_n(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    fn position(&self, vertex: usize) -> Position {
        Position::new(vertex / self.col_n, vertex % self.col_n)
    }
}

impl Display for PathTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.col_n == 0 {
            return Ok(());
        }

        let mut cells = vec!['.'; self.row_n * self.col_n];
        for step in self.vertices.windows(2) {
            if let Some(dir) = self.position(step[0]).dir_to(&self.position(step[1])) {
                cells[step[0]] = dir.arrow();
            }
        }
        if let Some(end) = self.vertices.last() {
            cells[*end] = 'E';
        }

        for row in cells.chunks(self.col_n) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }

        Ok(())
    }
}
