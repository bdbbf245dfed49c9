//! Immutable weighted undirected graph backed by a dense adjacency matrix.
//!
//! A weight of zero means "no edge". Diagonal entries are accepted on input
//! but discarded, so the graph never contains self-loops. Neighbour
//! iteration follows ascending vertex index, which every traversal in the
//! crate relies on for deterministic output.

use crate::error::{GraphError, Result};

/// A weighted undirected edge.
///
/// The orientation records how an algorithm produced the edge (for example
/// `(parent, child)` for traversal trees); the graph itself is undirected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: u32,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns the endpoints as `(min, max)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// Weighted undirected graph over the vertices `0..vertex_count`.
///
/// # Examples
/// ```
/// use grafo_core::Graph;
///
/// let graph = Graph::from_matrix(&[
///     vec![0, 1, 3],
///     vec![1, 0, 2],
///     vec![3, 2, 0],
/// ])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.weight(2, 0)?, 3);
/// # Ok::<(), grafo_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    weights: Vec<u32>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph from a square, symmetric adjacency matrix.
    ///
    /// # Errors
    /// Returns [`GraphError::NotSquare`] when a row length differs from the
    /// number of rows and [`GraphError::Asymmetric`] when `w(i, j) != w(j, i)`
    /// for some off-diagonal pair.
    pub fn from_matrix<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let vertex_count = rows.len();
        let mut weights = Vec::with_capacity(vertex_count.saturating_mul(vertex_count));
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != vertex_count {
                return Err(GraphError::NotSquare {
                    row,
                    expected: vertex_count,
                    actual: values.len(),
                });
            }
            weights.extend_from_slice(values);
        }

        let mut edge_count = 0;
        for row in 0..vertex_count {
            weights[row * vertex_count + row] = 0;
            for column in (row + 1)..vertex_count {
                let forward = weights[row * vertex_count + column];
                let backward = weights[column * vertex_count + row];
                if forward != backward {
                    return Err(GraphError::Asymmetric {
                        row,
                        column,
                        forward,
                        backward,
                    });
                }
                if forward > 0 {
                    edge_count += 1;
                }
            }
        }

        Ok(Self {
            vertex_count,
            weights,
            edge_count,
        })
    }

    /// Builds a graph from a vertex count and a list of `(u, v, weight)`
    /// triples.
    ///
    /// Each pair may appear once in either orientation; an exact repeat is
    /// tolerated, a repeat with a different weight is not.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint
    /// `>= vertex_count`, [`GraphError::SelfLoop`] for `u == v`,
    /// [`GraphError::ZeroWeight`] for a zero weight, and
    /// [`GraphError::ConflictingEdge`] when a pair is repeated with a
    /// different weight.
    ///
    /// # Examples
    /// ```
    /// use grafo_core::Graph;
    ///
    /// let graph = Graph::from_edges(4, [(0, 1, 5), (2, 3, 7)])?;
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.weight(1, 0)?, 5);
    /// # Ok::<(), grafo_core::GraphError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, u32)>,
    ) -> Result<Self> {
        let mut weights = vec![0; vertex_count.saturating_mul(vertex_count)];
        let mut edge_count = 0;
        for (source, target, weight) in edges {
            for vertex in [source, target] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }
            if source == target {
                return Err(GraphError::SelfLoop { vertex: source });
            }
            if weight == 0 {
                return Err(GraphError::ZeroWeight {
                    source_vertex: source,
                    target,
                });
            }

            let slot = source * vertex_count + target;
            match weights[slot] {
                0 => {
                    weights[slot] = weight;
                    weights[target * vertex_count + source] = weight;
                    edge_count += 1;
                }
                existing if existing == weight => {}
                existing => {
                    return Err(GraphError::ConflictingEdge {
                        source_vertex: source,
                        target,
                        first: existing,
                        second: weight,
                    });
                }
            }
        }

        Ok(Self {
            vertex_count,
            weights,
            edge_count,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of undirected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Returns the weight between `u` and `v`, or `0` when they are not
    /// adjacent (including `u == v`).
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either vertex is outside
    /// the graph.
    pub fn weight(&self, u: usize, v: usize) -> Result<u32> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.weights[u * self.vertex_count + v])
    }

    /// Returns the neighbours of `vertex` with their edge weights, in
    /// ascending vertex order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is outside the
    /// graph.
    ///
    /// # Examples
    /// ```
    /// use grafo_core::Graph;
    ///
    /// let graph = Graph::from_edges(4, [(2, 0, 4), (2, 3, 1), (2, 1, 9)])?;
    /// let neighbours: Vec<_> = graph.neighbors(2)?.collect();
    /// assert_eq!(neighbours, vec![(0, 4), (1, 9), (3, 1)]);
    /// # Ok::<(), grafo_core::GraphError>(())
    /// ```
    pub fn neighbors(&self, vertex: usize) -> Result<impl Iterator<Item = (usize, u32)> + '_> {
        self.check_vertex(vertex)?;
        Ok(self.adjacent(vertex))
    }

    /// Returns every edge once as `(u, v, w)` with `u < v`, in ascending
    /// `(u, v)` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertex_count).flat_map(move |source| {
            self.adjacent(source)
                .filter(move |&(target, _)| target > source)
                .map(move |(target, weight)| Edge::new(source, target, weight))
        })
    }

    /// Fails with [`GraphError::VertexOutOfRange`] unless `vertex` is in the
    /// graph.
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Neighbour iteration for a vertex already known to be in range.
    pub(crate) fn adjacent(&self, vertex: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let start = vertex * self.vertex_count;
        self.weights[start..start + self.vertex_count]
            .iter()
            .enumerate()
            .filter_map(|(neighbour, &weight)| (weight > 0).then_some((neighbour, weight)))
    }
}
