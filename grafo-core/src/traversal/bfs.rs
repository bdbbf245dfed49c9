//! Queue-based breadth-first traversal.

use std::collections::VecDeque;
use std::ops::Range;

use tracing::instrument;

use crate::{Edge, Graph, error::Result};

/// The outcome of a breadth-first traversal.
///
/// Parents are assigned when a vertex is first discovered (enqueued), so each
/// non-root vertex's parent is the vertex whose neighbour scan found it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Traversal {
    root: usize,
    order: Vec<usize>,
    parents: Vec<Option<usize>>,
    depths: Vec<Option<usize>>,
    tree_edges: Vec<Edge>,
}

impl Traversal {
    fn empty(root: usize, vertex_count: usize) -> Self {
        Self {
            root,
            order: Vec::new(),
            parents: vec![None; vertex_count],
            depths: vec![None; vertex_count],
            tree_edges: Vec::new(),
        }
    }

    /// Returns the start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> usize { self.root }

    /// Returns the vertices in the order they were dequeued.
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> &[usize] { &self.order }

    /// Returns the discovery edges `(parent, child, weight)`, in discovery
    /// order.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree_edges(&self) -> &[Edge] { &self.tree_edges }

    /// Returns `true` when the traversal reached `vertex`.
    #[must_use]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.depth(vertex).is_some()
    }

    /// Returns the discovery parent of `vertex`.
    ///
    /// `None` for the root and for vertices the traversal never reached; use
    /// [`Self::is_visited`] to tell them apart.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Returns the number of tree edges between `vertex` and the root, or
    /// `None` when `vertex` was not reached.
    #[must_use]
    pub fn depth(&self, vertex: usize) -> Option<usize> {
        self.depths.get(vertex).copied().flatten()
    }

    /// Returns the parent chain from `vertex` up to and including the root,
    /// or `None` when `vertex` was not reached.
    ///
    /// # Examples
    /// ```
    /// use grafo_core::{Graph, breadth_first};
    ///
    /// let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)])?;
    /// let traversal = breadth_first(&graph, 0)?;
    /// assert_eq!(traversal.path_to_root(3), Some(vec![3, 2, 1, 0]));
    /// # Ok::<(), grafo_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn path_to_root(&self, vertex: usize) -> Option<Vec<usize>> {
        let depth = self.depth(vertex)?;
        let mut path = Vec::with_capacity(depth + 1);
        let mut current = Some(vertex);
        while let Some(node) = current {
            path.push(node);
            current = self.parent(node);
        }
        Some(path)
    }

    /// Runs one sweep from the unreached vertex `start` and returns the range
    /// of [`Self::order`] it filled.
    fn sweep(&mut self, graph: &Graph, start: usize) -> Range<usize> {
        let first = self.order.len();
        let mut queue = VecDeque::from([start]);
        self.depths[start] = Some(0);

        while let Some(vertex) = queue.pop_front() {
            self.order.push(vertex);
            let next_depth = self.depths[vertex].map_or(0, |depth| depth + 1);
            for (neighbour, weight) in graph.adjacent(vertex) {
                if self.depths[neighbour].is_some() {
                    continue;
                }
                self.depths[neighbour] = Some(next_depth);
                self.parents[neighbour] = Some(vertex);
                self.tree_edges.push(Edge::new(vertex, neighbour, weight));
                queue.push_back(neighbour);
            }
        }

        first..self.order.len()
    }
}

/// Traverses `graph` breadth-first from `start`.
///
/// Neighbours are enqueued in ascending index order, which fixes the
/// visitation order for a given graph.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] when `start` is not a
/// vertex of `graph`.
///
/// # Examples
/// ```
/// use grafo_core::{Graph, breadth_first};
///
/// let graph = Graph::from_edges(5, [(0, 2, 1), (0, 1, 1), (2, 3, 1)])?;
/// let traversal = breadth_first(&graph, 0)?;
/// assert_eq!(traversal.order(), &[0, 1, 2, 3]);
/// assert_eq!(traversal.parent(3), Some(2));
/// assert!(!traversal.is_visited(4));
/// # Ok::<(), grafo_core::GraphError>(())
/// ```
#[instrument(
    name = "grafo.bfs",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count()),
)]
pub fn breadth_first(graph: &Graph, start: usize) -> Result<Traversal> {
    graph.check_vertex(start)?;
    let mut traversal = Traversal::empty(start, graph.vertex_count());
    traversal.sweep(graph, start);
    Ok(traversal)
}

/// Sweeps every vertex of `graph`, starting a new breadth-first pass at each
/// vertex not yet reached, in ascending index order.
///
/// Returns the combined traversal forest and, per pass, the range of its
/// visitation order that pass covered.
pub(crate) fn breadth_first_forest(graph: &Graph) -> (Traversal, Vec<Range<usize>>) {
    let mut forest = Traversal::empty(0, graph.vertex_count());
    let mut passes = Vec::new();
    for start in 0..graph.vertex_count() {
        if !forest.is_visited(start) {
            passes.push(forest.sweep(graph, start));
        }
    }
    (forest, passes)
}
