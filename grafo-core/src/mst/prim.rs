//! Lazy Prim over a dense [`Graph`].
//!
//! Frontier edges sit in a binary min-heap keyed by `(weight, from, to)`.
//! Entries pointing at an already-visited vertex are discarded when popped
//! instead of being removed eagerly.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::{Edge, Graph, error::Result};

use super::MinimumSpanningForest;

type Frontier = BinaryHeap<Reverse<(u32, usize, usize)>>;

/// Computes a minimum spanning tree of `start`'s component with Prim's
/// algorithm.
///
/// Accepted edges are oriented `(tree vertex, newly reached vertex)`.
/// Equal weights are resolved by the smaller `(from, to)` pair, so repeated
/// runs on the same graph produce the same tree. Vertices outside `start`'s
/// component are simply not reached.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] when `start` is not a
/// vertex of `graph`.
///
/// # Examples
/// ```
/// use grafo_core::{Edge, Graph, prim};
///
/// let graph = Graph::from_edges(4, [(0, 1, 5), (2, 3, 7)])?;
/// let tree = prim(&graph, 0)?;
/// assert_eq!(tree.edges(), &[Edge::new(0, 1, 5)]);
/// assert_eq!(tree.total_weight(), 5);
/// # Ok::<(), grafo_core::GraphError>(())
/// ```
#[instrument(
    name = "grafo.prim",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim(graph: &Graph, start: usize) -> Result<MinimumSpanningForest> {
    graph.check_vertex(start)?;

    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut visited_count = 0;
    let mut frontier = Frontier::new();
    let mut tree = MinimumSpanningForest::with_capacity(vertex_count - 1);

    visit(graph, start, &mut visited, &mut visited_count, &mut frontier);

    while visited_count < vertex_count {
        let Some(Reverse((weight, from, to))) = frontier.pop() else {
            break;
        };
        if visited[to] {
            continue;
        }

        let edge = Edge::new(from, to, weight);
        tree.accept(edge);
        debug!(source = from, target = to, weight, "accepted edge");
        visit(graph, to, &mut visited, &mut visited_count, &mut frontier);
    }

    debug!(
        accepted = tree.len(),
        total_weight = tree.total_weight(),
        reached = visited_count,
        "prim completed"
    );
    Ok(tree)
}

fn visit(
    graph: &Graph,
    vertex: usize,
    visited: &mut [bool],
    visited_count: &mut usize,
    frontier: &mut Frontier,
) {
    visited[vertex] = true;
    *visited_count += 1;
    for (neighbour, weight) in graph.adjacent(vertex) {
        if !visited[neighbour] {
            frontier.push(Reverse((weight, vertex, neighbour)));
        }
    }
}
