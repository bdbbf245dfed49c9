//! Bipartiteness testing with an odd-cycle witness.
//!
//! Colours come from a breadth-first forest: a vertex at even depth is on the
//! left, odd depth on the right. Tree edges therefore always join opposite
//! sides, and the graph is bipartite exactly when no other edge joins two
//! vertices of equal depth. When one does, the two discovery-parent chains
//! meet at their lowest common ancestor and, closed by the offending edge,
//! form a cycle of odd length.

use tracing::{debug, instrument};

use crate::{Graph, Traversal, traversal::breadth_first_forest};

/// One side of a two-colouring.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    /// Colour `0`.
    Left,
    /// Colour `1`.
    Right,
}

impl Side {
    /// Returns the colour index, `0` or `1`.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    const fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::Left } else { Self::Right }
    }
}

/// A proper two-colouring covering every vertex of the graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TwoColouring {
    sides: Vec<Side>,
}

impl TwoColouring {
    /// Returns the side of `vertex`, or `None` when it is not in the graph.
    #[must_use]
    pub fn side(&self, vertex: usize) -> Option<Side> {
        self.sides.get(vertex).copied()
    }

    /// Returns the side of every vertex, indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn sides(&self) -> &[Side] { &self.sides }

    /// Returns the colour-`0` vertices in ascending order.
    #[must_use]
    pub fn left(&self) -> Vec<usize> {
        self.members(Side::Left)
    }

    /// Returns the colour-`1` vertices in ascending order.
    #[must_use]
    pub fn right(&self) -> Vec<usize> {
        self.members(Side::Right)
    }

    fn members(&self, side: Side) -> Vec<usize> {
        self.sides
            .iter()
            .enumerate()
            .filter_map(|(vertex, &candidate)| (candidate == side).then_some(vertex))
            .collect()
    }
}

/// A closed walk of odd length proving a graph is not bipartite.
///
/// The vertices run from one endpoint of the conflicting edge, up its
/// discovery chain to the lowest common ancestor, and down to the other
/// endpoint; the conflicting edge closes the cycle back to the first vertex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OddCycle {
    vertices: Vec<usize>,
}

impl OddCycle {
    /// Returns the cycle's vertices in walk order, without repeating the
    /// first vertex at the end.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[usize] { &self.vertices }

    /// Returns the number of edges in the cycle (always odd, at least 3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a witness has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the conflicting edge `(u, v)` whose endpoints received the
    /// same colour; it joins the last vertex back to the first.
    #[must_use]
    pub fn conflict(&self) -> (usize, usize) {
        (self.vertices[0], self.vertices[self.vertices.len() - 1])
    }
}

/// Outcome of [`bipartition`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Bipartition {
    /// The graph is bipartite.
    Bipartite(TwoColouring),
    /// The graph contains an odd cycle.
    OddCycle(OddCycle),
}

impl Bipartition {
    /// Returns `true` for [`Bipartition::Bipartite`].
    #[must_use]
    pub const fn is_bipartite(&self) -> bool {
        matches!(self, Self::Bipartite(_))
    }

    /// Returns the colouring when the graph is bipartite.
    #[must_use]
    pub const fn colouring(&self) -> Option<&TwoColouring> {
        match self {
            Self::Bipartite(colouring) => Some(colouring),
            Self::OddCycle(_) => None,
        }
    }

    /// Returns the witness when the graph is not bipartite.
    #[must_use]
    pub const fn odd_cycle(&self) -> Option<&OddCycle> {
        match self {
            Self::Bipartite(_) => None,
            Self::OddCycle(cycle) => Some(cycle),
        }
    }
}

/// Two-colours `graph`, or finds an odd cycle.
///
/// Every component is coloured, starting each from its smallest vertex on
/// [`Side::Left`]. If several edges conflict, the witness uses the first one
/// met in breadth-first visitation order.
///
/// # Examples
/// ```
/// use grafo_core::{Graph, bipartition};
///
/// let square = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)])?;
/// let colouring = bipartition(&square);
/// let colouring = colouring.colouring().expect("a 4-cycle is bipartite");
/// assert_eq!(colouring.left(), vec![0, 2]);
///
/// let triangle = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)])?;
/// let witness = bipartition(&triangle);
/// let witness = witness.odd_cycle().expect("a triangle is not bipartite");
/// assert_eq!(witness.vertices(), &[1, 0, 2]);
/// # Ok::<(), grafo_core::GraphError>(())
/// ```
#[must_use]
#[instrument(name = "grafo.bipartite", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bipartition(graph: &Graph) -> Bipartition {
    let (forest, _) = breadth_first_forest(graph);

    for &vertex in forest.order() {
        let depth = forest.depth(vertex);
        let conflict = graph
            .adjacent(vertex)
            .find(|&(neighbour, _)| forest.depth(neighbour) == depth);
        if let Some((neighbour, _)) = conflict {
            let vertices = close_cycle(&forest, vertex, neighbour);
            debug!(
                source = vertex,
                target = neighbour,
                length = vertices.len(),
                "odd cycle found"
            );
            return Bipartition::OddCycle(OddCycle { vertices });
        }
    }

    let sides = (0..graph.vertex_count())
        .map(|vertex| Side::from_depth(forest.depth(vertex).unwrap_or(0)))
        .collect();
    Bipartition::Bipartite(TwoColouring { sides })
}

/// Joins two equal-depth vertices of the same tree through their lowest
/// common ancestor.
fn close_cycle(forest: &Traversal, from: usize, to: usize) -> Vec<usize> {
    let mut up = vec![from];
    let mut down = vec![to];
    let (mut left, mut right) = (from, to);
    while left != right {
        match (forest.parent(left), forest.parent(right)) {
            (Some(left_parent), Some(right_parent)) => {
                left = left_parent;
                right = right_parent;
                up.push(left);
                if left != right {
                    down.push(right);
                }
            }
            // Equal depths in one tree always meet before either reaches a
            // root; distinct roots cannot occur for an edge.
            _ => break,
        }
    }
    up.extend(down.into_iter().rev());
    up
}
