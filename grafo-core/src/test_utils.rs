//! Shared test utilities for `grafo-core`.
//!
//! Provides the proptest configuration used by every property suite and a
//! family of seeded graph generators covering the topologies that stress
//! tie-breaking, disconnected input and bipartiteness.

use grafo_test_support::ci::property_test_profile::PropertyTestProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for generated graphs.
const MAX_VERTICES: usize = 40;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = PropertyTestProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Topology {
    /// Random edges with weights drawn from a wide range.
    Unique,
    /// Random edges whose weights come from a pool of one to three values.
    ManyIdentical,
    /// A random spanning tree plus a few extra edges; always connected.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Two to five components with no edges between them.
    Disconnected,
    /// Edges only between the even and odd vertices.
    Bipartite,
}

impl Topology {
    /// Every topology, for exhaustive rstest cases.
    pub(crate) const ALL: [Self; 6] = [
        Self::Unique,
        Self::ManyIdentical,
        Self::Sparse,
        Self::Dense,
        Self::Disconnected,
        Self::Bipartite,
    ];
}

/// A generated graph together with how it was produced.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    /// The generated graph.
    pub graph: Graph,
    /// Topology used during generation.
    pub topology: Topology,
}

/// Generates fixtures over every topology, biased towards repeated weights.
pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for a specific topology.
pub(crate) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let matrix = match topology {
        Topology::Unique => random_matrix(rng, MAX_VERTICES, (0.1, 0.5), |r| r.gen_range(1..=1_000)),
        Topology::ManyIdentical => {
            let pool: Vec<u32> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            random_matrix(rng, MAX_VERTICES, (0.2, 0.6), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        Topology::Sparse => sparse_matrix(rng),
        Topology::Dense => {
            random_matrix(rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| r.gen_range(1..=100))
        }
        Topology::Disconnected => disconnected_matrix(rng),
        Topology::Bipartite => bipartite_matrix(rng),
    };

    GraphFixture {
        graph: Graph::from_matrix(&matrix).expect("generated matrices are square and symmetric"),
        topology,
    }
}

/// Symmetric zero matrix with helpers for placing undirected edges.
struct MatrixBuilder {
    rows: Vec<Vec<u32>>,
}

impl MatrixBuilder {
    fn new(vertex_count: usize) -> Self {
        Self {
            rows: vec![vec![0; vertex_count]; vertex_count],
        }
    }

    fn connect(&mut self, u: usize, v: usize, weight: u32) {
        if u != v {
            self.rows[u][v] = weight;
            self.rows[v][u] = weight;
        }
    }
}

fn random_matrix(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> Vec<Vec<u32>> {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut builder = MatrixBuilder::new(vertex_count);
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                builder.connect(u, v, w);
            }
        }
    }
    builder.rows
}

fn sparse_matrix(rng: &mut SmallRng) -> Vec<Vec<u32>> {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = MatrixBuilder::new(vertex_count);

    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        builder.connect(pair[0], pair[1], rng.gen_range(1..=100));
    }

    for _ in 0..rng.gen_range(0..=vertex_count / 2) {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        builder.connect(u, v, rng.gen_range(1..=100));
    }
    builder.rows
}

fn disconnected_matrix(rng: &mut SmallRng) -> Vec<Vec<u32>> {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut builder = MatrixBuilder::new(sizes.iter().sum());
    let mut offset = 0;
    for size in sizes {
        // A path keeps each block connected; random chords add cycles.
        for local in 1..size {
            builder.connect(offset + local - 1, offset + local, rng.gen_range(1..=50));
        }
        for u in 0..size {
            for v in (u + 2)..size {
                if rng.gen_bool(0.3) {
                    builder.connect(offset + u, offset + v, rng.gen_range(1..=50));
                }
            }
        }
        offset += size;
    }
    builder.rows
}

fn bipartite_matrix(rng: &mut SmallRng) -> Vec<Vec<u32>> {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.1..=0.6);
    let mut builder = MatrixBuilder::new(vertex_count);
    for u in (0..vertex_count).step_by(2) {
        for v in (1..vertex_count).step_by(2) {
            if rng.gen_bool(probability) {
                builder.connect(u, v, rng.gen_range(1..=20));
            }
        }
    }
    builder.rows
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

/// Counts connected components with a plain union-find over the edge list,
/// independent of the breadth-first machinery under test.
pub(crate) fn oracle_component_count(graph: &Graph) -> usize {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    let mut components = graph.vertex_count();
    for edge in graph.edges() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Path-halving find for union-find verification.
pub(crate) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

// Biased towards `ManyIdentical`, the case that exercises tie-breaking.
impl proptest::arbitrary::Arbitrary for Topology {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            2 => Just(Self::Bipartite),
        ]
    }
}
