//! Property-based tests for traversal and component enumeration.
//!
//! Checks, over every generated topology, that components partition the
//! vertex set and agree with a union-find count, and that a breadth-first
//! traversal yields a consistent discovery tree: parent chains terminate at
//! the root within `n` steps, depths grow by one per tree edge, and the
//! reached set is exactly the start vertex's component.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;

use crate::test_utils::{
    GraphFixture, Topology, generate_fixture, graph_fixture_strategy, oracle_component_count,
    suite_proptest_config,
};
use crate::{Graph, Traversal};

use super::{breadth_first, connected_components};

fn run_components_partition_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let components = connected_components(graph);

    let mut seen = vec![false; graph.vertex_count()];
    for (index, members) in components.components().iter().enumerate() {
        prop_assert!(!members.is_empty(), "empty component {index}");
        prop_assert!(
            members.windows(2).all(|pair| pair[0] < pair[1]),
            "component {index} is not ascending: {members:?}"
        );
        for &vertex in members {
            prop_assert!(!seen[vertex], "vertex {vertex} listed twice");
            seen[vertex] = true;
            prop_assert_eq!(components.component_of(vertex), Some(index));
        }
    }
    prop_assert!(seen.iter().all(|&s| s), "some vertex is in no component");

    let firsts: Vec<usize> = components.components().iter().map(|c| c[0]).collect();
    prop_assert!(
        firsts.windows(2).all(|pair| pair[0] < pair[1]),
        "components are not ordered by smallest vertex"
    );

    for edge in graph.edges() {
        prop_assert_eq!(
            components.component_of(edge.source()),
            components.component_of(edge.target()),
            "edge {:?} crosses components",
            edge
        );
    }

    prop_assert_eq!(components.count(), oracle_component_count(graph));
    if fixture.topology == Topology::Sparse {
        prop_assert!(components.is_connected());
    }
    Ok(())
}

fn run_traversal_tree_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let start = graph.vertex_count() / 2;
    let traversal = breadth_first(graph, start)
        .map_err(|e| TestCaseError::fail(format!("breadth_first({start}) failed: {e}")))?;

    let component = connected_components(graph);
    let expected: Vec<usize> = component
        .component_of(start)
        .map(|index| component.components()[index].clone())
        .unwrap_or_default();
    let mut reached = traversal.order().to_vec();
    reached.sort_unstable();
    prop_assert_eq!(reached, expected, "reached set is not the start component");

    prop_assert_eq!(traversal.order().first().copied(), Some(start));
    prop_assert_eq!(traversal.tree_edges().len(), traversal.order().len() - 1);

    let mut previous_depth = 0;
    for &vertex in traversal.order() {
        let depth = traversal.depth(vertex).unwrap_or(usize::MAX);
        prop_assert!(depth >= previous_depth, "depths decrease along the order");
        previous_depth = depth;
        check_parent_chain(graph, &traversal, vertex)?;
    }
    Ok(())
}

/// Walks from `vertex` to the root, bounding the walk by the vertex count.
fn check_parent_chain(graph: &Graph, traversal: &Traversal, vertex: usize) -> TestCaseResult {
    let mut current = vertex;
    for _ in 0..graph.vertex_count() {
        let Some(parent) = traversal.parent(current) else {
            prop_assert_eq!(current, traversal.root(), "chain from {} stops early", vertex);
            return Ok(());
        };
        let weight = graph.weight(parent, current).unwrap_or(0);
        prop_assert!(weight > 0, "tree edge ({parent}, {current}) is not in the graph");
        prop_assert_eq!(traversal.depth(parent).map(|d| d + 1), traversal.depth(current));
        current = parent;
    }
    Err(TestCaseError::fail(format!(
        "parent chain from {vertex} does not terminate"
    )))
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn components_partition_vertices(fixture in graph_fixture_strategy()) {
        run_components_partition_property(&fixture)?;
    }

    #[test]
    fn traversal_forms_a_discovery_tree(fixture in graph_fixture_strategy()) {
        run_traversal_tree_property(&fixture)?;
    }
}

#[rstest]
fn properties_hold_for_each_topology(#[values(3, 17, 2024)] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    for topology in Topology::ALL {
        let fixture = generate_fixture(topology, &mut rng);
        run_components_partition_property(&fixture).expect("components must partition");
        run_traversal_tree_property(&fixture).expect("traversal must form a tree");
    }
}
