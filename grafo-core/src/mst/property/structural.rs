//! Property 2: Structural invariant verification.
//!
//! For every forest produced by Kruskal and every tree produced by Prim:
//!
//! - **Provenance**: each edge exists in the graph with the reported weight.
//! - **Acyclicity**: no accepted edge closes a cycle.
//! - **Edge count**: `V - C` for Kruskal, component size minus one for Prim.
//! - **Total**: the reported total equals the sum of edge weights.
//! - **Orientation**: Prim edges run from a reached vertex to a new one.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::{GraphFixture, find_root, oracle_component_count};
use crate::{Edge, Graph, MinimumSpanningForest, connected_components, kruskal, prim};

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let forest = kruskal(graph);

    validate_provenance(graph, forest.edges())?;
    validate_acyclicity(graph.vertex_count(), forest.edges())?;
    validate_total(&forest)?;

    let components = oracle_component_count(graph);
    let expected = graph.vertex_count() - components;
    if forest.len() != expected {
        return Err(TestCaseError::fail(format!(
            "kruskal edge count {}, expected n - c = {expected} (c={components}, topology={:?})",
            forest.len(),
            fixture.topology,
        )));
    }

    let start = graph.vertex_count() - 1;
    let tree = prim(graph, start)
        .map_err(|e| TestCaseError::fail(format!("prim({start}) failed: {e}")))?;
    validate_provenance(graph, tree.edges())?;
    validate_acyclicity(graph.vertex_count(), tree.edges())?;
    validate_total(&tree)?;
    validate_prim_growth(start, tree.edges())?;

    let component_size = connected_components(graph)
        .components()
        .iter()
        .find(|members| members.contains(&start))
        .map_or(0, Vec::len);
    if tree.len() + 1 != component_size {
        return Err(TestCaseError::fail(format!(
            "prim({start}) accepted {} edges for a component of {component_size} vertices",
            tree.len(),
        )));
    }

    Ok(())
}

/// Verifies every edge is present in the graph with the same weight.
fn validate_provenance(graph: &Graph, edges: &[Edge]) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        let (u, v) = edge.endpoints();
        if u == v {
            return Err(TestCaseError::fail(format!("edge {i}: self-loop on {u}")));
        }
        let stored = graph
            .weight(u, v)
            .map_err(|e| TestCaseError::fail(format!("edge {i}: {e}")))?;
        if stored == 0 || stored != edge.weight() {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({u}, {v}) has weight {}, graph stores {stored}",
                edge.weight(),
            )));
        }
    }
    Ok(())
}

/// Detects cycles using union-find.
fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

fn validate_total(forest: &MinimumSpanningForest) -> TestCaseResult {
    let sum: u64 = forest.edges().iter().map(|e| u64::from(e.weight())).sum();
    if sum != forest.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total_weight {} differs from edge sum {sum}",
            forest.total_weight(),
        )));
    }
    Ok(())
}

/// Each Prim edge must leave the tree built so far and reach a new vertex.
fn validate_prim_growth(start: usize, edges: &[Edge]) -> TestCaseResult {
    let mut in_tree = vec![start];
    for (i, edge) in edges.iter().enumerate() {
        if !in_tree.contains(&edge.source()) || in_tree.contains(&edge.target()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) does not extend the tree",
                edge.source(),
                edge.target(),
            )));
        }
        in_tree.push(edge.target());
    }
    Ok(())
}
