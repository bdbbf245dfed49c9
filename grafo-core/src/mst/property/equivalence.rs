//! Property 1: Equivalence with the array-scan oracle.
//!
//! Kruskal's forest must match the oracle's total weight, edge count and
//! component count. Prim from any vertex must match the oracle's weight for
//! that vertex's tree, and on connected input every start yields the same
//! total as Kruskal.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::GraphFixture;
use crate::{kruskal, prim};

use super::oracle::array_scan_forest;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let oracle = array_scan_forest(graph);
    let forest = kruskal(graph);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal weight mismatch: kruskal={}, oracle={} (topology={:?}, vertices={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.topology,
            graph.vertex_count(),
        )));
    }

    if forest.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "kruskal edge count mismatch: kruskal={}, oracle={} (topology={:?})",
            forest.len(),
            oracle.edge_count,
            fixture.topology,
        )));
    }

    let connected = oracle.component_count == 1;
    if forest.spans(graph.vertex_count()) != connected {
        return Err(TestCaseError::fail(format!(
            "spans() disagrees with oracle components={} (topology={:?})",
            oracle.component_count, fixture.topology,
        )));
    }

    for start in prim_starts(graph.vertex_count()) {
        let tree = prim(graph, start)
            .map_err(|e| TestCaseError::fail(format!("prim({start}) failed: {e}")))?;
        let expected = oracle.tree_weight_of[start];
        if tree.total_weight() != expected {
            return Err(TestCaseError::fail(format!(
                "prim({start}) weight mismatch: prim={}, oracle={expected} (topology={:?})",
                tree.total_weight(),
                fixture.topology,
            )));
        }
        if connected && tree.total_weight() != forest.total_weight() {
            return Err(TestCaseError::fail(format!(
                "prim({start})={} differs from kruskal={} on connected input",
                tree.total_weight(),
                forest.total_weight(),
            )));
        }
    }

    Ok(())
}

/// First, middle and last vertex.
fn prim_starts(vertex_count: usize) -> Vec<usize> {
    let mut starts = vec![0, vertex_count / 2, vertex_count - 1];
    starts.dedup();
    starts
}
