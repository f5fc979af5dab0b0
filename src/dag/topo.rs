// src/dag/topo.rs

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::catalog::CourseCode;
use crate::dag::graph::DependencyGraph;
use crate::errors::{PlanError, Result};

/// Order every course so that each comes after all of its requisites.
///
/// Kahn's algorithm. Among courses whose requisites are all placed, the
/// lexicographically smallest course code goes first, so the order is fully
/// deterministic for a given graph.
///
/// Fails with [`PlanError::Cycle`] naming every course that sits on a cycle.
pub fn topological_order(graph: &DependencyGraph) -> Result<Vec<CourseCode>> {
    let inner = graph.inner();

    let mut in_degree: Vec<usize> = inner
        .node_indices()
        .map(|idx| inner.neighbors_directed(idx, Direction::Incoming).count())
        .collect();

    let mut ready: BinaryHeap<Reverse<(&str, NodeIndex)>> = inner
        .node_indices()
        .filter(|idx| in_degree[idx.index()] == 0)
        .map(|idx| Reverse((inner[idx].code.as_str(), idx)))
        .collect();

    let mut order = Vec::with_capacity(inner.node_count());

    while let Some(Reverse((code, idx))) = ready.pop() {
        order.push(code.to_string());

        for next in inner.neighbors_directed(idx, Direction::Outgoing) {
            let degree = &mut in_degree[next.index()];
            *degree -= 1;
            if *degree == 0 {
                ready.push(Reverse((inner[next].code.as_str(), next)));
            }
        }
    }

    if order.len() < inner.node_count() {
        let members = cycle_members(graph);
        debug!(?members, "dependency graph is cyclic");
        return Err(PlanError::Cycle { members });
    }

    Ok(order)
}

/// Courses lying on at least one directed cycle, sorted by code.
fn cycle_members(graph: &DependencyGraph) -> Vec<CourseCode> {
    let inner = graph.inner();
    let mut members: Vec<CourseCode> = tarjan_scc(inner)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || inner.contains_edge(component[0], component[0])
        })
        .flatten()
        .map(|idx| inner[idx].code.clone())
        .collect();
    members.sort();
    members
}
