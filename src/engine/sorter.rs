// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dependency-respecting output order.
//!
//! Kahn's algorithm over node indices. Among the nodes whose dependencies have
//! all been emitted, the one registered first goes next, so files with no
//! relationships at all come out in exactly the order they were listed.
//!
//! # Failure handling
//!
//! - **Dangling dependency**: fatal unless `force` is set, in which case the
//!   edge is dropped and a warning recorded.
//! - **Cycle**: never fatal. When nothing is eligible but files remain, the
//!   loop to break is a cyclic group of files that nothing outside the group
//!   is waiting on. Its earliest-registered file is emitted anyway and a
//!   warning names the remainder. Only edges inside that loop are ignored, so
//!   files downstream of a cycle still come after it.
//!
//! Either way every node is emitted exactly once.
//!
//! **Time Complexity**: O((V + E) log V) for the ordered ready set, plus
//! O(V + E) per forced cycle break for the cycle report.

use std::collections::BTreeSet;

use crate::engine::cycles::{find_cycle, stalled_component};
use crate::engine::dependency_graph::DependencyGraph;
use crate::errors::{ConcatError, ConcatWarning, Diagnostics};
use crate::observability::messages::sort::{DanglingDependency, OrderResolved};
use crate::observability::messages::StructuredLog;

/// Linearize `graph`, recording non-fatal problems in `diagnostics`.
///
/// # Example
/// ```
/// use concat_depends::engine::dependency_graph::DependencyGraph;
/// use concat_depends::engine::sorter::topological_order;
/// use concat_depends::errors::Diagnostics;
///
/// let mut graph = DependencyGraph::new();
/// for name in ["file3", "file4", "file5"] {
///     graph.add_node(name);
/// }
/// graph.add_dependency("file5", "file3");
///
/// let mut diagnostics = Diagnostics::new();
/// let order = topological_order(&graph, false, &mut diagnostics).unwrap();
/// assert_eq!(order, vec!["file4", "file5", "file3"]);
/// ```
pub fn topological_order(
    graph: &DependencyGraph,
    force: bool,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<String>, ConcatError> {
    let nodes = graph.nodes();
    let node_count = nodes.len();
    let mut in_degree = vec![0usize; node_count];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut edge_count = 0;

    for edge in graph.edges() {
        let Some(to) = graph.index_of(&edge.dependent) else {
            continue;
        };
        match graph.index_of(&edge.dependency) {
            Some(from) => {
                in_degree[to] += 1;
                dependents[from].push(to);
                edge_count += 1;
            }
            None if force => diagnostics.warn(ConcatWarning::DanglingDependency {
                file: edge.dependent.clone(),
                dependency: edge.dependency.clone(),
            }),
            None => {
                DanglingDependency {
                    file: &edge.dependent,
                    dependency: &edge.dependency,
                    ignored: false,
                }
                .log();
                return Err(ConcatError::DanglingDependency {
                    file: edge.dependent.clone(),
                    dependency: edge.dependency.clone(),
                });
            }
        }
    }

    let mut ready: BTreeSet<usize> = (0..node_count).filter(|&i| in_degree[i] == 0).collect();
    let mut pending = vec![true; node_count];
    let mut order = Vec::with_capacity(node_count);

    while order.len() < node_count {
        let next = match ready.pop_first() {
            Some(next) => next,
            None => {
                let Some(component) = stalled_component(&dependents, &pending) else {
                    break;
                };
                record_cycle(nodes, &dependents, &pending, &component, diagnostics);
                component[0]
            }
        };

        pending[next] = false;
        order.push(nodes[next].clone());

        for &dependent in &dependents[next] {
            if !pending[dependent] {
                continue;
            }
            in_degree[dependent] = in_degree[dependent].saturating_sub(1);
            if in_degree[dependent] == 0 {
                ready.insert(dependent);
            }
        }
    }

    OrderResolved {
        order: &order,
        edge_count,
    }
    .log();

    Ok(order)
}

fn record_cycle(
    nodes: &[String],
    dependents: &[Vec<usize>],
    pending: &[bool],
    component: &[usize],
    diagnostics: &mut Diagnostics,
) {
    let unresolved = (0..nodes.len())
        .filter(|&i| pending[i])
        .map(|i| nodes[i].clone())
        .collect();

    let mut in_component = vec![false; nodes.len()];
    for &i in component {
        in_component[i] = true;
    }
    let cycle = find_cycle(dependents, &in_component)
        .unwrap_or_default()
        .into_iter()
        .map(|i| nodes[i].clone())
        .collect();

    diagnostics.warn(ConcatWarning::CyclicDependency {
        unresolved,
        cycle,
        forced: nodes[component[0]].clone(),
    });
}
