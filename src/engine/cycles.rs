// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Cycle analysis over the nodes the sorter could not place.
//!
//! When the sorter stalls, every remaining node waits on another remaining
//! node. Two questions follow:
//!
//! - which node to emit so that only a cyclic edge is broken
//!   ([`stalled_component`]): the strongly connected components of the
//!   remainder are computed, and a component no outside node points into is
//!   chosen. Emitting any of its members breaks only edges inside the loop.
//! - which files form the loop, for the warning ([`find_cycle`]): a depth-first
//!   search with a recursion stack. Reaching a node already on the stack
//!   closes a cycle.
//!
//! Both walks use explicit stacks, so long dependency chains cannot exhaust
//! the thread's stack. Roots are tried in registration order and neighbours in
//! declaration order, so results are deterministic.

const UNVISITED: usize = usize::MAX;

/// Strongly connected components among the nodes where `pending[i]` is true.
///
/// `dependents[i]` lists the nodes that must come after node `i`. Tarjan's
/// algorithm; components come out in reverse topological order.
pub fn strongly_connected_components(dependents: &[Vec<usize>], pending: &[bool]) -> Vec<Vec<usize>> {
    let node_count = dependents.len();
    let mut index = vec![UNVISITED; node_count];
    let mut lowlink = vec![0usize; node_count];
    let mut on_stack = vec![false; node_count];
    let mut stack = Vec::new();
    let mut components = Vec::new();
    let mut counter = 0;

    for root in 0..node_count {
        if !pending[root] || index[root] != UNVISITED {
            continue;
        }

        // (node, position of the next neighbour to look at)
        let mut frames = vec![(root, 0usize)];
        index[root] = counter;
        lowlink[root] = counter;
        counter += 1;
        stack.push(root);
        on_stack[root] = true;

        while let Some(frame) = frames.last_mut() {
            let node = frame.0;

            if let Some(&next) = dependents[node].get(frame.1) {
                frame.1 += 1;
                if !pending[next] {
                    continue;
                }
                if index[next] == UNVISITED {
                    index[next] = counter;
                    lowlink[next] = counter;
                    counter += 1;
                    stack.push(next);
                    on_stack[next] = true;
                    frames.push((next, 0));
                } else if on_stack[next] {
                    lowlink[node] = lowlink[node].min(index[next]);
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                lowlink[parent] = lowlink[parent].min(lowlink[node]);
            }

            if lowlink[node] == index[node] {
                let mut component = Vec::new();
                while let Some(member) = stack.pop() {
                    on_stack[member] = false;
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                components.push(component);
            }
        }
    }

    components
}

/// The cyclic component to break next, sorted by registration index.
///
/// Only components with no incoming edge from another pending node qualify.
/// Among those, the one holding the earliest-registered node wins. `None`
/// when the pending nodes contain no cycle.
pub fn stalled_component(dependents: &[Vec<usize>], pending: &[bool]) -> Option<Vec<usize>> {
    let components = strongly_connected_components(dependents, pending);

    let mut component_of = vec![UNVISITED; dependents.len()];
    for (id, component) in components.iter().enumerate() {
        for &node in component {
            component_of[node] = id;
        }
    }

    let mut has_upstream = vec![false; components.len()];
    for node in (0..dependents.len()).filter(|&i| pending[i]) {
        for &next in &dependents[node] {
            if pending[next] && component_of[next] != component_of[node] {
                has_upstream[component_of[next]] = true;
            }
        }
    }

    components
        .into_iter()
        .enumerate()
        .filter(|(id, _)| !has_upstream[*id])
        .map(|(_, mut component)| {
            component.sort_unstable();
            component
        })
        .filter(|component| component.len() > 1 || dependents[component[0]].contains(&component[0]))
        .min_by_key(|component| component[0])
}

/// First cycle among the nodes where `pending[i]` is true, as node indices.
///
/// `dependents[i]` lists the nodes that must come after node `i`. The result
/// starts and ends with the same node, e.g. `[2, 3, 4, 2]`.
pub fn find_cycle(dependents: &[Vec<usize>], pending: &[bool]) -> Option<Vec<usize>> {
    let mut visited = vec![false; dependents.len()];
    let mut on_stack = vec![false; dependents.len()];

    for root in 0..dependents.len() {
        if pending[root] && !visited[root] {
            if let Some(cycle) = dfs_cycle_detection(root, dependents, pending, &mut visited, &mut on_stack) {
                return Some(cycle);
            }
        }
    }

    None
}

fn dfs_cycle_detection(
    root: usize,
    dependents: &[Vec<usize>],
    pending: &[bool],
    visited: &mut [bool],
    on_stack: &mut [bool],
) -> Option<Vec<usize>> {
    let mut path = vec![root];
    let mut cursors = vec![0usize];
    visited[root] = true;
    on_stack[root] = true;

    while let Some(&node) = path.last() {
        let depth = path.len() - 1;
        let Some(&next) = dependents[node].get(cursors[depth]) else {
            on_stack[node] = false;
            path.pop();
            cursors.pop();
            continue;
        };
        cursors[depth] += 1;

        if !pending[next] {
            continue;
        }
        if on_stack[next] {
            let start = path.iter().position(|&n| n == next)?;
            let mut cycle = path[start..].to_vec();
            cycle.push(next);
            return Some(cycle);
        }
        if !visited[next] {
            visited[next] = true;
            on_stack[next] = true;
            path.push(next);
            cursors.push(0);
        }
    }

    None
}
