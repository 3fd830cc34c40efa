// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::engine::registry::FileRegistry;

/// One declared dependency: `dependency` must precede `dependent` in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub dependency: String,
    pub dependent: String,
}

/// Dependency graph for one target.
///
/// Nodes keep registration order, which the sorter uses to break ties. Edges
/// are kept exactly as declared: repeats are not collapsed, and an edge may name
/// a dependency that is not a node (a dangling dependency).
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<String>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// One lone node per registered file, then one edge per declaration.
    pub fn from_registry(registry: &FileRegistry) -> Self {
        let mut graph = Self::new();
        for record in registry.iter() {
            graph.add_node(&record.filename);
        }
        for record in registry.iter() {
            for dependency in &record.dependencies {
                graph.add_dependency(dependency, &record.filename);
            }
        }
        graph
    }

    /// Add a node; adding an existing node is a no-op.
    pub fn add_node(&mut self, name: &str) {
        if !self.node_index.contains_key(name) {
            self.node_index.insert(name.to_string(), self.nodes.len());
            self.nodes.push(name.to_string());
        }
    }

    /// Record that `dependent` must come after `dependency`.
    ///
    /// The dependent becomes a node if it is not one yet; the dependency does not.
    pub fn add_dependency(&mut self, dependency: &str, dependent: &str) {
        self.add_node(dependent);
        self.edges.push(Edge {
            dependency: dependency.to_string(),
            dependent: dependent.to_string(),
        });
    }

    /// Node names in registration order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Registration position of a node.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.node_index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    /// Get dependents for a node, in declaration order
    pub fn get_dependents(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.dependency == name)
            .map(|e| e.dependent.as_str())
            .collect()
    }

    /// Map each node to the names it depends on (dependent -> [dependencies]).
    pub fn build_reverse_dependencies(&self) -> HashMap<String, Vec<String>> {
        let mut reverse: HashMap<String, Vec<String>> = self
            .nodes
            .iter()
            .map(|n| (n.clone(), Vec::new()))
            .collect();
        for edge in &self.edges {
            reverse
                .entry(edge.dependent.clone())
                .or_default()
                .push(edge.dependency.clone());
        }
        reverse
    }

    /// Edges whose dependency is not a node, in declaration order.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| !self.contains(&e.dependency))
    }
}
