use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::model::{Edge, Node, NodeId};

const MAX_EXAMPLES: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    duplicates: Vec<NodeId>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    // a repeated id replaces the earlier definition in place
    pub fn add(&mut self, node: Node) {
        if let Some(&slot) = self.index.get(&node.id) {
            self.duplicates.push(node.id.clone());
            self.nodes[slot] = node;
            return;
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    pub fn link(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn validate(&self) -> IntegrityReport {
        let mut invalid_edges = 0usize;
        let mut examples = Vec::new();
        for e in &self.edges {
            if self.contains(&e.source) && self.contains(&e.target) {
                continue;
            }
            invalid_edges += 1;
            if examples.len() < MAX_EXAMPLES {
                examples.push(InvalidEdge {
                    source: e.source.clone(),
                    target: e.target.clone(),
                    rel: e.rel.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        let duplicate_ids: Vec<NodeId> = self
            .duplicates
            .iter()
            .filter(|id| seen.insert((*id).clone()))
            .cloned()
            .collect();

        IntegrityReport {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            invalid_edges,
            examples,
            duplicate_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub rel: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub nodes: usize,
    pub edges: usize,
    pub invalid_edges: usize,
    pub examples: Vec<InvalidEdge>,
    pub duplicate_ids: Vec<NodeId>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.invalid_edges == 0 && self.duplicate_ids.is_empty()
    }

    pub fn log(&self) {
        tracing::info!(nodes = self.nodes, edges = self.edges, "dataset loaded");
        if self.invalid_edges > 0 {
            let examples: Vec<String> = self
                .examples
                .iter()
                .map(|e| format!("({}, {}, {})", e.source, e.target, e.rel))
                .collect();
            tracing::warn!(
                invalid_edges = self.invalid_edges,
                examples = ?examples,
                "edges reference unknown nodes; dropping them"
            );
        }
        if !self.duplicate_ids.is_empty() {
            tracing::warn!(
                duplicate_ids = ?self.duplicate_ids,
                "node ids defined more than once; keeping the last definition"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_counts_dangling_edges() {
        let mut ds = Dataset::new();
        ds.add(Node::new("a", "A", "project"));
        ds.add(Node::new("b", "B", "tool"));
        ds.link(Edge::new("a", "b", "uses"));
        ds.link(Edge::new("a", "ghost", "uses"));
        ds.link(Edge::new("nobody", "b", "uses"));

        let report = ds.validate();
        assert_eq!(report.nodes, 2);
        assert_eq!(report.edges, 3);
        assert_eq!(report.invalid_edges, 2);
        assert_eq!(report.examples.len(), 2);
        assert_eq!(report.examples[0].target, NodeId::new("ghost"));
        assert!(!report.is_clean());
    }

    #[test]
    fn examples_are_capped() {
        let mut ds = Dataset::new();
        ds.add(Node::new("a", "A", "project"));
        for i in 0..25 {
            ds.link(Edge::new("a", format!("missing-{i}"), "uses"));
        }
        let report = ds.validate();
        assert_eq!(report.invalid_edges, 25);
        assert_eq!(report.examples.len(), MAX_EXAMPLES);
    }

    #[test]
    fn duplicate_id_replaces_in_place() {
        let mut ds = Dataset::new();
        ds.add(Node::new("a", "First", "project"));
        ds.add(Node::new("b", "B", "tool"));
        ds.add(Node::new("a", "Second", "project"));

        assert_eq!(ds.nodes().len(), 2);
        assert_eq!(ds.nodes()[0].label, "Second");
        let report = ds.validate();
        assert_eq!(report.duplicate_ids, vec![NodeId::new("a")]);
    }
}
