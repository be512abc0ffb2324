use std::collections::{BTreeSet, HashMap};

use crate::dataset::{Dataset, IntegrityReport};
use crate::model::{Edge, EdgeData, Kind, Node, NodeId};

// Undirected multigraph; adjacency holds edge indices per node.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn build(dataset: &Dataset, allowed: Option<&BTreeSet<NodeId>>) -> Self {
        let mut g = Graph::default();
        for node in dataset.nodes() {
            if allowed.map(|a| !a.contains(&node.id)).unwrap_or(false) {
                continue;
            }
            g.insert_node(node.clone());
        }
        for edge in dataset.edges() {
            g.insert_edge(edge.clone());
        }
        g
    }

    pub fn from_dataset(dataset: &Dataset) -> (Self, IntegrityReport) {
        let report = dataset.validate();
        report.log();
        (Self::build(dataset, None), report)
    }

    pub fn restrict_to_kinds(&self, kinds: &[Kind]) -> Self {
        let mut g = Graph::default();
        for node in &self.nodes {
            if kinds.contains(&node.kind) {
                g.insert_node(node.clone());
            }
        }
        for edge in &self.edges {
            g.insert_edge(edge.clone());
        }
        g
    }

    fn insert_node(&mut self, node: Node) {
        if let Some(&slot) = self.index.get(&node.id) {
            self.nodes[slot] = node;
            return;
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
    }

    fn insert_edge(&mut self, edge: Edge) -> bool {
        let (Some(&a), Some(&b)) = (self.index.get(&edge.source), self.index.get(&edge.target))
        else {
            return false;
        };
        let ei = self.edges.len();
        self.edges.push(edge);
        self.adjacency[a].push(ei);
        // a self-loop is listed twice, once per endpoint
        self.adjacency[b].push(ei);
        true
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn kind_of(&self, id: &NodeId) -> Option<&Kind> {
        self.node(id).map(|n| &n.kind)
    }

    pub fn nodes_of_kind<'a>(&'a self, kind: &'a Kind) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| &n.kind == kind)
    }

    pub fn incident_edges<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.index
            .get(id)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&ei| &self.edges[ei])
    }

    // each declared edge once, self-loops included
    pub fn declared_edges<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        let slots = self
            .index
            .get(id)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[]);
        slots
            .iter()
            .enumerate()
            .filter(move |&(k, ei)| k == 0 || slots[k - 1] != *ei)
            .map(move |(_, &ei)| &self.edges[ei])
    }

    pub fn neighbors(&self, id: &NodeId) -> BTreeSet<NodeId> {
        self.incident_edges(id)
            .filter_map(|e| e.other(id))
            .cloned()
            .collect()
    }

    pub fn degree(&self, id: &NodeId) -> usize {
        self.index
            .get(id)
            .map(|&i| self.adjacency[i].len())
            .unwrap_or(0)
    }

    pub fn edge_data(&self, a: &NodeId, b: &NodeId) -> Option<EdgeData> {
        self.incident_edges(a)
            .find(|e| e.other(a) == Some(b))
            .map(|e| EdgeData {
                rel: e.rel.clone(),
                weight: e.weight,
            })
    }
}
