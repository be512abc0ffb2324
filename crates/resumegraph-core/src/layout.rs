use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::graph::Graph;
use crate::model::{Kind, Node, NodeId};

pub const DEFAULT_LAYER_GAP: f64 = 2.2;
pub const DEFAULT_Y_SPREAD: f64 = 3.2;
const JITTER: f64 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub type Positions = HashMap<NodeId, Point>;

pub fn compute_positions(graph: &Graph, kinds: &[Kind], layer_gap: f64, y_spread: f64) -> Positions {
    let mut pos = Positions::new();
    if graph.is_empty() {
        return pos;
    }

    let columns = kinds.len();
    let x0 = -((columns.saturating_sub(1)) as f64 * layer_gap) / 2.0;

    for (i, kind) in kinds.iter().enumerate() {
        let x = x0 + i as f64 * layer_gap;
        let column = ranked_column(graph, kind);
        let m = column.len();

        for (j, node) in column.into_iter().enumerate() {
            let y = if m == 1 {
                0.0
            } else {
                y_spread - 2.0 * y_spread * (j as f64 / (m - 1) as f64)
            };
            let jitter = if j % 2 == 0 { JITTER } else { -JITTER };
            pos.insert(node.id.clone(), Point { x: x + jitter, y });
        }
    }
    pos
}

// degree desc, then lower-cased label, then id
fn ranked_column<'a>(graph: &'a Graph, kind: &'a Kind) -> Vec<&'a Node> {
    let mut column: Vec<(usize, String, &Node)> = graph
        .nodes_of_kind(kind)
        .map(|n| (graph.degree(&n.id), n.sort_label(), n))
        .collect();
    column.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.id.cmp(&b.2.id))
    });
    column.into_iter().map(|(_, _, n)| n).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

pub fn bounds(positions: &Positions, pad: f64) -> Option<Bounds> {
    let mut it = positions.values();
    let first = it.next()?;
    let (mut min, mut max) = (*first, *first);
    for p in it {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some(Bounds {
        min: Point {
            x: min.x - pad,
            y: min.y - pad,
        },
        max: Point {
            x: max.x + pad,
            y: max.y + pad,
        },
    })
}

#[derive(Debug, Clone, PartialEq)]
struct LayoutKey {
    nodes: BTreeSet<NodeId>,
    kinds: Vec<Kind>,
    layer_gap: u64,
    y_spread: u64,
}

#[derive(Debug, Default)]
pub struct LayoutCache {
    key: Option<LayoutKey>,
    positions: Positions,
    misses: u64,
}

impl LayoutCache {
    pub fn positions(&mut self, graph: &Graph, kinds: &[Kind], layer_gap: f64, y_spread: f64) -> &Positions {
        let key = LayoutKey {
            nodes: graph.nodes().map(|n| n.id.clone()).collect(),
            kinds: kinds.to_vec(),
            layer_gap: layer_gap.to_bits(),
            y_spread: y_spread.to_bits(),
        };
        if self.key.as_ref() != Some(&key) {
            self.misses += 1;
            tracing::debug!(
                nodes = key.nodes.len(),
                columns = kinds.len(),
                layer_gap,
                y_spread,
                "recomputing layout"
            );
            self.positions = compute_positions(graph, kinds, layer_gap, y_spread);
            self.key = Some(key);
        }
        &self.positions
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::model::Edge;

    fn graph() -> Graph {
        let mut ds = Dataset::new();
        ds.add(Node::new("p_b", "beta", "project"));
        ds.add(Node::new("p_a", "Alpha", "project"));
        ds.add(Node::new("p_hub", "Zeta", "project"));
        ds.add(Node::new("t1", "Python", "tool"));
        ds.add(Node::new("t2", "SQL", "tool"));
        ds.link(Edge::new("p_hub", "t1", "uses"));
        ds.link(Edge::new("p_hub", "t2", "uses"));
        ds.link(Edge::new("p_b", "t1", "uses"));
        ds.link(Edge::new("p_a", "t1", "uses"));
        Graph::build(&ds, None)
    }

    fn kinds() -> Vec<Kind> {
        vec![Kind::Project, Kind::Tool, Kind::Outcome]
    }

    fn at(pos: &Positions, id: &str) -> Point {
        pos[&NodeId::new(id)]
    }

    #[test]
    fn columns_are_centred_and_spaced() {
        let pos = compute_positions(&graph(), &kinds(), 2.0, 3.0);
        // three columns at -2, 0, 2 (outcome column empty but reserved)
        let hub = at(&pos, "p_hub");
        assert!((hub.x - (-2.0 + JITTER)).abs() < 1e-12);
        let t1 = at(&pos, "t1");
        assert!((t1.x - JITTER).abs() < 1e-12);
    }

    #[test]
    fn rank_by_degree_then_label() {
        let pos = compute_positions(&graph(), &kinds(), 2.0, 3.0);
        // p_hub has degree 2; Alpha before beta on the tie
        assert_eq!(at(&pos, "p_hub").y, 3.0);
        assert_eq!(at(&pos, "p_a").y, 0.0);
        assert_eq!(at(&pos, "p_b").y, -3.0);
        assert!((at(&pos, "p_a").x - (-2.0 - JITTER)).abs() < 1e-12);
    }

    #[test]
    fn single_node_column_is_centred_vertically() {
        let mut ds = Dataset::new();
        ds.add(Node::new("only", "Only", "tag"));
        let g = Graph::build(&ds, None);
        let pos = compute_positions(&g, &[Kind::Tag], 2.2, 3.2);
        assert_eq!(at(&pos, "only"), Point { x: JITTER, y: 0.0 });
    }

    #[test]
    fn unlisted_kinds_get_no_position() {
        let pos = compute_positions(&graph(), &[Kind::Tool], 2.0, 3.0);
        assert_eq!(pos.len(), 2);
        assert!(!pos.contains_key(&NodeId::new("p_hub")));
    }

    #[test]
    fn layout_is_deterministic() {
        let g = graph();
        let a = compute_positions(&g, &kinds(), 2.2, 3.2);
        let b = compute_positions(&g, &kinds(), 2.2, 3.2);
        assert_eq!(a.len(), b.len());
        for (id, p) in &a {
            let q = b[id];
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn empty_graph_has_empty_layout() {
        let g = Graph::default();
        assert!(compute_positions(&g, &kinds(), 2.2, 3.2).is_empty());
        assert!(bounds(&Positions::new(), 0.5).is_none());
    }

    #[test]
    fn cache_recomputes_only_on_key_change() {
        let g = graph();
        let mut cache = LayoutCache::default();
        cache.positions(&g, &kinds(), 2.2, 3.2);
        cache.positions(&g, &kinds(), 2.2, 3.2);
        assert_eq!(cache.misses(), 1);
        cache.positions(&g, &kinds(), 2.4, 3.2);
        assert_eq!(cache.misses(), 2);
        let h = g.restrict_to_kinds(&[Kind::Tool]);
        cache.positions(&h, &kinds(), 2.4, 3.2);
        assert_eq!(cache.misses(), 3);
    }

    #[test]
    fn bounds_cover_all_points() {
        let pos = compute_positions(&graph(), &kinds(), 2.0, 3.0);
        let b = bounds(&pos, 0.5).expect("bounds");
        assert!(b.min.y <= -3.5 && b.max.y >= 3.5);
        assert!(b.min.x < -2.0 && b.max.x > 0.0);
    }
}
