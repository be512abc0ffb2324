use serde::Serialize;

use crate::graph::Graph;
use crate::model::{Kind, NodeId};
use crate::timeline::{LayerSet, VisibleSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: NodeId,
    pub label: String,
    pub rel: String,
    pub kind: Kind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub id: NodeId,
    pub label: String,
    pub kind: Kind,
    pub subtitle: String,
    pub metric: String,
    pub url: Option<String>,
    pub neighbors: Vec<Neighbor>,
}

impl Description {
    pub fn neighbors_in<'a>(&'a self, layers: &LayerSet) -> impl Iterator<Item = &'a Neighbor> + 'a {
        let layers = *layers;
        self.neighbors.iter().filter(move |n| layers.is_enabled(&n.kind))
    }
}

pub fn describe(graph: &Graph, id: &NodeId) -> Option<Description> {
    let node = graph.node(id)?;
    let mut neighbors: Vec<Neighbor> = graph
        .declared_edges(id)
        .filter_map(|e| {
            let other = e.other(id)?;
            let n = graph.node(other)?;
            Some(Neighbor {
                id: n.id.clone(),
                label: n.label.clone(),
                rel: e.rel.clone(),
                kind: n.kind.clone(),
            })
        })
        .collect();
    neighbors.sort_by(|a, b| {
        a.kind
            .as_str()
            .cmp(b.kind.as_str())
            .then_with(|| a.label.cmp(&b.label))
            .then_with(|| a.id.cmp(&b.id))
    });

    Some(Description {
        id: node.id.clone(),
        label: node.label.clone(),
        kind: node.kind.clone(),
        subtitle: node.subtitle.clone(),
        metric: node.metric.clone(),
        url: node.url.clone(),
        neighbors,
    })
}

pub fn spotlight_candidates(graph: &Graph, visible: &VisibleSet) -> Vec<NodeId> {
    let mut ids: Vec<(&str, String, &NodeId)> = visible
        .iter()
        .filter_map(|id| graph.node(id))
        .map(|n| (n.kind.as_str(), n.sort_label(), &n.id))
        .collect();
    ids.sort();
    ids.into_iter().map(|(_, _, id)| id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::model::{Edge, Node};
    use crate::resume::resume_dataset;

    #[test]
    fn self_loop_is_listed_once() {
        let mut ds = Dataset::new();
        ds.add(Node::new("p", "Loop", "project"));
        ds.add(Node::new("t", "Rust", "tool"));
        ds.link(Edge::new("p", "p", "iterates"));
        ds.link(Edge::new("p", "t", "uses"));
        let g = Graph::build(&ds, None);
        let info = describe(&g, &NodeId::new("p")).expect("p");
        let rels: Vec<&str> = info.neighbors.iter().map(|n| n.rel.as_str()).collect();
        assert_eq!(rels, vec!["iterates", "uses"]);
        assert_eq!(info.neighbors[0].id, NodeId::new("p"));
    }

    #[test]
    fn describe_lists_declared_edges_sorted() {
        let g = Graph::build(&resume_dataset(), None);
        let info = describe(&g, &NodeId::new("proj_vision")).expect("vision");
        assert_eq!(info.label, "Vision");
        assert_eq!(info.subtitle, "Low-latency Streamlit image classifier");

        let got: Vec<(&str, &str, &str)> = info
            .neighbors
            .iter()
            .map(|n| (n.kind.as_str(), n.label.as_str(), n.rel.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("outcome", "45 ms latency", "achieves"),
                ("outcome", "6× GPU speedup", "achieves"),
                ("tag", "Deployment", "tagged"),
                ("tag", "ML", "tagged"),
                ("tag", "Product", "tagged"),
                ("tool", "Docker", "uses"),
                ("tool", "Git/GitHub", "uses"),
                ("tool", "Streamlit", "uses"),
                ("tool", "TensorFlow", "uses"),
            ]
        );
    }

    #[test]
    fn describe_unknown_id_is_none() {
        let g = Graph::build(&resume_dataset(), None);
        assert!(describe(&g, &NodeId::new("nope")).is_none());
    }

    #[test]
    fn isolated_node_has_no_neighbors() {
        let g = Graph::build(&resume_dataset(), None);
        let info = describe(&g, &NodeId::new("tool_aws")).expect("aws");
        assert!(info.neighbors.is_empty());
    }

    #[test]
    fn neighbors_in_filters_disabled_layers() {
        let g = Graph::build(&resume_dataset(), None);
        let info = describe(&g, &NodeId::new("proj_vision")).expect("vision");
        let shown: Vec<&str> = info
            .neighbors_in(&LayerSet::default())
            .map(|n| n.kind.as_str())
            .collect();
        assert_eq!(shown.len(), 6);
        assert!(!shown.contains(&"tag"));
    }

    #[test]
    fn candidates_sort_by_kind_then_label() {
        let g = Graph::build(&resume_dataset(), None);
        let visible = VisibleSet::from([
            NodeId::new("tool_sql"),
            NodeId::new("proj_vision"),
            NodeId::new("tool_python"),
            NodeId::new("exp_barnes"),
            NodeId::new("ghost"),
        ]);
        let ids = spotlight_candidates(&g, &visible);
        let names: Vec<&str> = ids.iter().map(NodeId::as_str).collect();
        assert_eq!(names, vec!["exp_barnes", "proj_vision", "tool_python", "tool_sql"]);
    }
}
