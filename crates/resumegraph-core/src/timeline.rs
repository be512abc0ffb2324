use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::model::{Kind, NodeId, KIND_ORDER};

pub type VisibleSet = BTreeSet<NodeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSet {
    pub experiences: bool,
    pub projects: bool,
    pub tools: bool,
    pub outcomes: bool,
    pub leadership: bool,
    pub tags: bool,
}

impl Default for LayerSet {
    fn default() -> Self {
        Self {
            experiences: true,
            projects: true,
            tools: true,
            outcomes: true,
            leadership: false,
            tags: false,
        }
    }
}

impl LayerSet {
    pub fn none() -> Self {
        Self {
            experiences: false,
            projects: false,
            tools: false,
            outcomes: false,
            leadership: false,
            tags: false,
        }
    }

    pub fn all() -> Self {
        Self {
            experiences: true,
            projects: true,
            tools: true,
            outcomes: true,
            leadership: true,
            tags: true,
        }
    }

    pub fn from_raw<'a>(raw: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::none();
        for r in raw {
            set.set(&Kind::from(r), true);
        }
        set
    }

    pub fn is_enabled(&self, kind: &Kind) -> bool {
        match kind {
            Kind::Experience => self.experiences,
            Kind::Project => self.projects,
            Kind::Tool => self.tools,
            Kind::Outcome => self.outcomes,
            Kind::Leadership => self.leadership,
            Kind::Tag => self.tags,
            Kind::Unrecognized(_) => false,
        }
    }

    pub fn set(&mut self, kind: &Kind, on: bool) {
        let flag = match kind {
            Kind::Experience => &mut self.experiences,
            Kind::Project => &mut self.projects,
            Kind::Tool => &mut self.tools,
            Kind::Outcome => &mut self.outcomes,
            Kind::Leadership => &mut self.leadership,
            Kind::Tag => &mut self.tags,
            Kind::Unrecognized(_) => return,
        };
        *flag = on;
    }

    pub fn kinds(&self) -> Vec<Kind> {
        KIND_ORDER
            .iter()
            .filter(|k| self.is_enabled(k))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolFocus {
    #[default]
    All,
    Tool(NodeId),
}

pub fn month_floor(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

// today's month is always the last stop
pub fn timeline_stops(graph: &Graph, today: NaiveDate) -> Vec<NaiveDate> {
    let mut stops: BTreeSet<NaiveDate> = graph
        .nodes()
        .filter(|n| n.kind.is_dated() || n.kind == Kind::Leadership)
        .filter_map(|n| n.start)
        .map(month_floor)
        .collect();
    stops.insert(month_floor(today));
    stops.into_iter().collect()
}

pub struct Visibility<'a> {
    graph: &'a Graph,
    layers: LayerSet,
    focus: Option<(&'a NodeId, BTreeSet<NodeId>)>,
}

impl<'a> Visibility<'a> {
    pub fn new(graph: &'a Graph, layers: LayerSet, focus: &'a ToolFocus) -> Self {
        let focus = match focus {
            ToolFocus::All => None,
            ToolFocus::Tool(id) if graph.kind_of(id) == Some(&Kind::Tool) => {
                let projects = graph
                    .neighbors(id)
                    .into_iter()
                    .filter(|nb| graph.kind_of(nb) == Some(&Kind::Project))
                    .collect();
                Some((id, projects))
            }
            ToolFocus::Tool(id) => {
                tracing::debug!(tool = %id, "tool focus does not name a tool; ignoring");
                None
            }
        };
        Self {
            graph,
            layers,
            focus,
        }
    }

    pub fn at(&self, stop: NaiveDate) -> VisibleSet {
        let mut visible = VisibleSet::new();

        for node in self.graph.nodes() {
            if !self.layers.is_enabled(&node.kind) {
                continue;
            }
            if node.kind.is_dated() {
                if node.start.map(month_floor).is_some_and(|s| s <= stop) {
                    visible.insert(node.id.clone());
                }
            } else if node.kind.is_unconditional() {
                visible.insert(node.id.clone());
            }
        }

        if let Some((tool, adjacent)) = &self.focus {
            visible.retain(|id| {
                self.graph.kind_of(id) != Some(&Kind::Project) || adjacent.contains(id)
            });
            visible.insert((*tool).clone());
        }

        let mut expanded = visible.clone();
        for id in &visible {
            for nb in self.graph.neighbors(id) {
                let Some(kind) = self.graph.kind_of(&nb) else {
                    continue;
                };
                if kind.is_expansion_target() && self.layers.is_enabled(kind) {
                    expanded.insert(nb);
                }
            }
        }
        expanded
    }

    pub fn per_stop(&self, stops: &[NaiveDate]) -> Vec<VisibleSet> {
        stops.iter().map(|&s| self.at(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::model::{Edge, Node};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
    }

    fn id(s: &str) -> NodeId {
        NodeId::new(s)
    }

    fn graph() -> Graph {
        let mut ds = Dataset::new();
        ds.add(Node::new("p1", "P1", "project").start(d(2023, 10, 1)));
        ds.add(Node::new("p2", "P2", "project").start(d(2025, 3, 1)));
        ds.add(Node::new("p3", "P3", "project").start(d(2024, 6, 17)));
        ds.add(
            Node::new("e1", "E1", "experience")
                .start(d(2024, 1, 1))
                .end(d(2024, 3, 1)),
        );
        ds.add(Node::new("l1", "L1", "leadership"));
        ds.add(Node::new("g1", "G1", "tag"));
        ds.add(Node::new("t1", "T1", "tool"));
        ds.add(Node::new("t2", "T2", "tool"));
        ds.add(Node::new("t3", "T3", "tool"));
        ds.add(Node::new("o1", "O1", "outcome"));
        ds.add(Node::new("x1", "X1", "skill").start(d(2023, 1, 1)));
        ds.link(Edge::new("p1", "t1", "uses"));
        ds.link(Edge::new("p2", "t2", "uses"));
        ds.link(Edge::new("p3", "t1", "uses"));
        ds.link(Edge::new("t1", "t3", "pairs"));
        ds.link(Edge::new("p2", "o1", "achieves"));
        ds.link(Edge::new("e1", "t2", "uses"));
        ds.link(Edge::new("p1", "g1", "tagged"));
        Graph::build(&ds, None)
    }

    fn projects_only() -> LayerSet {
        LayerSet {
            projects: true,
            ..LayerSet::none()
        }
    }

    #[test]
    fn cumulative_reveal_scenario() {
        let g = graph();
        let vis = Visibility::new(&g, projects_only(), &ToolFocus::All);
        let early = vis.at(d(2024, 1, 1));
        assert!(early.contains(&id("p1")));
        assert!(!early.contains(&id("p2")));
        let later = vis.at(d(2025, 3, 1));
        assert!(later.contains(&id("p1")) && later.contains(&id("p2")));
    }

    #[test]
    fn mid_month_start_is_revealed_at_its_month() {
        let g = graph();
        let vis = Visibility::new(&g, projects_only(), &ToolFocus::All);
        assert!(vis.at(d(2024, 6, 1)).contains(&id("p3")));
        assert!(!vis.at(d(2024, 5, 1)).contains(&id("p3")));
    }

    #[test]
    fn reveal_is_monotonic_and_ignores_end() {
        let g = graph();
        let vis = Visibility::new(&g, LayerSet::all(), &ToolFocus::All);
        let stops = timeline_stops(&g, d(2026, 10, 16));
        let sets = vis.per_stop(&stops);
        for i in 0..sets.len() {
            for j in i + 1..sets.len() {
                for nid in &sets[i] {
                    if g.kind_of(nid).is_some_and(|k| k.is_dated()) {
                        assert!(sets[j].contains(nid), "{nid} vanished at stop {j}");
                    }
                }
            }
        }
        // e1 ended 2024-03 but stays
        assert!(vis.at(d(2025, 1, 1)).contains(&id("e1")));
    }

    #[test]
    fn stops_are_sorted_distinct_months_plus_today() {
        let g = graph();
        let stops = timeline_stops(&g, d(2026, 10, 16));
        assert_eq!(
            stops,
            vec![
                d(2023, 10, 1),
                d(2024, 1, 1),
                d(2024, 6, 1),
                d(2025, 3, 1),
                d(2026, 10, 1)
            ]
        );
    }

    #[test]
    fn unconditional_layers_show_at_every_stop() {
        let g = graph();
        let layers = LayerSet {
            leadership: true,
            tags: true,
            ..LayerSet::none()
        };
        let vis = Visibility::new(&g, layers, &ToolFocus::All);
        let set = vis.at(d(2000, 1, 1));
        assert_eq!(set, VisibleSet::from([id("g1"), id("l1")]));
    }

    #[test]
    fn expansion_is_one_hop_and_layer_gated() {
        let g = graph();
        let layers = LayerSet {
            projects: true,
            tools: true,
            ..LayerSet::none()
        };
        let vis = Visibility::new(&g, layers, &ToolFocus::All);
        let set = vis.at(d(2023, 10, 1));
        assert!(set.contains(&id("t1")));
        // t3 is only reachable through t1
        assert!(!set.contains(&id("t3")));
        // tags are not expansion targets
        assert!(!set.contains(&id("g1")));

        let set = vis.at(d(2025, 3, 1));
        assert!(set.contains(&id("t2")));
        assert!(!set.contains(&id("o1")), "outcomes layer is off");
    }

    #[test]
    fn tool_focus_narrows_projects() {
        let g = graph();
        let focus = ToolFocus::Tool(id("t1"));
        let vis = Visibility::new(&g, LayerSet::all(), &focus);
        let set = vis.at(d(2026, 1, 1));
        assert!(set.contains(&id("t1")));
        for nid in &set {
            if g.kind_of(nid) == Some(&Kind::Project) {
                assert!(g.neighbors(&id("t1")).contains(nid));
            }
        }
        assert!(!set.contains(&id("p2")));
        assert!(set.contains(&id("p1")) && set.contains(&id("p3")));
    }

    #[test]
    fn focused_tool_without_visible_projects_still_shows() {
        let g = graph();
        let focus = ToolFocus::Tool(id("t2"));
        let vis = Visibility::new(&g, projects_only(), &focus);
        let set = vis.at(d(2024, 1, 1));
        assert_eq!(set, VisibleSet::from([id("t2")]));
    }

    #[test]
    fn focus_on_non_tool_is_a_no_op() {
        let g = graph();
        let focused = ToolFocus::Tool(id("p1"));
        let a = Visibility::new(&g, LayerSet::all(), &focused).at(d(2026, 1, 1));
        let b = Visibility::new(&g, LayerSet::all(), &ToolFocus::All).at(d(2026, 1, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn unrecognized_kinds_are_never_visible() {
        let g = graph();
        let vis = Visibility::new(&g, LayerSet::all(), &ToolFocus::All);
        assert!(!vis.at(d(2026, 1, 1)).contains(&id("x1")));
        assert!(!timeline_stops(&g, d(2026, 1, 1)).contains(&d(2023, 1, 1)));
    }

    #[test]
    fn same_inputs_same_output() {
        let g = graph();
        let focus = ToolFocus::Tool(id("t1"));
        let a = Visibility::new(&g, LayerSet::default(), &focus).at(d(2025, 3, 1));
        let _ = Visibility::new(&g, LayerSet::all(), &ToolFocus::All).at(d(2024, 1, 1));
        let b = Visibility::new(&g, LayerSet::default(), &focus).at(d(2025, 3, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn layer_set_from_raw_normalizes() {
        let set = LayerSet::from_raw(["Projects", "tech", "bogus"]);
        assert!(set.projects && set.tools);
        assert!(!set.experiences && !set.tags);
        assert_eq!(set.kinds(), vec![Kind::Project, Kind::Tool]);
    }
}
