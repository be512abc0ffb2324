use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::layout::{bounds, Bounds, Point, Positions};
use crate::model::{Kind, Node, NodeId, KIND_ORDER};
use crate::timeline::VisibleSet;

pub const EDGE_COLOR: &str = "rgba(148,163,184,0.78)";
pub const EDGE_WIDTH: f32 = 2.2;
pub const DEFAULT_FRAME_MS: u32 = 560;
const BOUNDS_PAD: f64 = 0.6;

const SPOT_SELECTED: f32 = 1.0;
const SPOT_NEIGHBOR: f32 = 0.92;
const SPOT_DIMMED: f32 = 0.18;
const SPOT_NONE: f32 = 0.92;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    #[default]
    Smart,
    All,
    None,
}

impl LabelMode {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "smart" => Some(Self::Smart),
            "all" => Some(Self::All),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smart => "Smart",
            Self::All => "All",
            Self::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSymbol {
    Circle,
    Square,
    Diamond,
    TriangleUp,
    Hexagon,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KindStyle {
    pub symbol: MarkerSymbol,
    pub size: f32,
    pub color: &'static str,
}

pub fn kind_style(kind: &Kind) -> KindStyle {
    let (symbol, size, color) = match kind {
        Kind::Project => (MarkerSymbol::Circle, 18.0, "#2563eb"),
        Kind::Tool => (MarkerSymbol::Square, 13.0, "#06b6d4"),
        Kind::Experience => (MarkerSymbol::Diamond, 16.0, "#7c3aed"),
        Kind::Leadership => (MarkerSymbol::TriangleUp, 15.0, "#f59e0b"),
        Kind::Outcome => (MarkerSymbol::Hexagon, 14.0, "#22c55e"),
        Kind::Tag => (MarkerSymbol::Star, 12.0, "#94a3b8"),
        Kind::Unrecognized(_) => (MarkerSymbol::Circle, 14.0, "#2563eb"),
    };
    KindStyle {
        symbol,
        size,
        color,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timing {
    pub frame_ms: u32,
    pub transition_ms: u32,
    pub easing: Easing,
}

impl Timing {
    pub fn new(frame_ms: u32) -> Self {
        Self {
            frame_ms,
            transition_ms: frame_ms.saturating_mul(85) / 100,
            easing: Easing::CubicInOut,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: NodeId,
    pub label: String,
    pub hover: String,
    pub position: Point,
    pub size: f32,
}

// Marker order is fixed for the whole scene, so a marker index names the
// same node in every frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeGroup {
    pub kind: Kind,
    pub name: String,
    pub style: KindStyle,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupFrame {
    pub opacity: Vec<f32>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub name: String,
    pub label: String,
    pub stop: NaiveDate,
    pub visible_nodes: usize,
    pub visible_edges: usize,
    pub edges: Vec<Segment>,
    pub groups: Vec<GroupFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub stops_total: usize,
    pub groups: Vec<NodeGroup>,
    pub frames: Vec<Frame>,
    pub initial_frame: Option<usize>,
    pub bounds: Option<Bounds>,
    pub timing: Timing,
    pub edge_color: &'static str,
    pub edge_width: f32,
}

impl Scene {
    pub fn initial(&self) -> Option<&Frame> {
        self.initial_frame.and_then(|i| self.frames.get(i))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    pub selection: Option<NodeId>,
    pub label_mode: LabelMode,
    pub frame_ms: u32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            selection: None,
            label_mode: LabelMode::Smart,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

struct Spotlight<'a> {
    selected: &'a NodeId,
    around: BTreeSet<NodeId>,
}

impl<'a> Spotlight<'a> {
    fn resolve(graph: &Graph, selection: Option<&'a NodeId>) -> Option<Self> {
        let selected = selection?;
        if !graph.contains(selected) {
            tracing::debug!(selected = %selected, "selection not in graph; no spotlight");
            return None;
        }
        Some(Self {
            selected,
            around: graph.neighbors(selected),
        })
    }

    fn factor(&self, id: &NodeId) -> f32 {
        if id == self.selected {
            SPOT_SELECTED
        } else if self.around.contains(id) {
            SPOT_NEIGHBOR
        } else {
            SPOT_DIMMED
        }
    }

    fn size(&self, id: &NodeId, base: f32) -> f32 {
        if id == self.selected {
            base + 10.0
        } else if self.around.contains(id) {
            base + 2.0
        } else {
            (base - 3.0).max(8.0)
        }
    }

    fn includes(&self, id: &NodeId) -> bool {
        id == self.selected || self.around.contains(id)
    }
}

fn hover_text(node: &Node) -> String {
    let mut hover = node.label.clone();
    for extra in [&node.subtitle, &node.metric] {
        if !extra.is_empty() {
            hover.push('\n');
            hover.push_str(extra);
        }
    }
    hover
}

fn group_name(kind: &Kind) -> String {
    let s = kind.as_str();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// `graph` is the full graph; spotlighting resolves against it.
pub fn assemble(
    graph: &Graph,
    positions: &Positions,
    stops: &[NaiveDate],
    visibility: &[VisibleSet],
    opts: &SceneOptions,
) -> Scene {
    let spotlight = Spotlight::resolve(graph, opts.selection.as_ref());

    let mut groups = Vec::new();
    for kind in KIND_ORDER.iter() {
        let mut members: Vec<&Node> = graph
            .nodes_of_kind(kind)
            .filter(|n| positions.contains_key(&n.id))
            .collect();
        if members.is_empty() {
            continue;
        }
        members.sort_by(|a, b| {
            a.sort_label()
                .cmp(&b.sort_label())
                .then_with(|| a.id.cmp(&b.id))
        });

        let style = kind_style(kind);
        let markers = members
            .into_iter()
            .map(|n| Marker {
                id: n.id.clone(),
                label: n.label.clone(),
                hover: hover_text(n),
                position: positions[&n.id],
                size: spotlight
                    .as_ref()
                    .map(|s| s.size(&n.id, style.size))
                    .unwrap_or(style.size),
            })
            .collect();
        groups.push(NodeGroup {
            kind: kind.clone(),
            name: group_name(kind),
            style,
            markers,
        });
    }

    let frames: Vec<Frame> = stops
        .iter()
        .zip(visibility.iter())
        .map(|(&stop, raw)| frame_at(graph, positions, &groups, stop, raw, spotlight.as_ref(), opts.label_mode))
        .collect();

    Scene {
        stops_total: stops.len(),
        initial_frame: frames.len().checked_sub(1),
        groups,
        frames,
        bounds: bounds(positions, BOUNDS_PAD),
        timing: Timing::new(opts.frame_ms),
        edge_color: EDGE_COLOR,
        edge_width: EDGE_WIDTH,
    }
}

fn frame_at(
    graph: &Graph,
    positions: &Positions,
    groups: &[NodeGroup],
    stop: NaiveDate,
    raw: &VisibleSet,
    spotlight: Option<&Spotlight<'_>>,
    label_mode: LabelMode,
) -> Frame {
    let visible: BTreeSet<&NodeId> = raw.iter().filter(|id| positions.contains_key(*id)).collect();

    let edges: Vec<Segment> = graph
        .edges()
        .filter(|e| visible.contains(&e.source) && visible.contains(&e.target))
        .map(|e| Segment {
            from: positions[&e.source],
            to: positions[&e.target],
        })
        .collect();

    let group_frames = groups
        .iter()
        .map(|group| {
            let mut opacity = Vec::with_capacity(group.markers.len());
            let mut labels = Vec::with_capacity(group.markers.len());
            for m in &group.markers {
                let shown = visible.contains(&m.id);
                let base = if shown { 1.0 } else { 0.0 };
                let spot = spotlight.map(|s| s.factor(&m.id)).unwrap_or(SPOT_NONE);
                opacity.push(base * spot);

                let labelled = shown
                    && match label_mode {
                        LabelMode::None => false,
                        LabelMode::All => true,
                        LabelMode::Smart => match spotlight {
                            Some(s) => s.includes(&m.id),
                            None => matches!(group.kind, Kind::Project | Kind::Experience),
                        },
                    };
                labels.push(if labelled { m.label.clone() } else { String::new() });
            }
            GroupFrame { opacity, labels }
        })
        .collect();

    Frame {
        name: stop.format("%Y-%m-%d").to_string(),
        label: stop.format("%b %Y").to_string(),
        stop,
        visible_nodes: visible.len(),
        visible_edges: edges.len(),
        edges,
        groups: group_frames,
    }
}
