use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::layout::{LayoutCache, DEFAULT_LAYER_GAP, DEFAULT_Y_SPREAD};
use crate::model::NodeId;
use crate::scene::{assemble, LabelMode, Scene, SceneOptions, DEFAULT_FRAME_MS};
use crate::timeline::{timeline_stops, LayerSet, ToolFocus, Visibility, VisibleSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub layers: LayerSet,
    pub tool_focus: ToolFocus,
    pub label_mode: LabelMode,
    pub selection: Option<NodeId>,
    pub layer_gap: f64,
    pub y_spread: f64,
    pub frame_ms: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            layers: LayerSet::default(),
            tool_focus: ToolFocus::All,
            label_mode: LabelMode::Smart,
            selection: None,
            layer_gap: DEFAULT_LAYER_GAP,
            y_spread: DEFAULT_Y_SPREAD,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub stops: Vec<NaiveDate>,
    pub visibility: Vec<VisibleSet>,
    pub scene: Scene,
}

impl View {
    pub fn latest_visible(&self) -> Option<&VisibleSet> {
        self.visibility.last()
    }
}

pub fn build_view(graph: &Graph, filter: &FilterState, today: NaiveDate, cache: &mut LayoutCache) -> View {
    let kinds = filter.layers.kinds();
    let drawable = graph.restrict_to_kinds(&kinds);
    let positions = cache.positions(&drawable, &kinds, filter.layer_gap, filter.y_spread);

    let stops = timeline_stops(graph, today);
    let visibility = Visibility::new(graph, filter.layers, &filter.tool_focus).per_stop(&stops);

    let opts = SceneOptions {
        selection: filter.selection.clone(),
        label_mode: filter.label_mode,
        frame_ms: filter.frame_ms,
    };
    let scene = assemble(graph, positions, &stops, &visibility, &opts);

    tracing::debug!(
        stops = stops.len(),
        groups = scene.groups.len(),
        latest_nodes = scene.initial().map(|f| f.visible_nodes).unwrap_or(0),
        "view built"
    );

    View {
        stops,
        visibility,
        scene,
    }
}
