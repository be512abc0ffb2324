use bevy::prelude::Resource;
use chrono::NaiveDate;
use resumegraph_core::scene::Frame;
use resumegraph_core::{build_view, spotlight_candidates, FilterState, Graph, Kind, LayoutCache, NodeId, View};

use crate::graph::playback::Playback;
use crate::util::config::ViewerConfig;
use crate::util::ids::display_label;

#[derive(Resource)]
pub struct ViewerState {
    pub graph: Graph,
    pub filter: FilterState,
    pub today: NaiveDate,
    pub view: View,
    pub playback: Playback,
    pub hovered: Option<NodeId>,
    pub cfg: ViewerConfig,
    pub status: Option<String>,
    pub refit_camera: bool,
    pub help_open: bool,
    cache: LayoutCache,
    dirty: bool,
}

impl ViewerState {
    pub fn new(graph: Graph, cfg: ViewerConfig, today: NaiveDate) -> Self {
        let filter = cfg.to_filter();
        let mut cache = LayoutCache::default();
        let view = build_view(&graph, &filter, today, &mut cache);
        let frames = view.scene.frames.len();
        let mut playback = Playback::at_end(frames);
        if cfg.autoplay {
            playback.play(frames);
        }
        Self {
            graph,
            filter,
            today,
            view,
            playback,
            hovered: None,
            cfg,
            status: None,
            refit_camera: true,
            help_open: false,
            cache,
            dirty: false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn rebuild_if_dirty(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }
        self.dirty = false;
        let before = self.view.scene.bounds;
        self.view = build_view(&self.graph, &self.filter, self.today, &mut self.cache);
        self.playback.clamp(self.view.scene.frames.len());
        if self.view.scene.bounds != before {
            self.refit_camera = true;
        }
        tracing::debug!(
            frames = self.view.scene.frames.len(),
            layout_misses = self.cache.misses(),
            "view rebuilt"
        );
        true
    }

    pub fn select(&mut self, id: Option<NodeId>) {
        if self.filter.selection != id {
            self.filter.selection = id;
            self.mark_dirty();
        }
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.view.scene.frames.get(self.playback.frame)
    }

    pub fn spotlight_options(&self) -> Vec<(NodeId, String)> {
        let Some(latest) = self.view.latest_visible() else {
            return Vec::new();
        };
        spotlight_candidates(&self.graph, latest)
            .into_iter()
            .filter_map(|id| self.graph.node(&id).map(|n| (id.clone(), display_label(n))))
            .collect()
    }

    pub fn tool_options(&self) -> Vec<(NodeId, String)> {
        let mut tools: Vec<(NodeId, String)> = self
            .graph
            .nodes_of_kind(&Kind::Tool)
            .map(|n| (n.id.clone(), n.label.clone()))
            .collect();
        tools.sort_by(|a, b| {
            a.1.to_lowercase()
                .cmp(&b.1.to_lowercase())
                .then_with(|| a.0.cmp(&b.0))
        });
        tools
    }

    pub fn label_of(&self, id: &NodeId) -> String {
        self.graph
            .node(id)
            .map(|n| n.label.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
