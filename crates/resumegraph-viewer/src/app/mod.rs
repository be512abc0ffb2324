use bevy::prelude::*;
use resumegraph_core::resume::resume_dataset;
use resumegraph_core::Graph;

use crate::app::events::Picked;
use crate::graph::ViewerState;
use crate::util::config;

pub mod events;

pub struct ResumeGraphViewerPlugin;

impl Plugin for ResumeGraphViewerPlugin {
    fn build(&self, app: &mut App) {
        let cfg = config::load_or_default();
        let (graph, _report) = Graph::from_dataset(&resume_dataset());
        let today = chrono::Local::now().date_naive();
        let st = ViewerState::new(graph, cfg, today);
        app.add_event::<Picked>()
            .insert_resource(st)
            .add_systems(Startup, crate::render::setup_scene)
            .add_systems(
                Update,
                (
                    crate::ui::handle_shortcuts,
                    crate::ui::ui_panel,
                    crate::ui::details_panel,
                    crate::ui::hud_overlay,
                    crate::ui::help_overlay,
                    crate::render::hover_detection,
                    crate::render::picking_select,
                    crate::render::apply_picked,
                    crate::graph::rebuild_view,
                    crate::render::fit_camera,
                    crate::graph::tick_playback,
                    crate::render::draw_scene,
                )
                    .chain(),
            );
    }
}
