use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::graph::ViewerState;

pub fn hud_overlay(mut contexts: EguiContexts, mut st: ResMut<ViewerState>) {
    egui::TopBottomPanel::bottom("timeline").show(contexts.ctx_mut(), |ui| {
        let frames = st.view.scene.frames.len();
        if frames == 0 {
            ui.label("No dated entries to animate.");
            return;
        }

        ui.horizontal(|ui| {
            let play_text = if st.playback.playing { "⏸ Pause" } else { "▶ Play" };
            if ui.button(play_text).clicked() {
                if st.playback.playing {
                    st.playback.pause();
                } else {
                    st.playback.play(frames);
                }
            }

            let mut frame = st.playback.frame;
            let month = st
                .current_frame()
                .map(|f| f.label.clone())
                .unwrap_or_default();
            let slider = egui::Slider::new(&mut frame, 0..=frames - 1)
                .show_value(false)
                .text(format!("Timeline: {month}"));
            if ui.add(slider).changed() {
                st.playback.pause();
                st.playback.seek(frame);
            }
        });

        if let Some(f) = st.current_frame() {
            ui.horizontal(|ui| {
                ui.label(format!("Stops: {}", st.view.scene.stops_total));
                ui.separator();
                ui.label(format!("Visible nodes: {}", f.visible_nodes));
                ui.separator();
                ui.label(format!("Visible edges: {}", f.visible_edges));
            });
        }
    });
}
