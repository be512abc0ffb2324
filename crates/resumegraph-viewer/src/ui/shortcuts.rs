use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::graph::ViewerState;

pub fn handle_shortcuts(mut contexts: EguiContexts, mut st: ResMut<ViewerState>) {
    let ctx = contexts.ctx_mut();
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        st.help_open = false;
        st.hovered = None;
        st.select(None);
    }

    if ctx.wants_keyboard_input() {
        return;
    }

    let frames = st.view.scene.frames.len();
    if ctx.input(|i| i.key_pressed(egui::Key::Questionmark)) {
        st.help_open = !st.help_open;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
        if st.playback.playing {
            st.playback.pause();
        } else {
            st.playback.play(frames);
        }
    }
    if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
        let prev = st.playback.frame.saturating_sub(1);
        st.playback.pause();
        st.playback.seek(prev);
    }
    if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) && st.playback.frame + 1 < frames {
        let next = st.playback.frame + 1;
        st.playback.pause();
        st.playback.seek(next);
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Home)) {
        st.playback.pause();
        st.playback.seek(0);
    }
    if ctx.input(|i| i.key_pressed(egui::Key::End)) {
        st.playback.pause();
        st.playback.seek(frames.saturating_sub(1));
    }
}
