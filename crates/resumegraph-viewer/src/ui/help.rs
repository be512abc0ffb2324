use bevy::prelude::Res;
use bevy_egui::{egui, EguiContexts};

use crate::graph::ViewerState;

pub fn help_overlay(mut contexts: EguiContexts, st: Res<ViewerState>) {
    if !st.help_open {
        return;
    }

    egui::Window::new("Shortcuts")
        .collapsible(false)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Space: play / pause the timeline");
            ui.label("Left / Right: previous / next month");
            ui.label("Home / End: first / latest month");
            ui.label("Click a node: spotlight it");
            ui.label("Esc: clear the spotlight");
            ui.label("?: toggle this window");
        });
}
