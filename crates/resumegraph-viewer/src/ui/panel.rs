use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use resumegraph_core::{Kind, LabelMode, NodeId, ToolFocus};

use crate::graph::ViewerState;
use crate::ui::PANEL_W;
use crate::util::config::{self, LAYER_GAP_RANGE, Y_SPREAD_RANGE};

const LAYER_TOGGLES: [(Kind, &str); 6] = [
    (Kind::Experience, "Experiences"),
    (Kind::Project, "Projects"),
    (Kind::Tool, "Tools"),
    (Kind::Outcome, "Outcomes (metrics)"),
    (Kind::Leadership, "Leadership"),
    (Kind::Tag, "Tags"),
];

pub fn ui_panel(mut contexts: EguiContexts, mut st: ResMut<ViewerState>) {
    egui::SidePanel::left("controls")
        .exact_width(PANEL_W)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Résumé graph");
            ui.label(format!(
                "{} nodes / {} edges",
                st.graph.len(),
                st.graph.edge_count()
            ));
            ui.separator();

            ui.label("Layers:");
            let mut layers = st.filter.layers;
            for (kind, text) in LAYER_TOGGLES.iter() {
                let mut on = layers.is_enabled(kind);
                if ui.checkbox(&mut on, *text).changed() {
                    layers.set(kind, on);
                }
            }
            if layers != st.filter.layers {
                st.filter.layers = layers;
                st.mark_dirty();
            }

            ui.add_space(8.0);
            tool_focus_picker(ui, &mut st);

            ui.add_space(8.0);
            let mut mode = st.filter.label_mode;
            egui::ComboBox::from_label("Labels")
                .selected_text(mode.as_str())
                .show_ui(ui, |ui| {
                    for m in [LabelMode::Smart, LabelMode::All, LabelMode::None] {
                        ui.selectable_value(&mut mode, m, m.as_str());
                    }
                });
            if mode != st.filter.label_mode {
                st.filter.label_mode = mode;
                st.mark_dirty();
            }

            ui.add_space(8.0);
            spotlight_picker(ui, &mut st);

            ui.add_space(8.0);
            ui.separator();
            ui.heading("Spacing");
            let mut gap = st.filter.layer_gap;
            let mut spread = st.filter.y_spread;
            ui.add(egui::Slider::new(&mut gap, LAYER_GAP_RANGE).step_by(0.1).text("Column spacing"));
            ui.add(egui::Slider::new(&mut spread, Y_SPREAD_RANGE).step_by(0.1).text("Vertical spacing"));
            if gap != st.filter.layer_gap || spread != st.filter.y_spread {
                st.filter.layer_gap = gap;
                st.filter.y_spread = spread;
                st.mark_dirty();
            }

            ui.add_space(10.0);
            ui.separator();
            if ui.button("Save settings").clicked() {
                let mut cfg = st.cfg.clone();
                cfg.update_from(&st.filter);
                st.status = Some(match config::save(&cfg) {
                    Ok(()) => "Settings saved".to_string(),
                    Err(err) => {
                        tracing::warn!(error = %err, "saving viewer config failed");
                        format!("Save failed: {err:#}")
                    }
                });
                st.cfg = cfg;
            }
            ui.checkbox(&mut st.cfg.autoplay, "Play on start");
            if let Some(status) = st.status.as_deref() {
                ui.small(status);
            }
        });
}

fn tool_focus_picker(ui: &mut egui::Ui, st: &mut ViewerState) {
    let tools = st.tool_options();
    let mut focus = st.filter.tool_focus.clone();
    let current = match &focus {
        ToolFocus::All => "All tools".to_string(),
        ToolFocus::Tool(id) => st.label_of(id),
    };
    egui::ComboBox::from_label("Tool focus")
        .selected_text(current)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut focus, ToolFocus::All, "All tools");
            for (id, label) in &tools {
                ui.selectable_value(&mut focus, ToolFocus::Tool(id.clone()), label.as_str());
            }
        });
    if focus != st.filter.tool_focus {
        st.filter.tool_focus = focus;
        st.mark_dirty();
    }
}

fn spotlight_picker(ui: &mut egui::Ui, st: &mut ViewerState) {
    let options = st.spotlight_options();
    let mut selection: Option<NodeId> = st.filter.selection.clone();
    let current = selection
        .as_ref()
        .map(|id| st.label_of(id))
        .unwrap_or_else(|| "None".to_string());
    egui::ComboBox::from_label("Spotlight")
        .selected_text(current)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selection, None, "None");
            for (id, label) in &options {
                ui.selectable_value(&mut selection, Some(id.clone()), label.as_str());
            }
        });
    st.select(selection);
}
