use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use resumegraph_core::{describe, NodeId};

use crate::graph::ViewerState;
use crate::ui::DETAILS_W;
use crate::util::ids::kind_prefix;

pub fn details_panel(mut contexts: EguiContexts, mut st: ResMut<ViewerState>) {
    let mut pick: Option<NodeId> = None;
    egui::SidePanel::right("details")
        .exact_width(DETAILS_W)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Details");
            let Some(info) = st
                .filter
                .selection
                .as_ref()
                .and_then(|id| describe(&st.graph, id))
            else {
                ui.label("Select a node to see its description and connections.");
                return;
            };

            ui.strong(format!("{}{}", kind_prefix(&info.kind), info.label));
            if !info.subtitle.is_empty() {
                ui.label(info.subtitle.as_str());
            }
            if !info.metric.is_empty() {
                ui.add_space(6.0);
                ui.label("Evidence / metrics:");
                ui.label(info.metric.as_str());
            }
            if let Some(url) = info.url.as_deref() {
                ui.hyperlink(url);
            }

            ui.add_space(6.0);
            ui.separator();
            ui.label("Connected to:");
            egui::ScrollArea::vertical().show(ui, |ui| {
                let mut any = false;
                for n in info.neighbors_in(&st.filter.layers) {
                    any = true;
                    let text = format!("{}{} ({})", kind_prefix(&n.kind), n.label, n.rel);
                    if ui.link(text).clicked() {
                        pick = Some(n.id.clone());
                    }
                }
                if !any {
                    ui.weak("No connections in the enabled layers.");
                }
            });
        });

    if pick.is_some() {
        st.select(pick);
    }
}
