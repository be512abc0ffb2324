use bevy_egui::egui;

pub fn render_tooltip(ctx: &egui::Context, id: &str, pos: egui::Pos2, text: &str) {
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Tooltip)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            ui.group(|ui| {
                let mut lines = text.lines();
                if let Some(title) = lines.next() {
                    ui.strong(title);
                }
                for line in lines {
                    ui.label(line);
                }
            });
        });
}
