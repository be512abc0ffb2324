use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use resumegraph_core::{NodeId, Point};

use crate::app::events::Picked;
use crate::graph::playback::lerp;
use crate::graph::ViewerState;
use crate::render::markers::{marker_outline, parse_css_color};
use crate::ui::tooltips::render_tooltip;

const MARKER_SCALE: f32 = 0.012;
const PICK_RADIUS_PX: f32 = 16.0;
const MIN_OPACITY: f32 = 0.02;
const LABEL_OFFSET: egui::Vec2 = egui::vec2(10.0, 0.0);

fn world(p: Point) -> Vec3 {
    Vec3::new(p.x as f32, p.y as f32, 0.0)
}

fn srgba(rgba: [f32; 4], alpha: f32) -> Color {
    Color::srgba(rgba[0], rgba[1], rgba[2], rgba[3] * alpha)
}

fn shown_markers(st: &ViewerState) -> Vec<(&NodeId, Point, f32)> {
    let scene = &st.view.scene;
    let Some(frame) = st.current_frame() else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for (group, gf) in scene.groups.iter().zip(frame.groups.iter()) {
        for (marker, &opacity) in group.markers.iter().zip(gf.opacity.iter()) {
            if opacity > MIN_OPACITY {
                out.push((&marker.id, marker.position, opacity));
            }
        }
    }
    out
}

fn nearest_marker(
    st: &ViewerState,
    camera: &Camera,
    cam_tf: &GlobalTransform,
    cursor: Vec2,
) -> Option<NodeId> {
    let mut best: Option<(f32, &NodeId)> = None;
    for (id, pos, _) in shown_markers(st) {
        let Some(screen) = camera.world_to_viewport(cam_tf, world(pos)) else {
            continue;
        };
        let d = screen.distance(cursor);
        if d < PICK_RADIUS_PX && best.map(|(bd, _)| d < bd).unwrap_or(true) {
            best = Some((d, id));
        }
    }
    best.map(|(_, id)| id.clone())
}

pub fn hover_detection(
    windows: Query<&Window>,
    cam_q: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    mut st: ResMut<ViewerState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        st.hovered = None;
        return;
    };
    let Ok((camera, cam_tf)) = cam_q.get_single() else {
        return;
    };
    if contexts.ctx_mut().wants_pointer_input() {
        st.hovered = None;
        return;
    }
    let hovered = nearest_marker(&st, camera, cam_tf, cursor);
    if st.hovered != hovered {
        st.hovered = hovered;
    }
}

pub fn picking_select(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cam_q: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    st: Res<ViewerState>,
    mut out: EventWriter<Picked>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_tf)) = cam_q.get_single() else {
        return;
    };
    // empty space clears the spotlight
    out.send(Picked(nearest_marker(&st, camera, cam_tf, cursor)));
}

pub fn apply_picked(mut st: ResMut<ViewerState>, mut ev: EventReader<Picked>) {
    for Picked(id) in ev.read() {
        st.select(id.clone());
    }
}

pub fn draw_scene(
    st: Res<ViewerState>,
    mut gizmos: Gizmos,
    mut contexts: EguiContexts,
    cam_q: Query<(&Camera, &GlobalTransform)>,
) {
    let scene = &st.view.scene;
    let (from, to, t) = st.playback.blend(&scene.timing);
    let (Some(from_frame), Some(to_frame)) = (scene.frames.get(from), scene.frames.get(to)) else {
        return;
    };

    let edge_rgba = parse_css_color(scene.edge_color).unwrap_or([0.58, 0.64, 0.72, 0.78]);
    if from != to {
        for seg in &from_frame.edges {
            gizmos.line(world(seg.from), world(seg.to), srgba(edge_rgba, 1.0 - t));
        }
    }
    let edge_alpha = if from != to { t } else { 1.0 };
    for seg in &to_frame.edges {
        gizmos.line(world(seg.from), world(seg.to), srgba(edge_rgba, edge_alpha));
    }

    let ctx = contexts.ctx_mut();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("scene_labels"),
    ));
    let cam = cam_q.get_single().ok();

    for (gi, group) in scene.groups.iter().enumerate() {
        let (Some(gf_from), Some(gf_to)) = (from_frame.groups.get(gi), to_frame.groups.get(gi)) else {
            continue;
        };
        let rgba = parse_css_color(group.style.color).unwrap_or([1.0, 1.0, 1.0, 1.0]);
        for (mi, marker) in group.markers.iter().enumerate() {
            let a = gf_from.opacity.get(mi).copied().unwrap_or(0.0);
            let b = gf_to.opacity.get(mi).copied().unwrap_or(0.0);
            let opacity = lerp(a, b, t);
            if opacity <= MIN_OPACITY {
                continue;
            }
            let center = Vec2::new(marker.position.x as f32, marker.position.y as f32);
            let outline = marker_outline(group.style.symbol, center, marker.size * MARKER_SCALE);
            gizmos.linestrip(outline.into_iter().map(|p| p.extend(0.0)), srgba(rgba, opacity));

            let label = gf_to.labels.get(mi).map(String::as_str).unwrap_or("");
            if label.is_empty() {
                continue;
            }
            let Some((camera, cam_tf)) = cam else {
                continue;
            };
            let Some(screen) = camera.world_to_viewport(cam_tf, world(marker.position)) else {
                continue;
            };
            painter.text(
                egui::pos2(screen.x, screen.y) + LABEL_OFFSET,
                egui::Align2::LEFT_CENTER,
                label,
                egui::FontId::proportional(12.0),
                egui::Color32::from_white_alpha((opacity * 220.0) as u8),
            );
        }
    }

    if let Some(hid) = st.hovered.as_ref() {
        let hover = scene
            .groups
            .iter()
            .flat_map(|g| g.markers.iter())
            .find(|m| &m.id == hid)
            .map(|m| m.hover.clone());
        if let Some(hover) = hover {
            let pos = ctx.input(|i| i.pointer.hover_pos().unwrap_or(egui::pos2(0.0, 0.0)))
                + egui::vec2(14.0, 14.0);
            render_tooltip(ctx, "tooltip_marker", pos, &hover);
        }
    }
}
