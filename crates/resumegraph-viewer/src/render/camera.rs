use bevy::prelude::*;
use resumegraph_core::layout::Bounds;

use crate::graph::ViewerState;

const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
const MIN_DISTANCE: f32 = 6.0;

pub fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera3dBundle {
        transform: Transform::from_xyz(0.0, 0.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });
}

pub fn fit_to_bounds(bounds: &Bounds) -> Transform {
    let center = Vec3::new(
        ((bounds.min.x + bounds.max.x) * 0.5) as f32,
        ((bounds.min.y + bounds.max.y) * 0.5) as f32,
        0.0,
    );
    let w = (bounds.max.x - bounds.min.x) as f32;
    let h = (bounds.max.y - bounds.min.y) as f32;
    // side panels take roughly a third of the window
    let extent = h.max(w / 1.1);
    let dist = (extent * 0.5 / (FOV_Y * 0.5).tan()).max(MIN_DISTANCE);
    Transform::from_translation(center + Vec3::Z * dist).looking_at(center, Vec3::Y)
}

pub fn fit_camera(mut st: ResMut<ViewerState>, mut cam_q: Query<&mut Transform, With<Camera>>) {
    if !st.refit_camera {
        return;
    }
    let Ok(mut cam_tf) = cam_q.get_single_mut() else {
        return;
    };
    st.refit_camera = false;
    if let Some(bounds) = st.view.scene.bounds {
        *cam_tf = fit_to_bounds(&bounds);
    }
}
