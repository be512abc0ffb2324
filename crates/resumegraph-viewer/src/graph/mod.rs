pub mod playback;
pub mod state;

use bevy::prelude::*;

pub use state::ViewerState;

pub fn rebuild_view(mut st: ResMut<ViewerState>) {
    st.rebuild_if_dirty();
}

pub fn tick_playback(time: Res<Time>, mut st: ResMut<ViewerState>) {
    let dt_ms = time.delta_seconds() * 1000.0;
    let frames = st.view.scene.frames.len();
    let timing = st.view.scene.timing;
    st.playback.tick(dt_ms, &timing, frames);
}
