pub mod camera;
pub mod markers;
pub mod scene;

pub use camera::{fit_camera, setup_scene};
pub use scene::{apply_picked, draw_scene, hover_detection, picking_select};
