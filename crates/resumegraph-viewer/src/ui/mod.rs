pub mod details;
pub mod help;
pub mod hud;
pub mod panel;
pub mod shortcuts;
pub mod tooltips;

pub use details::details_panel;
pub use help::help_overlay;
pub use hud::hud_overlay;
pub use panel::ui_panel;
pub use shortcuts::handle_shortcuts;

pub const PANEL_W: f32 = 260.0;
pub const DETAILS_W: f32 = 300.0;
