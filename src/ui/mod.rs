pub mod panels;
pub mod state;
pub mod theme;

pub use panels::{HudActions, draw_failure, draw_help_overlay, draw_hud};
pub use state::{HudState, SurfaceInfo};
pub use theme::apply_theme;
