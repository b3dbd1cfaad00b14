pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second
pub const WINDOW_TITLE: &str = "slidenav";

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal touch travel for a swipe (pixels, exclusive)
pub const ANNOUNCEMENT_MS: u64 = 1000;        // Lifetime of a screen reader announcement

pub const CONFIG_FILE_NAME: &str = "slidenav.toml";

// Chrome geometry
pub const BUTTON_SIZE: f32 = 48.0;
pub const BUTTON_MARGIN: f32 = 24.0;
pub const DOT_RADIUS: f32 = 6.0;
pub const DOT_SPACING: f32 = 22.0;
pub const DOT_HIT_RADIUS: f32 = 10.0;
pub const ICON_BOX: f32 = 24.0;               // Fullscreen icon view box (matches the 24x24 SVG)
