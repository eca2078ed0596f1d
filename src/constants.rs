pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_SLIDE_COUNT: usize = 8;     // Placeholder slides when no image directory is given
pub const SLIDE_INTERVAL_MS: u64 = 4000;      // Time between automatic advances (milliseconds)
pub const PROGRESS_TICK_MS: u64 = 100;        // Progress bar refresh period (milliseconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe (pixels)
pub const MAX_DIGIT_SHORTCUT: usize = 9;      // Keys '1'..'9' jump to a slide
