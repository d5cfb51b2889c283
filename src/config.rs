use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical scroll offset (px) past which the header switches to its scrolled look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Hero background moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;

pub const COUNTER_DURATION_MS: u32 = 2_000;
/// Roughly one frame at 60fps.
pub const COUNTER_FRAME_MS: u32 = 16;

pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;
/// Must match the `slideOutRight` animation length.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

pub const SUBMIT_DELAY_MS: u32 = 1_500;

pub const REVEAL_THRESHOLD: f64 = 0.1;
