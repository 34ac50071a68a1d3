use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const TYPING_MS: u32 = 150;
pub const DELETING_MS: u32 = 75;
pub const PAUSE_MS: u32 = 1000;

// Scroll offset after which the nav bar switches to its condensed style.
pub const NAV_SCROLL_THRESHOLD: f64 = 24.0;
