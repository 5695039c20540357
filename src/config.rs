use log::Level;

/// How long a forced snap is allowed to animate before wheel input is let through again.
pub const SETTLE_DELAY_MS: u32 = 800;

/// Extra scroll distance appended after the last step so it can be read before the page moves on.
pub const REGION_PADDING: f64 = 200.0;

/// Layout is not final on first paint, so the first measurement waits a little.
pub const MOUNT_MEASURE_DELAY_MS: u32 = 100;

pub const DEFAULT_START_OFFSET: f64 = 200.0;
pub const DEFAULT_STEP_HEIGHT: f64 = 500.0;

/// Nav bar switches to its solid background past this offset.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1500;
pub const TOAST_DISMISS_MS: u32 = 4000;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 50;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
