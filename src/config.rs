use log::Level;

pub const BRAND_NAME: &str = "Click Táctico";
pub const LOGO_PATH: &str = "/clicktactico-logo-white-horizontal.svg";

/// Viewport width (px) from which the desktop navigation is shown.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset (px) after which the nav bar switches to its denser background.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 24.0;

/// Length of the mobile menu's closing animation.
pub const MENU_EXIT_MS: u32 = 200;

pub const REVEAL_DURATION_SECS: f64 = 0.4;
pub const REVEAL_OFFSET_PX: f64 = 20.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
