//! Shared UI crate for WebPerf: the measurement core, results rendering and the
//! views mounted by the web and desktop shells.

pub mod core;
pub mod i18n;
pub mod measure;
pub mod results;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Shared stylesheet, embedded so every shell can inline it.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

