//! Scroll-stepped timeline: maps the page's scroll offset to a discrete
//! step inside one region and snaps the viewport to step boundaries.

pub mod browser;
pub mod controller;
pub mod driver;
pub mod geometry;
pub mod hook;
pub mod options;

pub use controller::StepSnapshot;
pub use hook::use_scroll_jacking;
pub use options::ScrollJackingOptions;
