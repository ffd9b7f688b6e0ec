//! Facet engine crate.
//!
//! Owns the platform + GPU runtime pieces shared by every gallery page:
//! device/surface management, the single-window event loop, frame timing,
//! input snapshots, and the 2D overlay renderers used for gallery chrome.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
pub mod overlay;
pub mod text;
