//! 2D overlay rendering for gallery chrome (sidebar, sliders, labels).
//!
//! Renderers consume per-frame command slices and issue GPU commands via
//! wgpu. Each renderer owns its GPU resources (pipeline, buffers, atlas).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod common;
mod rect;
mod text;

pub use rect::{RectCmd, RectRenderer};
pub use text::{TextCmd, TextRenderer};
