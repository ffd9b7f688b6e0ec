//! Renderer-facing frame context.
//!
//! Convention for 3D pages: each page owns its pipelines and buffers and
//! records its own render passes against [`RenderTarget`]. The overlay
//! renderers additionally use `RenderCtx::logical_size` for logical-px to NDC
//! conversion.

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
