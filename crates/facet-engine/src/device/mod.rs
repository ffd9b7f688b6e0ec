//! GPU device + surface management.
//!
//! Responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//! - the shared depth buffer used by depth-tested pages

mod depth;
mod gpu;

pub use depth::{DepthBuffer, DEPTH_FORMAT};
pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
