//! The eight gallery pages.
//!
//! Deliberately repetitive: each page owns its shader, pipeline, and buffers
//! end to end, so any one file reads as a complete worked example.

mod color_interpolation;
mod frag_bind_group;
mod heart_shape;
mod ndc_triangle;
mod simple_diamond;
mod simple_triangle;
mod vertex_buffer_slot;
mod xy_z_vertex_buffer_slot;

pub use color_interpolation::ColorInterpolation;
pub use frag_bind_group::FragBindGroup;
pub use heart_shape::HeartShape;
pub use ndc_triangle::NdcTriangle;
pub use simple_diamond::SimpleDiamond;
pub use simple_triangle::SimpleTriangle;
pub use vertex_buffer_slot::VertexBufferSlot;
pub use xy_z_vertex_buffer_slot::XyZVertexBufferSlot;

use glam::Mat4;

/// Standard page projection: 45 degree vertical fov, near 0.1, far 100.
pub(crate) fn perspective_mvp(aspect: f32, model: Mat4) -> Mat4 {
    Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect, 0.1, 100.0) * model
}
