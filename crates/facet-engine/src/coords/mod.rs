//! Logical-pixel coordinate types shared by the overlay renderers and the
//! gallery chrome. Vector math comes from `glam`; only the rectangle type is
//! ours.

mod rect;

pub use glam::Vec2;
pub use rect::Rect;
