//! Procedural geometry for the facet gallery.
//!
//! Everything in this crate is CPU-side and total: generators take numeric
//! parameters and return freshly allocated flat `f32` arrays ready for upload
//! as vertex attribute streams. No GPU types leak in here.

pub mod color;
pub mod diamond;
pub mod heart;
pub mod mesh;
pub mod random;

pub use diamond::{generate, DiamondGeometry, DiamondParams};
pub use heart::{outline, HeartParams};
pub use mesh::Mesh;
