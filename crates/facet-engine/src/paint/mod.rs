//! Color types for clears and overlay fills.

mod color;

pub use color::Color;
