use anyhow::{anyhow, Result};
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Handle to a face registered with a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Registry of parsed font faces.
///
/// Faces never change after registration, so a `FontId` stays valid for the
/// life of the registry. The gallery keeps one registry and hands it to the
/// text renderer each frame for on-demand rasterization.
#[derive(Default)]
pub struct FontSystem {
    faces: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a TrueType/OpenType face from its raw file contents.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId> {
        let face = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| anyhow!("font parse failed: {e}"))?;
        self.faces.push(face);
        Ok(FontId(self.faces.len() - 1))
    }

    pub(crate) fn face(&self, id: FontId) -> Option<&fontdue::Font> {
        self.faces.get(id.0)
    }

    /// Bounding box of `text` laid out at `size`, in logical pixels. The
    /// chrome uses this to right-align slider value labels.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        // A line of nothing still occupies one line of height.
        let empty = Vec2::new(0.0, size * 1.2);
        let Some(face) = self.face(id) else { return empty };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[face], &TextStyle::new(text, size, 0));

        let mut extent = empty;
        let mut any = false;
        for glyph in layout.glyphs() {
            let metrics = face.metrics_indexed(glyph.key.glyph_index, size);
            extent.x = extent.x.max((glyph.x - metrics.xmin as f32 + metrics.advance_width).max(0.0));
            extent.y = extent.y.max(glyph.y + glyph.height as f32);
            any = true;
        }
        if any { extent } else { empty }
    }
}
