mod app;
mod chrome;
mod demo;
mod demos;

use anyhow::{bail, Context, Result};
use winit::dpi::LogicalSize;

use facet_engine::device::GpuInit;
use facet_engine::logging::{init_logging, LoggingConfig};
use facet_engine::text::{FontId, FontSystem};
use facet_engine::window::{Runtime, RuntimeConfig};

use app::GalleryApp;
use demo::Demo;
use demos::{
    ColorInterpolation, FragBindGroup, HeartShape, NdcTriangle, SimpleDiamond, SimpleTriangle,
    VertexBufferSlot, XyZVertexBufferSlot,
};

// Common distro locations for a sans-serif UI font.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn load_ui_font(fonts: &mut FontSystem) -> Result<FontId> {
    for path in FONT_PATHS {
        if let Ok(bytes) = std::fs::read(path) {
            let id = fonts
                .load_font(&bytes)
                .with_context(|| format!("failed to parse font at {path}"))?;
            log::info!("ui font: {path}");
            return Ok(id);
        }
    }
    bail!("no usable UI font found; looked in {FONT_PATHS:?}");
}

fn pages() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(SimpleTriangle::new()),
        Box::new(NdcTriangle::new()),
        Box::new(ColorInterpolation::new()),
        Box::new(HeartShape::new()),
        Box::new(FragBindGroup::new()),
        Box::new(VertexBufferSlot::new()),
        Box::new(XyZVertexBufferSlot::new()),
        Box::new(SimpleDiamond::new()),
    ]
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut fonts = FontSystem::new();
    let font = load_ui_font(&mut fonts)?;

    let config = RuntimeConfig {
        title: "facet".to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
    };

    Runtime::run(config, GpuInit::default(), GalleryApp::new(pages(), fonts, font))
}
