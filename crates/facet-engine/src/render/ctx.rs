use winit::dpi::PhysicalSize;

use crate::coords::Vec2;

/// Renderer-facing context (device/queue + surface format + sizes).
///
/// Intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical-pixel drawable size, for overlay NDC conversion.
    pub logical_size: Vec2,
    /// Physical drawable size, for depth attachments and aspect ratios.
    pub physical_size: PhysicalSize<u32>,
    /// OS scale factor (physical px per logical px).
    pub scale_factor: f32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        logical_size: Vec2,
        physical_size: PhysicalSize<u32>,
        scale_factor: f32,
    ) -> Self {
        Self { device, queue, surface_format, logical_size, physical_size, scale_factor }
    }

    /// Aspect ratio of the drawable, for perspective projections.
    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.physical_size.height > 0 {
            self.physical_size.width as f32 / self.physical_size.height as f32
        } else {
            1.0
        }
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
