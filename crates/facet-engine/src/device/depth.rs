use winit::dpi::PhysicalSize;

/// Depth24Plus attachment sized to the surface.
///
/// Pages that draw solid geometry (the diamond) attach this to their render
/// pass; flat pages skip it. The texture is recreated lazily whenever the
/// requested size differs from the cached one, which covers both first use
/// and window resizes.
pub struct DepthBuffer {
    texture: Option<wgpu::Texture>,
    view: Option<wgpu::TextureView>,
    size: PhysicalSize<u32>,
}

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

impl DepthBuffer {
    pub fn new() -> Self {
        Self {
            texture: None,
            view: None,
            size: PhysicalSize::new(0, 0),
        }
    }

    /// Returns a view matching `size`, recreating the texture if needed.
    pub fn view(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) -> &wgpu::TextureView {
        let size = PhysicalSize::new(size.width.max(1), size.height.max(1));
        if self.size != size {
            self.texture = None;
            self.view = None;
            self.size = size;
        }

        let texture = self.texture.get_or_insert_with(|| {
            device.create_texture(&wgpu::TextureDescriptor {
                label: Some("facet depth buffer"),
                size: wgpu::Extent3d {
                    width: size.width,
                    height: size.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
        });
        self.view
            .get_or_insert_with(|| texture.create_view(&wgpu::TextureViewDescriptor::default()))
    }
}

impl Default for DepthBuffer {
    fn default() -> Self {
        Self::new()
    }
}
