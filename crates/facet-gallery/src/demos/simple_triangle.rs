use facet_engine::render::{RenderCtx, RenderTarget};

use crate::demo::Demo;

/// The smallest possible page: no buffers, no bind groups, three vertices
/// synthesized in the vertex shader.
pub struct SimpleTriangle {
    pipeline: Option<wgpu::RenderPipeline>,
}

impl SimpleTriangle {
    pub fn new() -> Self {
        Self { pipeline: None }
    }

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("simple triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/simple_triangle.wgsl").into()),
        });

        self.pipeline = Some(ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("simple triangle pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(ctx.surface_format.into())],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        }));
    }
}

impl Demo for SimpleTriangle {
    fn title(&self) -> &'static str {
        "simple triangle"
    }

    fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_gpu(ctx);
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("simple triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.draw(0..3, 0..1);
    }
}
