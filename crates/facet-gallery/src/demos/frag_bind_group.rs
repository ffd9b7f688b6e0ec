use facet_engine::render::{RenderCtx, RenderTarget};
use wgpu::util::DeviceExt;

use crate::demo::Demo;

const VERTICES: [f32; 9] = [
    0.0, 0.5, 0.0, //
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0,
];

const COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

struct GpuState {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// A uniform color bound to the fragment stage only; the auto pipeline layout
/// derives the visibility from the shader.
pub struct FragBindGroup {
    gpu: Option<GpuState>,
}

impl FragBindGroup {
    pub fn new() -> Self {
        Self { gpu: None }
    }

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.gpu.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("frag bind group shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/frag_bind_group.wgsl").into()),
        });

        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("frag bind group vertices"),
            contents: bytemuck::cast_slice(&VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("frag bind group color"),
            contents: bytemuck::cast_slice(&COLOR),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("frag bind group pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                }],
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
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frag bind group bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: color_ubo.as_entire_binding(),
            }],
        });

        self.gpu = Some(GpuState { pipeline, vertex_buffer, bind_group });
    }
}

impl Demo for FragBindGroup {
    fn title(&self) -> &'static str {
        "frag bind group"
    }

    fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_gpu(ctx);
        let Some(gpu) = self.gpu.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("frag bind group pass"),
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

        rpass.set_pipeline(&gpu.pipeline);
        rpass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}
