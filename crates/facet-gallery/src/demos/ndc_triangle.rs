use facet_engine::render::{RenderCtx, RenderTarget};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::demo::Demo;
use super::perspective_mvp;

// One vertex pokes out to z = 1 so the perspective divide visibly pulls it
// toward the center.
const VERTICES: [f32; 9] = [
    0.0, 0.5, 1.0, //
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0,
];

const COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

struct GpuState {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    mvp_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// A fixed triangle pushed through a translate/rotate/perspective MVP.
pub struct NdcTriangle {
    gpu: Option<GpuState>,
}

impl NdcTriangle {
    pub fn new() -> Self {
        Self { gpu: None }
    }

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.gpu.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ndc triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/ndc_triangle.wgsl").into()),
        });

        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ndc triangle vertices"),
            contents: bytemuck::cast_slice(&VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ndc triangle color"),
            contents: bytemuck::cast_slice(&COLOR),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let mvp_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ndc triangle mvp"),
            size: std::mem::size_of::<[f32; 16]>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ndc triangle pipeline"),
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
            label: Some("ndc triangle bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: color_ubo.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: mvp_ubo.as_entire_binding() },
            ],
        });

        self.gpu = Some(GpuState { pipeline, vertex_buffer, mvp_ubo, bind_group });
    }
}

impl Demo for NdcTriangle {
    fn title(&self) -> &'static str {
        "ndc triangle"
    }

    fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_gpu(ctx);
        let Some(gpu) = self.gpu.as_ref() else { return };

        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0))
            * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_4);
        let mvp = perspective_mvp(ctx.aspect(), model);
        ctx.queue.write_buffer(&gpu.mvp_ubo, 0, bytemuck::cast_slice(&mvp.to_cols_array()));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ndc triangle pass"),
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
