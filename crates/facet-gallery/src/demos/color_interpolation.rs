use facet_engine::render::{RenderCtx, RenderTarget};
use facet_geometry::color::{hex_rgb, Rgb};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::demo::{ControlSpec, Demo};
use super::perspective_mvp;

const VERTICES: [f32; 9] = [
    0.0, 0.5, 0.0, //
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0,
];

const DEFAULT_HEX: [&str; 3] = ["#ff0000", "#00ff00", "#0000ff"];
const DEFAULT_SCALE: f32 = 1.0;
const DEFAULT_ROTATE: f32 = 0.0;

const CONTROLS: &[ControlSpec] = &[
    ControlSpec::slider("top R", 0.0, 1.0, 0.01),
    ControlSpec::slider("top G", 0.0, 1.0, 0.01),
    ControlSpec::slider("top B", 0.0, 1.0, 0.01),
    ControlSpec::slider("left R", 0.0, 1.0, 0.01),
    ControlSpec::slider("left G", 0.0, 1.0, 0.01),
    ControlSpec::slider("left B", 0.0, 1.0, 0.01),
    ControlSpec::slider("right R", 0.0, 1.0, 0.01),
    ControlSpec::slider("right G", 0.0, 1.0, 0.01),
    ControlSpec::slider("right B", 0.0, 1.0, 0.01),
    ControlSpec::slider("scale", 0.1, 2.0, 0.1),
    ControlSpec::slider("rotate", 0.0, 360.0, 1.0),
];

struct GpuState {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    mvp_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// One color per corner, interpolated across the triangle. The corner colors
/// are seeded from hex strings and then editable per channel.
pub struct ColorInterpolation {
    colors: [[f32; 3]; 3],
    scale: f32,
    rotate: f32,
    colors_dirty: bool,

    gpu: Option<GpuState>,
}

fn default_colors() -> [[f32; 3]; 3] {
    DEFAULT_HEX.map(|hex| {
        let c = hex_rgb(hex).unwrap_or(Rgb::new(1.0, 1.0, 1.0));
        [c.r, c.g, c.b]
    })
}

impl ColorInterpolation {
    pub fn new() -> Self {
        Self {
            colors: default_colors(),
            scale: DEFAULT_SCALE,
            rotate: DEFAULT_ROTATE,
            colors_dirty: true,
            gpu: None,
        }
    }

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.gpu.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("color interpolation shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../shaders/color_interpolation.wgsl").into(),
            ),
        });

        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("color interpolation vertices"),
            contents: bytemuck::cast_slice(&VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("color interpolation corner colors"),
            size: std::mem::size_of::<[f32; 9]>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mvp_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("color interpolation mvp"),
            size: std::mem::size_of::<[f32; 16]>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("color interpolation pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![1 => Float32x3],
                    },
                ],
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
            label: Some("color interpolation bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: mvp_ubo.as_entire_binding(),
            }],
        });

        self.gpu = Some(GpuState { pipeline, vertex_buffer, color_buffer, mvp_ubo, bind_group });
    }
}

impl Demo for ColorInterpolation {
    fn title(&self) -> &'static str {
        "color interpolation"
    }

    fn controls(&self) -> &'static [ControlSpec] {
        CONTROLS
    }

    fn control_value(&self, index: usize) -> f32 {
        match index {
            0..=8 => self.colors[index / 3][index % 3],
            9 => self.scale,
            10 => self.rotate,
            _ => 0.0,
        }
    }

    fn set_control(&mut self, index: usize, value: f32) {
        match index {
            0..=8 => {
                self.colors[index / 3][index % 3] = value;
                self.colors_dirty = true;
            }
            9 => self.scale = value,
            10 => self.rotate = value,
            _ => {}
        }
    }

    fn reset_controls(&mut self) {
        self.colors = default_colors();
        self.scale = DEFAULT_SCALE;
        self.rotate = DEFAULT_ROTATE;
        self.colors_dirty = true;
    }

    fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_gpu(ctx);
        let Some(gpu) = self.gpu.as_ref() else { return };

        if self.colors_dirty {
            let flat: [f32; 9] = [
                self.colors[0][0], self.colors[0][1], self.colors[0][2], //
                self.colors[1][0], self.colors[1][1], self.colors[1][2], //
                self.colors[2][0], self.colors[2][1], self.colors[2][2],
            ];
            ctx.queue.write_buffer(&gpu.color_buffer, 0, bytemuck::cast_slice(&flat));
            self.colors_dirty = false;
        }

        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0))
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_rotation_z(self.rotate.to_radians());
        let mvp = perspective_mvp(ctx.aspect(), model);
        ctx.queue.write_buffer(&gpu.mvp_ubo, 0, bytemuck::cast_slice(&mvp.to_cols_array()));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("color interpolation pass"),
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
        rpass.set_vertex_buffer(1, gpu.color_buffer.slice(..));
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}
