use facet_engine::render::{RenderCtx, RenderTarget};
use facet_geometry::heart::{outline, HeartParams};
use wgpu::util::DeviceExt;

use crate::demo::{ControlSpec, Demo};

const DEFAULT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

const CONTROLS: &[ControlSpec] = &[
    ControlSpec::slider("offsetRadian", 1.0, 10.0, 0.5),
    ControlSpec::slider("xRatio", 0.01, 0.3, 0.01),
    ControlSpec::slider("yRatio", 0.01, 0.6, 0.01),
    ControlSpec::slider("xMultiple", 1.0, 4.0, 0.1),
    ControlSpec::slider("yMultiple", 1.0, 4.0, 0.1),
    ControlSpec::slider("points", 4.0, 128.0, 2.0),
    ControlSpec::slider("R", 0.0, 1.0, 0.01),
    ControlSpec::slider("G", 0.0, 1.0, 0.01),
    ControlSpec::slider("B", 0.0, 1.0, 0.01),
    ControlSpec::slider("offsetX", -1.0, 1.0, 0.05),
    ControlSpec::slider("offsetY", -1.0, 1.0, 0.05),
    ControlSpec::button("restore defaults"),
];

struct GpuState {
    pipeline: wgpu::RenderPipeline,
    color_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    // Recreated whenever the curve changes; the point count, and with it the
    // buffer size, is itself a control.
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

/// Parametric heart outline drawn as a line strip, with every curve
/// coefficient live-editable.
pub struct HeartShape {
    params: HeartParams,
    color: [f32; 3],
    outline_dirty: bool,
    color_dirty: bool,

    gpu: Option<GpuState>,
}

impl HeartShape {
    pub fn new() -> Self {
        Self {
            params: HeartParams::default(),
            color: DEFAULT_COLOR,
            outline_dirty: true,
            color_dirty: true,
            gpu: None,
        }
    }

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.gpu.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("heart shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/heart_shape.wgsl").into()),
        });

        let color_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("heart shape color"),
            size: std::mem::size_of::<[f32; 4]>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("heart shape pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 8,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(ctx.surface_format.into())],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("heart shape bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: color_ubo.as_entire_binding(),
            }],
        });

        self.gpu = Some(GpuState {
            pipeline,
            color_ubo,
            bind_group,
            vertex_buffer: None,
            vertex_count: 0,
        });
    }
}

impl Demo for HeartShape {
    fn title(&self) -> &'static str {
        "heart shape"
    }

    fn controls(&self) -> &'static [ControlSpec] {
        CONTROLS
    }

    fn control_value(&self, index: usize) -> f32 {
        match index {
            0 => self.params.offset_radian,
            1 => self.params.x_ratio,
            2 => self.params.y_ratio,
            3 => self.params.x_multiple,
            4 => self.params.y_multiple,
            5 => self.params.points as f32,
            6 => self.color[0],
            7 => self.color[1],
            8 => self.color[2],
            9 => self.params.offset_x,
            10 => self.params.offset_y,
            _ => 0.0,
        }
    }

    fn set_control(&mut self, index: usize, value: f32) {
        match index {
            0 => self.params.offset_radian = value,
            1 => self.params.x_ratio = value,
            2 => self.params.y_ratio = value,
            3 => self.params.x_multiple = value,
            4 => self.params.y_multiple = value,
            5 => self.params.points = value.max(0.0) as u32,
            6 => self.color[0] = value,
            7 => self.color[1] = value,
            8 => self.color[2] = value,
            9 => self.params.offset_x = value,
            10 => self.params.offset_y = value,
            _ => return,
        }
        if (6..=8).contains(&index) {
            self.color_dirty = true;
        } else {
            self.outline_dirty = true;
        }
    }

    fn press_button(&mut self, index: usize) {
        if index == 11 {
            self.reset_controls();
        }
    }

    fn reset_controls(&mut self) {
        self.params = HeartParams::default();
        self.color = DEFAULT_COLOR;
        self.outline_dirty = true;
        self.color_dirty = true;
    }

    fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_gpu(ctx);
        let Some(gpu) = self.gpu.as_mut() else { return };

        if self.outline_dirty {
            let xy = outline(self.params);
            gpu.vertex_count = (xy.len() / 2) as u32;
            gpu.vertex_buffer =
                Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("heart shape outline"),
                    contents: bytemuck::cast_slice(&xy),
                    usage: wgpu::BufferUsages::VERTEX,
                }));
            self.outline_dirty = false;
        }

        if self.color_dirty {
            let rgba = [self.color[0], self.color[1], self.color[2], 1.0];
            ctx.queue.write_buffer(&gpu.color_ubo, 0, bytemuck::cast_slice(&rgba));
            self.color_dirty = false;
        }

        let Some(vertex_buffer) = gpu.vertex_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("heart shape pass"),
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
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        rpass.draw(0..gpu.vertex_count, 0..1);
    }
}
