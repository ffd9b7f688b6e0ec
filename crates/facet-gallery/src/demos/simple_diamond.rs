use facet_engine::device::{DepthBuffer, DEPTH_FORMAT};
use facet_engine::render::{RenderCtx, RenderTarget};
use facet_geometry::{DiamondGeometry, DiamondParams};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::demo::{ControlSpec, Demo};
use super::perspective_mvp;

const DEFAULT_WIDTH: f32 = 1.0;
const DEFAULT_HEIGHT: f32 = 1.0;
const DEFAULT_FACETS: f32 = 3.0;
const DEFAULT_SCALE: f32 = 1.0;

const CONTROLS: &[ControlSpec] = &[
    ControlSpec::slider("width", 0.1, 2.0, 0.1),
    ControlSpec::slider("height", 0.1, 2.0, 0.1),
    ControlSpec::slider("facets", 3.0, 9.0, 1.0),
    ControlSpec::slider("scale", 0.1, 2.0, 0.1),
    ControlSpec::slider("rotateX", 0.0, 360.0, 1.0),
    ControlSpec::slider("rotateY", 0.0, 360.0, 1.0),
    ControlSpec::slider("rotateZ", 0.0, 360.0, 1.0),
];

struct GpuState {
    pipeline: wgpu::RenderPipeline,
    mvp_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    // Recreated on every mesh regeneration; the facet count changes the
    // buffer sizes.
    position_buffer: Option<wgpu::Buffer>,
    color_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

/// The procedural diamond page.
///
/// Shape controls regenerate the mesh (with fresh random facet colors);
/// transform controls only rewrite the MVP uniform. Depth testing keeps the
/// back faces behind the front ones once the solid starts rotating.
pub struct SimpleDiamond {
    width: f32,
    height: f32,
    facets: f32,
    scale: f32,
    rotate: [f32; 3],
    mesh_dirty: bool,

    depth: DepthBuffer,
    gpu: Option<GpuState>,
}

impl SimpleDiamond {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            facets: DEFAULT_FACETS,
            scale: DEFAULT_SCALE,
            rotate: [0.0; 3],
            mesh_dirty: true,
            depth: DepthBuffer::new(),
            gpu: None,
        }
    }

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.gpu.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("simple diamond shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/simple_diamond.wgsl").into()),
        });

        let mvp_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("simple diamond mvp"),
            size: std::mem::size_of::<[f32; 16]>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("simple diamond pipeline"),
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
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("simple diamond bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: mvp_ubo.as_entire_binding(),
            }],
        });

        self.gpu = Some(GpuState {
            pipeline,
            mvp_ubo,
            bind_group,
            position_buffer: None,
            color_buffer: None,
            vertex_count: 0,
        });
    }
}

impl Demo for SimpleDiamond {
    fn title(&self) -> &'static str {
        "simple diamond"
    }

    fn controls(&self) -> &'static [ControlSpec] {
        CONTROLS
    }

    fn control_value(&self, index: usize) -> f32 {
        match index {
            0 => self.width,
            1 => self.height,
            2 => self.facets,
            3 => self.scale,
            4..=6 => self.rotate[index - 4],
            _ => 0.0,
        }
    }

    fn set_control(&mut self, index: usize, value: f32) {
        match index {
            0 => {
                self.width = value;
                self.mesh_dirty = true;
            }
            1 => {
                self.height = value;
                self.mesh_dirty = true;
            }
            2 => {
                self.facets = value;
                self.mesh_dirty = true;
            }
            3 => self.scale = value,
            4..=6 => self.rotate[index - 4] = value,
            _ => {}
        }
    }

    fn reset_controls(&mut self) {
        self.width = DEFAULT_WIDTH;
        self.height = DEFAULT_HEIGHT;
        self.facets = DEFAULT_FACETS;
        self.scale = DEFAULT_SCALE;
        self.rotate = [0.0; 3];
        self.mesh_dirty = true;
    }

    fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_gpu(ctx);
        let Some(gpu) = self.gpu.as_mut() else { return };

        if self.mesh_dirty {
            let params = DiamondParams::from_controls(self.width, self.height, self.facets);
            let mesh = DiamondGeometry::new(params).mesh(&mut rand::thread_rng());
            log::debug!(
                "regenerated diamond mesh: {} facets, {} vertices",
                params.effective_facets(),
                mesh.vertex_count()
            );

            gpu.vertex_count = mesh.vertex_count() as u32;
            gpu.position_buffer =
                Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("simple diamond positions"),
                    contents: bytemuck::cast_slice(&mesh.positions),
                    usage: wgpu::BufferUsages::VERTEX,
                }));
            gpu.color_buffer =
                Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("simple diamond colors"),
                    contents: bytemuck::cast_slice(&mesh.colors),
                    usage: wgpu::BufferUsages::VERTEX,
                }));
            self.mesh_dirty = false;
        }

        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0))
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_rotation_x(self.rotate[0].to_radians())
            * Mat4::from_rotation_y(self.rotate[1].to_radians())
            * Mat4::from_rotation_z(self.rotate[2].to_radians());
        let mvp = perspective_mvp(ctx.aspect(), model);
        ctx.queue.write_buffer(&gpu.mvp_ubo, 0, bytemuck::cast_slice(&mvp.to_cols_array()));

        let (Some(position_buffer), Some(color_buffer)) =
            (gpu.position_buffer.as_ref(), gpu.color_buffer.as_ref())
        else {
            return;
        };

        let depth_view = self.depth.view(ctx.device, ctx.physical_size);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("simple diamond pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&gpu.pipeline);
        rpass.set_vertex_buffer(0, position_buffer.slice(..));
        rpass.set_vertex_buffer(1, color_buffer.slice(..));
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        rpass.draw(0..gpu.vertex_count, 0..1);
    }
}
