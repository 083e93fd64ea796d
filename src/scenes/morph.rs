use std::path::Path;
use wgpu::util::DeviceExt;

use crate::camera::OrbitCamera;
use crate::config::Tuning;
use crate::frame::TIME_STEP;
use crate::geometry::point_grid;
use crate::gpu::GpuState;
use crate::loaders::{load_texture_pair, TexturePair};
use crate::scenes::Scene;
use crate::sequencer::MorphSequencer;
use crate::types::{MorphUniform, PointVertex};
use crate::viewport::Viewport;

const PLANE_WIDTH: f32 = 600.0;
const PLANE_HEIGHT: f32 = 350.0;
const PLANE_SEGMENTS_X: u32 = 600;
const PLANE_SEGMENTS_Y: u32 = 350;

const CAMERA_FOV: f32 = 45.0;
const CAMERA_NEAR: f32 = 1.0;
const CAMERA_FAR: f32 = 2000.0;

/// Scene A: the textured point-cloud plane.
///
/// The sequencer owns all animation state; this type binds its outputs
/// (coefficient, mix factor, orbit angle) to the GPU each frame. If the
/// texture pair fails to load the scene stays alive and renders empty.
pub struct MorphScene {
    camera: OrbitCamera,
    sequencer: MorphSequencer,
    time: f32,
    mesh: Option<PointsMesh>,
}

struct PointsMesh {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl MorphScene {
    pub fn new(
        gpu: &GpuState,
        tuning: &Tuning,
        texture_a: impl AsRef<Path>,
        texture_b: impl AsRef<Path>,
    ) -> Self {
        let camera = OrbitCamera::new(
            CAMERA_FOV,
            CAMERA_NEAR,
            CAMERA_FAR,
            tuning.orbit_radius,
            gpu.viewport().aspect(),
        );

        // Load failure is logged and swallowed: the loop keeps rendering
        // an empty scene.
        let mesh = match load_texture_pair(gpu.device(), gpu.queue(), texture_a, texture_b) {
            Ok(textures) => Some(PointsMesh::new(gpu, &textures)),
            Err(e) => {
                log::error!("morph scene assets unavailable: {:#}", e);
                None
            }
        };

        Self {
            camera,
            sequencer: MorphSequencer::new(tuning.morph),
            time: 0.0,
            mesh,
        }
    }

    pub fn sequencer(&self) -> &MorphSequencer {
        &self.sequencer
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn is_populated(&self) -> bool {
        self.mesh.is_some()
    }
}

impl Scene for MorphScene {
    fn advance(&mut self, time: f32, timeline_active: bool) {
        self.time = time;
        if timeline_active {
            self.sequencer.tick(TIME_STEP);
        }
        self.camera.set_angle(self.sequencer.orbit_angle());
    }

    fn resize(&mut self, viewport: Viewport) {
        self.camera.set_aspect(viewport.aspect());
    }

    fn render(&mut self, gpu: &GpuState) -> Result<(), wgpu::SurfaceError> {
        let output = gpu.acquire()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if let Some(mesh) = &self.mesh {
            let uniform = MorphUniform {
                view_proj: self.camera.view_proj().to_cols_array_2d(),
                time: self.time,
                coefficient: self.sequencer.coefficient(),
                mix_factor: self.sequencer.mix_factor(),
                _pad: 0.0,
            };
            gpu.queue()
                .write_buffer(&mesh.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
        }

        let mut encoder = gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("morph encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("morph pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(mesh) = &self.mesh {
                pass.set_pipeline(&mesh.pipeline);
                pass.set_bind_group(0, &mesh.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.draw(0..mesh.vertex_count, 0..1);
            }
        }

        gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn name(&self) -> &str {
        "morph"
    }
}

impl PointsMesh {
    fn new(gpu: &GpuState, textures: &TexturePair) -> Self {
        let device = gpu.device();

        let vertices = point_grid(PLANE_WIDTH, PLANE_HEIGHT, PLANE_SEGMENTS_X, PLANE_SEGMENTS_Y);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("morph points"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("morph uniforms"),
            size: std::mem::size_of::<MorphUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("morph bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("morph bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&textures.first.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&textures.second.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("morph shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../points.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("morph pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("morph pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[PointVertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Double-sided: the plane must survive the camera orbit
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }
}
