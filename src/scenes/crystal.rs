use glam::{EulerRot, Mat4, Vec3};
use std::path::Path;
use wgpu::util::DeviceExt;

use crate::camera::OrbitCamera;
use crate::config::Tuning;
use crate::crystal_rig::CrystalRig;
use crate::geometry::icosahedron;
use crate::gpu::GpuState;
use crate::lights::{self, AreaLight, ORBIT_LIGHT_A, ORBIT_LIGHT_B};
use crate::loaders::{load_model, LogoModel, MaterialKind, PartKind};
use crate::scenes::Scene;
use crate::types::{CrystalUniform, LightBlock, LightUniform, MaterialUniform, MeshVertex};
use crate::viewport::Viewport;

const CAMERA_FOV: f32 = 5.0;
const CAMERA_NEAR: f32 = 1.0;
const CAMERA_FAR: f32 = 100.0;
const CAMERA_DISTANCE: f32 = 68.5;

const CRYSTAL_RADIUS: f32 = 3.0;
// Static tilt of the icosahedron; only its yaw animates
const CRYSTAL_TILT_X: f32 = 0.4;
const CRYSTAL_TILT_Z: f32 = -0.1;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

fn glass_material() -> MaterialUniform {
    MaterialUniform {
        base_color: lights::BLACK,
        metalness: 0.0,
        emissive: lights::BLACK,
        roughness: 0.2,
        opacity: 1.0,
        _pad: [0.0; 3],
    }
}

fn line_material() -> MaterialUniform {
    MaterialUniform {
        base_color: lights::PINK,
        metalness: 1.0,
        emissive: lights::PINK,
        roughness: 1.0,
        opacity: 1.0,
        _pad: [0.0; 3],
    }
}

fn crystal_material() -> MaterialUniform {
    MaterialUniform {
        base_color: lights::BLACK,
        metalness: 1.0,
        emissive: lights::BLACK,
        roughness: 0.0,
        opacity: 0.4,
        _pad: [0.0; 3],
    }
}

/// Scene B: the rotating logo with the procedural crystal.
///
/// All motion comes from [`CrystalRig`]; this type uploads its outputs
/// (model yaw and bob, crystal yaw, the two roaming light positions, the
/// front/back visibility split) and draws whatever loaded. A failed model
/// load leaves the scene unpopulated but alive.
pub struct CrystalScene {
    camera: OrbitCamera,
    rig: CrystalRig,
    lights: Vec<AreaLight>,
    contents: Option<Contents>,
}

struct DrawBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

struct PartDraw {
    kind: PartKind,
    buffers: DrawBuffers,
}

struct Contents {
    glass_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    crystal_pipeline: wgpu::RenderPipeline,
    model_uniform_buffer: wgpu::Buffer,
    crystal_uniform_buffer: wgpu::Buffer,
    light_buffer: wgpu::Buffer,
    glass_bind_group: wgpu::BindGroup,
    line_bind_group: wgpu::BindGroup,
    crystal_bind_group: wgpu::BindGroup,
    parts: Vec<PartDraw>,
    crystal: DrawBuffers,
    depth_view: wgpu::TextureView,
    depth_size: Viewport,
}

impl CrystalScene {
    pub fn new(gpu: &GpuState, tuning: &Tuning, model_path: impl AsRef<Path>) -> Self {
        let camera = OrbitCamera::new(
            CAMERA_FOV,
            CAMERA_NEAR,
            CAMERA_FAR,
            CAMERA_DISTANCE,
            gpu.viewport().aspect(),
        );

        let contents = match load_model(model_path) {
            Ok(model) => Some(Contents::new(gpu, &model)),
            Err(e) => {
                log::error!("crystal scene assets unavailable: {:#}", e);
                None
            }
        };

        Self {
            camera,
            rig: CrystalRig::new(tuning.crystal),
            lights: lights::rig(),
            contents,
        }
    }

    pub fn rig(&self) -> &CrystalRig {
        &self.rig
    }

    pub fn is_populated(&self) -> bool {
        self.contents.is_some()
    }

    fn light_block(&self) -> LightBlock {
        let mut uniforms = [LightUniform {
            position: [0.0; 3],
            intensity: 0.0,
            color: [0.0; 3],
            size: 0.0,
        }; 8];

        for (i, light) in self.lights.iter().enumerate().take(8) {
            let position = match i {
                ORBIT_LIGHT_A => self.rig.light_a(),
                ORBIT_LIGHT_B => self.rig.light_b(),
                _ => light.position,
            };
            uniforms[i] = LightUniform {
                position: position.to_array(),
                intensity: light.intensity,
                color: light.color,
                size: light.size,
            };
        }

        LightBlock {
            lights: uniforms,
            ambient_color: lights::WHITE,
            ambient_intensity: lights::AMBIENT_INTENSITY,
        }
    }
}

impl Scene for CrystalScene {
    fn advance(&mut self, time: f32, _timeline_active: bool) {
        // No scripted timeline here; everything derives from time
        self.rig.advance(time);
    }

    fn resize(&mut self, viewport: Viewport) {
        self.camera.set_aspect(viewport.aspect());
    }

    fn render(&mut self, gpu: &GpuState) -> Result<(), wgpu::SurfaceError> {
        let output = gpu.acquire()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let light_block = self.light_block();

        if let Some(contents) = &mut self.contents {
            contents.ensure_depth(gpu);

            let view_proj = self.camera.view_proj().to_cols_array_2d();

            let model_matrix = Mat4::from_translation(Vec3::new(0.0, self.rig.bob(), 0.0))
                * Mat4::from_rotation_y(self.rig.model_yaw());
            let crystal_matrix = Mat4::from_euler(
                EulerRot::XYZ,
                CRYSTAL_TILT_X,
                self.rig.crystal_yaw(),
                CRYSTAL_TILT_Z,
            );

            gpu.queue().write_buffer(
                &contents.model_uniform_buffer,
                0,
                bytemuck::cast_slice(&[CrystalUniform {
                    view_proj,
                    model: model_matrix.to_cols_array_2d(),
                }]),
            );
            gpu.queue().write_buffer(
                &contents.crystal_uniform_buffer,
                0,
                bytemuck::cast_slice(&[CrystalUniform {
                    view_proj,
                    model: crystal_matrix.to_cols_array_2d(),
                }]),
            );
            gpu.queue().write_buffer(
                &contents.light_buffer,
                0,
                bytemuck::cast_slice(&[light_block]),
            );
        }

        let mut encoder = gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("crystal encoder"),
            });

        {
            let depth_attachment =
                self.contents
                    .as_ref()
                    .map(|c| wgpu::RenderPassDepthStencilAttachment {
                        view: &c.depth_view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    });

            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("crystal pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: depth_attachment,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(contents) = &self.contents {
                // Crystal first; the logo model draws over it
                pass.set_pipeline(&contents.crystal_pipeline);
                pass.set_bind_group(0, &contents.crystal_bind_group, &[]);
                pass.set_vertex_buffer(0, contents.crystal.vertex_buffer.slice(..));
                pass.set_index_buffer(
                    contents.crystal.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..contents.crystal.index_count, 0, 0..1);

                let visible = self.rig.visible_group();
                for part in contents.parts.iter().filter(|p| p.kind.group() == visible) {
                    match part.kind.material() {
                        MaterialKind::Glass => {
                            pass.set_pipeline(&contents.glass_pipeline);
                            pass.set_bind_group(0, &contents.glass_bind_group, &[]);
                        }
                        MaterialKind::Line => {
                            pass.set_pipeline(&contents.line_pipeline);
                            pass.set_bind_group(0, &contents.line_bind_group, &[]);
                        }
                    }
                    pass.set_vertex_buffer(0, part.buffers.vertex_buffer.slice(..));
                    pass.set_index_buffer(
                        part.buffers.index_buffer.slice(..),
                        wgpu::IndexFormat::Uint32,
                    );
                    pass.draw_indexed(0..part.buffers.index_count, 0, 0..1);
                }
            }
        }

        gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn name(&self) -> &str {
        "crystal"
    }
}

impl DrawBuffers {
    fn new(
        device: &wgpu::Device,
        label: &str,
        vertices: &[MeshVertex],
        indices: &[u32],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

impl Contents {
    fn new(gpu: &GpuState, model: &LogoModel) -> Self {
        let device = gpu.device();

        let parts = model
            .parts
            .iter()
            .map(|part| PartDraw {
                kind: part.kind,
                buffers: DrawBuffers::new(
                    device,
                    "logo part",
                    &part.vertices,
                    &part.indices,
                ),
            })
            .collect();

        let (crystal_vertices, crystal_indices) = icosahedron(CRYSTAL_RADIUS);
        let crystal = DrawBuffers::new(device, "crystal", &crystal_vertices, &crystal_indices);

        let uniform_size = std::mem::size_of::<CrystalUniform>() as u64;
        let model_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("logo uniforms"),
            size: uniform_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let crystal_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("crystal uniforms"),
            size: uniform_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let light_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("light block"),
            size: std::mem::size_of::<LightBlock>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let glass_material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glass material"),
            contents: bytemuck::cast_slice(&[glass_material()]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let line_material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("line material"),
            contents: bytemuck::cast_slice(&[line_material()]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let crystal_material_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("crystal material"),
                contents: bytemuck::cast_slice(&[crystal_material()]),
                usage: wgpu::BufferUsages::UNIFORM,
            });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("crystal bind group layout"),
            entries: &[
                uniform_layout_entry(0, wgpu::ShaderStages::VERTEX),
                uniform_layout_entry(1, wgpu::ShaderStages::FRAGMENT),
                uniform_layout_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });

        let bind_group = |label: &str, uniforms: &wgpu::Buffer, material: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniforms.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: material.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: light_buffer.as_entire_binding(),
                    },
                ],
            })
        };

        let glass_bind_group = bind_group("glass", &model_uniform_buffer, &glass_material_buffer);
        let line_bind_group = bind_group("line", &model_uniform_buffer, &line_material_buffer);
        let crystal_bind_group = bind_group(
            "crystal",
            &crystal_uniform_buffer,
            &crystal_material_buffer,
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("crystal shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../crystal.wgsl").into()),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("crystal pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Depth/cull split per material: lines write depth and cull back
        // faces, glass culls but leaves depth alone, the crystal is
        // double-sided and also leaves depth alone.
        let line_pipeline = build_pipeline(
            device,
            &pipeline_layout,
            &shader,
            gpu.format(),
            "line pipeline",
            Some(wgpu::Face::Back),
            true,
        );
        let glass_pipeline = build_pipeline(
            device,
            &pipeline_layout,
            &shader,
            gpu.format(),
            "glass pipeline",
            Some(wgpu::Face::Back),
            false,
        );
        let crystal_pipeline = build_pipeline(
            device,
            &pipeline_layout,
            &shader,
            gpu.format(),
            "crystal pipeline",
            None,
            false,
        );

        let depth_size = gpu.viewport();
        let depth_view = create_depth_view(device, depth_size);

        Self {
            glass_pipeline,
            line_pipeline,
            crystal_pipeline,
            model_uniform_buffer,
            crystal_uniform_buffer,
            light_buffer,
            glass_bind_group,
            line_bind_group,
            crystal_bind_group,
            parts,
            crystal,
            depth_view,
            depth_size,
        }
    }

    /// Recreate the depth buffer when the surface size changed
    fn ensure_depth(&mut self, gpu: &GpuState) {
        let size = gpu.viewport();
        if size != self.depth_size {
            self.depth_view = create_depth_view(gpu.device(), size);
            self.depth_size = size;
        }
    }
}

fn uniform_layout_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn create_depth_view(device: &wgpu::Device, size: Viewport) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("crystal depth"),
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
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn build_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    label: &str,
    cull_mode: Option<wgpu::Face>,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[MeshVertex::LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
