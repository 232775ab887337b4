use crate::error::RenderError;
use crate::shaders;
use borehammer_common::ProjectionConfig;
use borehammer_render::geometry::{
    CLEAR_COLOR, CROSSHAIR_COLOR, CROSSHAIR_SIZE_PX, GROUND_COLOR, GROUND_VERTICES, HAND_COLOR,
    HAND_VERTICES,
};
use borehammer_render::{FrameMatrices, RenderView, Viewport, crosshair_half_extent};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct SceneUniforms {
    mvp: [[f32; 4]; 4],
    color: [f32; 3],
    _pad: f32,
}

impl SceneUniforms {
    fn new(mvp: Mat4, color: [f32; 3]) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            color,
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct CrosshairUniforms {
    color: [f32; 4],
    half_extent: [f32; 2],
    _pad: [f32; 2],
}

impl CrosshairUniforms {
    fn for_viewport(viewport: Viewport) -> Self {
        let [r, g, b] = CROSSHAIR_COLOR;
        Self {
            color: [r, g, b, 1.0],
            half_extent: crosshair_half_extent(viewport, CROSSHAIR_SIZE_PX).to_array(),
            _pad: [0.0; 2],
        }
    }
}

/// A uniform buffer and the bind group that exposes it at binding 0.
struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformSlot {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        contents: &[u8],
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }
}

/// Ground, hand and crosshair renderer.
///
/// Each draw owns its uniform slot because all writes land before the single
/// render pass executes.
pub struct WgpuRenderer {
    scene_pipeline: wgpu::RenderPipeline,
    crosshair_pipeline: wgpu::RenderPipeline,
    ground: UniformSlot,
    hand: UniformSlot,
    crosshair: UniformSlot,
    ground_vertex_buffer: wgpu::Buffer,
    hand_vertex_buffer: wgpu::Buffer,
    depth_texture: wgpu::TextureView,
    projection: ProjectionConfig,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
        projection: ProjectionConfig,
    ) -> Result<Self, RenderError> {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let scene_pipeline = validated(device, "scene pipeline", || {
            scene_pipeline(device, &pipeline_layout, surface_format)
        })?;
        let crosshair_pipeline = validated(device, "crosshair pipeline", || {
            crosshair_pipeline(device, &pipeline_layout, surface_format)
        })?;

        let idle = SceneUniforms::new(Mat4::IDENTITY, [0.0; 3]);
        let ground = UniformSlot::new(
            device,
            &bind_group_layout,
            "ground_uniforms",
            bytemuck::bytes_of(&idle),
        );
        let hand = UniformSlot::new(
            device,
            &bind_group_layout,
            "hand_uniforms",
            bytemuck::bytes_of(&idle),
        );
        let crosshair = UniformSlot::new(
            device,
            &bind_group_layout,
            "crosshair_uniforms",
            bytemuck::bytes_of(&CrosshairUniforms::for_viewport(viewport)),
        );

        let ground_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ground_vertex_buffer"),
            contents: bytemuck::cast_slice(&GROUND_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let hand_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hand_vertex_buffer"),
            contents: bytemuck::cast_slice(&HAND_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let depth_texture = Self::create_depth_texture(device, viewport);

        Ok(Self {
            scene_pipeline,
            crosshair_pipeline,
            ground,
            hand,
            crosshair,
            ground_vertex_buffer,
            hand_vertex_buffer,
            depth_texture,
            projection,
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, viewport: Viewport) {
        self.depth_texture = Self::create_depth_texture(device, viewport);
        queue.write_buffer(
            &self.crosshair.buffer,
            0,
            bytemuck::bytes_of(&CrosshairUniforms::for_viewport(viewport)),
        );
    }

    /// Render one frame: ground, hand, then the crosshair on top.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        view: &RenderView,
        viewport: Viewport,
    ) {
        let matrices = FrameMatrices::compute(view, viewport, &self.projection);
        queue.write_buffer(
            &self.ground.buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms::new(matrices.ground_mvp, GROUND_COLOR)),
        );
        queue.write_buffer(
            &self.hand.buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms::new(matrices.hand_mvp, HAND_COLOR)),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let [r, g, b] = CLEAR_COLOR.map(f64::from);
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a: 1.0 }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.scene_pipeline);

            pass.set_bind_group(0, &self.ground.bind_group, &[]);
            pass.set_vertex_buffer(0, self.ground_vertex_buffer.slice(..));
            pass.draw(0..GROUND_VERTICES.len() as u32, 0..1);

            pass.set_bind_group(0, &self.hand.bind_group, &[]);
            pass.set_vertex_buffer(0, self.hand_vertex_buffer.slice(..));
            pass.draw(0..HAND_VERTICES.len() as u32, 0..1);

            pass.set_pipeline(&self.crosshair_pipeline);
            pass.set_bind_group(0, &self.crosshair.bind_group, &[]);
            pass.draw(0..6, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(device: &wgpu::Device, viewport: Viewport) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: viewport.width.max(1),
                height: viewport.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

/// Run `build` inside a validation error scope and turn any captured error
/// (including WGSL compile errors) into [`RenderError::Pipeline`].
fn validated<T>(
    device: &wgpu::Device,
    label: &'static str,
    build: impl FnOnce() -> T,
) -> Result<T, RenderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = build();
    match pollster::block_on(device.pop_error_scope()) {
        None => Ok(value),
        Some(err) => Err(RenderError::Pipeline {
            label,
            log: err.to_string(),
        }),
    }
}

fn scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(shaders::SCENE_SHADER.into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3],
            }],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: Default::default(),
            bias: Default::default(),
        }),
        multisample: Default::default(),
        multiview: None,
        cache: None,
    })
}

fn crosshair_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("crosshair_shader"),
        source: wgpu::ShaderSource::Wgsl(shaders::CROSSHAIR_SHADER.into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("crosshair_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_crosshair"),
            compilation_options: Default::default(),
            buffers: &[],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_crosshair"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        // Always on top: ignore and preserve the scene depth.
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Always,
            stencil: Default::default(),
            bias: Default::default(),
        }),
        multisample: Default::default(),
        multiview: None,
        cache: None,
    })
}
