use std::sync::Arc;

use anyhow::Context;
use loupe_core::{Camera, CameraUniform, Settings};
use winit::window::Window;

use crate::capture::Capture;

use super::quad::QuadMesh;
use super::texture::CaptureTexture;

pub struct Renderer
{
  surface: wgpu::Surface<'static>,
  device: wgpu::Device,
  queue: wgpu::Queue,
  config: wgpu::SurfaceConfiguration,

  camera_buffer: wgpu::Buffer,
  bind_group: wgpu::BindGroup,

  pipeline: wgpu::RenderPipeline,
  quad: QuadMesh,
  clear_color: wgpu::Color,
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Renderer
{
  pub async fn new(
    window: Arc<Window>,
    capture: &Capture,
    camera: &Camera,
    settings: &Settings,
  ) -> anyhow::Result<Self>
  {
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone()).context("Failed to create surface")?;

    let adapter = request_adapter(&instance, &surface).await?;
    let (device, queue) = request_device(&adapter).await?;

    let max_dim = device.limits().max_texture_dimension_2d;
    if capture.width > max_dim || capture.height > max_dim
    {
      anyhow::bail!(
        "capture {}x{} exceeds the GPU texture limit of {max_dim}",
        capture.width,
        capture.height
      );
    }

    let config = configure_surface(&window, &surface, &adapter, &device)?;

    let texture = CaptureTexture::create(&device, &queue, capture, settings.smooth_filtering);
    let camera_buffer = create_camera_buffer(&device);
    let (bind_group, bind_group_layout) = create_bind_group(&device, &camera_buffer, &texture);

    let pipeline = create_pipeline(&device, &config, &bind_group_layout);
    let quad = QuadMesh::create(&device, capture.width, capture.height);

    let [r, g, b] = settings.clear_color;

    let renderer = Self {
      surface,
      device,
      queue,
      config,
      camera_buffer,
      bind_group,
      pipeline,
      quad,
      clear_color: wgpu::Color { r, g, b, a: 1.0 },
    };

    // Upload initial camera uniform
    renderer.update_camera(camera);

    Ok(renderer)
  }

  pub fn resize(&mut self, width: u32, height: u32)
  {
    self.config.width = width;
    self.config.height = height;
    self.surface.configure(&self.device, &self.config);
  }

  pub fn update_camera(&self, camera: &Camera)
  {
    let uniform =
      CameraUniform::from_camera(camera, self.config.width as f32, self.config.height as f32);
    self.queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniform));
  }

  pub fn render(&mut self) -> anyhow::Result<()>
  {
    let frame = match self.surface.get_current_texture()
    {
      Ok(frame) => frame,
      Err(err @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) =>
      {
        log::warn!("Surface {err}, reconfiguring");
        self.surface.configure(&self.device, &self.config);
        return Ok(());
      }
      Err(wgpu::SurfaceError::Timeout) =>
      {
        log::warn!("Timed out acquiring frame, skipping");
        return Ok(());
      }
      Err(err) => return Err(err).context("Failed to acquire frame"),
    };

    let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = self
      .device
      .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") });

    record_render_pass(
      &mut encoder,
      &view,
      self.clear_color,
      &self.pipeline,
      &self.bind_group,
      &self.quad,
    );

    self.queue.submit(Some(encoder.finish()));
    frame.present();

    Ok(())
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Initialization Helpers
// ──────────────────────────────────────────────────────────────
//

async fn request_adapter(
  instance: &wgpu::Instance,
  surface: &wgpu::Surface<'_>,
) -> anyhow::Result<wgpu::Adapter>
{
  instance
    .request_adapter(&wgpu::RequestAdapterOptions {
      power_preference: wgpu::PowerPreference::LowPower,
      compatible_surface: Some(surface),
      force_fallback_adapter: false,
    })
    .await
    .context("No suitable GPU adapters found")
}

async fn request_device(adapter: &wgpu::Adapter) -> anyhow::Result<(wgpu::Device, wgpu::Queue)>
{
  // Screen captures can exceed the default 8192 texture limit on large displays
  let required_limits = wgpu::Limits::default().using_resolution(adapter.limits());

  adapter
    .request_device(&wgpu::DeviceDescriptor {
      label: Some("Loupe Device"),
      required_features: wgpu::Features::empty(),
      required_limits,
      ..Default::default()
    })
    .await
    .context("Failed to create device")
}

fn configure_surface(
  window: &Window,
  surface: &wgpu::Surface<'_>,
  adapter: &wgpu::Adapter,
  device: &wgpu::Device,
) -> anyhow::Result<wgpu::SurfaceConfiguration>
{
  let size = window.inner_size();
  let caps = surface.get_capabilities(adapter);

  let format = pick_surface_format(&caps.formats).context("Surface reports no formats")?;

  let config = wgpu::SurfaceConfiguration {
    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    format,
    width: size.width.max(1),
    height: size.height.max(1),
    present_mode: wgpu::PresentMode::Fifo,
    alpha_mode: wgpu::CompositeAlphaMode::Auto,
    view_formats: vec![],
    desired_maximum_frame_latency: 2,
  };

  surface.configure(device, &config);
  Ok(config)
}

/// The capture texture is sRGB, so present through an sRGB target when possible.
fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat>
{
  formats.iter().copied().find(|f| f.is_srgb()).or_else(|| formats.first().copied())
}

fn create_camera_buffer(device: &wgpu::Device) -> wgpu::Buffer
{
  device.create_buffer(&wgpu::BufferDescriptor {
    label: Some("Camera Buffer"),
    size: std::mem::size_of::<CameraUniform>() as u64,
    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    mapped_at_creation: false,
  })
}

fn create_bind_group(
  device: &wgpu::Device,
  camera_buffer: &wgpu::Buffer,
  texture: &CaptureTexture,
) -> (wgpu::BindGroup, wgpu::BindGroupLayout)
{
  let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
    label: Some("Quad BGL"),
    entries: &[
      wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX,
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
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
      },
    ],
  });

  let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
    label: Some("Quad BG"),
    layout: &layout,
    entries: &[
      wgpu::BindGroupEntry { binding: 0, resource: camera_buffer.as_entire_binding() },
      wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&texture.view) },
      wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(&texture.sampler) },
    ],
  });

  (bind_group, layout)
}

fn create_pipeline(
  device: &wgpu::Device,
  config: &wgpu::SurfaceConfiguration,
  bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline
{
  let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
    label: Some("Quad Shader"),
    source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/quad.wgsl").into()),
  });

  let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
    label: Some("Quad Pipeline Layout"),
    bind_group_layouts: &[bind_group_layout],
    push_constant_ranges: &[],
  });

  device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
    label: Some("Quad Pipeline"),
    layout: Some(&layout),
    vertex: wgpu::VertexState {
      module: &shader,
      entry_point: Some("vs_main"),
      buffers: &[QuadMesh::layout()],
      compilation_options: wgpu::PipelineCompilationOptions::default(),
    },
    fragment: Some(wgpu::FragmentState {
      module: &shader,
      entry_point: Some("fs_main"),
      targets: &[Some(wgpu::ColorTargetState {
        format: config.format,
        blend: Some(wgpu::BlendState::REPLACE),
        write_mask: wgpu::ColorWrites::ALL,
      })],
      compilation_options: wgpu::PipelineCompilationOptions::default(),
    }),
    primitive: wgpu::PrimitiveState {
      topology: wgpu::PrimitiveTopology::TriangleList,
      strip_index_format: None,
      front_face: wgpu::FrontFace::Ccw,
      cull_mode: None, // winding flips with the Y-down projection
      unclipped_depth: false,
      polygon_mode: wgpu::PolygonMode::Fill,
      conservative: false,
    },
    depth_stencil: None,
    multisample: wgpu::MultisampleState::default(),
    multiview: None,
    cache: None,
  })
}

//
// ──────────────────────────────────────────────────────────────
//   Render Pass
// ──────────────────────────────────────────────────────────────
//

fn record_render_pass(
  encoder: &mut wgpu::CommandEncoder,
  color_view: &wgpu::TextureView,
  clear_color: wgpu::Color,
  pipeline: &wgpu::RenderPipeline,
  bind_group: &wgpu::BindGroup,
  quad: &QuadMesh,
)
{
  let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
    label: Some("Quad Render Pass"),
    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
      view: color_view,
      depth_slice: None,
      resolve_target: None,
      ops: wgpu::Operations { load: wgpu::LoadOp::Clear(clear_color), store: wgpu::StoreOp::Store },
    })],
    ..Default::default()
  });

  pass.set_pipeline(pipeline);
  pass.set_bind_group(0, bind_group, &[]);
  pass.set_vertex_buffer(0, quad.vertex_buffer.slice(..));
  pass.set_index_buffer(quad.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
  pass.draw_indexed(0..quad.index_count, 0, 0..1);
}
