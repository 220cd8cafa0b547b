use wgpu::util::DeviceExt;

//
// ──────────────────────────────────────────────────────────────
//   Vertex layout: [x, y,  u, v]
//
//   Positions are world pixels, so the quad covers the capture
//   1:1 when the camera is at identity.
// ──────────────────────────────────────────────────────────────
//

pub type Vertex = [f32; 4];

pub struct QuadMesh
{
  pub vertex_buffer: wgpu::Buffer,
  pub index_buffer: wgpu::Buffer,
  pub index_count: u32,
}

impl QuadMesh
{
  pub fn create(device: &wgpu::Device, width: u32, height: u32) -> Self
  {
    let vertices = build_vertices(width as f32, height as f32);

    // Two triangles sharing the top-right / bottom-left diagonal
    let indices: [u16; 6] = [0, 1, 2, 1, 3, 2];

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some("Quad Vertex Buffer"),
      contents: bytemuck::cast_slice(&vertices),
      usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some("Quad Index Buffer"),
      contents: bytemuck::cast_slice(&indices),
      usage: wgpu::BufferUsages::INDEX,
    });

    Self { vertex_buffer, index_buffer, index_count: indices.len() as u32 }
  }

  pub fn layout() -> wgpu::VertexBufferLayout<'static>
  {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
      0 => Float32x2,  // position
      1 => Float32x2,  // uv
    ];

    wgpu::VertexBufferLayout {
      array_stride: std::mem::size_of::<Vertex>() as u64,
      step_mode: wgpu::VertexStepMode::Vertex,
      attributes: &ATTRIBUTES,
    }
  }
}

// Y-down: row 0 of the texture sits at y = 0
fn build_vertices(width: f32, height: f32) -> [Vertex; 4]
{
  [
    [0.0, 0.0, 0.0, 0.0],      // 0 top-left
    [width, 0.0, 1.0, 0.0],    // 1 top-right
    [0.0, height, 0.0, 1.0],   // 2 bottom-left
    [width, height, 1.0, 1.0], // 3 bottom-right
  ]
}
