use super::planar::{build_projection_matrix, Camera};

//
// ──────────────────────────────────────────────────────────────
//   Camera Uniform (GPU side)
//
//   WGSL layout (quad.wgsl):
//     projection : mat4x4<f32>   → 64 bytes
//     view       : mat4x4<f32>   → 64 bytes
//   Total: 128 bytes, column-major
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform
{
  pub projection: [[f32; 4]; 4], // 64 bytes
  pub view: [[f32; 4]; 4],       // 64 bytes
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<CameraUniform>() == 128);

impl CameraUniform
{
  pub fn from_camera(camera: &Camera, viewport_width: f32, viewport_height: f32) -> Self
  {
    let projection = build_projection_matrix(viewport_width, viewport_height);
    Self { projection: projection.to_cols_array_2d(), view: camera.view_matrix().to_cols_array_2d() }
  }
}
