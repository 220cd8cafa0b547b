use glam::{Mat4, Vec2, Vec3};

//
// ──────────────────────────────────────────────────────────────
//   Camera (2D, Y-down screen space)
//
//   Coordinate system:
//     X → right
//     Y → down (matches screen pixels and texture rows)
//
//   `target` is the world point drawn at the screen pixel
//   `offset`; `scale` magnifies the world about that pivot.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera
{
  pub target: Vec2,
  pub offset: Vec2,
  pub scale: f32,
}

//
// ──────────────────────────────────────────────────────────────
//   Constants
// ──────────────────────────────────────────────────────────────
//

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 64.0;

const NEAR: f32 = -1.0;
const FAR: f32 = 1.0;

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Camera
{
  pub fn new() -> Self
  {
    Self { target: Vec2::ZERO, offset: Vec2::ZERO, scale: 1.0 }
  }

  /// True when the camera shows the world 1:1 with no pan.
  pub fn is_identity(&self) -> bool
  {
    self.target == Vec2::ZERO && self.offset == Vec2::ZERO && self.scale == 1.0
  }

  /// Multiply the scale, keeping it inside `[min, max]`.
  pub fn zoom(&mut self, factor: f32, min: f32, max: f32)
  {
    self.scale = (self.scale * factor).clamp(min, max);
  }

  /// Move the world point under the pivot. `delta` is in world units.
  pub fn pan(&mut self, delta: Vec2)
  {
    self.target += delta;
  }

  /// World → screen transform.
  pub fn view_matrix(&self) -> Mat4
  {
    build_view_matrix(self)
  }
}

impl Default for Camera
{
  fn default() -> Self
  {
    Self::new()
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Matrix builders
// ──────────────────────────────────────────────────────────────
//

// Composition order matters: the offset is the outermost translation so it
// stays a fixed screen pivot, and the target translation is applied first.
fn build_view_matrix(cam: &Camera) -> Mat4
{
  let mut view = Mat4::IDENTITY;
  view *= Mat4::from_translation(cam.offset.extend(0.0));
  view *= Mat4::from_scale(Vec3::new(cam.scale, cam.scale, 1.0));
  view *= Mat4::from_translation((-cam.target).extend(0.0));
  view
}

/// Pixel-space orthographic projection with the origin at the top-left.
pub fn build_projection_matrix(width: f32, height: f32) -> Mat4
{
  Mat4::orthographic_rh(0.0, width, height, 0.0, NEAR, FAR)
}
