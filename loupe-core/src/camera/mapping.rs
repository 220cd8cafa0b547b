use glam::{Vec2, Vec4};

use super::planar::Camera;

//
// ──────────────────────────────────────────────────────────────
//   Screen ↔ world mapping
//
//   Both directions go through the full 4×4 view matrix. Zoom
//   moves `offset` and `target` together, so only the complete
//   affine inverse stays consistent over many interactions.
// ──────────────────────────────────────────────────────────────
//

/// Screen pixel → world point under it.
///
/// The scale clamp keeps the view matrix invertible, so this never fails.
pub fn screen_to_world(camera: &Camera, screen: Vec2) -> Vec2
{
  let inverse = camera.view_matrix().inverse();
  let world = inverse * Vec4::new(screen.x, screen.y, 0.0, 1.0);
  Vec2::new(world.x, world.y)
}

/// World point → screen pixel it is drawn at.
pub fn world_to_screen(camera: &Camera, world: Vec2) -> Vec2
{
  let screen = camera.view_matrix() * Vec4::new(world.x, world.y, 0.0, 1.0);
  Vec2::new(screen.x, screen.y)
}
