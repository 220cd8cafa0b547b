use glam::Vec2;

use crate::camera::{screen_to_world, Camera};
use crate::input::InputSampler;
use crate::settings::Settings;

//
// ──────────────────────────────────────────────────────────────
//   CameraControl
//
//   Runs once per tick, in a fixed order:
//     1. pan   (pan button held)
//     2. zoom  (scroll this tick, pivoting on the cursor)
//     3. reset (edge-triggered, animates back to identity)
//
//   While a reset animation runs, pan and zoom are ignored.
// ──────────────────────────────────────────────────────────────
//

pub struct CameraControl
{
  settings: Settings,
  resetting: bool,
}

impl CameraControl
{
  pub fn new(settings: Settings) -> Self
  {
    Self { settings, resetting: false }
  }

  pub fn settings(&self) -> &Settings
  {
    &self.settings
  }

  pub fn is_resetting(&self) -> bool
  {
    self.resetting
  }

  pub fn update(&mut self, input: &impl InputSampler, camera: &mut Camera)
  {
    if !self.resetting
    {
      self.apply_pan(input, camera);
      self.apply_zoom(input, camera);
    }

    if !self.resetting && input.key_pressed_this_tick(self.settings.reset_key)
    {
      log::debug!("camera reset started from {camera:?}");
      self.resetting = true;
    }

    if self.resetting
    {
      self.reset_step(camera);
    }
  }

  /// Drag the view by `screen_delta` pixels.
  pub fn pan(&self, camera: &mut Camera, screen_delta: Vec2)
  {
    // Dragging right moves the world left under the pivot
    camera.pan(screen_delta * (-1.0 / camera.scale));
  }

  /// Zoom by `wheel` scroll lines, keeping the world point under `cursor` fixed.
  pub fn zoom_at(&self, camera: &mut Camera, cursor: Vec2, wheel: f32)
  {
    let mut factor = 1.0 + self.settings.zoom_step * wheel.abs();
    if wheel < 0.0
    {
      factor = 1.0 / factor;
    }

    // Re-pivot on the cursor using the pre-zoom camera
    camera.target = screen_to_world(camera, cursor);
    camera.offset = cursor;

    camera.zoom(factor, self.settings.zoom_min, self.settings.zoom_max);
  }

  /// One tick of the reset animation. Returns true on the tick it lands.
  pub fn reset_step(&mut self, camera: &mut Camera) -> bool
  {
    let t = self.settings.reset_decay;

    camera.target = camera.target.lerp(Vec2::ZERO, t);
    camera.offset = camera.offset.lerp(Vec2::ZERO, t);
    camera.scale += (1.0 - camera.scale) * t;

    if !has_converged(&self.settings, camera)
    {
      return false;
    }

    *camera = Camera::new();
    self.resetting = false;
    log::debug!("camera reset finished");
    true
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Input handlers
// ──────────────────────────────────────────────────────────────
//

impl CameraControl
{
  fn apply_pan(&self, input: &impl InputSampler, camera: &mut Camera)
  {
    let held = self.settings.pan_buttons.iter().any(|&b| input.pointer_button_down(b));
    if !held
    {
      return;
    }

    let delta = input.pointer_position() - input.pointer_position_previous();
    if delta == Vec2::ZERO
    {
      return;
    }

    self.pan(camera, delta);
  }

  fn apply_zoom(&self, input: &impl InputSampler, camera: &mut Camera)
  {
    let scroll = input.scroll_delta();
    if scroll == Vec2::ZERO
    {
      return;
    }

    self.zoom_at(camera, input.pointer_position(), dominant_axis(scroll));
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Helpers
// ──────────────────────────────────────────────────────────────
//

/// Devices report spurious motion on the other axis; keep the larger one (ties → vertical).
fn dominant_axis(scroll: Vec2) -> f32
{
  if scroll.x.abs() > scroll.y.abs()
  {
    scroll.x
  }
  else
  {
    scroll.y
  }
}

fn has_converged(settings: &Settings, camera: &Camera) -> bool
{
  let pos_eps = settings.reset_position_epsilon;

  camera.target.abs().max_element() < pos_eps
    && camera.offset.abs().max_element() < pos_eps
    && (camera.scale - 1.0).abs() < settings.reset_scale_epsilon
}

#[cfg(test)]
mod tests
{
  use super::*;
  use crate::input::{InputState, Key, PointerButton};
  use approx::assert_abs_diff_eq;

  fn control() -> CameraControl
  {
    CameraControl::new(Settings::default())
  }

  #[test]
  fn dominant_axis_prefers_vertical_on_tie()
  {
    assert_eq!(dominant_axis(Vec2::new(1.0, -1.0)), -1.0);
    assert_eq!(dominant_axis(Vec2::new(-3.0, 0.5)), -3.0);
    assert_eq!(dominant_axis(Vec2::new(0.1, 2.0)), 2.0);
  }

  #[test]
  fn pan_scales_with_zoom()
  {
    let ctl = control();

    let mut cam = Camera::new();
    ctl.pan(&mut cam, Vec2::new(10.0, 0.0));
    assert_eq!(cam.target, Vec2::new(-10.0, 0.0));

    let mut cam = Camera { scale: 2.0, ..Camera::new() };
    ctl.pan(&mut cam, Vec2::new(10.0, 0.0));
    assert_eq!(cam.target, Vec2::new(-5.0, 0.0));
  }

  #[test]
  fn pan_needs_a_pan_button()
  {
    let mut ctl = control();
    let mut cam = Camera::new();
    let mut input = InputState::new();

    input.move_pointer(Vec2::new(100.0, 100.0));
    input.end_frame();
    input.move_pointer(Vec2::new(130.0, 100.0));
    ctl.update(&input, &mut cam);
    assert_eq!(cam.target, Vec2::ZERO);

    input.set_button(PointerButton::Middle, true);
    ctl.update(&input, &mut cam);
    assert_eq!(cam.target, Vec2::ZERO);

    input.set_button(PointerButton::Right, true);
    ctl.update(&input, &mut cam);
    assert_eq!(cam.target, Vec2::new(-30.0, 0.0));
  }

  #[test]
  fn zoom_out_inverts_factor()
  {
    let ctl = control();
    let mut cam = Camera { scale: 2.0, ..Camera::new() };

    ctl.zoom_at(&mut cam, Vec2::ZERO, -2.0);
    assert_abs_diff_eq!(cam.scale, 2.0 / 1.5, epsilon = 1e-6);
  }

  #[test]
  fn reset_clears_flag_on_landing_tick()
  {
    let mut ctl = control();
    let mut cam = Camera { target: Vec2::new(300.0, -40.0), offset: Vec2::new(12.0, 700.0), scale: 8.0 };
    let mut input = InputState::new();

    input.set_key(Key::R, true);
    ctl.update(&input, &mut cam);
    assert!(ctl.is_resetting());
    input.end_frame();

    let mut ticks = 1;
    while ctl.is_resetting()
    {
      ctl.update(&input, &mut cam);
      input.end_frame();
      ticks += 1;
      assert!(ticks < 60, "reset did not converge");
    }

    assert!(cam.is_identity());
  }

  #[test]
  fn reset_ignores_input_while_animating()
  {
    let mut ctl = control();
    let mut cam = Camera { target: Vec2::new(5000.0, 5000.0), ..Camera::new() };
    let mut input = InputState::new();

    input.set_key(Key::R, true);
    ctl.update(&input, &mut cam);
    input.end_frame();
    let target_after_first = cam.target;

    input.add_scroll(Vec2::new(0.0, 3.0));
    input.move_pointer(Vec2::new(50.0, 50.0));
    ctl.update(&input, &mut cam);

    assert_eq!(cam.offset, Vec2::ZERO);
    assert_eq!(cam.scale, 1.0);
    assert_abs_diff_eq!(cam.target.x, target_after_first.x * 0.5, epsilon = 1e-3);
  }

  #[test]
  fn reset_already_at_identity_lands_immediately()
  {
    let mut ctl = control();
    ctl.resetting = true;
    let mut cam = Camera::new();

    assert!(ctl.reset_step(&mut cam));
    assert!(!ctl.is_resetting());
  }
}
