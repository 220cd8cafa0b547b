use approx::assert_abs_diff_eq;
use glam::{Mat4, Vec2};
use loupe_core::camera::{screen_to_world, world_to_screen, ZOOM_MAX, ZOOM_MIN};
use loupe_core::{Camera, CameraControl, InputSampler, InputState, Key, PointerButton, Settings};

const TOLERANCE: f32 = 1e-4;

fn assert_vec_close(actual: Vec2, expected: Vec2, epsilon: f32)
{
  assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
  assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
}

/// Input that only scrolls at a fixed cursor, for one tick.
fn scroll_at(cursor: Vec2, wheel: Vec2) -> InputState
{
  let mut input = InputState::new();
  input.move_pointer(cursor);
  input.add_scroll(wheel);
  input
}

#[test]
fn identity_camera_yields_identity_view()
{
  assert_eq!(Camera::new().view_matrix(), Mat4::IDENTITY);
}

#[test]
fn screen_world_round_trip()
{
  let cameras = [
    Camera { target: Vec2::new(0.0, 0.0), offset: Vec2::new(0.0, 0.0), scale: ZOOM_MIN },
    Camera { target: Vec2::new(812.5, 33.0), offset: Vec2::new(40.0, 900.0), scale: 3.0 },
    Camera { target: Vec2::new(-64.0, 2000.0), offset: Vec2::new(1000.0, 10.0), scale: 17.5 },
    Camera { target: Vec2::new(960.0, 540.0), offset: Vec2::new(960.0, 540.0), scale: ZOOM_MAX },
  ];
  let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(123.0, 456.0), Vec2::new(960.0, 540.0)];

  for cam in cameras
  {
    for p in points
    {
      // f32 spacing grows with magnitude, so the tolerance does too
      let magnitude = p.abs().max_element().max(cam.target.abs().max_element()).max(cam.offset.abs().max_element());
      let epsilon = TOLERANCE * (1.0 + magnitude);
      assert_vec_close(screen_to_world(&cam, world_to_screen(&cam, p)), p, epsilon);
    }
  }
}

#[test]
fn zoom_keeps_world_point_under_cursor()
{
  let mut ctl = CameraControl::new(Settings::default());
  let mut cam = Camera { target: Vec2::new(250.0, 100.0), offset: Vec2::new(700.0, 400.0), scale: 3.0 };
  let cursor = Vec2::new(1300.0, 222.0);

  for wheel in [1.0, 2.0, -1.0, -3.0, 1.0]
  {
    let before = screen_to_world(&cam, cursor);
    ctl.update(&scroll_at(cursor, Vec2::new(0.0, wheel)), &mut cam);
    let after = screen_to_world(&cam, cursor);

    assert_vec_close(after, before, 1e-2);
  }
}

#[test]
fn zoom_is_clamped_in_both_directions()
{
  let mut ctl = CameraControl::new(Settings::default());
  let mut cam = Camera::new();
  let cursor = Vec2::new(300.0, 300.0);

  for _ in 0..100
  {
    ctl.update(&scroll_at(cursor, Vec2::new(0.0, 5.0)), &mut cam);
    assert!(cam.scale <= ZOOM_MAX);
  }
  assert_eq!(cam.scale, ZOOM_MAX);

  for _ in 0..100
  {
    ctl.update(&scroll_at(cursor, Vec2::new(0.0, -5.0)), &mut cam);
    assert!(cam.scale >= ZOOM_MIN);
  }
  assert_eq!(cam.scale, ZOOM_MIN);
}

#[test]
fn reset_converges_from_max_zoom()
{
  let mut ctl = CameraControl::new(Settings::default());
  let mut cam = Camera { target: Vec2::new(1919.0, -1079.0), offset: Vec2::new(1919.0, 1079.0), scale: ZOOM_MAX };
  let mut input = InputState::new();
  input.set_key(Key::R, true);

  let mut ticks = 0;
  loop
  {
    ctl.update(&input, &mut cam);
    input.end_frame();
    ticks += 1;

    if !ctl.is_resetting()
    {
      break;
    }

    // Never lands early at an inexact value
    assert!(!cam.is_identity());
    assert!(ticks <= 60, "reset still running after {ticks} ticks");
  }

  assert_eq!(cam.target, Vec2::ZERO);
  assert_eq!(cam.offset, Vec2::ZERO);
  assert_eq!(cam.scale, 1.0);
}

#[test]
fn reset_key_held_does_not_rearm()
{
  let mut ctl = CameraControl::new(Settings::default());
  let mut cam = Camera { scale: 1.5, ..Camera::new() };
  let mut input = InputState::new();

  input.set_key(Key::R, true);
  loop
  {
    ctl.update(&input, &mut cam);
    input.end_frame();
    if !ctl.is_resetting()
    {
      break;
    }
  }

  // Key still down after landing: no new reset, zoom works again
  assert!(!input.key_pressed_this_tick(Key::R));
  input.move_pointer(Vec2::new(10.0, 10.0));
  input.add_scroll(Vec2::new(0.0, 1.0));
  ctl.update(&input, &mut cam);

  assert!(!ctl.is_resetting());
  assert_abs_diff_eq!(cam.scale, 1.25, epsilon = 1e-6);
}

#[test]
fn drag_moves_target_against_pointer()
{
  let mut ctl = CameraControl::new(Settings::default());

  for (scale, expected) in [(1.0, -10.0), (2.0, -5.0)]
  {
    let mut cam = Camera { scale, ..Camera::new() };
    let mut input = InputState::new();
    input.move_pointer(Vec2::new(500.0, 500.0));
    input.set_button(PointerButton::Left, true);
    input.end_frame();

    input.move_pointer(Vec2::new(510.0, 500.0));
    ctl.update(&input, &mut cam);

    assert_eq!(cam.target, Vec2::new(expected, 0.0));
  }
}

#[test]
fn pan_and_zoom_apply_in_same_tick()
{
  let mut ctl = CameraControl::new(Settings::default());
  let mut cam = Camera::new();
  let mut input = InputState::new();

  input.move_pointer(Vec2::new(100.0, 100.0));
  input.set_button(PointerButton::Left, true);
  input.end_frame();

  input.move_pointer(Vec2::new(120.0, 100.0));
  input.add_scroll(Vec2::new(0.0, 1.0));
  ctl.update(&input, &mut cam);

  // Pan first (target -20, 0), then the cursor re-pivots the camera
  assert_eq!(cam.offset, Vec2::new(120.0, 100.0));
  assert_vec_close(cam.target, Vec2::new(100.0, 100.0), TOLERANCE);
  assert_abs_diff_eq!(cam.scale, 1.25, epsilon = 1e-6);
}

#[test]
fn scroll_at_screen_centre_from_identity()
{
  let mut ctl = CameraControl::new(Settings::default());
  let mut cam = Camera::new();
  let centre = Vec2::new(960.0, 540.0);

  ctl.update(&scroll_at(centre, Vec2::new(0.0, 1.0)), &mut cam);

  assert_abs_diff_eq!(cam.scale, 1.25, epsilon = 1e-6);
  assert_eq!(cam.offset, centre);
  assert_vec_close(cam.target, centre, TOLERANCE);
}

#[test]
fn horizontal_noise_is_ignored_when_vertical_dominates()
{
  let mut ctl = CameraControl::new(Settings::default());
  let mut cam = Camera::new();

  ctl.update(&scroll_at(Vec2::new(10.0, 10.0), Vec2::new(0.4, -1.0)), &mut cam);

  assert_abs_diff_eq!(cam.scale, 0.8, epsilon = 1e-6);
}
