use glam::Vec2;
use loupe_core::{InputState, Key, PointerButton};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

// Touchpads report pixels; one wheel notch is roughly this many
const PIXELS_PER_LINE: f32 = 50.0;

/// Feed one winit window event into the tick's input snapshot.
pub fn handle_event(input: &mut InputState, event: &WindowEvent)
{
  match event
  {
    WindowEvent::CursorMoved { position, .. } =>
    {
      input.move_pointer(Vec2::new(position.x as f32, position.y as f32));
    }

    WindowEvent::MouseInput { state, button, .. } =>
    {
      if let Some(button) = map_button(*button)
      {
        input.set_button(button, *state == ElementState::Pressed);
      }
    }

    WindowEvent::MouseWheel { delta, .. } =>
    {
      input.add_scroll(scroll_lines(*delta));
    }

    WindowEvent::KeyboardInput { event, .. } =>
    {
      if let Some(key) = map_key(event.physical_key)
      {
        input.set_key(key, event.state == ElementState::Pressed);
      }
    }

    // Buttons held while focus leaves would otherwise stay stuck down
    WindowEvent::Focused(false) =>
    {
      input.set_button(PointerButton::Left, false);
      input.set_button(PointerButton::Middle, false);
      input.set_button(PointerButton::Right, false);
    }

    _ =>
    {}
  }
}

//
// ──────────────────────────────────────────────────────────────
//   winit → loupe mapping
// ──────────────────────────────────────────────────────────────
//

fn map_button(button: MouseButton) -> Option<PointerButton>
{
  match button
  {
    MouseButton::Left => Some(PointerButton::Left),
    MouseButton::Middle => Some(PointerButton::Middle),
    MouseButton::Right => Some(PointerButton::Right),
    _ => None,
  }
}

fn map_key(key: PhysicalKey) -> Option<Key>
{
  match key
  {
    PhysicalKey::Code(KeyCode::Escape) => Some(Key::Escape),
    PhysicalKey::Code(KeyCode::KeyR) => Some(Key::R),
    PhysicalKey::Code(KeyCode::Digit0) => Some(Key::Digit0),
    PhysicalKey::Code(KeyCode::Home) => Some(Key::Home),
    PhysicalKey::Code(KeyCode::Space) => Some(Key::Space),
    _ => None,
  }
}

fn scroll_lines(delta: MouseScrollDelta) -> Vec2
{
  match delta
  {
    MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y),
    MouseScrollDelta::PixelDelta(p) => Vec2::new(p.x as f32, p.y as f32) / PIXELS_PER_LINE,
  }
}
