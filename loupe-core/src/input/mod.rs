pub mod camera_control;

use glam::Vec2;
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────────
//   Buttons and keys the magnifier cares about
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton
{
  Left,
  Middle,
  Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key
{
  Escape,
  R,
  Digit0,
  Home,
  Space,
}

const BUTTON_COUNT: usize = 3;
const KEY_COUNT: usize = 5;

//
// ──────────────────────────────────────────────────────────────
//   Sampler contract (one frame tick)
// ──────────────────────────────────────────────────────────────
//

pub trait InputSampler
{
  /// Current pointer position in screen pixels.
  fn pointer_position(&self) -> Vec2;

  /// Pointer position at the end of the previous tick.
  fn pointer_position_previous(&self) -> Vec2;

  fn pointer_button_down(&self, button: PointerButton) -> bool;

  /// Scroll accumulated this tick, in lines. Zero when nothing scrolled.
  fn scroll_delta(&self) -> Vec2;

  /// True only on the tick the key went down.
  fn key_pressed_this_tick(&self, key: Key) -> bool;
}

//
// ──────────────────────────────────────────────────────────────
//   InputState
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct InputState
{
  pointer: Vec2,
  pointer_previous: Vec2,
  pointer_seen: bool,

  buttons: [bool; BUTTON_COUNT],

  scroll: Vec2,

  keys_down: [bool; KEY_COUNT],
  // Set by any press this tick, so a tap shorter than a frame still registers
  keys_struck: [bool; KEY_COUNT],
}

impl InputState
{
  pub fn new() -> Self
  {
    Self::default()
  }

  pub fn move_pointer(&mut self, position: Vec2)
  {
    // No previous position before the first move; avoid a jump from the origin
    if !self.pointer_seen
    {
      self.pointer_previous = position;
      self.pointer_seen = true;
    }

    self.pointer = position;
  }

  pub fn set_button(&mut self, button: PointerButton, down: bool)
  {
    self.buttons[button_index(button)] = down;
  }

  pub fn add_scroll(&mut self, delta: Vec2)
  {
    self.scroll += delta;
  }

  pub fn set_key(&mut self, key: Key, down: bool)
  {
    let i = key_index(key);

    if down && !self.keys_down[i]
    {
      self.keys_struck[i] = true;
    }

    self.keys_down[i] = down;
  }

  pub fn key_down(&self, key: Key) -> bool
  {
    self.keys_down[key_index(key)]
  }

  /// Close the tick: roll the pointer, clear scroll and key edges.
  pub fn end_frame(&mut self)
  {
    self.pointer_previous = self.pointer;
    self.scroll = Vec2::ZERO;
    self.keys_struck = [false; KEY_COUNT];
  }
}

impl InputSampler for InputState
{
  fn pointer_position(&self) -> Vec2
  {
    self.pointer
  }

  fn pointer_position_previous(&self) -> Vec2
  {
    self.pointer_previous
  }

  fn pointer_button_down(&self, button: PointerButton) -> bool
  {
    self.buttons[button_index(button)]
  }

  fn scroll_delta(&self) -> Vec2
  {
    self.scroll
  }

  fn key_pressed_this_tick(&self, key: Key) -> bool
  {
    // set_key only marks up → down transitions, so OS repeats never count
    self.keys_struck[key_index(key)]
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Helpers
// ──────────────────────────────────────────────────────────────
//

fn button_index(button: PointerButton) -> usize
{
  match button
  {
    PointerButton::Left => 0,
    PointerButton::Middle => 1,
    PointerButton::Right => 2,
  }
}

fn key_index(key: Key) -> usize
{
  match key
  {
    Key::Escape => 0,
    Key::R => 1,
    Key::Digit0 => 2,
    Key::Home => 3,
    Key::Space => 4,
  }
}
