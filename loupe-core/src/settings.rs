use serde::{Deserialize, Serialize};

use crate::camera::{ZOOM_MAX, ZOOM_MIN};
use crate::input::{Key, PointerButton};

//
// ──────────────────────────────────────────────────────────────
//   Tunables (loaded from an optional JSON file)
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings
{
  pub zoom_min: f32,
  pub zoom_max: f32,
  /// Scale change per scroll line: `factor = 1 + zoom_step * |wheel|`.
  pub zoom_step: f32,

  /// Fraction of the remaining distance covered per reset tick.
  pub reset_decay: f32,
  pub reset_position_epsilon: f32,
  pub reset_scale_epsilon: f32,

  pub pan_buttons: Vec<PointerButton>,
  pub reset_key: Key,
  pub quit_key: Key,

  pub smooth_filtering: bool,
  pub clear_color: [f64; 3],
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SettingsError
{
  #[error("zoom_min must be positive, got {0}")]
  ZoomMinNotPositive(f32),

  #[error("zoom_min ({min}) is greater than zoom_max ({max})")]
  ZoomRangeInverted { min: f32, max: f32 },

  #[error("zoom range [{min}, {max}] must include 1.0, the reset scale")]
  ZoomRangeExcludesIdentity { min: f32, max: f32 },

  #[error("zoom_step must be positive, got {0}")]
  ZoomStepNotPositive(f32),

  #[error("reset_decay must be in (0, 1], got {0}")]
  ResetDecayOutOfRange(f32),

  #[error("reset epsilons must be positive")]
  ResetEpsilonNotPositive,

  #[error("at least one pan button is required")]
  NoPanButtons,
}

impl Default for Settings
{
  fn default() -> Self
  {
    Self {
      zoom_min: ZOOM_MIN,
      zoom_max: ZOOM_MAX,
      zoom_step: 0.25,

      reset_decay: 0.5,
      reset_position_epsilon: 0.5,
      reset_scale_epsilon: 0.001,

      pan_buttons: vec![PointerButton::Left, PointerButton::Right],
      reset_key: Key::R,
      quit_key: Key::Escape,

      smooth_filtering: false,
      clear_color: [0.1, 0.1, 0.1],
    }
  }
}

impl Settings
{
  /// Reject values that would break the camera invariants.
  pub fn validated(self) -> Result<Self, SettingsError>
  {
    if !(self.zoom_min > 0.0)
    {
      return Err(SettingsError::ZoomMinNotPositive(self.zoom_min));
    }

    if self.zoom_min > self.zoom_max
    {
      return Err(SettingsError::ZoomRangeInverted { min: self.zoom_min, max: self.zoom_max });
    }

    // The camera starts at, and resets to, scale 1.0
    if self.zoom_min > 1.0 || self.zoom_max < 1.0
    {
      return Err(SettingsError::ZoomRangeExcludesIdentity {
        min: self.zoom_min,
        max: self.zoom_max,
      });
    }

    if !(self.zoom_step > 0.0)
    {
      return Err(SettingsError::ZoomStepNotPositive(self.zoom_step));
    }

    if !(self.reset_decay > 0.0 && self.reset_decay <= 1.0)
    {
      return Err(SettingsError::ResetDecayOutOfRange(self.reset_decay));
    }

    if !(self.reset_position_epsilon > 0.0 && self.reset_scale_epsilon > 0.0)
    {
      return Err(SettingsError::ResetEpsilonNotPositive);
    }

    if self.pan_buttons.is_empty()
    {
      return Err(SettingsError::NoPanButtons);
    }

    Ok(self)
  }
}
