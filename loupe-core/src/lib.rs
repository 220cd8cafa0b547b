//! Core of the loupe screen magnifier.
//!
//! Everything here is free of windowing and GPU device code: the 2D camera,
//! the screen/world mapping, the per-tick input snapshot and the controller
//! that turns input into camera motion.

pub mod camera;
pub mod input;
pub mod settings;

pub use camera::{Camera, CameraUniform};
pub use input::camera_control::CameraControl;
pub use input::{InputSampler, InputState, Key, PointerButton};
pub use settings::{Settings, SettingsError};
