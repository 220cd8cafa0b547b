mod mapping;
mod planar;
mod uniform;

pub use mapping::{screen_to_world, world_to_screen};
pub use planar::{build_projection_matrix, Camera, ZOOM_MAX, ZOOM_MIN};
pub use uniform::CameraUniform;
