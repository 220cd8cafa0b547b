mod core;
mod quad;
mod texture;

pub use self::core::Renderer;
