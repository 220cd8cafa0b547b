use std::path::{Path, PathBuf};

//
// ──────────────────────────────────────────────────────────────
//   Capture — one packed RGBA8 frame, row-major, top row first
// ──────────────────────────────────────────────────────────────
//

pub struct Capture
{
  pub width: u32,
  pub height: u32,
  pub rgba: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError
{
  #[error("capture has zero size ({width}x{height})")]
  Empty { width: u32, height: u32 },

  #[error("expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
  SizeMismatch { width: u32, height: u32, expected: usize, actual: usize },

  #[error("screen capture failed: {0}")]
  Screen(String),

  #[error("could not load image {}", .path.display())]
  Image
  {
    path: PathBuf,
    #[source]
    source: image::ImageError,
  },
}

impl Capture
{
  pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, CaptureError>
  {
    if width == 0 || height == 0
    {
      return Err(CaptureError::Empty { width, height });
    }

    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected
    {
      return Err(CaptureError::SizeMismatch { width, height, expected, actual: rgba.len() });
    }

    Ok(Self { width, height, rgba })
  }

  /// Grab the monitor containing the desktop origin.
  pub fn screen() -> Result<Self, CaptureError>
  {
    let monitor = xcap::Monitor::from_point(0, 0).map_err(|e| CaptureError::Screen(e.to_string()))?;
    let image = monitor.capture_image().map_err(|e| CaptureError::Screen(e.to_string()))?;

    let capture = Self::new(image.width(), image.height(), image.into_raw())?;

    log::info!("Captured the screen");
    log::info!("Width: {}", capture.width);
    log::info!("Height: {}", capture.height);

    Ok(capture)
  }

  /// Load a still image from disk in place of a live capture.
  pub fn from_file(path: &Path) -> Result<Self, CaptureError>
  {
    let image = image::open(path)
      .map_err(|source| CaptureError::Image { path: path.to_path_buf(), source })?
      .into_rgba8();

    let capture = Self::new(image.width(), image.height(), image.into_raw())?;
    log::info!("Loaded {} ({}x{})", path.display(), capture.width, capture.height);

    Ok(capture)
  }
}
