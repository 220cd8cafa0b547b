use clap::Parser;
use std::path::PathBuf;

/// Capture the screen once, then pan and zoom over the still image.
///
/// Drag with the left or right button to pan, scroll to zoom at the cursor,
/// press R to animate back to 1:1 and Escape to quit.
#[derive(Parser, Debug)]
#[command(name = "loupe", author, version, about, long_about = None)]
pub struct Args
{
  /// Magnify this image file instead of capturing the screen
  #[arg(short, long)]
  pub image: Option<PathBuf>,

  /// JSON settings file (zoom limits, reset speed, key bindings)
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// Open a normal window instead of borderless fullscreen
  #[arg(long)]
  pub windowed: bool,
}
