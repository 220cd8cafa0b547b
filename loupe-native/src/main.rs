mod app;
mod capture;
mod cli;
mod config;
mod input;
mod renderer;

use anyhow::Context;
use clap::Parser;

use crate::capture::Capture;

fn main() -> anyhow::Result<()>
{
  // wgpu validation errors and warnings go to the console.
  // RUST_LOG overrides the default, e.g. RUST_LOG=wgpu=debug for more GPU output.
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info,wgpu_hal=off,naga=warn"),
  )
  .init();

  let args = cli::Args::parse();
  let settings = config::load_settings(args.config.as_deref())?;

  // Capture before any window exists, or the magnifier would capture itself
  let capture = match &args.image
  {
    Some(path) => Capture::from_file(path)?,
    None => Capture::screen().context("Could not capture the screen (try --image <PATH>)")?,
  };

  app::run(capture, settings, args.windowed)
}
