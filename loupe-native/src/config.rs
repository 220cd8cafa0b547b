use std::fs;
use std::path::Path;

use anyhow::Context;
use loupe_core::Settings;

/// Read settings from a JSON file, or fall back to the defaults.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings>
{
  let Some(path) = path
  else
  {
    return Ok(Settings::default());
  };

  let text =
    fs::read_to_string(path).with_context(|| format!("reading settings from {}", path.display()))?;

  let settings: Settings =
    serde_json::from_str(&text).with_context(|| format!("parsing settings in {}", path.display()))?;

  let settings =
    settings.validated().with_context(|| format!("invalid settings in {}", path.display()))?;

  log::info!("Loaded settings from {}", path.display());
  Ok(settings)
}
