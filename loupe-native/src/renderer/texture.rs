use image::imageops::{self, FilterType};
use image::RgbaImage;
use wgpu::util::{DeviceExt, TextureDataOrder};
use wgpu::*;

use crate::capture::Capture;

//
// ──────────────────────────────────────────────────────────────
//   CaptureTexture — the static snapshot, uploaded once
// ──────────────────────────────────────────────────────────────
//

pub struct CaptureTexture
{
  pub view: TextureView,
  pub sampler: Sampler,
}

impl CaptureTexture
{
  pub fn create(device: &Device, queue: &Queue, capture: &Capture, smooth: bool) -> Self
  {
    let (levels, data) = build_mip_chain(capture);

    let texture = device.create_texture_with_data(
      queue,
      &TextureDescriptor {
        label: Some("Capture Texture"),
        size: Extent3d { width: capture.width, height: capture.height, depth_or_array_layers: 1 },
        mip_level_count: levels,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::Rgba8UnormSrgb,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
      },
      TextureDataOrder::LayerMajor,
      &data,
    );

    let view = texture.create_view(&TextureViewDescriptor::default());

    // Nearest keeps individual pixels crisp when magnified
    let filter = if smooth { FilterMode::Linear } else { FilterMode::Nearest };

    let sampler = device.create_sampler(&SamplerDescriptor {
      label: Some("Capture Sampler"),
      address_mode_u: AddressMode::ClampToEdge,
      address_mode_v: AddressMode::ClampToEdge,
      mag_filter: filter,
      // Zoomed out below 1.0 the mips stop the full-resolution capture from shimmering
      min_filter: FilterMode::Linear,
      ..Default::default()
    });

    Self { view, sampler }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Mip chain, built on the CPU once at startup
// ──────────────────────────────────────────────────────────────
//

fn mip_level_count(width: u32, height: u32) -> u32
{
  32 - width.max(height).max(1).leading_zeros()
}

/// Every level, largest first, packed back to back the way wgpu expects for one layer.
fn build_mip_chain(capture: &Capture) -> (u32, Vec<u8>)
{
  let mut data = capture.rgba.clone();

  let Some(base) = RgbaImage::from_raw(capture.width, capture.height, capture.rgba.clone())
  else
  {
    log::warn!("Capture buffer does not match its size; uploading without mipmaps");
    return (1, data);
  };

  let levels = mip_level_count(capture.width, capture.height);

  let mut previous = base;
  for level in 1..levels
  {
    let width = (capture.width >> level).max(1);
    let height = (capture.height >> level).max(1);

    let next = imageops::resize(&previous, width, height, FilterType::Triangle);
    data.extend_from_slice(next.as_raw());
    previous = next;
  }

  (levels, data)
}
