use anyhow::{Context, Result};
use std::path::Path;

/// A texture uploaded to the GPU, ready to bind
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

/// The two textures the morph scene crossfades between
pub struct TexturePair {
    pub first: GpuTexture,
    pub second: GpuTexture,
}

/// Decode an image file to RGBA8. Split out from the upload so the
/// decode path is testable without a GPU.
pub fn decode_rgba(path: impl AsRef<Path>) -> Result<image::RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).with_context(|| format!("failed to load texture {:?}", path))?;
    Ok(img.to_rgba8())
}

pub fn load_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: impl AsRef<Path>,
) -> Result<GpuTexture> {
    let path = path.as_ref();
    let pixels = decode_rgba(path)?;
    let (width, height) = pixels.dimensions();

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: path.to_str(),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    log::debug!("loaded texture {:?} ({}x{})", path, width, height);

    Ok(GpuTexture {
        texture,
        view,
        width,
        height,
    })
}

/// Load the crossfade pair; either file failing fails the pair
pub fn load_texture_pair(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
) -> Result<TexturePair> {
    Ok(TexturePair {
        first: load_texture(device, queue, first)?,
        second: load_texture(device, queue, second)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_the_path() {
        let err = decode_rgba("assets/definitely-not-here.png").unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("definitely-not-here.png"), "message: {}", msg);
    }

    #[test]
    fn decodes_a_round_tripped_png() {
        let mut path = std::env::temp_dir();
        path.push("vitrine-texture-test.png");

        let mut img = image::RgbaImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 255, 255]));
        img.save(&path).unwrap();

        let decoded = decode_rgba(&path).unwrap();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgba([255, 0, 255, 255]));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn directory_is_not_a_texture() {
        assert!(decode_rgba(std::env::temp_dir()).is_err());
    }
}
