use std::fs;

use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;

use slidenav::SlideSource;

/// Loads a slide image, applies its EXIF rotation and uploads it as a texture.
pub fn load_slide_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    slide: &SlideSource,
) -> Result<Texture2D> {
    let path = &slide.path;
    let file_bytes = fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))?;

    // raylib picks the decoder from the extension hint
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("Failed to load image data for {}: {}", path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Mirrored variants are left as is.
    match slide.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if matches!(slide.orientation, 3 | 6 | 8) {
        tracing::debug!(path = %path.display(), orientation = slide.orientation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", path.display(), e))?;

    Ok(texture)
}

/// Loads every slide, skipping the ones that fail. Keeps sources and
/// textures index-aligned.
pub fn load_deck_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    sources: Vec<SlideSource>,
) -> (Vec<SlideSource>, Vec<Texture2D>) {
    let mut loaded = Vec::with_capacity(sources.len());
    let mut textures = Vec::with_capacity(sources.len());

    for source in sources {
        match load_slide_texture(rl, thread, &source) {
            Ok(texture) => {
                loaded.push(source);
                textures.push(texture);
            }
            Err(e) => tracing::warn!("Skipping slide: {:#}", e),
        }
    }

    (loaded, textures)
}
