//! Category image lookup.
//!
//! A category label has an image iff a file named exactly `<label>.png`
//! exists in the same directory as the workbook. Absence is normal and
//! means "render without an image". Present files are decoded into RGBA
//! pixel buffers ready for egui texture creation.

use std::path::{Path, PathBuf};

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Exact-name presence check: `<label>.png` in `dir`, case preserved.
pub fn category_image_path(dir: &Path, label: &str) -> Option<PathBuf> {
    let path = dir.join(format!("{}.png", label));
    path.is_file().then_some(path)
}

/// Load and decode the category's image, if it exists.
pub fn load_category_image(dir: &Path, label: &str) -> Option<ImageData> {
    let path = category_image_path(dir, label)?;
    let bytes = std::fs::read(&path).ok()?;
    let decoded = decode(&bytes);
    if decoded.is_none() {
        log::debug!("{}: not a decodable image", path.display());
    }
    decoded
}

fn decode(bytes: &[u8]) -> Option<ImageData> {
    let img = image::load_from_memory(bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    // Cap to thumbnail size (buttons are narrow)
    let (w, h, pixels) = if w > 512 {
        let ratio = 512.0 / w as f32;
        let new_h = (h as f32 * ratio) as u32;
        let resized =
            image::imageops::resize(&rgba, 512, new_h, image::imageops::FilterType::Triangle);
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Some(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_match_only() {
        let dir = std::env::temp_dir().join("omakase_assets_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Korean.png"), b"not really a png").unwrap();

        assert!(category_image_path(&dir, "Korean").is_some());
        assert!(category_image_path(&dir, "korean").is_none());
        assert!(category_image_path(&dir, "Japanese").is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn undecodable_bytes_yield_none() {
        assert!(decode(b"definitely not an image").is_none());
    }
}
