//! Per-category texture cache.
//!
//! Decoded category images are uploaded to egui textures once and reused
//! across frames. Labels without an image cache the miss so the disk is
//! probed only once per label.

use std::collections::HashMap;
use std::path::Path;

use eframe::egui;

use omakase::assets;

pub struct CategoryImages {
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl CategoryImages {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Texture for a category label, loading and uploading on first use.
    /// `None` means the label has no `<label>.png` beside the workbook.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        dir: &Path,
        label: &str,
    ) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(label) {
            return cached.clone();
        }

        let tex = assets::load_category_image(dir, label).map(|data| {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [data.width as usize, data.height as usize],
                &data.rgba,
            );
            ctx.load_texture(format!("cat_{}", label), image, egui::TextureOptions::LINEAR)
        });

        self.textures.insert(label.to_string(), tex.clone());
        tex
    }
}
