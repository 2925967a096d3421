//! `RecommenderApp` — the top-level egui application state.
//!
//! This module declares the `RecommenderApp` struct and its `eframe::App`
//! impl. The screen-drawing methods live in the sibling sub-modules:
//!
//! - `content` — the four screens (home, category pickers, result)
//! - `images`  — per-category texture cache

pub mod content;
pub mod images;

use std::path::{Path, PathBuf};

use eframe::egui;
use rand::rngs::StdRng;

use omakase::catalog::{self, Catalog};
use omakase::session::Session;

pub struct RecommenderApp {
    pub session: Option<Session<'static, StdRng>>,
    pub catalog: Option<&'static Catalog>,
    /// Set when the workbook could not be opened; fatal for the session.
    pub load_error: Option<String>,
    /// Directory holding the workbook and the `<label>.png` assets.
    pub asset_dir: PathBuf,
    pub images: images::CategoryImages,
}

impl RecommenderApp {
    pub fn new(source: &Path) -> Self {
        let asset_dir = source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        match catalog::shared(source) {
            Ok(catalog) => Self {
                session: Some(Session::new(catalog)),
                catalog: Some(catalog),
                load_error: None,
                asset_dir,
                images: images::CategoryImages::new(),
            },
            Err(e) => {
                log::error!("{}", e);
                Self {
                    session: None,
                    catalog: None,
                    load_error: Some(e.to_string()),
                    asset_dir,
                    images: images::CategoryImages::new(),
                }
            }
        }
    }
}

impl eframe::App for RecommenderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw(ui, &ctx_clone);
        });
    }
}
