//! Screen rendering for `RecommenderApp`.
//!
//! Draws whatever `Session::payload` describes: the home screen, the two
//! category pickers (3-wide button grid, category images when present) and
//! the result screen with its re-roll and start-over actions.

use eframe::egui;

use omakase::catalog::Entry;
use omakase::session::{Page, PagePayload};

use super::RecommenderApp;

const WARN_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 160, 0);
const CAPTION_COLOR: egui::Color32 = egui::Color32::GRAY;

impl RecommenderApp {
    pub fn draw(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if let Some(ref err) = self.load_error {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(egui::Color32::RED, err.as_str());
            });
            return;
        }

        let Some(catalog) = self.catalog else { return };
        if catalog.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(WARN_COLOR, "The workbook has no valid restaurant rows.");
            });
            return;
        }

        let payload = match self.session {
            Some(ref session) => session.payload(),
            None => return,
        };

        match payload {
            PagePayload::Home => self.draw_home(ui),
            PagePayload::Category1 { choices } => self.draw_category1(ui, ctx, &choices),
            PagePayload::Category2 { category1, choices } => {
                self.draw_category2(ui, category1.as_deref(), &choices)
            }
            PagePayload::Result {
                category1,
                category2,
                pick,
            } => self.draw_result(ui, category1.as_deref(), category2.as_deref(), pick.as_ref()),
        }
    }

    fn draw_home(&mut self, ui: &mut egui::Ui) {
        let mut start = false;

        ui.add_space(80.0);
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("OMAKASE").size(30.0).strong());
            ui.add_space(16.0);
            if ui
                .add_sized([180.0, 36.0], egui::Button::new("S T A R T"))
                .clicked()
            {
                start = true;
            }
            ui.add_space(8.0);
            ui.colored_label(CAPTION_COLOR, "One button, one restaurant. Leave it to us.");
        });

        if start {
            if let Some(session) = self.session.as_mut() {
                session.start();
            }
        }
    }

    fn draw_category1(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, choices: &[String]) {
        let mut clicked: Option<String> = None;
        let mut back = false;

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(380.0);
            ui.heading("What are you craving?");
            ui.add_space(12.0);

            for chunk in choices.chunks(3) {
                ui.columns(3, |cols| {
                    for (j, label) in chunk.iter().enumerate() {
                        let col = &mut cols[j];
                        if let Some(tex) = self.images.texture(ctx, &self.asset_dir, label) {
                            col.add(egui::Image::new(&tex).max_width(col.available_width()));
                        }
                        if col
                            .add_sized([col.available_width(), 32.0], egui::Button::new(label.as_str()))
                            .clicked()
                        {
                            clicked = Some(label.clone());
                        }
                    }
                });
                ui.add_space(6.0);
            }

            ui.add_space(12.0);
            if ui.button("Back").clicked() {
                back = true;
            }
        });

        if let Some(session) = self.session.as_mut() {
            if let Some(label) = clicked {
                session.choose_category1(&label);
            } else if back {
                session.go_back(Page::Home);
            }
        }
    }

    fn draw_category2(&mut self, ui: &mut egui::Ui, category1: Option<&str>, choices: &[String]) {
        let mut clicked: Option<String> = None;
        let mut back = false;

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(380.0);
            ui.heading("Now narrow it down");
            ui.colored_label(CAPTION_COLOR, category1.unwrap_or(""));
            ui.add_space(12.0);

            if choices.is_empty() {
                ui.colored_label(WARN_COLOR, "No second-level categories here.");
            } else {
                for chunk in choices.chunks(3) {
                    ui.columns(3, |cols| {
                        for (j, label) in chunk.iter().enumerate() {
                            let col = &mut cols[j];
                            if col
                                .add_sized([col.available_width(), 32.0], egui::Button::new(label.as_str()))
                                .clicked()
                            {
                                clicked = Some(label.clone());
                            }
                        }
                    });
                    ui.add_space(6.0);
                }
            }

            ui.add_space(12.0);
            if ui.button("Back").clicked() {
                back = true;
            }
        });

        if let Some(session) = self.session.as_mut() {
            if let Some(label) = clicked {
                session.choose_category2(&label);
            } else if back {
                session.go_back(Page::Category1);
            }
        }
    }

    fn draw_result(
        &mut self,
        ui: &mut egui::Ui,
        category1: Option<&str>,
        category2: Option<&str>,
        pick: Option<&Entry>,
    ) {
        let mut reroll = false;
        let mut reset = false;

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(380.0);
            ui.heading("How about this one?");
            ui.colored_label(CAPTION_COLOR, breadcrumb(category1, category2));
            ui.add_space(16.0);

            let Some(entry) = pick else {
                ui.colored_label(
                    egui::Color32::RED,
                    "No restaurant matches this choice. Try other categories.",
                );
                ui.add_space(12.0);
                if ui.button("Start over").clicked() {
                    reset = true;
                }
                return;
            };

            let name = egui::RichText::new(&entry.name).size(20.0).strong().underline();
            if entry.url.is_empty() {
                ui.label(name);
            } else {
                ui.hyperlink_to(name, &entry.url);
            }

            ui.add_space(6.0);
            if entry.keywords.is_empty() {
                ui.colored_label(CAPTION_COLOR, "No keywords registered.");
            } else {
                ui.colored_label(CAPTION_COLOR, tags_line(&entry.keywords));
            }

            ui.add_space(16.0);
            ui.columns(2, |cols| {
                if cols[0]
                    .add_sized([cols[0].available_width(), 32.0], egui::Button::new("Spin again"))
                    .clicked()
                {
                    reroll = true;
                }
                if cols[1]
                    .add_sized([cols[1].available_width(), 32.0], egui::Button::new("Start over"))
                    .clicked()
                {
                    reset = true;
                }
            });
        });

        if let Some(session) = self.session.as_mut() {
            if reroll {
                session.reroll();
            } else if reset {
                session.reset();
            }
        }
    }
}

/// `cat1 > cat2` when both levels are committed, just `cat1` otherwise.
fn breadcrumb(category1: Option<&str>, category2: Option<&str>) -> String {
    match (category1, category2) {
        (Some(c1), Some(c2)) => format!("{}  >  {}", c1, c2),
        (Some(c1), None) => c1.to_string(),
        _ => String::new(),
    }
}

/// Keyword tag line: spaces stripped inside a tag, `#`-prefixed, joined
/// with spaces, supplied order preserved.
fn tags_line(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|k| format!("#{}", k.replace(' ', "")))
        .collect::<Vec<String>>()
        .join(" ")
}
