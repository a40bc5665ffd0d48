//! Section views: header, home, maps gallery, about, and footer.

use super::state::GeoMapsApp;
use crate::artwork::MAP_REGISTRY;
use crate::types::*;
use eframe::egui;

const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x0e, 0xa5, 0xe9);
const SECONDARY: egui::Color32 = egui::Color32::from_rgb(0xf9, 0x73, 0x16);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x8b, 0x5c, 0xf6);

/// Widgets of the pending-label input row.
pub struct PendingInputResponse {
    /// Text field for the label
    pub text: egui::Response,
    /// Confirms the pending click
    pub add: egui::Response,
    /// Discards the pending click
    pub cancel: egui::Response,
}

impl GeoMapsApp {
    /// Draws the title and the section navigation.
    pub fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🗺 GeoMaps").size(24.0).strong().color(PRIMARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut self.dark_mode, "Dark Mode");
                ui.separator();
                // Right-to-left, so listed in reverse
                for (section, title) in [
                    (Section::About, "ℹ About"),
                    (Section::Maps, "🗺 Maps"),
                    (Section::Home, "🏠 Home"),
                ] {
                    if ui
                        .selectable_label(self.session.section == section, title)
                        .clicked()
                    {
                        self.session.select_section(section);
                    }
                }
            });
        });
    }

    /// Draws the one-line project tagline.
    pub fn draw_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.weak("🗺 GeoMaps: an educational geography project");
        });
    }

    /// Draws the landing page.
    pub fn draw_home(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new("✨ Educational platform").color(ACCENT));
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Learn geography interactively")
                    .size(40.0)
                    .strong()
                    .color(PRIMARY),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(
                    "Label objects on contour maps and remember where countries, \
                     cities and natural features are.",
                )
                .size(18.0)
                .weak(),
            );
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                // Center the two buttons inside the full-width row
                let buttons_width = 320.0;
                ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));
                if ui.button(egui::RichText::new("🗺 Open maps").size(18.0)).clicked() {
                    self.session.select_section(Section::Maps);
                }
                if ui.button(egui::RichText::new("📖 Learn more").size(18.0)).clicked() {
                    self.session.select_section(Section::About);
                }
            });
        });

        ui.add_space(32.0);
        ui.columns(3, |columns| {
            feature_card(
                &mut columns[0],
                "🖱",
                "Click and label",
                "Click the map and add the names of geographic objects.",
                PRIMARY,
            );
            feature_card(
                &mut columns[1],
                "📚",
                "Different maps",
                "Work with maps of the world, of continents and of single countries.",
                SECONDARY,
            );
            feature_card(
                &mut columns[2],
                "💡",
                "Remember easily",
                "The interactive approach helps geography stick.",
                ACCENT,
            );
        });
    }

    /// Draws the map gallery: tabs, surface, input row, and label summary.
    pub fn draw_maps(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("Interactive maps").size(32.0).strong());
            ui.weak("Pick a map and start labeling geographic objects");
        });
        ui.add_space(12.0);

        self.draw_map_tabs(ui);
        ui.add_space(12.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("ℹ");
                ui.weak("Click the map to add a label. Click a label to remove it.");
            });
            ui.add_space(8.0);

            if self.draw_map_surface(ui).is_none() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.weak("Select a map above to start labeling.");
                    ui.add_space(24.0);
                });
                return;
            }

            ui.add_space(8.0);
            self.draw_pending_input(ui);
            self.draw_label_summary(ui);
        });
    }

    fn draw_map_tabs(&mut self, ui: &mut egui::Ui) {
        let displayed = self.session.displayed_map_id().map(str::to_string);
        ui.horizontal(|ui| {
            for seed in MAP_REGISTRY {
                let selected = displayed.as_deref() == Some(seed.id);
                let tab = ui
                    .selectable_label(selected, egui::RichText::new(seed.tab_title).size(16.0))
                    .on_hover_text(seed.name);
                if tab.clicked() {
                    self.session.select_map(seed.id);
                }
            }
        });
    }

    /// Draws the confirm/cancel row while a click is pending.
    ///
    /// # Returns
    /// The row's widgets, or `None` when nothing is pending.
    pub fn draw_pending_input(&mut self, ui: &mut egui::Ui) -> Option<PendingInputResponse> {
        self.session.pending.as_ref()?;
        let row = egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(2.0, SECONDARY))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let edit = egui::TextEdit::singleline(&mut self.session.label_text)
                        .hint_text("Enter an object name...")
                        .desired_width((ui.available_width() - 180.0).max(120.0));
                    let text = ui.add(edit);
                    if self.interaction.focus_label_input {
                        text.request_focus();
                        self.interaction.focus_label_input = false;
                    }
                    let submitted =
                        text.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    let add =
                        ui.add_enabled(self.session.can_confirm(), egui::Button::new("➕ Add"));
                    if submitted || add.clicked() {
                        self.session.confirm_pending();
                    }
                    let cancel = ui.button("Cancel");
                    if cancel.clicked() {
                        self.session.cancel_pending();
                    }
                    PendingInputResponse { text, add, cancel }
                })
                .inner
            })
            .inner;
        ui.add_space(8.0);
        Some(row)
    }

    /// Lists the selected map's labels as badges; clicking one removes it.
    ///
    /// Returns each badge with the label it stands for, in display order.
    pub fn draw_label_summary(&mut self, ui: &mut egui::Ui) -> Vec<(LabelId, egui::Response)> {
        let Some(map) = self.session.selected_map() else {
            return Vec::new();
        };
        if map.labels.is_empty() {
            return Vec::new();
        }
        let map_id = map.id.clone();
        let mut badges = Vec::with_capacity(map.labels.len());

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("☰ Labeled objects ({})", map.labels.len()))
                    .size(18.0)
                    .strong(),
            );
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for label in &map.labels {
                    let badge = ui
                        .button(format!("{} ✖", label.text))
                        .on_hover_text("Click to remove");
                    badges.push((label.id, badge));
                }
            });
        });

        let clicked = badges.iter().find(|(_, badge)| badge.clicked()).map(|(id, _)| *id);
        if let Some(label_id) = clicked {
            self.session.remove_label(&map_id, label_id);
        }
        badges
    }

    /// Draws the project description.
    pub fn draw_about(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("About GeoMaps").size(32.0).strong());
            ui.weak("A modern educational platform for learning geography");
        });
        ui.add_space(16.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            about_item(
                ui,
                "🎯",
                "Our goal",
                "Make learning geography engaging and effective with interactive contour maps. \
                 Actively working with the material helps you remember it.",
                PRIMARY,
            );
            about_item(
                ui,
                "👥",
                "Who it is for",
                "GeoMaps suits pupils, students and anyone who wants to improve their geography. \
                 It is intuitive and needs no special skills.",
                SECONDARY,
            );
            about_item(
                ui,
                "💡",
                "How it works",
                "Pick a map, click the spot you want and type the object's name. \
                 Your labels are kept while you work with the map, and you can add \
                 and remove them freely.",
                ACCENT,
            );
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                for badge in ["⚡ Fast", "🙂 Simple", "🏆 Effective"] {
                    ui.label(egui::RichText::new(badge).size(16.0));
                    ui.add_space(12.0);
                }
            });
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui
                .button(egui::RichText::new("🚀 Start working with maps").size(18.0))
                .clicked()
            {
                self.session.select_section(Section::Maps);
            }
        });
    }
}

fn feature_card(ui: &mut egui::Ui, icon: &str, title: &str, body: &str, color: egui::Color32) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, color.gamma_multiply(0.5)))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(32.0).color(color));
                ui.label(egui::RichText::new(title).size(20.0).strong());
                ui.weak(body);
            });
        });
}

fn about_item(ui: &mut egui::Ui, icon: &str, title: &str, body: &str, color: egui::Color32) {
    ui.horizontal_top(|ui| {
        ui.label(egui::RichText::new(icon).size(28.0).color(color));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).size(20.0).strong());
            ui.label(body);
        });
    });
    ui.add_space(12.0);
}
