//! # Header Module
//!
//! This module handles rendering the application header, including the title,
//! catalog action buttons, and user-facing messages.
//!
//! ## Key Functions:
//! - `render_header()` - Title plus New Trader / Add Model / Add Brokerage
//! - `render_messages()` - Success/error message display
//!
//! ## Purpose:
//! The header hosts the entry points into the configuration dialogs: the
//! create button toggles the create-trader flag, while the model and
//! brokerage buttons open their dialogs in create mode through the paired
//! open operations.

use eframe::egui;

use crate::ui::app_state::TraderConsoleApp;
use crate::ui::components::styling::colors;

impl TraderConsoleApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200))
            .inner_margin(egui::Margin::symmetric(10.0, 10.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Trader Console")
                            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TITLE),
                    )
                    .selectable(false),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("➕ New Trader").clicked() {
                        log::info!("New Trader button clicked");
                        self.trader_form.clear();
                        self.modals.set_show_create_modal(true);
                    }

                    ui.add_space(5.0);

                    if ui.button("🧠 Add Model").clicked() {
                        log::info!("Add Model button clicked");
                        self.model_form.clear();
                        self.modals.open_model_modal(None);
                    }

                    ui.add_space(5.0);

                    if ui.button("🏦 Add Brokerage").clicked() {
                        log::info!("Add Brokerage button clicked");
                        self.brokerage_form.clear();
                        self.modals.open_brokerage_modal(None);
                    }

                    ui.add_space(15.0);

                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{} traders · {} models · {} brokerages",
                                self.traders.len(),
                                self.models.len(),
                                self.brokerages.len()
                            ))
                            .color(colors::MUTED_TEXT),
                        )
                        .selectable(false),
                    );
                });
            });
        });
    }

    /// Render success/error messages below the header
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = self.messages.success.clone() {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("✅ {}", message)).color(colors::SUCCESS),
                );
                if ui.small_button("✖").clicked() {
                    self.clear_messages();
                }
            });
        }
        if let Some(message) = self.messages.error.clone() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("❌ {}", message)).color(colors::ERROR));
                if ui.small_button("✖").clicked() {
                    self.clear_messages();
                }
            });
        }
    }
}
