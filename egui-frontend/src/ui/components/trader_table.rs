//! # Trader Table Module
//!
//! This module renders the trader configuration list and wires its row
//! actions into the modal coordination state.
//!
//! ## Key Functions:
//! - `render_trader_table()` - Trader rows with edit actions
//!
//! ## Row Actions:
//! - "Edit" sets the editing target and then shows the edit dialog (two
//!   setter calls; the trader pair has no combined open operation)
//! - "Model" / "Brokerage" open those dialogs targeting the row's entity
//!   through the paired open operations

use eframe::egui;
use shared::TraderConfig;

use crate::ui::app_state::TraderConsoleApp;
use crate::ui::components::styling::{colors, status_color};

impl TraderConsoleApp {
    /// Render the trader table
    pub fn render_trader_table(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(egui::Color32::WHITE)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(12.0));

        frame.show(ui, |ui| {
            if self.traders.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(30.0);
                    ui.label(
                        egui::RichText::new("No traders configured yet")
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .color(colors::MUTED_TEXT),
                    );
                    ui.label(
                        egui::RichText::new("Use \"New Trader\" to create one")
                            .color(colors::MUTED_TEXT),
                    );
                    ui.add_space(30.0);
                });
                return;
            }

            // Rows mutate modal state, so iterate over a snapshot
            let traders = self.traders.clone();

            egui::Grid::new("trader_table")
                .num_columns(5)
                .spacing(egui::vec2(16.0, 8.0))
                .striped(true)
                .show(ui, |ui| {
                    for heading in ["Trader", "Status", "Model", "Brokerage", "Actions"] {
                        ui.label(
                            egui::RichText::new(heading).strong().color(colors::TITLE),
                        );
                    }
                    ui.end_row();

                    for trader in &traders {
                        self.render_trader_row(ui, trader);
                        ui.end_row();
                    }
                });
        });
    }

    fn render_trader_row(&mut self, ui: &mut egui::Ui, trader: &TraderConfig) {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&trader.name).strong());
            if !trader.description.is_empty() {
                ui.label(
                    egui::RichText::new(&trader.description)
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(colors::MUTED_TEXT),
                );
            }
        });

        let status = if trader.is_active { "Active" } else { "Paused" };
        ui.label(egui::RichText::new(status).color(status_color(trader.is_active)));

        match &trader.model_id {
            Some(model_id) => ui.label(self.model_display_name(model_id)),
            None => ui.label(egui::RichText::new("—").color(colors::MUTED_TEXT)),
        };

        match &trader.brokerage_id {
            Some(brokerage_id) => ui.label(self.brokerage_display_name(brokerage_id)),
            None => ui.label(egui::RichText::new("—").color(colors::MUTED_TEXT)),
        };

        ui.horizontal(|ui| {
            if ui.button("✏ Edit").clicked() {
                log::info!("Edit clicked for trader {}", trader.id);
                self.trader_form.populate_from_trader(trader);
                self.modals.set_editing_trader(Some(trader.clone()));
                self.modals.set_show_edit_modal(true);
            }

            if let Some(model_id) = &trader.model_id {
                if ui.button("🧠 Model").clicked() {
                    log::info!("Model edit clicked for {}", model_id);
                    self.open_model_editor(model_id.clone());
                }
            }

            if let Some(brokerage_id) = &trader.brokerage_id {
                if ui.button("🏦 Brokerage").clicked() {
                    log::info!("Brokerage edit clicked for {}", brokerage_id);
                    self.open_brokerage_editor(brokerage_id.clone());
                }
            }
        });
    }

    /// Open the model dialog targeting `model_id`, pre-filling the form
    /// from the loaded catalog
    pub fn open_model_editor(&mut self, model_id: String) {
        if let Some(model) = self.models.iter().find(|m| m.id == model_id) {
            let model = model.clone();
            self.model_form.populate_from_model(&model);
        } else {
            self.model_form.clear();
        }
        self.modals.open_model_modal(Some(model_id));
    }

    /// Open the brokerage dialog targeting `brokerage_id`, pre-filling the
    /// form from the loaded catalog
    pub fn open_brokerage_editor(&mut self, brokerage_id: String) {
        if let Some(brokerage) = self.brokerages.iter().find(|b| b.id == brokerage_id) {
            let brokerage = brokerage.clone();
            self.brokerage_form.populate_from_brokerage(&brokerage);
        } else {
            self.brokerage_form.clear();
        }
        self.modals.open_brokerage_modal(Some(brokerage_id));
    }
}
