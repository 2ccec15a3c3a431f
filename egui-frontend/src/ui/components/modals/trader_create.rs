//! # Create Trader Modal
//!
//! This module contains the create trader dialog.
//!
//! ## Responsibilities:
//! - Display the create form (name, description, model, brokerage)
//! - Validate input and surface inline errors
//! - Submit to the backend and report the outcome
//!
//! ## Visibility:
//! Toggled through `modals.set_show_create_modal`; this dialog has no editing
//! target to pair with its flag.

use eframe::egui;
use shared::CreateTraderRequest;

use crate::ui::app_state::TraderConsoleApp;
use crate::ui::components::modals::shared::{
    modal_overlay, render_action_buttons, render_form_field_with_error, render_modal_title,
};

impl TraderConsoleApp {
    /// Render the create trader modal
    pub fn render_create_trader_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_create_modal {
            return;
        }

        log::info!("Rendering create trader modal");

        modal_overlay(ctx, "create_trader_modal_overlay", |ui| {
            ui.vertical(|ui| {
                render_modal_title(ui, "➕ New Trader");

                let name_response = render_form_field_with_error(
                    ui,
                    "Name",
                    &mut self.trader_form.name,
                    "e.g. Momentum scalper",
                    &self.trader_form.name_error,
                    Some(64),
                );
                if name_response.changed() && self.trader_form.name_error.is_some() {
                    self.trader_form.validate();
                }

                render_form_field_with_error(
                    ui,
                    "Description",
                    &mut self.trader_form.description,
                    "What does this trader do?",
                    &None,
                    Some(256),
                );

                self.render_model_picker(ui);
                self.render_brokerage_picker(ui);

                ui.add_space(15.0);

                let (save, cancel) = render_action_buttons(
                    ui,
                    "Create",
                    !self.trader_form.name.trim().is_empty(),
                    self.trader_form.is_saving,
                );
                if save {
                    self.submit_create_trader();
                }
                if cancel {
                    log::info!("Create trader modal cancelled");
                    self.trader_form.clear();
                    self.modals.set_show_create_modal(false);
                }
            });
        });
    }

    /// Model selection combo shared by the create and edit dialogs
    pub(crate) fn render_model_picker(&mut self, ui: &mut egui::Ui) {
        let selected_label = match &self.trader_form.model_id {
            Some(model_id) => self.model_display_name(model_id),
            None => "No model".to_string(),
        };
        ui.horizontal(|ui| {
            ui.label("Model:");
            egui::ComboBox::from_id_source("trader_form_model_picker")
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.trader_form.model_id, None, "No model");
                    for model in &self.models {
                        ui.selectable_value(
                            &mut self.trader_form.model_id,
                            Some(model.id.clone()),
                            &model.name,
                        );
                    }
                });
        });
    }

    /// Brokerage selection combo shared by the create and edit dialogs
    pub(crate) fn render_brokerage_picker(&mut self, ui: &mut egui::Ui) {
        let selected_label = match &self.trader_form.brokerage_id {
            Some(brokerage_id) => self.brokerage_display_name(brokerage_id),
            None => "No brokerage".to_string(),
        };
        ui.horizontal(|ui| {
            ui.label("Brokerage:");
            egui::ComboBox::from_id_source("trader_form_brokerage_picker")
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.trader_form.brokerage_id, None, "No brokerage");
                    for brokerage in &self.brokerages {
                        ui.selectable_value(
                            &mut self.trader_form.brokerage_id,
                            Some(brokerage.id.clone()),
                            &brokerage.name,
                        );
                    }
                });
        });
    }

    fn submit_create_trader(&mut self) {
        if !self.trader_form.validate() {
            return;
        }

        self.trader_form.is_saving = true;
        let request = CreateTraderRequest {
            name: self.trader_form.name.clone(),
            description: self.trader_form.description.clone(),
            model_id: self.trader_form.model_id.clone(),
            brokerage_id: self.trader_form.brokerage_id.clone(),
        };

        match self.backend.create_trader(request) {
            Ok(trader) => {
                log::info!("Trader created: {}", trader.id);
                self.notify_success(format!("Created trader '{}'", trader.name));
                self.refresh_traders();
                self.trader_form.clear();
                self.modals.set_show_create_modal(false);
            }
            Err(e) => {
                log::warn!("Trader creation failed: {}", e);
                self.trader_form.is_saving = false;
                self.notify_error(format!("Could not create trader: {}", e));
            }
        }
    }
}
