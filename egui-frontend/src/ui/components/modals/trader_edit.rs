//! # Edit Trader Modal
//!
//! This module contains the edit trader dialog.
//!
//! ## Responsibilities:
//! - Display the edit form pre-populated from the editing target
//! - Validate input and surface inline errors
//! - Submit the update to the backend and report the outcome
//!
//! ## Visibility:
//! The edit flow sets `modals.editing_trader` and `modals.show_edit_modal`
//! through the individual setters; there is no combined open/close operation
//! for this pair, so closing clears both fields explicitly here.

use eframe::egui;
use shared::UpdateTraderRequest;

use crate::ui::app_state::TraderConsoleApp;
use crate::ui::components::modals::shared::{
    modal_overlay, render_action_buttons, render_form_field_with_error, render_modal_title,
};

impl TraderConsoleApp {
    /// Render the edit trader modal
    pub fn render_edit_trader_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_edit_modal {
            return;
        }

        // The flag can be set without a target; nothing to edit in that case
        let Some(trader) = self.modals.editing_trader.clone() else {
            log::warn!("Edit modal visible without an editing target, closing");
            self.close_edit_trader_modal();
            return;
        };

        log::info!("Rendering edit trader modal for {}", trader.id);

        modal_overlay(ctx, "edit_trader_modal_overlay", |ui| {
            ui.vertical(|ui| {
                render_modal_title(ui, "✏ Edit Trader");

                let name_response = render_form_field_with_error(
                    ui,
                    "Name",
                    &mut self.trader_form.name,
                    "Trader name",
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

                ui.add_space(5.0);
                ui.checkbox(&mut self.trader_form.is_active, "Active");

                ui.add_space(15.0);

                let (save, cancel) = render_action_buttons(
                    ui,
                    "Save",
                    !self.trader_form.name.trim().is_empty(),
                    self.trader_form.is_saving,
                );
                if save {
                    self.submit_edit_trader(&trader.id);
                }
                if cancel {
                    log::info!("Edit trader modal cancelled");
                    self.close_edit_trader_modal();
                }
            });
        });
    }

    fn submit_edit_trader(&mut self, trader_id: &str) {
        if !self.trader_form.validate() {
            return;
        }

        self.trader_form.is_saving = true;
        let request = UpdateTraderRequest {
            trader_id: trader_id.to_string(),
            name: self.trader_form.name.clone(),
            description: self.trader_form.description.clone(),
            model_id: self.trader_form.model_id.clone(),
            brokerage_id: self.trader_form.brokerage_id.clone(),
            is_active: self.trader_form.is_active,
        };

        match self.backend.update_trader(request) {
            Ok(trader) => {
                log::info!("Trader updated: {}", trader.id);
                self.notify_success(format!("Saved trader '{}'", trader.name));
                self.refresh_traders();
                self.close_edit_trader_modal();
            }
            Err(e) => {
                log::warn!("Trader update failed: {}", e);
                self.trader_form.is_saving = false;
                self.notify_error(format!("Could not save trader: {}", e));
            }
        }
    }

    /// Hide the edit dialog and drop its target through the plain setters
    fn close_edit_trader_modal(&mut self) {
        self.trader_form.clear();
        self.modals.set_show_edit_modal(false);
        self.modals.set_editing_trader(None);
    }
}
