//! # Brokerage Configuration Modal
//!
//! This module contains the brokerage create/edit dialog.
//!
//! ## Responsibilities:
//! - Display the brokerage form (name, paper trading flag)
//! - Create mode when no editing target is set, edit mode otherwise
//! - Submit to the backend and report the outcome
//!
//! ## Visibility:
//! Opened through `modals.open_brokerage_modal` (target and flag in one
//! step) and dismissed through `modals.close_brokerage_modal`.

use eframe::egui;
use shared::UpsertBrokerageRequest;

use crate::ui::app_state::TraderConsoleApp;
use crate::ui::components::modals::shared::{
    modal_overlay, render_action_buttons, render_form_field_with_error, render_modal_title,
};

impl TraderConsoleApp {
    /// Render the brokerage configuration modal
    pub fn render_brokerage_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_brokerage_modal {
            return;
        }

        let editing = self.modals.editing_brokerage.clone();
        let title = if editing.is_some() {
            "🏦 Edit Brokerage"
        } else {
            "🏦 Add Brokerage"
        };
        log::info!(
            "Rendering brokerage modal (target: {})",
            editing.as_deref().unwrap_or("create mode")
        );

        modal_overlay(ctx, "brokerage_modal_overlay", |ui| {
            ui.vertical(|ui| {
                render_modal_title(ui, title);

                let name_response = render_form_field_with_error(
                    ui,
                    "Name",
                    &mut self.brokerage_form.name,
                    "e.g. Paper broker",
                    &self.brokerage_form.name_error,
                    Some(64),
                );
                if name_response.changed() && self.brokerage_form.name_error.is_some() {
                    self.brokerage_form.validate();
                }

                ui.checkbox(
                    &mut self.brokerage_form.paper_trading,
                    "Paper trading (simulated account)",
                );

                ui.add_space(15.0);

                let (save, cancel) = render_action_buttons(
                    ui,
                    if editing.is_some() { "Save" } else { "Create" },
                    !self.brokerage_form.name.trim().is_empty(),
                    self.brokerage_form.is_saving,
                );
                if save {
                    self.submit_brokerage_form(editing.clone());
                }
                if cancel {
                    log::info!("Brokerage modal cancelled");
                    self.brokerage_form.clear();
                    self.modals.close_brokerage_modal();
                }
            });
        });
    }

    fn submit_brokerage_form(&mut self, brokerage_id: Option<String>) {
        if !self.brokerage_form.validate() {
            return;
        }

        self.brokerage_form.is_saving = true;
        let request = UpsertBrokerageRequest {
            brokerage_id,
            name: self.brokerage_form.name.clone(),
            paper_trading: self.brokerage_form.paper_trading,
        };

        match self.backend.upsert_brokerage(request) {
            Ok(brokerage) => {
                log::info!("Brokerage saved: {}", brokerage.id);
                self.notify_success(format!("Saved brokerage '{}'", brokerage.name));
                self.refresh_catalogs();
                self.brokerage_form.clear();
                self.modals.close_brokerage_modal();
            }
            Err(e) => {
                log::warn!("Brokerage save failed: {}", e);
                self.brokerage_form.is_saving = false;
                self.notify_error(format!("Could not save brokerage: {}", e));
            }
        }
    }
}
