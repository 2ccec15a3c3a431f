//! # Model Configuration Modal
//!
//! This module contains the model create/edit dialog.
//!
//! ## Responsibilities:
//! - Display the model form (name, provider)
//! - Create mode when no editing target is set, edit mode otherwise
//! - Submit to the backend and report the outcome
//!
//! ## Visibility:
//! Opened through `modals.open_model_modal` (target and flag in one step)
//! and dismissed through `modals.close_model_modal`.

use eframe::egui;
use shared::{ModelProvider, UpsertModelRequest};

use crate::ui::app_state::TraderConsoleApp;
use crate::ui::components::modals::shared::{
    modal_overlay, render_action_buttons, render_form_field_with_error, render_modal_title,
};

impl TraderConsoleApp {
    /// Render the model configuration modal
    pub fn render_model_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_model_modal {
            return;
        }

        let editing = self.modals.editing_model.clone();
        let title = if editing.is_some() {
            "🧠 Edit Model"
        } else {
            "🧠 Add Model"
        };
        log::info!(
            "Rendering model modal (target: {})",
            editing.as_deref().unwrap_or("create mode")
        );

        modal_overlay(ctx, "model_modal_overlay", |ui| {
            ui.vertical(|ui| {
                render_modal_title(ui, title);

                let name_response = render_form_field_with_error(
                    ui,
                    "Name",
                    &mut self.model_form.name,
                    "e.g. Momentum v2",
                    &self.model_form.name_error,
                    Some(64),
                );
                if name_response.changed() && self.model_form.name_error.is_some() {
                    self.model_form.validate();
                }

                ui.horizontal(|ui| {
                    ui.label("Provider:");
                    egui::ComboBox::from_id_source("model_form_provider_picker")
                        .selected_text(self.model_form.provider.to_string())
                        .show_ui(ui, |ui| {
                            for provider in [
                                ModelProvider::Hosted,
                                ModelProvider::Local,
                                ModelProvider::Rules,
                            ] {
                                ui.selectable_value(
                                    &mut self.model_form.provider,
                                    provider,
                                    provider.to_string(),
                                );
                            }
                        });
                });

                ui.add_space(15.0);

                let (save, cancel) = render_action_buttons(
                    ui,
                    if editing.is_some() { "Save" } else { "Create" },
                    !self.model_form.name.trim().is_empty(),
                    self.model_form.is_saving,
                );
                if save {
                    self.submit_model_form(editing.clone());
                }
                if cancel {
                    log::info!("Model modal cancelled");
                    self.model_form.clear();
                    self.modals.close_model_modal();
                }
            });
        });
    }

    fn submit_model_form(&mut self, model_id: Option<String>) {
        if !self.model_form.validate() {
            return;
        }

        self.model_form.is_saving = true;
        let request = UpsertModelRequest {
            model_id,
            name: self.model_form.name.clone(),
            provider: self.model_form.provider,
        };

        match self.backend.upsert_model(request) {
            Ok(model) => {
                log::info!("Model saved: {}", model.id);
                self.notify_success(format!("Saved model '{}'", model.name));
                self.refresh_catalogs();
                self.model_form.clear();
                self.modals.close_model_modal();
            }
            Err(e) => {
                log::warn!("Model save failed: {}", e);
                self.model_form.is_saving = false;
                self.notify_error(format!("Could not save model: {}", e));
            }
        }
    }
}
