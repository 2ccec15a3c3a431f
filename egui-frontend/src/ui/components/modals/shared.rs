//! # Shared Modal Utilities
//!
//! This module contains common modal functionality shared across the
//! configuration dialogs.
//!
//! ## Purpose:
//! - Provide consistent modal styling and overlay behavior
//! - Common form field rendering with inline errors
//! - The `render_modals` coordinator that draws dialogs in stacking order

use eframe::egui;

use crate::ui::app_state::TraderConsoleApp;
use crate::ui::components::styling::colors;

/// Common styling configuration for the configuration dialogs
pub struct ModalStyle {
    pub modal_size: egui::Vec2,
    pub title_font_size: f32,
    pub title_color: egui::Color32,
    pub border_color: egui::Color32,
    pub background_color: egui::Color32,
    pub rounding: f32,
    pub margin: f32,
}

impl ModalStyle {
    /// Default styling for the configuration dialogs
    pub fn default_style() -> Self {
        Self {
            modal_size: egui::vec2(440.0, 360.0),
            title_font_size: 24.0,
            title_color: colors::ACCENT,
            border_color: colors::ACCENT,
            background_color: egui::Color32::WHITE,
            rounding: 10.0,
            margin: 20.0,
        }
    }

    /// Apply common modal frame styling
    pub fn apply_frame_styling(&self) -> egui::Frame {
        egui::Frame::window(&egui::Style::default())
            .fill(self.background_color)
            .stroke(egui::Stroke::new(2.0, self.border_color))
            .rounding(egui::Rounding::same(self.rounding))
            .inner_margin(egui::Margin::same(self.margin))
            .shadow(egui::Shadow {
                offset: egui::vec2(4.0, 4.0),
                blur: 16.0,
                spread: 0.0,
                color: egui::Color32::from_rgba_unmultiplied(0, 0, 0, 80),
            })
    }
}

/// Draw the dimmed full-screen backdrop and the centered modal frame, then
/// run `add_contents` inside it
pub fn modal_overlay(
    ctx: &egui::Context,
    id: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            ui.painter().rect_filled(
                screen_rect,
                egui::Rounding::ZERO,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
            );

            ui.allocate_ui_at_rect(screen_rect, |ui| {
                ui.centered_and_justified(|ui| {
                    let style = ModalStyle::default_style();
                    style.apply_frame_styling().show(ui, |ui| {
                        ui.set_min_size(style.modal_size);
                        ui.set_max_size(style.modal_size);
                        add_contents(ui);
                    });
                });
            });
        });
}

/// Render the modal title row
pub fn render_modal_title(ui: &mut egui::Ui, title: &str) {
    let style = ModalStyle::default_style();
    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .font(egui::FontId::new(
                    style.title_font_size,
                    egui::FontFamily::Proportional,
                ))
                .strong()
                .color(style.title_color),
        );
    });
    ui.add_space(15.0);
}

/// Common form field rendering with error display
pub fn render_form_field_with_error(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    placeholder: &str,
    error: &Option<String>,
    max_length: Option<usize>,
) -> egui::Response {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TITLE),
        );

        let mut text_edit = egui::TextEdit::singleline(value)
            .hint_text(placeholder)
            .desired_width(360.0);
        if let Some(max_len) = max_length {
            text_edit = text_edit.char_limit(max_len);
        }
        let response = ui.add(text_edit);

        if let Some(error_msg) = error {
            ui.label(
                egui::RichText::new(format!("❌ {}", error_msg))
                    .color(colors::ERROR)
                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional)),
            );
        } else {
            // Keep the layout stable whether or not an error is showing
            ui.add_space(18.0);
        }

        response
    })
    .inner
}

/// Render Cancel / primary action buttons. Returns (primary_clicked,
/// cancel_clicked); the caller applies the state transitions.
pub fn render_action_buttons(
    ui: &mut egui::Ui,
    primary_text: &str,
    primary_enabled: bool,
    is_saving: bool,
) -> (bool, bool) {
    let mut primary_clicked = false;
    let mut cancel_clicked = false;

    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Cancel").clicked() {
                cancel_clicked = true;
            }

            ui.add_space(8.0);

            let button_text = if is_saving {
                "⏳ Saving..."
            } else {
                primary_text
            };
            let button = egui::Button::new(
                egui::RichText::new(button_text)
                    .color(egui::Color32::WHITE)
                    .strong(),
            )
            .fill(if primary_enabled && !is_saving {
                colors::ACCENT
            } else {
                egui::Color32::LIGHT_GRAY
            });

            if ui.add_enabled(primary_enabled && !is_saving, button).clicked() {
                primary_clicked = true;
            }
        });
    });

    (primary_clicked, cancel_clicked)
}

impl TraderConsoleApp {
    /// Render all modals - main modal coordinator.
    /// Fixed order determines stacking when more than one flag is set.
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_create_trader_modal(ctx);
        self.render_edit_trader_modal(ctx);
        self.render_model_modal(ctx);
        self.render_brokerage_modal(ctx);
    }
}
