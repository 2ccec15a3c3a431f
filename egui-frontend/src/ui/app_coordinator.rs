//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the
//! primary update loop and overall application lifecycle.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop
//! - `render_loading_screen()` - Displayed while the catalog is being fetched
//!
//! ## Application Flow:
//! 1. Set up console styling
//! 2. Handle global input (ESC dismisses the topmost dialog)
//! 3. Load catalog data if needed
//! 4. Render loading screen OR header + trader table
//! 5. Render any active modals last so they overlay the page

use eframe::egui;

use crate::ui::app_state::TraderConsoleApp;
use crate::ui::components::styling::setup_console_style;
use crate::ui::state::message_state::MESSAGE_TTL;

impl eframe::App for TraderConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_console_style(ctx);

        // ESC dismisses the topmost open dialog
        if self.modals.any_modal_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dismiss_topmost_modal();
        }

        // Load initial data on first run
        if self.loading {
            self.load_initial_data();
        }

        // Expire stale status messages; keep repainting while one is shown
        // so the expiry fires without further input
        self.messages.expire_older_than(MESSAGE_TTL);
        if self.messages.any() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.loading {
                self.render_loading_screen(ui);
                return;
            }

            self.render_header(ui);
            ui.add_space(8.0);
            self.render_messages(ui);
            self.render_trader_table(ui);
        });

        // Render modals above the page content
        self.render_modals(ctx);
    }
}

impl TraderConsoleApp {
    /// Close whichever dialog is currently on top of the fixed stacking
    /// order. Dialogs with an editing target are cleared through their
    /// paired close operation; the trader dialogs clear flag and target
    /// through the individual setters.
    fn dismiss_topmost_modal(&mut self) {
        if self.modals.show_brokerage_modal {
            self.modals.close_brokerage_modal();
        } else if self.modals.show_model_modal {
            self.modals.close_model_modal();
        } else if self.modals.show_edit_modal {
            self.modals.set_show_edit_modal(false);
            self.modals.set_editing_trader(None);
        } else if self.modals.show_create_modal {
            self.modals.set_show_create_modal(false);
        }
    }

    /// Render a simple centered loading indicator
    fn render_loading_screen(&self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("Loading trader catalog...")
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
                );
            });
        });
    }
}
