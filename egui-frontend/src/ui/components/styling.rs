//! # Styling Module
//!
//! This module contains the styling functions and color constants for the
//! trader console.
//!
//! ## Key Functions:
//! - `setup_console_style()` - Configure global egui styling
//! - `status_color()` - Color for the active/paused trader indicator
//!
//! ## Purpose:
//! Centralizes styling so the table, header, and dialogs stay visually
//! consistent.

use eframe::egui;
use egui::Color32;

/// Colors used across the console
pub mod colors {
    use super::Color32;

    pub const TITLE: Color32 = Color32::from_rgb(60, 60, 60);
    pub const MUTED_TEXT: Color32 = Color32::from_rgb(120, 120, 120);
    pub const ACCENT: Color32 = Color32::from_rgb(70, 130, 180); // Steel blue
    pub const ACTIVE: Color32 = Color32::from_rgb(46, 160, 67);
    pub const PAUSED: Color32 = Color32::from_rgb(160, 160, 160);
    pub const ERROR: Color32 = Color32::from_rgb(220, 50, 50);
    pub const SUCCESS: Color32 = Color32::from_rgb(46, 160, 67);
}

/// Setup console-wide UI styling
pub fn setup_console_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.window_fill = Color32::from_rgb(248, 249, 250);
        style.visuals.panel_fill = Color32::from_rgb(248, 249, 250);
        style.visuals.button_frame = true;
        style.visuals.extreme_bg_color = Color32::WHITE; // Text edit backgrounds

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Color for a trader's active/paused status chip
pub fn status_color(is_active: bool) -> Color32 {
    if is_active {
        colors::ACTIVE
    } else {
        colors::PAUSED
    }
}
