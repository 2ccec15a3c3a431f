//! # App Module
//!
//! This module serves as the main entry point for the trader console application,
//! re-exporting the application type for easy access throughout the codebase.
//!
//! ## Purpose:
//! This module provides a clean, centralized import point for the app state,
//! allowing `main.rs` to simply `use app::TraderConsoleApp`.

pub use crate::ui::app_state::TraderConsoleApp;
