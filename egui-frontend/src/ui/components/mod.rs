//! # UI Components Module
//!
//! This module organizes all UI components for the trader console.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `data_loading` - Backend data loading and state refresh
//! - `styling` - Visual styling and color helpers
//! - `header` - Application header with title, actions, and messages
//! - `trader_table` - Trader list rendering and row actions
//! - `modals` - Modal dialogs and popup interfaces

pub mod data_loading;
pub mod header;
pub mod modals;
pub mod styling;
pub mod trader_table;

pub use styling::setup_console_style;
