//! # Modals Module
//!
//! This module organizes the configuration dialogs for the trader console.
//!
//! ## Module Organization:
//! - `trader_create` - Create trader dialog
//! - `trader_edit` - Edit trader dialog
//! - `model_config` - Model create/edit dialog
//! - `brokerage_config` - Brokerage create/edit dialog
//! - `shared` - Common modal frame, form helpers, and the render coordinator
//!
//! ## Architecture:
//! Each dialog reads its visibility flag and editing target from
//! `self.modals` and returns early when hidden. State changes go through the
//! modal state's operations, never by poking flags from two places.

pub mod brokerage_config;
pub mod model_config;
pub mod shared;
pub mod trader_create;
pub mod trader_edit;
