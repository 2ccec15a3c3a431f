//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the trader console.
//!
//! ## Key Types:
//! - `TraderConsoleApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize new app instance with backend connection
//! - `clear_messages()` - Clear success/error messages
//!
//! ## State Management:
//! The TraderConsoleApp struct holds all application state in a single
//! location: the backend catalog handle, the loaded entity lists, user-facing
//! messages, the modal coordination state, and the dialog form buffers. Modal
//! visibility is only ever changed through `self.modals`' operations, keeping
//! one source of truth for which dialog is open and for which entity.

use log::info;
use shared::{BrokerageSummary, ModelSummary, TraderConfig};

use crate::backend::Backend;
use crate::ui::state::{
    BrokerageFormState, MessageState, ModalState, ModelFormState, TraderFormState,
};

/// Main application struct for the egui trader console
pub struct TraderConsoleApp {
    pub backend: Backend,

    // Loaded entity lists
    pub traders: Vec<TraderConfig>,
    pub models: Vec<ModelSummary>,
    pub brokerages: Vec<BrokerageSummary>,

    // UI state
    pub loading: bool,
    pub messages: MessageState,

    // Modal coordination state
    pub modals: ModalState,

    // Form states
    pub trader_form: TraderFormState,
    pub model_form: ModelFormState,
    pub brokerage_form: BrokerageFormState,
}

impl TraderConsoleApp {
    /// Create a new TraderConsoleApp with default values
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing TraderConsoleApp");

        let backend = Backend::new()?;

        Ok(Self {
            backend,

            // Loaded entity lists
            traders: Vec::new(),
            models: Vec::new(),
            brokerages: Vec::new(),

            // UI state
            loading: true,
            messages: MessageState::new(),

            // Modal coordination state
            modals: ModalState::new(),

            // Form states
            trader_form: TraderFormState::new(),
            model_form: ModelFormState::new(),
            brokerage_form: BrokerageFormState::new(),
        })
    }

    /// Clear success/error messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Surface a success message to the user, replacing any error
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.messages.show_success(message);
    }

    /// Surface an error message to the user, replacing any success
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.messages.show_error(message);
    }

    /// Display name for a model id. Checks the loaded list first, then the
    /// backend catalog (the list can lag right after a mutation), and falls
    /// back to the raw identifier.
    pub fn model_display_name(&self, model_id: &str) -> String {
        self.models
            .iter()
            .find(|m| m.id == model_id)
            .map(|m| m.name.clone())
            .or_else(|| self.backend.model(model_id).map(|m| m.name.clone()))
            .unwrap_or_else(|| model_id.to_string())
    }

    /// Display name for a brokerage id, with the same lookup order as
    /// `model_display_name`
    pub fn brokerage_display_name(&self, brokerage_id: &str) -> String {
        self.brokerages
            .iter()
            .find(|b| b.id == brokerage_id)
            .map(|b| b.name.clone())
            .or_else(|| self.backend.brokerage(brokerage_id).map(|b| b.name.clone()))
            .unwrap_or_else(|| brokerage_id.to_string())
    }
}
