//! # Form State Module
//!
//! This module contains the input state for the configuration dialogs.
//!
//! ## Responsibilities:
//! - Trader create/edit form fields and validation errors
//! - Model form fields (name, provider)
//! - Brokerage form fields (name, paper trading flag)
//!
//! ## Purpose:
//! Keeping form buffers separate from the modal visibility state means a
//! dialog can be reopened with stale input cleared, and validation errors
//! stay attached to the form they belong to.

use shared::{BrokerageSummary, ModelProvider, ModelSummary, TraderConfig};

/// Trader create/edit form state
#[derive(Debug, Clone)]
pub struct TraderFormState {
    pub name: String,
    pub description: String,
    pub model_id: Option<String>,
    pub brokerage_id: Option<String>,
    pub is_active: bool,
    pub name_error: Option<String>,
    pub is_saving: bool,
}

impl TraderFormState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            model_id: None,
            brokerage_id: None,
            is_active: false,
            name_error: None,
            is_saving: false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn populate_from_trader(&mut self, trader: &TraderConfig) {
        self.name = trader.name.clone();
        self.description = trader.description.clone();
        self.model_id = trader.model_id.clone();
        self.brokerage_id = trader.brokerage_id.clone();
        self.is_active = trader.is_active;
        self.name_error = None;
        self.is_saving = false;
    }

    /// Validate the name field, recording the error for inline display.
    /// Returns true when the form can be submitted.
    pub fn validate(&mut self) -> bool {
        let trimmed = self.name.trim();
        self.name_error = if trimmed.is_empty() {
            Some("Name is required".to_string())
        } else if trimmed.len() > 64 {
            Some("Name must be 64 characters or fewer".to_string())
        } else {
            None
        };
        self.name_error.is_none()
    }
}

/// Model configuration form state
#[derive(Debug, Clone)]
pub struct ModelFormState {
    pub name: String,
    pub provider: ModelProvider,
    pub name_error: Option<String>,
    pub is_saving: bool,
}

impl ModelFormState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            provider: ModelProvider::Hosted,
            name_error: None,
            is_saving: false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn populate_from_model(&mut self, model: &ModelSummary) {
        self.name = model.name.clone();
        self.provider = model.provider;
        self.name_error = None;
        self.is_saving = false;
    }

    pub fn validate(&mut self) -> bool {
        let trimmed = self.name.trim();
        self.name_error = if trimmed.is_empty() {
            Some("Name is required".to_string())
        } else if trimmed.len() > 64 {
            Some("Name must be 64 characters or fewer".to_string())
        } else {
            None
        };
        self.name_error.is_none()
    }
}

/// Brokerage configuration form state
#[derive(Debug, Clone)]
pub struct BrokerageFormState {
    pub name: String,
    pub paper_trading: bool,
    pub name_error: Option<String>,
    pub is_saving: bool,
}

impl BrokerageFormState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            paper_trading: true,
            name_error: None,
            is_saving: false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn populate_from_brokerage(&mut self, brokerage: &BrokerageSummary) {
        self.name = brokerage.name.clone();
        self.paper_trading = brokerage.paper_trading;
        self.name_error = None;
        self.is_saving = false;
    }

    pub fn validate(&mut self) -> bool {
        let trimmed = self.name.trim();
        self.name_error = if trimmed.is_empty() {
            Some("Name is required".to_string())
        } else if trimmed.len() > 64 {
            Some("Name must be 64 characters or fewer".to_string())
        } else {
            None
        };
        self.name_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trader_form_populate_and_clear() {
        let trader = TraderConfig {
            id: "trader::1702516122000".to_string(),
            name: "Swing trader".to_string(),
            description: "Weekly swing entries".to_string(),
            model_id: Some("model::2".to_string()),
            brokerage_id: None,
            is_active: true,
            created_at: "2023-12-14T01:08:42Z".to_string(),
        };

        let mut form = TraderFormState::new();
        form.name_error = Some("stale".to_string());
        form.populate_from_trader(&trader);

        assert_eq!(form.name, "Swing trader");
        assert_eq!(form.model_id.as_deref(), Some("model::2"));
        assert!(form.is_active);
        assert_eq!(form.name_error, None);

        form.clear();
        assert_eq!(form.name, "");
        assert_eq!(form.model_id, None);
        assert!(!form.is_active);
    }

    #[test]
    fn test_trader_form_validation() {
        let mut form = TraderFormState::new();
        assert!(!form.validate());
        assert!(form.name_error.is_some());

        form.name = "  ".to_string();
        assert!(!form.validate());

        form.name = "Mean reversion".to_string();
        assert!(form.validate());
        assert_eq!(form.name_error, None);

        form.name = "x".repeat(65);
        assert!(!form.validate());
    }

    #[test]
    fn test_model_form_defaults_to_hosted_provider() {
        let form = ModelFormState::new();
        assert_eq!(form.provider, ModelProvider::Hosted);
    }

    #[test]
    fn test_brokerage_form_defaults_to_paper_trading() {
        // New brokerage connections start in the simulated account mode
        let form = BrokerageFormState::new();
        assert!(form.paper_trading);
    }
}
