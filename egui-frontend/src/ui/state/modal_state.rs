//! # Modal State Module
//!
//! This module contains all state related to modal dialogs and their visibility.
//!
//! ## Responsibilities:
//! - Modal visibility flags for the four configuration dialogs
//! - The entity each dialog is currently targeting (model, brokerage, trader)
//!
//! ## Purpose:
//! This centralizes all modal-related state management, making it the single
//! source of truth for "which configuration modal is open and for which entity."
//! Views read its fields to decide what to render; event handlers call its
//! operations. The paired open/close operations update flag and target in one
//! call so no reader ever sees a half-applied transition.

use shared::TraderConfig;

/// Modal visibility and per-dialog editing targets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    /// Whether the create trader modal is visible
    pub show_create_modal: bool,

    /// Whether the edit trader modal is visible
    pub show_edit_modal: bool,

    /// Whether the model configuration modal is visible
    pub show_model_modal: bool,

    /// Whether the brokerage configuration modal is visible
    pub show_brokerage_modal: bool,

    /// Model targeted by the model modal; `None` while the modal is in
    /// create mode or closed
    pub editing_model: Option<String>,

    /// Brokerage targeted by the brokerage modal; `None` while the modal is
    /// in create mode or closed
    pub editing_brokerage: Option<String>,

    /// Trader targeted by the edit modal. Not paired with `show_edit_modal`
    /// by any operation; the edit flow sets both fields through the plain
    /// setters (matches the upstream product behavior, pending clarification)
    pub editing_trader: Option<TraderConfig>,
}

impl ModalState {
    /// Create new modal state with all modals hidden and no editing targets
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_show_create_modal(&mut self, visible: bool) {
        self.show_create_modal = visible;
    }

    pub fn set_show_edit_modal(&mut self, visible: bool) {
        self.show_edit_modal = visible;
    }

    // The model/brokerage dialogs are driven through the paired open/close
    // operations; the per-field setters stay available to callers that need
    // to move one field at a time.
    #[allow(dead_code)]
    pub fn set_show_model_modal(&mut self, visible: bool) {
        self.show_model_modal = visible;
    }

    #[allow(dead_code)]
    pub fn set_show_brokerage_modal(&mut self, visible: bool) {
        self.show_brokerage_modal = visible;
    }

    #[allow(dead_code)]
    pub fn set_editing_model(&mut self, model_id: Option<String>) {
        self.editing_model = model_id;
    }

    #[allow(dead_code)]
    pub fn set_editing_brokerage(&mut self, brokerage_id: Option<String>) {
        self.editing_brokerage = brokerage_id;
    }

    pub fn set_editing_trader(&mut self, trader: Option<TraderConfig>) {
        self.editing_trader = trader;
    }

    /// Show the model modal targeting `model_id`; `None` puts the dialog in
    /// create mode. Flag and target change in the same call.
    pub fn open_model_modal(&mut self, model_id: Option<String>) {
        self.editing_model = model_id;
        self.show_model_modal = true;
    }

    /// Hide the model modal and clear its target
    pub fn close_model_modal(&mut self) {
        self.show_model_modal = false;
        self.editing_model = None;
    }

    /// Show the brokerage modal targeting `brokerage_id`; `None` puts the
    /// dialog in create mode. Flag and target change in the same call.
    pub fn open_brokerage_modal(&mut self, brokerage_id: Option<String>) {
        self.editing_brokerage = brokerage_id;
        self.show_brokerage_modal = true;
    }

    /// Hide the brokerage modal and clear its target
    pub fn close_brokerage_modal(&mut self) {
        self.show_brokerage_modal = false;
        self.editing_brokerage = None;
    }

    /// Whether any of the four dialogs is currently visible
    pub fn any_modal_open(&self) -> bool {
        self.show_create_modal
            || self.show_edit_modal
            || self.show_model_modal
            || self.show_brokerage_modal
    }

    /// Restore all fields to their initial values (all hidden, no targets)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trader() -> TraderConfig {
        TraderConfig {
            id: "trader::1702516122000".to_string(),
            name: "Momentum scalper".to_string(),
            description: "Intraday momentum on large caps".to_string(),
            model_id: Some("model::1".to_string()),
            brokerage_id: Some("bk_1".to_string()),
            is_active: true,
            created_at: "2023-12-14T01:08:42Z".to_string(),
        }
    }

    #[test]
    fn test_new_state_has_everything_hidden() {
        let state = ModalState::new();
        assert!(!state.show_create_modal);
        assert!(!state.show_edit_modal);
        assert!(!state.show_model_modal);
        assert!(!state.show_brokerage_modal);
        assert_eq!(state.editing_model, None);
        assert_eq!(state.editing_brokerage, None);
        assert_eq!(state.editing_trader, None);
        assert!(!state.any_modal_open());
    }

    #[test]
    fn test_setters_apply_in_call_order() {
        let mut state = ModalState::new();
        state.set_show_create_modal(true);
        state.set_show_create_modal(false);
        state.set_show_edit_modal(true);
        state.set_show_model_modal(true);
        state.set_show_brokerage_modal(true);
        state.set_show_brokerage_modal(false);
        state.set_editing_model(Some("model::7".to_string()));
        state.set_editing_model(Some("model::9".to_string()));
        state.set_editing_brokerage(Some("bk_42".to_string()));
        state.set_editing_trader(Some(sample_trader()));
        state.set_editing_trader(None);

        assert!(!state.show_create_modal);
        assert!(state.show_edit_modal);
        assert!(state.show_model_modal);
        assert!(!state.show_brokerage_modal);
        assert_eq!(state.editing_model.as_deref(), Some("model::9"));
        assert_eq!(state.editing_brokerage.as_deref(), Some("bk_42"));
        assert_eq!(state.editing_trader, None);
    }

    #[test]
    fn test_setters_do_not_touch_unrelated_fields() {
        let mut state = ModalState::new();
        state.open_model_modal(Some("model::7".to_string()));
        state.open_brokerage_modal(Some("bk_42".to_string()));
        state.set_editing_trader(Some(sample_trader()));

        state.set_show_edit_modal(true);

        assert!(state.show_model_modal);
        assert_eq!(state.editing_model.as_deref(), Some("model::7"));
        assert!(state.show_brokerage_modal);
        assert_eq!(state.editing_brokerage.as_deref(), Some("bk_42"));
        assert_eq!(state.editing_trader, Some(sample_trader()));
        assert!(!state.show_create_modal);
    }

    #[test]
    fn test_open_model_modal_with_target() {
        let mut state = ModalState::new();
        state.open_model_modal(Some("model::7".to_string()));
        assert!(state.show_model_modal);
        assert_eq!(state.editing_model.as_deref(), Some("model::7"));
    }

    #[test]
    fn test_open_model_modal_create_mode() {
        let mut state = ModalState::new();
        state.open_model_modal(None);
        assert!(state.show_model_modal);
        assert_eq!(state.editing_model, None);
    }

    #[test]
    fn test_reopen_model_modal_replaces_target() {
        let mut state = ModalState::new();
        state.open_model_modal(Some("model::7".to_string()));
        state.open_model_modal(Some("model::8".to_string()));
        assert!(state.show_model_modal);
        assert_eq!(state.editing_model.as_deref(), Some("model::8"));
    }

    #[test]
    fn test_close_model_modal_clears_target_from_any_state() {
        let mut state = ModalState::new();
        state.open_model_modal(Some("model::7".to_string()));
        state.close_model_modal();
        assert!(!state.show_model_modal);
        assert_eq!(state.editing_model, None);

        // Closing an already-closed modal is a no-op
        let after_first_close = state.clone();
        state.close_model_modal();
        assert_eq!(state, after_first_close);
    }

    #[test]
    fn test_brokerage_open_close_scenario() {
        let initial = ModalState::new();
        let mut state = initial.clone();

        state.open_brokerage_modal(Some("bk_42".to_string()));
        assert!(state.show_brokerage_modal);
        assert_eq!(state.editing_brokerage.as_deref(), Some("bk_42"));
        // Everything else untouched
        assert!(!state.show_create_modal);
        assert!(!state.show_edit_modal);
        assert!(!state.show_model_modal);
        assert_eq!(state.editing_model, None);
        assert_eq!(state.editing_trader, None);

        state.close_brokerage_modal();
        assert_eq!(state, initial);
    }

    #[test]
    fn test_edit_trader_fields_stay_independent() {
        // The trader pair has no open/close operation; the two setters must
        // be callable in either order without touching each other.
        let mut state = ModalState::new();
        state.set_editing_trader(Some(sample_trader()));
        assert!(!state.show_edit_modal);

        state.set_show_edit_modal(true);
        assert_eq!(state.editing_trader, Some(sample_trader()));

        state.set_show_edit_modal(false);
        // Closing the flag alone does not clear the target
        assert_eq!(state.editing_trader, Some(sample_trader()));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = ModalState::new();
        state.set_show_create_modal(true);
        state.set_show_edit_modal(true);
        state.open_model_modal(Some("model::7".to_string()));
        state.open_brokerage_modal(Some("bk_42".to_string()));
        state.set_editing_trader(Some(sample_trader()));

        state.reset();
        assert_eq!(state, ModalState::new());
    }

    #[test]
    fn test_any_modal_open_tracks_each_flag() {
        let mut state = ModalState::new();
        assert!(!state.any_modal_open());
        state.set_show_create_modal(true);
        assert!(state.any_modal_open());
        state.set_show_create_modal(false);
        state.open_brokerage_modal(None);
        assert!(state.any_modal_open());
        state.close_brokerage_modal();
        assert!(!state.any_modal_open());
    }
}
