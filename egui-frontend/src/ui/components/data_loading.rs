//! # Data Loading Module
//!
//! This module handles data loading for the trader console, interfacing
//! with the backend catalog to refresh application state.
//!
//! ## Key Functions:
//! - `load_initial_data()` - Load the full catalog on app startup
//! - `refresh_traders()` - Re-fetch the trader list after a mutation
//! - `refresh_catalogs()` - Re-fetch models and brokerages after a mutation

use log::info;

use crate::ui::app_state::TraderConsoleApp;

impl TraderConsoleApp {
    /// Load initial data. Any dialog state left over from a previous
    /// session is discarded before the first render.
    pub fn load_initial_data(&mut self) {
        info!("Loading initial catalog data");
        self.modals.reset();
        self.refresh_traders();
        self.refresh_catalogs();
        self.loading = false;
    }

    /// Re-fetch the trader list from the backend
    pub fn refresh_traders(&mut self) {
        self.traders = self.backend.list_traders();
        info!("Loaded {} traders", self.traders.len());
    }

    /// Re-fetch models and brokerages from the backend
    pub fn refresh_catalogs(&mut self) {
        self.models = self.backend.list_models();
        self.brokerages = self.backend.list_brokerages();
        info!(
            "Loaded {} models and {} brokerages",
            self.models.len(),
            self.brokerages.len()
        );
    }
}
