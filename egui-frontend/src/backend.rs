//! # Backend Module
//!
//! In-memory catalog of traders, decision models, and brokerage connections.
//!
//! ## Responsibilities:
//! - Hold the entity catalog the console edits
//! - Create/update operations with basic validation
//! - Lookup helpers for resolving identifiers to display names
//!
//! ## Purpose:
//! The console never dereferences entity identifiers itself; this seam is the
//! only place identifiers are resolved or mutated. It stands in for the
//! trading service the deployed product talks to.

use anyhow::{anyhow, Result};
use log::info;
use shared::{
    BrokerageSummary, CreateTraderRequest, ModelProvider, ModelSummary, TraderConfig,
    UpdateTraderRequest, UpsertBrokerageRequest, UpsertModelRequest,
};

pub struct Backend {
    traders: Vec<TraderConfig>,
    models: Vec<ModelSummary>,
    brokerages: Vec<BrokerageSummary>,
}

impl Backend {
    /// Create a backend seeded with the demo catalog
    pub fn new() -> Result<Self> {
        let models = vec![
            ModelSummary {
                id: format!("model::{}", uuid::Uuid::new_v4()),
                name: "Momentum v2".to_string(),
                provider: ModelProvider::Hosted,
            },
            ModelSummary {
                id: format!("model::{}", uuid::Uuid::new_v4()),
                name: "Mean reversion".to_string(),
                provider: ModelProvider::Rules,
            },
        ];
        let brokerages = vec![BrokerageSummary {
            id: format!("bk_{}", uuid::Uuid::new_v4()),
            name: "Paper broker".to_string(),
            paper_trading: true,
        }];

        info!(
            "Backend catalog ready: {} models, {} brokerages",
            models.len(),
            brokerages.len()
        );

        Ok(Self {
            traders: Vec::new(),
            models,
            brokerages,
        })
    }

    pub fn list_traders(&self) -> Vec<TraderConfig> {
        self.traders.clone()
    }

    pub fn list_models(&self) -> Vec<ModelSummary> {
        self.models.clone()
    }

    pub fn list_brokerages(&self) -> Vec<BrokerageSummary> {
        self.brokerages.clone()
    }

    pub fn model(&self, model_id: &str) -> Option<&ModelSummary> {
        self.models.iter().find(|m| m.id == model_id)
    }

    pub fn brokerage(&self, brokerage_id: &str) -> Option<&BrokerageSummary> {
        self.brokerages.iter().find(|b| b.id == brokerage_id)
    }

    /// Create a new trader configuration
    pub fn create_trader(&mut self, request: CreateTraderRequest) -> Result<TraderConfig> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(anyhow!("trader name must not be empty"));
        }
        if self.traders.iter().any(|t| t.name == name) {
            return Err(anyhow!("a trader named '{}' already exists", name));
        }

        let now = chrono::Local::now();
        let trader = TraderConfig {
            id: TraderConfig::generate_id(now.timestamp_millis()),
            name: name.to_string(),
            description: request.description,
            model_id: request.model_id,
            brokerage_id: request.brokerage_id,
            is_active: false,
            created_at: now.to_rfc3339(),
        };
        info!("Created trader {}", trader);
        self.traders.push(trader.clone());
        Ok(trader)
    }

    /// Update an existing trader configuration
    pub fn update_trader(&mut self, request: UpdateTraderRequest) -> Result<TraderConfig> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(anyhow!("trader name must not be empty"));
        }

        let trader = self
            .traders
            .iter_mut()
            .find(|t| t.id == request.trader_id)
            .ok_or_else(|| anyhow!("unknown trader id '{}'", request.trader_id))?;

        trader.name = name.to_string();
        trader.description = request.description;
        trader.model_id = request.model_id;
        trader.brokerage_id = request.brokerage_id;
        trader.is_active = request.is_active;
        info!("Updated trader {}", trader);
        Ok(trader.clone())
    }

    /// Create a model (no id in the request) or update an existing one
    pub fn upsert_model(&mut self, request: UpsertModelRequest) -> Result<ModelSummary> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(anyhow!("model name must not be empty"));
        }

        match request.model_id {
            Some(model_id) => {
                let model = self
                    .models
                    .iter_mut()
                    .find(|m| m.id == model_id)
                    .ok_or_else(|| anyhow!("unknown model id '{}'", model_id))?;
                model.name = name.to_string();
                model.provider = request.provider;
                info!("Updated model '{}' ({})", model.name, model.id);
                Ok(model.clone())
            }
            None => {
                let model = ModelSummary {
                    id: format!("model::{}", uuid::Uuid::new_v4()),
                    name: name.to_string(),
                    provider: request.provider,
                };
                info!("Created model '{}' ({})", model.name, model.id);
                self.models.push(model.clone());
                Ok(model)
            }
        }
    }

    /// Create a brokerage connection (no id in the request) or update an
    /// existing one
    pub fn upsert_brokerage(
        &mut self,
        request: UpsertBrokerageRequest,
    ) -> Result<BrokerageSummary> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(anyhow!("brokerage name must not be empty"));
        }

        match request.brokerage_id {
            Some(brokerage_id) => {
                let brokerage = self
                    .brokerages
                    .iter_mut()
                    .find(|b| b.id == brokerage_id)
                    .ok_or_else(|| anyhow!("unknown brokerage id '{}'", brokerage_id))?;
                brokerage.name = name.to_string();
                brokerage.paper_trading = request.paper_trading;
                info!("Updated brokerage '{}' ({})", brokerage.name, brokerage.id);
                Ok(brokerage.clone())
            }
            None => {
                let brokerage = BrokerageSummary {
                    id: format!("bk_{}", uuid::Uuid::new_v4()),
                    name: name.to_string(),
                    paper_trading: request.paper_trading,
                };
                info!("Created brokerage '{}' ({})", brokerage.name, brokerage.id);
                self.brokerages.push(brokerage.clone());
                Ok(brokerage)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(name: &str) -> CreateTraderRequest {
        CreateTraderRequest {
            name: name.to_string(),
            description: String::new(),
            model_id: None,
            brokerage_id: None,
        }
    }

    #[test]
    fn test_create_trader_assigns_id_and_timestamp() {
        let mut backend = Backend::new().unwrap();
        let trader = backend.create_trader(create_request("Scalper")).unwrap();

        assert!(TraderConfig::parse_id(&trader.id).is_ok());
        assert!(!trader.is_active);
        assert_eq!(backend.list_traders().len(), 1);
    }

    #[test]
    fn test_create_trader_rejects_empty_and_duplicate_names() {
        let mut backend = Backend::new().unwrap();
        assert!(backend.create_trader(create_request("  ")).is_err());

        backend.create_trader(create_request("Scalper")).unwrap();
        assert!(backend.create_trader(create_request("Scalper")).is_err());
    }

    #[test]
    fn test_update_trader_roundtrip() {
        let mut backend = Backend::new().unwrap();
        let trader = backend.create_trader(create_request("Scalper")).unwrap();
        let model_id = backend.list_models()[0].id.clone();

        let updated = backend
            .update_trader(UpdateTraderRequest {
                trader_id: trader.id.clone(),
                name: "Scalper v2".to_string(),
                description: "Faster entries".to_string(),
                model_id: Some(model_id.clone()),
                brokerage_id: None,
                is_active: true,
            })
            .unwrap();

        assert_eq!(updated.name, "Scalper v2");
        assert_eq!(updated.model_id, Some(model_id));
        assert!(updated.is_active);
        assert_eq!(backend.list_traders()[0], updated);
    }

    #[test]
    fn test_update_trader_unknown_id_fails() {
        let mut backend = Backend::new().unwrap();
        let result = backend.update_trader(UpdateTraderRequest {
            trader_id: "trader::0".to_string(),
            name: "Ghost".to_string(),
            description: String::new(),
            model_id: None,
            brokerage_id: None,
            is_active: false,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_upsert_model_create_then_update() {
        let mut backend = Backend::new().unwrap();
        let created = backend
            .upsert_model(UpsertModelRequest {
                model_id: None,
                name: "Breakout".to_string(),
                provider: ModelProvider::Local,
            })
            .unwrap();

        let updated = backend
            .upsert_model(UpsertModelRequest {
                model_id: Some(created.id.clone()),
                name: "Breakout v2".to_string(),
                provider: ModelProvider::Hosted,
            })
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(backend.model(&created.id).unwrap().name, "Breakout v2");
    }

    #[test]
    fn test_upsert_brokerage_unknown_id_fails() {
        let mut backend = Backend::new().unwrap();
        let result = backend.upsert_brokerage(UpsertBrokerageRequest {
            brokerage_id: Some("bk_missing".to_string()),
            name: "Live broker".to_string(),
            paper_trading: false,
        });
        assert!(result.is_err());
    }
}
