use serde::{Deserialize, Serialize};
use std::fmt;

/// Trader ID in format: "trader::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderConfig {
    pub id: String,
    /// Display name of the trader configuration (max 64 characters)
    pub name: String,
    /// Free-form description of what this trader does
    pub description: String,
    /// ID of the decision model this trader runs against, if assigned
    pub model_id: Option<String>,
    /// ID of the brokerage this trader executes through, if assigned
    pub brokerage_id: Option<String>,
    /// Whether the trader is currently enabled for execution
    pub is_active: bool,
    /// Human-readable creation timestamp with timezone (RFC 3339)
    pub created_at: String,
}

impl TraderConfig {
    /// Generate a trader ID from an epoch-milliseconds timestamp
    pub fn generate_id(epoch_millis: i64) -> String {
        format!("trader::{}", epoch_millis)
    }

    /// Parse the epoch-milliseconds component out of a trader ID
    pub fn parse_id(id: &str) -> Result<i64, IdParseError> {
        let mut parts = id.split("::");
        match (parts.next(), parts.next(), parts.next()) {
            (Some("trader"), Some(millis), None) => millis
                .parse::<i64>()
                .map_err(|_| IdParseError::BadTimestamp(id.to_string())),
            _ => Err(IdParseError::BadFormat(id.to_string())),
        }
    }
}

impl fmt::Display for TraderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Errors from parsing entity identifiers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier '{0}' is not in the form <kind>::<epoch_millis>")]
    BadFormat(String),
    #[error("identifier '{0}' has a non-numeric timestamp component")]
    BadTimestamp(String),
}

/// Provider backing a decision model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    /// Hosted large-language-model API
    Hosted,
    /// Locally-served model endpoint
    Local,
    /// Deterministic rule-based strategy, no model call
    Rules,
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelProvider::Hosted => write!(f, "hosted"),
            ModelProvider::Local => write!(f, "local"),
            ModelProvider::Rules => write!(f, "rules"),
        }
    }
}

/// Summary of a decision model available to traders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: String,
    /// Display name of the model (max 64 characters)
    pub name: String,
    pub provider: ModelProvider,
}

/// Summary of a brokerage connection available to traders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerageSummary {
    pub id: String,
    /// Display name of the brokerage connection (max 64 characters)
    pub name: String,
    /// Whether this connection trades against a paper (simulated) account
    pub paper_trading: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTraderRequest {
    /// Display name for the new trader (max 64 characters)
    pub name: String,
    pub description: String,
    pub model_id: Option<String>,
    pub brokerage_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTraderRequest {
    /// ID of the trader being updated
    pub trader_id: String,
    pub name: String,
    pub description: String,
    pub model_id: Option<String>,
    pub brokerage_id: Option<String>,
    pub is_active: bool,
}

/// Create-or-update request for a decision model.
/// `model_id` absent means create; present means update that model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertModelRequest {
    pub model_id: Option<String>,
    pub name: String,
    pub provider: ModelProvider,
}

/// Create-or-update request for a brokerage connection.
/// `brokerage_id` absent means create; present means update that connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertBrokerageRequest {
    pub brokerage_id: Option<String>,
    pub name: String,
    pub paper_trading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_trader_id() {
        let id = TraderConfig::generate_id(1702516122000);
        assert_eq!(id, "trader::1702516122000");
    }

    #[test]
    fn test_parse_trader_id() {
        let millis = TraderConfig::parse_id("trader::1702516122000").unwrap();
        assert_eq!(millis, 1702516122000);
    }

    #[test]
    fn test_parse_trader_id_rejects_wrong_kind() {
        let err = TraderConfig::parse_id("model::1702516122000").unwrap_err();
        assert!(matches!(err, IdParseError::BadFormat(_)));
    }

    #[test]
    fn test_parse_trader_id_rejects_garbage_timestamp() {
        let err = TraderConfig::parse_id("trader::not-a-number").unwrap_err();
        assert!(matches!(err, IdParseError::BadTimestamp(_)));
    }

    #[test]
    fn test_parse_trader_id_rejects_extra_segments() {
        let err = TraderConfig::parse_id("trader::123::456").unwrap_err();
        assert!(matches!(err, IdParseError::BadFormat(_)));
    }

    #[test]
    fn test_model_provider_serde_tags() {
        let json = serde_json::to_string(&ModelProvider::Hosted).unwrap();
        assert_eq!(json, "\"hosted\"");
        let back: ModelProvider = serde_json::from_str("\"rules\"").unwrap();
        assert_eq!(back, ModelProvider::Rules);
    }

    #[test]
    fn test_model_provider_display() {
        assert_eq!(ModelProvider::Local.to_string(), "local");
    }
}
