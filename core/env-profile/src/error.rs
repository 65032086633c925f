// core/env-profile/src/error.rs

use mcs_common::ValidationError;
use thiserror::Error;

use crate::key::EnvKey;
use crate::network::Network;
use crate::variant::EnvironmentVariant;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("Unknown environment variant: {0}")]
    UnknownVariant(String),
    #[error("No profile is defined for the {0} environment")]
    VariantUnavailable(EnvironmentVariant),
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("No payment gateway is configured for {0}")]
    NoPaymentGateway(Network),
    #[error("No transaction explorer is configured for {0}")]
    NoTransactionExplorer(Network),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: EnvKey, reason: String },
    #[error("Missing key: {0}")]
    MissingKey(EnvKey),
    #[error("Duplicate key {key} on line {line}")]
    DuplicateKey { key: EnvKey, line: usize },
    #[error("Malformed module on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
