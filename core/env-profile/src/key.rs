// core/env-profile/src/key.rs
// The closed set of profile keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// What a key's value points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// The environment tag itself (`NODE_ENV`)
    EnvironmentName,
    /// An origin URL that request paths are appended to
    ServiceOrigin,
    /// A public block/transaction browser
    ExplorerAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnvKey {
    #[serde(rename = "NODE_ENV")]
    NodeEnv,
    #[serde(rename = "BASE_API")]
    BaseApi,
    #[serde(rename = "BASE_PAYMENT_GATEWAY_API")]
    BasePaymentGatewayApi,
    #[serde(rename = "BASE_PAYMENT_GATEWAY_BSC_API")]
    BasePaymentGatewayBscApi,
    #[serde(rename = "BASE_MAINNET_ADDRESS")]
    BaseMainnetAddress,
    #[serde(rename = "BASE_CALIBRATION_ADDRESS")]
    BaseCalibrationAddress,
    #[serde(rename = "BASE_POLYGON_ADDRESS")]
    BasePolygonAddress,
    #[serde(rename = "BASE_BSC_ADDRESS")]
    BaseBscAddress,
    #[serde(rename = "BASE_ECO_API")]
    BaseEcoApi,
}

impl EnvKey {
    /// Every key, in record order.
    pub const ALL: [EnvKey; 9] = [
        EnvKey::NodeEnv,
        EnvKey::BaseApi,
        EnvKey::BasePaymentGatewayApi,
        EnvKey::BasePaymentGatewayBscApi,
        EnvKey::BaseMainnetAddress,
        EnvKey::BaseCalibrationAddress,
        EnvKey::BasePolygonAddress,
        EnvKey::BaseBscAddress,
        EnvKey::BaseEcoApi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::NodeEnv => "NODE_ENV",
            EnvKey::BaseApi => "BASE_API",
            EnvKey::BasePaymentGatewayApi => "BASE_PAYMENT_GATEWAY_API",
            EnvKey::BasePaymentGatewayBscApi => "BASE_PAYMENT_GATEWAY_BSC_API",
            EnvKey::BaseMainnetAddress => "BASE_MAINNET_ADDRESS",
            EnvKey::BaseCalibrationAddress => "BASE_CALIBRATION_ADDRESS",
            EnvKey::BasePolygonAddress => "BASE_POLYGON_ADDRESS",
            EnvKey::BaseBscAddress => "BASE_BSC_ADDRESS",
            EnvKey::BaseEcoApi => "BASE_ECO_API",
        }
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            EnvKey::NodeEnv => KeyKind::EnvironmentName,
            EnvKey::BaseApi
            | EnvKey::BasePaymentGatewayApi
            | EnvKey::BasePaymentGatewayBscApi
            | EnvKey::BaseEcoApi => KeyKind::ServiceOrigin,
            EnvKey::BaseMainnetAddress
            | EnvKey::BaseCalibrationAddress
            | EnvKey::BasePolygonAddress
            | EnvKey::BaseBscAddress => KeyKind::ExplorerAddress,
        }
    }

    /// Position of the key in the record.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvKey {
    type Err = ProfileError;

    /// Key names are case-sensitive: `base_api` is not `BASE_API`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnvKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ProfileError::UnknownKey(s.to_string()))
    }
}
