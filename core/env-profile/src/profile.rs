// core/env-profile/src/profile.rs
// The environment endpoint record

use mcs_common::validate_http_url;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::key::{EnvKey, KeyKind};
use crate::literal::QuotedLiteral;
use crate::variant::EnvironmentVariant;

/// The `test` environment, exactly as the build tool consumes it.
pub const TEST_ENTRIES: [(EnvKey, &str); 9] = [
    (EnvKey::NodeEnv, "\"test\""),
    (EnvKey::BaseApi, "\"http://192.168.88.216:5002/\""),
    (EnvKey::BasePaymentGatewayApi, "\"http://192.168.88.41:8889/\""),
    (EnvKey::BasePaymentGatewayBscApi, "\"http://192.168.88.41:8892/\""),
    (EnvKey::BaseMainnetAddress, "\"https://filscan.io/tipset/dsn-detail\""),
    (EnvKey::BaseCalibrationAddress, "\"https://calibration.filscan.io/tipset/dsn-detail\""),
    (EnvKey::BasePolygonAddress, "\"https://mumbai.polygonscan.com/\""),
    (EnvKey::BaseBscAddress, "\"https://testnet.bscscan.com/\""),
    (EnvKey::BaseEcoApi, "\"http://192.168.88.216:5005/\""),
];

/// Immutable mapping of the nine profile keys to their quoted literals.
///
/// There is no mutating API: a profile is built once (from the built-in table,
/// from JSON, or from module text) and then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvProfile {
    #[serde(rename = "NODE_ENV")]
    node_env: QuotedLiteral,
    #[serde(rename = "BASE_API")]
    base_api: QuotedLiteral,
    #[serde(rename = "BASE_PAYMENT_GATEWAY_API")]
    base_payment_gateway_api: QuotedLiteral,
    #[serde(rename = "BASE_PAYMENT_GATEWAY_BSC_API")]
    base_payment_gateway_bsc_api: QuotedLiteral,
    #[serde(rename = "BASE_MAINNET_ADDRESS")]
    base_mainnet_address: QuotedLiteral,
    #[serde(rename = "BASE_CALIBRATION_ADDRESS")]
    base_calibration_address: QuotedLiteral,
    #[serde(rename = "BASE_POLYGON_ADDRESS")]
    base_polygon_address: QuotedLiteral,
    #[serde(rename = "BASE_BSC_ADDRESS")]
    base_bsc_address: QuotedLiteral,
    #[serde(rename = "BASE_ECO_API")]
    base_eco_api: QuotedLiteral,
}

impl EnvProfile {
    /// The built-in `test` profile.
    pub fn test() -> Self {
        let [node_env, base_api, base_payment_gateway_api, base_payment_gateway_bsc_api, base_mainnet_address, base_calibration_address, base_polygon_address, base_bsc_address, base_eco_api] =
            TEST_ENTRIES.map(|(_, raw)| QuotedLiteral::from_static(raw));

        Self {
            node_env,
            base_api,
            base_payment_gateway_api,
            base_payment_gateway_bsc_api,
            base_mainnet_address,
            base_calibration_address,
            base_polygon_address,
            base_bsc_address,
            base_eco_api,
        }
    }

    /// Resolve the profile for a deployment context. Only `test` ships values.
    pub fn for_variant(variant: EnvironmentVariant) -> Result<Self, ProfileError> {
        match variant {
            EnvironmentVariant::Test => Ok(Self::test()),
            other => Err(ProfileError::VariantUnavailable(other)),
        }
    }

    /// Resolve the profile for a variant name such as `"test"`.
    pub fn for_name(name: &str) -> Result<Self, ProfileError> {
        Self::for_variant(name.parse()?)
    }

    /// Build a profile from `(key, literal)` pairs; every key exactly once.
    pub fn from_entries<I>(entries: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = (EnvKey, QuotedLiteral)>,
    {
        let mut slots: [Option<QuotedLiteral>; 9] = Default::default();

        for (position, (key, value)) in entries.into_iter().enumerate() {
            let slot = &mut slots[key.index()];
            if slot.is_some() {
                return Err(ProfileError::DuplicateKey { key, line: position + 1 });
            }
            *slot = Some(value);
        }

        let mut take = |key: EnvKey| slots[key.index()].take().ok_or(ProfileError::MissingKey(key));

        Ok(Self {
            node_env: take(EnvKey::NodeEnv)?,
            base_api: take(EnvKey::BaseApi)?,
            base_payment_gateway_api: take(EnvKey::BasePaymentGatewayApi)?,
            base_payment_gateway_bsc_api: take(EnvKey::BasePaymentGatewayBscApi)?,
            base_mainnet_address: take(EnvKey::BaseMainnetAddress)?,
            base_calibration_address: take(EnvKey::BaseCalibrationAddress)?,
            base_polygon_address: take(EnvKey::BasePolygonAddress)?,
            base_bsc_address: take(EnvKey::BaseBscAddress)?,
            base_eco_api: take(EnvKey::BaseEcoApi)?,
        })
    }

    pub fn get(&self, key: EnvKey) -> &QuotedLiteral {
        match key {
            EnvKey::NodeEnv => &self.node_env,
            EnvKey::BaseApi => &self.base_api,
            EnvKey::BasePaymentGatewayApi => &self.base_payment_gateway_api,
            EnvKey::BasePaymentGatewayBscApi => &self.base_payment_gateway_bsc_api,
            EnvKey::BaseMainnetAddress => &self.base_mainnet_address,
            EnvKey::BaseCalibrationAddress => &self.base_calibration_address,
            EnvKey::BasePolygonAddress => &self.base_polygon_address,
            EnvKey::BaseBscAddress => &self.base_bsc_address,
            EnvKey::BaseEcoApi => &self.base_eco_api,
        }
    }

    /// Look a key up by its exact (case-sensitive) name.
    pub fn lookup(&self, name: &str) -> Result<&QuotedLiteral, ProfileError> {
        Ok(self.get(name.parse()?))
    }

    /// All entries in record order.
    pub fn entries(&self) -> impl Iterator<Item = (EnvKey, &QuotedLiteral)> + '_ {
        EnvKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// The environment this profile declares in `NODE_ENV`.
    pub fn environment(&self) -> Result<EnvironmentVariant, ProfileError> {
        self.node_env.unquoted().parse()
    }

    /// Check that `NODE_ENV` names a known environment and every other value is an http(s) URL.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (key, value) in self.entries() {
            match key.kind() {
                KeyKind::EnvironmentName => {
                    value
                        .unquoted()
                        .parse::<EnvironmentVariant>()
                        .map_err(|e| ProfileError::InvalidValue {
                            key,
                            reason: e.to_string(),
                        })?;
                }
                KeyKind::ServiceOrigin | KeyKind::ExplorerAddress => {
                    validate_http_url(value.unquoted()).map_err(|e| ProfileError::InvalidValue {
                        key,
                        reason: e.to_string(),
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Origins worth probing for reachability, as `(key name, url)` pairs.
    pub fn service_origins(&self) -> Vec<(String, String)> {
        self.entries()
            .filter(|(key, _)| key.kind() == KeyKind::ServiceOrigin)
            .map(|(key, value)| (key.as_str().to_string(), value.unquoted().to_string()))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse JSON and validate the values; unknown, duplicate or missing keys are errors.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }
}
