// core/env-profile/src/network.rs
// Routing from a payment network name to the profile's gateway and explorer

use mcs_common::validate_evm_tx_hash;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;
use crate::key::EnvKey;
use crate::profile::EnvProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[serde(rename = "mainnet")]
    FilecoinMainnet,
    #[serde(rename = "calibration")]
    FilecoinCalibration,
    Polygon,
    Bsc,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::FilecoinMainnet,
        Network::FilecoinCalibration,
        Network::Polygon,
        Network::Bsc,
    ];

    /// Name as sent in a `network_name` form field.
    pub fn name(&self) -> &'static str {
        match self {
            Network::FilecoinMainnet => "mainnet",
            Network::FilecoinCalibration => "calibration",
            Network::Polygon => "polygon",
            Network::Bsc => "bsc",
        }
    }

    /// Accepts the network names case-insensitively, surrounding whitespace ignored.
    pub fn from_name(name: &str) -> Result<Self, ProfileError> {
        let wanted = name.trim().to_ascii_lowercase();
        Network::ALL
            .iter()
            .copied()
            .find(|n| n.name() == wanted)
            .ok_or_else(|| ProfileError::UnknownNetwork(name.to_string()))
    }

    pub fn explorer_key(&self) -> EnvKey {
        match self {
            Network::FilecoinMainnet => EnvKey::BaseMainnetAddress,
            Network::FilecoinCalibration => EnvKey::BaseCalibrationAddress,
            Network::Polygon => EnvKey::BasePolygonAddress,
            Network::Bsc => EnvKey::BaseBscAddress,
        }
    }

    /// Filecoin networks are paid through the EVM chains and have no gateway of their own.
    pub fn payment_gateway_key(&self) -> Option<EnvKey> {
        match self {
            Network::Polygon => Some(EnvKey::BasePaymentGatewayApi),
            Network::Bsc => Some(EnvKey::BasePaymentGatewayBscApi),
            Network::FilecoinMainnet | Network::FilecoinCalibration => None,
        }
    }

    pub fn is_evm(&self) -> bool {
        matches!(self, Network::Polygon | Network::Bsc)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_name(s)
    }
}

/// Join an origin and a path with exactly one `/` between them.
pub fn url_join(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl EnvProfile {
    pub fn explorer_base(&self, network: Network) -> &str {
        self.get(network.explorer_key()).unquoted()
    }

    pub fn payment_gateway(&self, network: Network) -> Result<&str, ProfileError> {
        network
            .payment_gateway_key()
            .map(|key| self.get(key).unquoted())
            .ok_or(ProfileError::NoPaymentGateway(network))
    }

    /// Explorer page for an EVM transaction (`<explorer>/tx/<hash>`).
    pub fn transaction_url(&self, network: Network, tx_hash: &str) -> Result<String, ProfileError> {
        if !network.is_evm() {
            return Err(ProfileError::NoTransactionExplorer(network));
        }
        validate_evm_tx_hash(tx_hash)?;
        Ok(url_join(self.explorer_base(network), &format!("tx/{}", tx_hash)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Network::from_name("polygon").unwrap(), Network::Polygon);
        assert_eq!(Network::from_name(" BSC ").unwrap(), Network::Bsc);
        assert_eq!(Network::from_name("Mainnet").unwrap(), Network::FilecoinMainnet);
        assert!(matches!(
            Network::from_name("ethereum"),
            Err(ProfileError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_payment_gateway_routing() {
        let profile = EnvProfile::test();

        assert_eq!(profile.payment_gateway(Network::Polygon).unwrap(), "http://192.168.88.41:8889/");
        assert_eq!(profile.payment_gateway(Network::Bsc).unwrap(), "http://192.168.88.41:8892/");
        assert!(matches!(
            profile.payment_gateway(Network::FilecoinCalibration),
            Err(ProfileError::NoPaymentGateway(Network::FilecoinCalibration))
        ));
    }

    #[test]
    fn test_explorer_base() {
        let profile = EnvProfile::test();

        assert_eq!(profile.explorer_base(Network::FilecoinMainnet), "https://filscan.io/tipset/dsn-detail");
        assert_eq!(profile.explorer_base(Network::Polygon), "https://mumbai.polygonscan.com/");
    }

    #[test]
    fn test_url_join() {
        assert_eq!(url_join("http://192.168.88.216:5002/", "api/v1/billing"), "http://192.168.88.216:5002/api/v1/billing");
        assert_eq!(url_join("http://192.168.88.216:5002", "/api/v1/billing"), "http://192.168.88.216:5002/api/v1/billing");
        assert_eq!(url_join("http://192.168.88.216:5002///", "//x"), "http://192.168.88.216:5002/x");
        assert_eq!(url_join("http://a.test/", ""), "http://a.test/");
    }

    #[test]
    fn test_transaction_url() {
        let profile = EnvProfile::test();
        let hash = format!("0x{}", "1f".repeat(32));

        assert_eq!(
            profile.transaction_url(Network::Bsc, &hash).unwrap(),
            format!("https://testnet.bscscan.com/tx/{}", hash)
        );
        assert!(matches!(
            profile.transaction_url(Network::Polygon, "0xabc"),
            Err(ProfileError::Validation(_))
        ));
        assert!(matches!(
            profile.transaction_url(Network::FilecoinMainnet, &hash),
            Err(ProfileError::NoTransactionExplorer(_))
        ));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Network::FilecoinCalibration).unwrap(), "\"calibration\"");
        assert_eq!(serde_json::to_string(&Network::Bsc).unwrap(), "\"bsc\"");
    }
}
