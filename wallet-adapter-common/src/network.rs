use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum WalletAdapterNetwork {
    #[default]
    #[serde(rename = "mainnet-beta", alias = "mainnet")]
    #[strum(to_string = "mainnet-beta", serialize = "mainnet")]
    Mainnet,
    #[serde(rename = "devnet")]
    #[strum(serialize = "devnet")]
    Devnet,
    #[serde(rename = "testnet")]
    #[strum(serialize = "testnet")]
    Testnet,
    #[serde(rename = "localnet")]
    #[strum(serialize = "localnet")]
    Localnet,
}

impl WalletAdapterNetwork {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_cluster_names() {
        assert_eq!(
            WalletAdapterNetwork::from_str("mainnet").unwrap(),
            WalletAdapterNetwork::Mainnet
        );
        assert_eq!(
            WalletAdapterNetwork::from_str("mainnet-beta").unwrap(),
            WalletAdapterNetwork::Mainnet
        );
        assert_eq!(
            WalletAdapterNetwork::from_str("devnet").unwrap(),
            WalletAdapterNetwork::Devnet
        );
        assert!(WalletAdapterNetwork::from_str("moonnet").is_err());
    }

    #[test]
    fn display_uses_the_canonical_cluster_name() {
        assert_eq!(WalletAdapterNetwork::Mainnet.to_string(), "mainnet-beta");
        assert_eq!(WalletAdapterNetwork::Localnet.to_string(), "localnet");
    }

    #[test]
    fn serde_round_trips_with_cluster_names() {
        let json = serde_json::to_string(&WalletAdapterNetwork::Devnet).unwrap();
        assert_eq!(json, "\"devnet\"");
        let network: WalletAdapterNetwork = serde_json::from_str("\"mainnet\"").unwrap();
        assert_eq!(network, WalletAdapterNetwork::Mainnet);
    }
}
