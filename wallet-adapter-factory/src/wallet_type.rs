use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use wallet_adapter_backpack::BackpackWallet;
use wallet_adapter_common::SignMessageShape;
use wallet_adapter_huobi::HuobiWallet;
use wallet_adapter_injected::InjectedWallet;
use wallet_adapter_phantom::PhantomWallet;
use wallet_adapter_solflare::SolflareWallet;
use wallet_adapter_sollet::SolletWallet;
use wallet_adapter_unsafe_burner::UnsafeBurnerWallet;

/// Wallets the factory knows how to build.
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
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum WalletType {
    #[default]
    Phantom,
    Solflare,
    Sollet,
    Huobi,
    Backpack,
    #[strum(to_string = "unsafe-burner", serialize = "burner")]
    #[serde(alias = "burner")]
    UnsafeBurner,
}

impl WalletType {
    fn with_wallet<T>(self, f: impl FnOnce(&dyn WalletInfo) -> T) -> T {
        match self {
            WalletType::Phantom => f(&PhantomWallet),
            WalletType::Solflare => f(&SolflareWallet),
            WalletType::Sollet => f(&SolletWallet),
            WalletType::Huobi => f(&HuobiWallet),
            WalletType::Backpack => f(&BackpackWallet),
            WalletType::UnsafeBurner => f(&UnsafeBurnerWallet),
        }
    }

    /// Display name of the wallet, as its adapter reports it.
    pub fn name(self) -> String {
        self.with_wallet(|w| w.name())
    }

    /// Global the extension injects itself under.
    pub fn namespace(self) -> &'static str {
        self.with_wallet(|w| w.namespace())
    }

    pub fn marker_flag(self) -> Option<&'static str> {
        self.with_wallet(|w| w.marker_flag())
    }

    pub fn sign_message_shape(self) -> SignMessageShape {
        self.with_wallet(|w| w.sign_message_shape())
    }
}

// `InjectedWallet` is `Clone`, so it can't be a trait object.
trait WalletInfo {
    fn name(&self) -> String;
    fn namespace(&self) -> &'static str;
    fn marker_flag(&self) -> Option<&'static str>;
    fn sign_message_shape(&self) -> SignMessageShape;
}

impl<W: InjectedWallet> WalletInfo for W {
    fn name(&self) -> String {
        InjectedWallet::name(self)
    }

    fn namespace(&self) -> &'static str {
        InjectedWallet::namespace(self)
    }

    fn marker_flag(&self) -> Option<&'static str> {
        InjectedWallet::marker_flag(self)
    }

    fn sign_message_shape(&self) -> SignMessageShape {
        InjectedWallet::sign_message_shape(self)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_cli_names() {
        assert_eq!(WalletType::from_str("phantom").unwrap(), WalletType::Phantom);
        assert_eq!(WalletType::from_str("Huobi").unwrap(), WalletType::Huobi);
        assert_eq!(WalletType::from_str("burner").unwrap(), WalletType::UnsafeBurner);
        assert_eq!(
            WalletType::from_str("unsafe-burner").unwrap(),
            WalletType::UnsafeBurner
        );
        assert!(WalletType::from_str("metamask").is_err());
    }

    #[test]
    fn display_round_trips() {
        for wallet_type in WalletType::iter() {
            assert_eq!(
                WalletType::from_str(&wallet_type.to_string()).unwrap(),
                wallet_type
            );
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&WalletType::UnsafeBurner).unwrap(),
            "\"unsafe-burner\""
        );
        let parsed: WalletType = serde_json::from_str("\"solflare\"").unwrap();
        assert_eq!(parsed, WalletType::Solflare);
    }

    #[test]
    fn namespaces_are_distinct() {
        let mut namespaces: Vec<_> = WalletType::iter().map(WalletType::namespace).collect();
        namespaces.sort();
        namespaces.dedup();
        assert_eq!(namespaces.len(), WalletType::iter().count());
    }

    #[test]
    fn describes_each_provider() {
        assert_eq!(WalletType::Phantom.namespace(), "solana");
        assert_eq!(WalletType::Phantom.marker_flag(), Some("isPhantom"));
        assert_eq!(WalletType::Sollet.marker_flag(), None);
        assert_eq!(WalletType::Backpack.sign_message_shape(), SignMessageShape::Raw);
        assert_eq!(WalletType::Huobi.sign_message_shape(), SignMessageShape::Structured);
        assert_eq!(WalletType::Huobi.name(), "Huobi");
    }
}
