//! The native api surface a browser wallet extension injects into the page.
//!
//! Providers differ in which methods they actually expose, so every method
//! has a default that reports [`ProviderError::MethodMissing`]. Adapters are
//! expected to treat a missing method as a no-op or pass-through.

use std::sync::Arc;

use solana_sdk::{pubkey::Pubkey, transaction::Transaction};

use crate::{ProviderError, SignedMessage, WalletAdapterNetwork};

/// Arguments of a native event. The shape is provider specific and is
/// forwarded without interpretation.
pub type EventArgs = Vec<serde_json::Value>;

pub type ProviderListener = Arc<dyn Fn(&EventArgs) + Send + Sync>;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum ProviderEventKind {
    Connect,
    Disconnect,
}

/// How a provider takes transactions for signing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SigningApi {
    /// `signTransaction(tx)` and `signAllTransactions(txs)` on the provider.
    #[default]
    Native,
    /// `request(method, params)` with base58 encoded messages.
    Request,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Only set for providers that pick their signing endpoint per network
    /// (legacy web wallets such as the sollet extension).
    pub network: Option<WalletAdapterNetwork>,
}

#[async_trait::async_trait(?Send)]
pub trait InjectedProvider {
    /// Vendor marker check, e.g. `isPhantom` or `isHuobiWallet`.
    fn flag(&self, _name: &str) -> bool {
        false
    }

    fn public_key(&self) -> Option<Pubkey> {
        None
    }

    fn is_connected(&self) -> bool {
        false
    }

    fn auto_approve(&self) -> bool {
        false
    }

    async fn connect(&self, _options: ConnectOptions) -> Result<(), ProviderError> {
        Err(ProviderError::MethodMissing("connect"))
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        Err(ProviderError::MethodMissing("disconnect"))
    }

    async fn sign_message(&self, _message: &[u8]) -> Result<SignedMessage, ProviderError> {
        Err(ProviderError::MethodMissing("signMessage"))
    }

    async fn sign_transaction(
        &self,
        _transaction: Transaction,
    ) -> Result<Transaction, ProviderError> {
        Err(ProviderError::MethodMissing("signTransaction"))
    }

    async fn sign_all_transactions(
        &self,
        _transactions: Vec<Transaction>,
    ) -> Result<Vec<Transaction>, ProviderError> {
        Err(ProviderError::MethodMissing("signAllTransactions"))
    }

    fn on(
        &self,
        _event: ProviderEventKind,
        _listener: ProviderListener,
    ) -> Result<(), ProviderError> {
        Err(ProviderError::MethodMissing("on"))
    }

    /// Tells the provider which signing api its wallet uses. Providers with a
    /// single signing path ignore it.
    fn prefer_signing_api(&self, _api: SigningApi) {}

    /// Number of handlers registered for `event`, the `listeners(event).length`
    /// of an EventEmitter based provider.
    fn listener_count(&self, _event: ProviderEventKind) -> Result<usize, ProviderError> {
        Err(ProviderError::MethodMissing("listeners"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl InjectedProvider for Bare {}

    #[test]
    fn can_injected_provider_be_made_into_object() {
        let _provider: Option<Arc<dyn InjectedProvider>> = None;
    }

    #[test]
    fn bare_provider_reports_every_method_missing() {
        let provider = Bare;
        assert!(!provider.flag("isPhantom"));
        assert!(provider.public_key().is_none());
        assert!(!provider.is_connected());
        assert!(!provider.auto_approve());
        assert!(matches!(
            provider.listener_count(ProviderEventKind::Connect),
            Err(ProviderError::MethodMissing("listeners"))
        ));
    }

    #[test]
    fn event_names_match_native_names() {
        let name: &'static str = ProviderEventKind::Connect.into();
        assert_eq!(name, "connect");
        assert_eq!(ProviderEventKind::Disconnect.to_string(), "disconnect");
    }

    #[test]
    fn native_signing_is_the_default() {
        assert_eq!(SigningApi::default(), SigningApi::Native);
        // no-op unless the provider overrides it
        Bare.prefer_signing_api(SigningApi::Request);
    }
}
