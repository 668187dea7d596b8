//! Sollet browser extension. It has no marker flag, the presence of
//! `window.sollet` is enough. The extension signs against the cluster it is
//! told to connect to, so the adapter passes the network along.

use wallet_adapter_base::WalletAdapter;
use wallet_adapter_common::{Environment, SignMessageShape, SigningApi, WalletAdapterNetwork};
use wallet_adapter_injected::{InjectedWallet, InjectedWalletAdapter};

#[derive(Debug, Clone, PartialEq)]
pub struct SolletWallet;

impl InjectedWallet for SolletWallet {
    fn name(&self) -> String {
        "Sollet".into()
    }

    fn url(&self) -> String {
        "https://www.sollet.io".into()
    }

    fn icon(&self) -> String {
        "/assets/icons/sollet.svg".into()
    }

    fn namespace(&self) -> &'static str {
        "sollet"
    }

    fn marker_flag(&self) -> Option<&'static str> {
        None
    }

    fn signing_api(&self) -> SigningApi {
        SigningApi::Request
    }

    fn sign_message_shape(&self) -> SignMessageShape {
        SignMessageShape::Raw
    }

    fn requires_network(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct SolletWalletAdapter {
    adapter: InjectedWalletAdapter<SolletWallet>,
}

impl SolletWalletAdapter {
    pub fn new(environment: &dyn Environment, network: Option<WalletAdapterNetwork>) -> Self {
        Self {
            adapter: InjectedWalletAdapter::new(SolletWallet, environment, network),
        }
    }

    pub fn is_detected(&self) -> bool {
        self.adapter.is_detected()
    }

    pub fn to_dyn_adapter(&self) -> Box<dyn WalletAdapter> {
        Box::new(self.adapter.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wallet_adapter_injected::InjectedEnvironment;
    use wallet_adapter_unsafe_burner::BurnerProvider;

    use super::*;

    #[test]
    fn presence_alone_is_enough() {
        let env = InjectedEnvironment::new();
        assert!(!SolletWalletAdapter::new(&env, Some(WalletAdapterNetwork::Devnet)).is_detected());

        env.inject("sollet", Arc::new(BurnerProvider::new()));
        assert!(SolletWalletAdapter::new(&env, Some(WalletAdapterNetwork::Devnet)).is_detected());
    }

    #[test]
    fn install_prompt_names_the_extension() {
        let notification = SolletWallet.install_notification();
        assert_eq!(notification.title, "Sollet Extension Error");
        assert_eq!(
            notification.description.as_deref(),
            Some("Please install the Sollet Extension for Chrome and then reload this page.")
        );
        assert!(SolletWallet.requires_network());
    }

    #[tokio::test]
    async fn connect_reaches_the_extension() {
        let env = InjectedEnvironment::new();
        let provider = Arc::new(BurnerProvider::new());
        env.inject("sollet", provider.clone());

        let adapter =
            SolletWalletAdapter::new(&env, Some(WalletAdapterNetwork::Devnet)).to_dyn_adapter();
        adapter.connect().await.unwrap();

        assert!(adapter.connected());
        assert_eq!(adapter.public_key(), provider.account());
    }
}
