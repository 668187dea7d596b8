//! Phantom injects `window.solana`, which other extensions also claim, so
//! detection relies on the `isPhantom` marker.

use wallet_adapter_base::WalletAdapter;
use wallet_adapter_common::{Environment, SignMessageShape, WalletAdapterNetwork};
use wallet_adapter_injected::{InjectedWallet, InjectedWalletAdapter};

#[derive(Debug, Clone, PartialEq)]
pub struct PhantomWallet;

impl InjectedWallet for PhantomWallet {
    fn name(&self) -> String {
        "Phantom".into()
    }

    fn url(&self) -> String {
        "https://phantom.app".into()
    }

    fn icon(&self) -> String {
        "/assets/icons/phantom.svg".into()
    }

    fn namespace(&self) -> &'static str {
        "solana"
    }

    fn marker_flag(&self) -> Option<&'static str> {
        Some("isPhantom")
    }

    fn sign_message_shape(&self) -> SignMessageShape {
        SignMessageShape::Structured
    }
}

#[derive(Debug, Clone)]
pub struct PhantomWalletAdapter {
    adapter: InjectedWalletAdapter<PhantomWallet>,
}

impl PhantomWalletAdapter {
    pub fn new(environment: &dyn Environment, network: Option<WalletAdapterNetwork>) -> Self {
        Self {
            adapter: InjectedWalletAdapter::new(PhantomWallet, environment, network),
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

    use wallet_adapter_base::WalletReadyState;
    use wallet_adapter_injected::InjectedEnvironment;
    use wallet_adapter_unsafe_burner::BurnerProvider;

    use super::*;

    #[test]
    fn shared_solana_namespace_needs_the_phantom_marker() {
        let env = InjectedEnvironment::new();
        env.inject("solana", Arc::new(BurnerProvider::new().with_flag("isMathWallet")));
        assert!(!PhantomWalletAdapter::new(&env, None).is_detected());

        env.inject("solana", Arc::new(BurnerProvider::new().with_flag("isPhantom")));
        let adapter = PhantomWalletAdapter::new(&env, None).to_dyn_adapter();
        assert_eq!(adapter.ready_state(), WalletReadyState::Installed);
        assert_eq!(adapter.url(), "https://phantom.app");
    }

    #[tokio::test]
    async fn structured_message_signature_is_flattened() {
        let env = InjectedEnvironment::new();
        let provider = Arc::new(
            BurnerProvider::new()
                .with_flag("isPhantom")
                .with_sign_message_shape(SignMessageShape::Structured),
        );
        env.inject("solana", provider.clone());
        let adapter = PhantomWalletAdapter::new(&env, None).to_dyn_adapter();

        adapter.connect().await.unwrap();
        let signature = adapter.sign_message(b"gm").await.unwrap();

        assert!(signature.verify(provider.account().as_ref(), b"gm"));
    }
}
