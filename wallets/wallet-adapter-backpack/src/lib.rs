use wallet_adapter_base::WalletAdapter;
use wallet_adapter_common::{Environment, SignMessageShape, WalletAdapterNetwork};
use wallet_adapter_injected::{InjectedWallet, InjectedWalletAdapter};

#[derive(Debug, Clone, PartialEq)]
pub struct BackpackWallet;

impl InjectedWallet for BackpackWallet {
    fn name(&self) -> String {
        "Backpack".into()
    }

    fn url(&self) -> String {
        "https://backpack.app".into()
    }

    fn icon(&self) -> String {
        "/assets/icons/backpack.svg".into()
    }

    fn namespace(&self) -> &'static str {
        "backpack"
    }

    fn marker_flag(&self) -> Option<&'static str> {
        Some("isBackpack")
    }

    fn sign_message_shape(&self) -> SignMessageShape {
        SignMessageShape::Raw
    }
}

#[derive(Debug, Clone)]
pub struct BackpackWalletAdapter {
    adapter: InjectedWalletAdapter<BackpackWallet>,
}

impl BackpackWalletAdapter {
    pub fn new(environment: &dyn Environment, network: Option<WalletAdapterNetwork>) -> Self {
        Self {
            adapter: InjectedWalletAdapter::new(BackpackWallet, environment, network),
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

    #[tokio::test]
    async fn raw_message_signatures_are_accepted() {
        let env = InjectedEnvironment::new();
        let provider = Arc::new(BurnerProvider::new().with_flag("isBackpack"));
        env.inject("backpack", provider.clone());

        let adapter = BackpackWalletAdapter::new(&env, None).to_dyn_adapter();
        adapter.connect().await.unwrap();

        let signature = adapter.sign_message(b"gm").await.unwrap();
        assert!(signature.verify(provider.account().as_ref(), b"gm"));
    }
}
