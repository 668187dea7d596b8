
use wallet_adapter_base::WalletAdapter;
use wallet_adapter_common::{Environment, SignMessageShape, WalletAdapterNetwork};
use wallet_adapter_injected::{InjectedWallet, InjectedWalletAdapter};

#[derive(Debug, Clone, PartialEq)]
pub struct SolflareWallet;

impl InjectedWallet for SolflareWallet {
    fn name(&self) -> String {
        "Solflare".into()
    }

    fn url(&self) -> String {
        "https://solflare.com".into()
    }

    fn icon(&self) -> String {
        "/assets/icons/solflare.svg".into()
    }

    fn namespace(&self) -> &'static str {
        "solflare"
    }

    fn marker_flag(&self) -> Option<&'static str> {
        Some("isSolflare")
    }

    fn sign_message_shape(&self) -> SignMessageShape {
        SignMessageShape::Structured
    }
}

#[derive(Debug, Clone)]
pub struct SolflareWalletAdapter {
    adapter: InjectedWalletAdapter<SolflareWallet>,
}

impl SolflareWalletAdapter {
    pub fn new(environment: &dyn Environment, network: Option<WalletAdapterNetwork>) -> Self {
        Self {
            adapter: InjectedWalletAdapter::new(SolflareWallet, environment, network),
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

    use wallet_adapter_base::DEFAULT_PUBLIC_KEY;
    use wallet_adapter_injected::InjectedEnvironment;
    use wallet_adapter_unsafe_burner::BurnerProvider;

    use super::*;

    #[tokio::test]
    async fn connects_through_the_solflare_namespace() {
        let env = InjectedEnvironment::new();
        let provider = Arc::new(
            BurnerProvider::new()
                .with_flag("isSolflare")
                .with_sign_message_shape(SignMessageShape::Structured),
        );
        env.inject("solflare", provider.clone());

        let adapter = SolflareWalletAdapter::new(&env, None).to_dyn_adapter();
        assert_eq!(adapter.public_key(), DEFAULT_PUBLIC_KEY);

        adapter.connect().await.unwrap();
        assert_eq!(adapter.public_key(), provider.account());
    }
}
