//! Huobi Wallet browser extension.
//!
//! The extension injects `window.huobiWallet` and marks it with
//! `isHuobiWallet`. Its `signMessage` resolves to `{ signature }`, which the
//! adapter flattens into a plain [`Signature`](solana_sdk::signature::Signature).

use wallet_adapter_base::WalletAdapter;
use wallet_adapter_common::{Environment, SignMessageShape, SigningApi, WalletAdapterNetwork};
use wallet_adapter_injected::{InjectedWallet, InjectedWalletAdapter};

#[derive(Debug, Clone, PartialEq)]
pub struct HuobiWallet;

impl InjectedWallet for HuobiWallet {
    fn name(&self) -> String {
        "Huobi".into()
    }

    fn url(&self) -> String {
        "https://www.huobiwallet.io".into()
    }

    fn icon(&self) -> String {
        "/assets/icons/huobiwallet.svg".into()
    }

    fn namespace(&self) -> &'static str {
        "huobiWallet"
    }

    fn marker_flag(&self) -> Option<&'static str> {
        Some("isHuobiWallet")
    }

    fn signing_api(&self) -> SigningApi {
        SigningApi::Request
    }

    fn sign_message_shape(&self) -> SignMessageShape {
        SignMessageShape::Structured
    }
}

#[derive(Debug, Clone)]
pub struct HuobiWalletAdapter {
    adapter: InjectedWalletAdapter<HuobiWallet>,
}

impl HuobiWalletAdapter {
    pub fn new(environment: &dyn Environment, network: Option<WalletAdapterNetwork>) -> Self {
        let adapter = InjectedWalletAdapter::new(HuobiWallet, environment, network);
        tracing::debug!("huobi adapter created, detected: {}", adapter.is_detected());
        Self { adapter }
    }

    pub fn is_detected(&self) -> bool {
        self.adapter.is_detected()
    }

    pub fn adapter(&self) -> &InjectedWalletAdapter<HuobiWallet> {
        &self.adapter
    }

    pub fn to_dyn_adapter(&self) -> Box<dyn WalletAdapter> {
        Box::new(self.adapter.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use solana_sdk::{
        hash::Hash, message::Message, pubkey::Pubkey, system_instruction, transaction::Transaction,
    };
    use wallet_adapter_base::{
        BaseWalletAdapter, WalletAdapterEvent, WalletAdapterEventKind, WalletReadyState,
        DEFAULT_PUBLIC_KEY,
    };
    use wallet_adapter_common::{InjectedProvider, ProviderEventKind};
    use wallet_adapter_injected::InjectedEnvironment;
    use wallet_adapter_unsafe_burner::BurnerProvider;

    use super::*;

    fn huobi_extension() -> (InjectedEnvironment, Arc<BurnerProvider>) {
        let env = InjectedEnvironment::new();
        let provider = Arc::new(
            BurnerProvider::new()
                .with_flag("isHuobiWallet")
                .with_sign_message_shape(SignMessageShape::Structured),
        );
        env.inject("huobiWallet", provider.clone());
        (env, provider)
    }

    fn transaction(payer: &Pubkey) -> Transaction {
        let message = Message::new_with_blockhash(
            &[system_instruction::transfer(payer, &Pubkey::new_unique(), 1_000)],
            Some(payer),
            &Hash::new_unique(),
        );
        Transaction::new_unsigned(message)
    }

    #[test]
    fn other_extensions_in_the_namespace_are_ignored() {
        let env = InjectedEnvironment::new();
        env.inject("huobiWallet", Arc::new(BurnerProvider::new()));

        let adapter = HuobiWalletAdapter::new(&env, None);

        assert!(!adapter.is_detected());
        assert_eq!(adapter.adapter().ready_state(), WalletReadyState::NotDetected);
    }

    #[tokio::test]
    async fn full_session() {
        let (env, provider) = huobi_extension();
        let adapter =
            HuobiWalletAdapter::new(&env, Some(WalletAdapterNetwork::Mainnet)).to_dyn_adapter();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        adapter.on(
            WalletAdapterEventKind::Connect,
            Arc::new(move |event: &WalletAdapterEvent| s.lock().unwrap().push(event.clone())),
        );

        assert_eq!(adapter.name(), "Huobi");
        assert_eq!(adapter.public_key(), DEFAULT_PUBLIC_KEY);
        assert!(adapter.auto_approve());

        adapter.connect().await.unwrap();
        adapter.connect().await.unwrap();

        assert!(adapter.connected());
        assert_eq!(adapter.public_key(), provider.account());
        assert_eq!(provider.listener_count(ProviderEventKind::Connect).unwrap(), 1);
        assert_eq!(provider.listener_count(ProviderEventKind::Disconnect).unwrap(), 1);
        // the second connect found the provider already connected
        assert_eq!(seen.lock().unwrap().len(), 1);

        let signature = adapter.sign_message(b"notifi login").await.unwrap();
        assert!(signature.verify(provider.account().as_ref(), b"notifi login"));

        let signed = adapter
            .sign_transaction(transaction(&provider.account()))
            .await
            .unwrap()
            .signed()
            .unwrap();
        assert!(signed.verify().is_ok());

        adapter.disconnect().await.unwrap();
        assert!(!adapter.connected());
    }

    #[tokio::test]
    async fn declined_signature_reaches_the_caller() {
        let (env, provider) = huobi_extension();
        let adapter = HuobiWalletAdapter::new(&env, None).to_dyn_adapter();
        adapter.connect().await.unwrap();

        provider.reject_next_request();
        let err = adapter.sign_message(b"x").await.unwrap_err();

        assert!(err.is_user_rejection());
        assert!(adapter.sign_message(b"x").await.is_ok());
    }
}
