mod selection;
mod wallet_type;

use std::sync::Arc;

use wallet_adapter_backpack::{BackpackWallet, BackpackWalletAdapter};
use wallet_adapter_base::WalletAdapter;
use wallet_adapter_common::{Environment, Notifier, WalletAdapterNetwork};
use wallet_adapter_huobi::{HuobiWallet, HuobiWalletAdapter};
use wallet_adapter_injected::{InjectedWallet, NotInstalledAdapter};
use wallet_adapter_phantom::{PhantomWallet, PhantomWalletAdapter};
use wallet_adapter_solflare::{SolflareWallet, SolflareWalletAdapter};
use wallet_adapter_sollet::{SolletWallet, SolletWalletAdapter};
use wallet_adapter_unsafe_burner::{UnsafeBurnerWallet, UnsafeBurnerWalletAdapter};

pub use selection::WalletAdapterSelection;
pub use wallet_type::WalletType;

/// Builds the adapter for a wallet selection.
///
/// Every call returns a fresh adapter; nothing is shared between them apart
/// from the environment and the notifier.
#[derive(Clone)]
pub struct WalletAdapterFactory {
    environment: Arc<dyn Environment>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for WalletAdapterFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletAdapterFactory")
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl WalletAdapterFactory {
    pub fn new(environment: Arc<dyn Environment>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            environment,
            notifier,
        }
    }

    pub fn create(
        &self,
        wallet_type: WalletType,
        network: WalletAdapterNetwork,
    ) -> WalletAdapterSelection {
        let environment = self.environment.as_ref();
        let network = Some(network);

        let selection = match wallet_type {
            WalletType::Phantom => {
                let adapter = PhantomWalletAdapter::new(environment, network);
                self.select(adapter.is_detected(), || adapter.to_dyn_adapter(), &PhantomWallet)
            }
            WalletType::Solflare => {
                let adapter = SolflareWalletAdapter::new(environment, network);
                self.select(adapter.is_detected(), || adapter.to_dyn_adapter(), &SolflareWallet)
            }
            WalletType::Sollet => {
                let adapter = SolletWalletAdapter::new(environment, network);
                self.select(adapter.is_detected(), || adapter.to_dyn_adapter(), &SolletWallet)
            }
            WalletType::Huobi => {
                let adapter = HuobiWalletAdapter::new(environment, network);
                self.select(adapter.is_detected(), || adapter.to_dyn_adapter(), &HuobiWallet)
            }
            WalletType::Backpack => {
                let adapter = BackpackWalletAdapter::new(environment, network);
                self.select(adapter.is_detected(), || adapter.to_dyn_adapter(), &BackpackWallet)
            }
            WalletType::UnsafeBurner => {
                let adapter = UnsafeBurnerWalletAdapter::new(environment, network);
                self.select(
                    adapter.is_detected(),
                    || adapter.to_dyn_adapter(),
                    &UnsafeBurnerWallet,
                )
            }
        };

        tracing::debug!(
            "created {wallet_type} adapter, detected: {}",
            selection.is_detected()
        );

        selection
    }

    fn select(
        &self,
        detected: bool,
        adapter: impl FnOnce() -> Box<dyn WalletAdapter>,
        wallet: &impl InjectedWallet,
    ) -> WalletAdapterSelection {
        if detected {
            WalletAdapterSelection::Detected(adapter())
        } else {
            WalletAdapterSelection::NotInstalled(NotInstalledAdapter::new(
                wallet,
                self.notifier.clone(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::{
        hash::Hash, message::Message, pubkey::Pubkey, system_instruction, transaction::Transaction,
    };
    use strum::IntoEnumIterator;
    use wallet_adapter_base::{
        BaseWalletAdapter, WalletAdapterEvent, WalletAdapterEventKind, DEFAULT_PUBLIC_KEY,
    };
    use wallet_adapter_common::{NotificationType, RecordingNotifier};
    use wallet_adapter_injected::InjectedEnvironment;
    use wallet_adapter_unsafe_burner::BurnerProvider;

    use super::*;

    fn factory(env: &InjectedEnvironment) -> (WalletAdapterFactory, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let factory = WalletAdapterFactory::new(Arc::new(env.clone()), Arc::new(notifier.clone()));
        (factory, notifier)
    }

    /// Injects a burner posing as `wallet_type`'s extension.
    fn install(env: &InjectedEnvironment, wallet_type: WalletType) -> Arc<BurnerProvider> {
        let mut provider =
            BurnerProvider::new().with_sign_message_shape(wallet_type.sign_message_shape());
        if let Some(flag) = wallet_type.marker_flag() {
            provider = provider.with_flag(flag);
        }
        let provider = Arc::new(provider);
        env.inject(wallet_type.namespace(), provider.clone());
        provider
    }

    fn transaction(payer: &Pubkey) -> Transaction {
        let message = Message::new_with_blockhash(
            &[system_instruction::transfer(payer, &Pubkey::new_unique(), 7)],
            Some(payer),
            &Hash::new_unique(),
        );
        Transaction::new_unsigned(message)
    }

    #[tokio::test]
    async fn absent_extensions_get_the_install_prompt() {
        for wallet_type in WalletType::iter() {
            let env = InjectedEnvironment::new();
            let (factory, notifier) = factory(&env);

            let selection = factory.create(wallet_type, WalletAdapterNetwork::Mainnet);

            assert!(!selection.is_detected(), "{wallet_type}");
            assert!(selection.as_wallet_adapter().is_none());
            assert_eq!(selection.public_key(), DEFAULT_PUBLIC_KEY);
            assert!(!selection.connected());

            selection.connect().await.unwrap();

            let notifications = notifier.notifications();
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0].kind, NotificationType::Error);
            assert!(notifications[0]
                .description
                .as_deref()
                .unwrap()
                .contains("Please install"));
        }
    }

    #[tokio::test]
    async fn installed_extensions_get_the_full_contract() {
        for wallet_type in WalletType::iter() {
            let env = InjectedEnvironment::new();
            let provider = install(&env, wallet_type);
            let (factory, notifier) = factory(&env);

            let selection = factory.create(wallet_type, WalletAdapterNetwork::Devnet);
            assert!(selection.is_detected(), "{wallet_type}");
            assert_eq!(selection.name(), wallet_type.name());

            selection.connect().await.unwrap();
            assert!(selection.connected());
            assert_eq!(selection.public_key(), provider.account());

            let adapter = selection.as_wallet_adapter().unwrap();
            let signature = adapter.sign_message(b"hello").await.unwrap();
            assert!(signature.verify(provider.account().as_ref(), b"hello"));

            let tx = transaction(&provider.account());
            let signed = adapter.sign_transaction(tx).await.unwrap();
            assert!(signed.is_signed());

            assert!(notifier.notifications().is_empty());
        }
    }

    #[test]
    fn calls_return_independent_adapters() {
        let env = InjectedEnvironment::new();
        install(&env, WalletType::Phantom);
        let (factory, _) = factory(&env);

        let first = factory.create(WalletType::Phantom, WalletAdapterNetwork::Mainnet);
        let second = factory.create(WalletType::Phantom, WalletAdapterNetwork::Mainnet);

        first.on(
            WalletAdapterEventKind::Connect,
            Arc::new(|_: &WalletAdapterEvent| {}),
        );
        let connect_listeners = |selection: &WalletAdapterSelection| {
            selection
                .event_emitter()
                .listener_count(WalletAdapterEventKind::Connect)
        };
        assert_eq!(connect_listeners(&first), 1);
        assert_eq!(connect_listeners(&second), 0);
    }
}
