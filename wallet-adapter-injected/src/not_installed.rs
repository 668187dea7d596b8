use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use wallet_adapter_base::{
    BaseWalletAdapter, WalletAdapterEventEmitter, WalletReadyState, DEFAULT_PUBLIC_KEY,
};
use wallet_adapter_common::{Notification, Notifier};

use crate::InjectedWallet;

/// Stand-in returned when a wallet extension can't be found.
///
/// Has no signing capability. `connect` asks the user to install the
/// extension through the notifier instead of failing.
#[derive(Debug, Clone)]
pub struct NotInstalledAdapter {
    name: String,
    url: String,
    icon: String,
    notification: Notification,
    notifier: Arc<dyn Notifier>,
    // never emits
    event_emitter: WalletAdapterEventEmitter,
}

impl NotInstalledAdapter {
    pub fn new(wallet: &impl InjectedWallet, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            name: wallet.name(),
            url: wallet.url(),
            icon: wallet.icon(),
            notification: wallet.install_notification(),
            notifier,
            event_emitter: WalletAdapterEventEmitter::new(),
        }
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }
}

#[async_trait::async_trait(?Send)]
impl BaseWalletAdapter for NotInstalledAdapter {
    fn event_emitter(&self) -> WalletAdapterEventEmitter {
        self.event_emitter.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn icon(&self) -> String {
        self.icon.clone()
    }

    fn ready_state(&self) -> WalletReadyState {
        WalletReadyState::NotDetected
    }

    fn public_key(&self) -> Pubkey {
        DEFAULT_PUBLIC_KEY
    }

    fn connected(&self) -> bool {
        false
    }

    async fn connect(&self) -> wallet_adapter_base::Result<()> {
        tracing::warn!("{} is not installed", self.name);
        self.notifier.notify(self.notification.clone());
        Ok(())
    }

    async fn disconnect(&self) -> wallet_adapter_base::Result<()> {
        Ok(())
    }
}
