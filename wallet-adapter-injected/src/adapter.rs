use std::collections::HashSet;
use std::sync::{Arc, Mutex, Weak};

use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::Transaction};
use wallet_adapter_base::{
    BaseMessageSignerWalletAdapter, BaseSignerWalletAdapter, BaseWalletAdapter, SignOutcome,
    WalletAdapterEvent, WalletAdapterEventEmitter, WalletError, WalletReadyState,
    DEFAULT_PUBLIC_KEY,
};
use wallet_adapter_common::{
    ConnectOptions, Environment, EventArgs, InjectedProvider, ProviderEventKind, ProviderListener,
    WalletAdapterNetwork,
};

use crate::InjectedWallet;

const EVENT_KINDS: [ProviderEventKind; 2] =
    [ProviderEventKind::Connect, ProviderEventKind::Disconnect];

/// Normalizes one injected provider onto the wallet adapter contract.
///
/// The provider is looked up once, at construction, and only a weak handle
/// is kept. Every property is read from the provider on access.
#[derive(Clone)]
pub struct InjectedWalletAdapter<W: InjectedWallet> {
    wallet: W,
    provider: Option<Weak<dyn InjectedProvider>>,
    network: Option<WalletAdapterNetwork>,
    event_emitter: WalletAdapterEventEmitter,
    // used when the provider can't report its own listeners
    subscribed: Arc<Mutex<HashSet<ProviderEventKind>>>,
}

impl<W: InjectedWallet> std::fmt::Debug for InjectedWalletAdapter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectedWalletAdapter")
            .field("wallet", &self.wallet)
            .field("detected", &self.is_detected())
            .field("network", &self.network)
            .field("event_emitter", &self.event_emitter)
            .finish()
    }
}

impl<W: InjectedWallet> InjectedWalletAdapter<W> {
    pub fn new(
        wallet: W,
        environment: &dyn Environment,
        network: Option<WalletAdapterNetwork>,
    ) -> Self {
        let provider = environment
            .provider(wallet.namespace())
            .filter(|provider| wallet.is_correct_wallet(provider.as_ref()));

        match &provider {
            Some(provider) => {
                tracing::debug!("wallet detected {}", wallet.name());
                provider.prefer_signing_api(wallet.signing_api());
            }
            None => tracing::debug!("wallet not detected {}", wallet.name()),
        }

        Self {
            provider: provider.map(|provider| Arc::downgrade(&provider)),
            wallet,
            network,
            event_emitter: WalletAdapterEventEmitter::new(),
            subscribed: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn network(&self) -> Option<WalletAdapterNetwork> {
        self.network
    }

    /// True while the provider found at construction is still alive.
    pub fn is_detected(&self) -> bool {
        self.provider().is_some()
    }

    fn provider(&self) -> Option<Arc<dyn InjectedProvider>> {
        self.provider.as_ref()?.upgrade()
    }

    fn is_subscribed(&self, kind: ProviderEventKind) -> bool {
        self.subscribed
            .lock()
            .map(|subscribed| subscribed.contains(&kind))
            .unwrap_or(false)
    }

    fn set_subscribed(&self, kind: ProviderEventKind) {
        if let Ok(mut subscribed) = self.subscribed.lock() {
            subscribed.insert(kind);
        }
    }

    fn forward(&self, kind: ProviderEventKind) -> ProviderListener {
        let event_emitter = self.event_emitter.clone();
        Arc::new(move |args: &EventArgs| {
            tracing::debug!("native {kind} event");
            event_emitter.emit(WalletAdapterEvent::new(kind, args.clone()));
        })
    }

    /// Registers the forwarding listener for `kind` unless the provider
    /// already has one. Any listener counts, including one left behind by
    /// another adapter.
    fn subscribe_once(
        &self,
        provider: &dyn InjectedProvider,
        kind: ProviderEventKind,
    ) -> wallet_adapter_base::Result<()> {
        let needs_listener = match provider.listener_count(kind) {
            Ok(count) => count == 0,
            Err(err) if err.is_method_missing() => !self.is_subscribed(kind),
            Err(err) => return Err(err.into()),
        };

        if !needs_listener {
            return Ok(());
        }

        match provider.on(kind, self.forward(kind)) {
            Ok(()) => {
                self.set_subscribed(kind);
                Ok(())
            }
            Err(err) if err.is_method_missing() => {
                tracing::debug!("{} can't emit {kind} events", self.wallet.name());
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<W: InjectedWallet> BaseWalletAdapter for InjectedWalletAdapter<W> {
    fn event_emitter(&self) -> WalletAdapterEventEmitter {
        self.event_emitter.clone()
    }

    fn name(&self) -> String {
        self.wallet.name()
    }

    fn url(&self) -> String {
        self.wallet.url()
    }

    fn icon(&self) -> String {
        self.wallet.icon()
    }

    fn ready_state(&self) -> WalletReadyState {
        if self.is_detected() {
            WalletReadyState::Installed
        } else {
            WalletReadyState::NotDetected
        }
    }

    fn public_key(&self) -> Pubkey {
        self.provider()
            .and_then(|provider| provider.public_key())
            .unwrap_or(DEFAULT_PUBLIC_KEY)
    }

    fn connected(&self) -> bool {
        self.provider()
            .map_or(false, |provider| provider.is_connected())
    }

    fn auto_approve(&self) -> bool {
        self.provider()
            .map_or(false, |provider| provider.auto_approve())
    }

    /// Subscribes to native events, then asks the provider to connect.
    ///
    /// Whether a listener is already present is judged by the provider's
    /// own count for each event. A listener registered by an earlier adapter
    /// on the same provider keeps counting after that adapter is dropped, so
    /// a new adapter does not subscribe and its emitter receives no native
    /// events until the provider loses that listener. Clones of one adapter
    /// share an emitter and are unaffected.
    async fn connect(&self) -> wallet_adapter_base::Result<()> {
        let Some(provider) = self.provider() else {
            tracing::warn!("{} is not installed, nothing to connect to", self.name());
            return Ok(());
        };

        for kind in EVENT_KINDS {
            self.subscribe_once(provider.as_ref(), kind)?;
        }

        let options = ConnectOptions {
            network: self.network.filter(|_| self.wallet.requires_network()),
        };

        tracing::info!("{} connect", self.name());

        match provider.connect(options).await {
            Err(err) if err.is_method_missing() => {
                tracing::debug!("{} has no connect method", self.name());
                Ok(())
            }
            result => Ok(result?),
        }
    }

    async fn disconnect(&self) -> wallet_adapter_base::Result<()> {
        let Some(provider) = self.provider() else {
            return Ok(());
        };

        tracing::info!("{} disconnect", self.name());

        match provider.disconnect().await {
            Err(err) if err.is_method_missing() => Ok(()),
            result => Ok(result?),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<W: InjectedWallet> BaseSignerWalletAdapter for InjectedWalletAdapter<W> {
    async fn sign_transaction(
        &self,
        transaction: Transaction,
    ) -> wallet_adapter_base::Result<SignOutcome<Transaction>> {
        let Some(provider) = self.provider() else {
            tracing::warn!("{} not available, transaction left unsigned", self.name());
            return Ok(SignOutcome::Unsigned(transaction));
        };

        match provider.sign_transaction(transaction.clone()).await {
            Ok(signed) => Ok(SignOutcome::Signed(signed)),
            Err(err) if err.is_method_missing() => Ok(SignOutcome::Unsigned(transaction)),
            Err(err) => Err(err.into()),
        }
    }

    async fn sign_all_transactions(
        &self,
        transactions: Vec<Transaction>,
    ) -> wallet_adapter_base::Result<SignOutcome<Vec<Transaction>>> {
        let Some(provider) = self.provider() else {
            tracing::warn!("{} not available, transactions left unsigned", self.name());
            return Ok(SignOutcome::Unsigned(transactions));
        };

        match provider.sign_all_transactions(transactions.clone()).await {
            Ok(signed) => Ok(SignOutcome::Signed(signed)),
            Err(err) if err.is_method_missing() => Ok(SignOutcome::Unsigned(transactions)),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<W: InjectedWallet> BaseMessageSignerWalletAdapter for InjectedWalletAdapter<W> {
    async fn sign_message(&self, message: &[u8]) -> wallet_adapter_base::Result<Signature> {
        let provider = self.provider().ok_or(WalletError::WalletNotConnected)?;

        let signed = provider.sign_message(message).await.map_err(|err| {
            if err.is_method_missing() {
                WalletError::Unsupported("signMessage")
            } else {
                err.into()
            }
        })?;

        if signed.shape() != self.wallet.sign_message_shape() {
            tracing::debug!(
                "{} answered signMessage with a {} result, expected {}",
                self.name(),
                signed.shape(),
                self.wallet.sign_message_shape()
            );
        }

        Ok(signed.into_signature()?)
    }
}
