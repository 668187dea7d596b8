use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::json;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer, transaction::Transaction};
use wallet_adapter_base::WalletAdapter;
use wallet_adapter_common::{
    ConnectOptions, Environment, EventArgs, InjectedProvider, ProviderError, ProviderEventKind,
    ProviderListener, SignMessageShape, SignedMessage, WalletAdapterNetwork,
};
use wallet_adapter_injected::{InjectedWallet, InjectedWalletAdapter};

pub const BURNER_NAMESPACE: &str = "burner";

/// Keypair-backed provider that behaves like an injected browser extension.
///
/// It approves every request on its own unless told to reject the next one.
pub struct BurnerProvider {
    /**
     * Storing a keypair locally like this is not safe because any application using this
     * adapter could retrieve the secret key, and because the keypair will be lost any time
     * the page is refreshed.
     */
    keypair: Keypair,
    connected: AtomicBool,
    reject_next: AtomicBool,
    sign_message_shape: SignMessageShape,
    flags: HashSet<String>,
    listeners: Mutex<HashMap<ProviderEventKind, Vec<ProviderListener>>>,
}

impl std::fmt::Debug for BurnerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BurnerProvider")
            .field("public_key", &self.keypair.pubkey())
            .field("connected", &self.connected.load(Ordering::SeqCst))
            .field("sign_message_shape", &self.sign_message_shape)
            .field("flags", &self.flags)
            .finish()
    }
}

impl Default for BurnerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl BurnerProvider {
    pub fn new() -> Self {
        Self::from_keypair(Keypair::new())
    }

    pub fn from_keypair(keypair: Keypair) -> Self {
        Self {
            keypair,
            connected: AtomicBool::new(false),
            reject_next: AtomicBool::new(false),
            sign_message_shape: SignMessageShape::Raw,
            flags: HashSet::from(["isBurner".to_string()]),
            listeners: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_sign_message_shape(mut self, shape: SignMessageShape) -> Self {
        self.sign_message_shape = shape;
        self
    }

    /// Adds a vendor marker, so the burner can pose as another extension.
    pub fn with_flag(mut self, flag: impl ToString) -> Self {
        self.flags.insert(flag.to_string());
        self
    }

    /// The account this provider reports once connected.
    pub fn account(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Makes the next request fail as if the user dismissed the popup.
    pub fn reject_next_request(&self) {
        self.reject_next.store(true, Ordering::SeqCst);
    }

    /// Emits a native event to every registered listener.
    pub fn emit(&self, event: ProviderEventKind, args: EventArgs) {
        let listeners = self
            .listeners
            .lock()
            .map(|listeners| listeners.get(&event).cloned().unwrap_or_default())
            .unwrap_or_default();

        tracing::debug!("burner emits {event} to {} listeners", listeners.len());

        for listener in listeners {
            listener(&args);
        }
    }

    fn approve(&self) -> Result<(), ProviderError> {
        if self.reject_next.swap(false, Ordering::SeqCst) {
            return Err(ProviderError::UserRejected(
                "User rejected the request.".to_string(),
            ));
        }
        Ok(())
    }

    fn approve_connected(&self) -> Result<(), ProviderError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(ProviderError::Native("wallet not connected".to_string()));
        }
        self.approve()
    }

    fn sign(&self, transaction: &mut Transaction) {
        let blockhash = transaction.message.recent_blockhash;
        transaction.partial_sign(&[&self.keypair], blockhash);
    }
}

#[async_trait::async_trait(?Send)]
impl InjectedProvider for BurnerProvider {
    fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.connected
            .load(Ordering::SeqCst)
            .then(|| self.keypair.pubkey())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn auto_approve(&self) -> bool {
        true
    }

    async fn connect(&self, options: ConnectOptions) -> Result<(), ProviderError> {
        self.approve()?;

        if let Some(network) = options.network {
            tracing::debug!("burner connecting on {network}");
        }

        if !self.connected.swap(true, Ordering::SeqCst) {
            self.emit(
                ProviderEventKind::Connect,
                vec![json!(self.keypair.pubkey().to_string())],
            );
        }
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        if self.connected.swap(false, Ordering::SeqCst) {
            self.emit(ProviderEventKind::Disconnect, vec![]);
        }
        Ok(())
    }

    async fn sign_message(&self, message: &[u8]) -> Result<SignedMessage, ProviderError> {
        self.approve_connected()?;

        let sig_bytes: [u8; 64] = self.keypair.sign_message(message).into();

        Ok(match self.sign_message_shape {
            SignMessageShape::Raw => SignedMessage::Raw(sig_bytes.to_vec()),
            SignMessageShape::Structured => SignedMessage::Structured {
                signature: sig_bytes.to_vec(),
                public_key: Some(self.keypair.pubkey()),
            },
        })
    }

    async fn sign_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Transaction, ProviderError> {
        self.approve_connected()?;
        self.sign(&mut transaction);
        Ok(transaction)
    }

    async fn sign_all_transactions(
        &self,
        mut transactions: Vec<Transaction>,
    ) -> Result<Vec<Transaction>, ProviderError> {
        self.approve_connected()?;
        for transaction in transactions.iter_mut() {
            self.sign(transaction);
        }
        Ok(transactions)
    }

    fn on(
        &self,
        event: ProviderEventKind,
        listener: ProviderListener,
    ) -> Result<(), ProviderError> {
        self.listeners
            .lock()
            .map_err(|err| ProviderError::Native(err.to_string()))?
            .entry(event)
            .or_default()
            .push(listener);
        Ok(())
    }

    fn listener_count(&self, event: ProviderEventKind) -> Result<usize, ProviderError> {
        let listeners = self
            .listeners
            .lock()
            .map_err(|err| ProviderError::Native(err.to_string()))?;
        Ok(listeners.get(&event).map_or(0, |l| l.len()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnsafeBurnerWallet;

impl InjectedWallet for UnsafeBurnerWallet {
    fn name(&self) -> String {
        "UnsafeBurnerWallet".to_string()
    }

    fn url(&self) -> String {
        "https://github.com/mucks/wallet-adapter".to_string()
    }

    fn icon(&self) -> String {
        "/assets/icons/burner.svg".to_string()
    }

    fn namespace(&self) -> &'static str {
        BURNER_NAMESPACE
    }

    fn marker_flag(&self) -> Option<&'static str> {
        Some("isBurner")
    }

    fn sign_message_shape(&self) -> SignMessageShape {
        SignMessageShape::Raw
    }
}

#[derive(Debug, Clone)]
pub struct UnsafeBurnerWalletAdapter {
    adapter: InjectedWalletAdapter<UnsafeBurnerWallet>,
}

impl UnsafeBurnerWalletAdapter {
    pub fn new(environment: &dyn Environment, network: Option<WalletAdapterNetwork>) -> Self {
        Self {
            adapter: InjectedWalletAdapter::new(UnsafeBurnerWallet, environment, network),
        }
    }

    pub fn is_detected(&self) -> bool {
        self.adapter.is_detected()
    }

    pub fn to_dyn_adapter(&self) -> Box<dyn WalletAdapter> {
        Box::new(self.adapter.clone())
    }
}

/// Puts a fresh burner provider into `environment` and returns it.
pub fn inject_burner(
    environment: &wallet_adapter_injected::InjectedEnvironment,
) -> Arc<BurnerProvider> {
    let provider = Arc::new(BurnerProvider::new());
    environment.inject(BURNER_NAMESPACE, provider.clone());
    provider
}
