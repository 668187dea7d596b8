use solana_sdk::pubkey::Pubkey;
use wallet_adapter_base::{
    BaseWalletAdapter, ListenerId, WalletAdapter, WalletAdapterEventEmitter,
    WalletAdapterEventKind, WalletAdapterListener, WalletReadyState,
};
use wallet_adapter_injected::NotInstalledAdapter;

/// What the factory hands back for a wallet choice.
///
/// A detected extension gets the full signing contract. Otherwise the
/// selection only knows how to ask the user to install the extension.
#[derive(Debug, Clone)]
pub enum WalletAdapterSelection {
    Detected(Box<dyn WalletAdapter>),
    NotInstalled(NotInstalledAdapter),
}

impl WalletAdapterSelection {
    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Detected(_))
    }

    /// The signing adapter, when the extension was found.
    pub fn as_wallet_adapter(&self) -> Option<&dyn WalletAdapter> {
        match self {
            Self::Detected(adapter) => Some(adapter.as_ref()),
            Self::NotInstalled(_) => None,
        }
    }

    pub fn into_wallet_adapter(self) -> Option<Box<dyn WalletAdapter>> {
        match self {
            Self::Detected(adapter) => Some(adapter),
            Self::NotInstalled(_) => None,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl BaseWalletAdapter for WalletAdapterSelection {
    fn event_emitter(&self) -> WalletAdapterEventEmitter {
        match self {
            Self::Detected(adapter) => adapter.event_emitter(),
            Self::NotInstalled(adapter) => adapter.event_emitter(),
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Detected(adapter) => adapter.name(),
            Self::NotInstalled(adapter) => adapter.name(),
        }
    }

    fn url(&self) -> String {
        match self {
            Self::Detected(adapter) => adapter.url(),
            Self::NotInstalled(adapter) => adapter.url(),
        }
    }

    fn icon(&self) -> String {
        match self {
            Self::Detected(adapter) => adapter.icon(),
            Self::NotInstalled(adapter) => adapter.icon(),
        }
    }

    fn ready_state(&self) -> WalletReadyState {
        match self {
            Self::Detected(adapter) => adapter.ready_state(),
            Self::NotInstalled(adapter) => adapter.ready_state(),
        }
    }

    fn public_key(&self) -> Pubkey {
        match self {
            Self::Detected(adapter) => adapter.public_key(),
            Self::NotInstalled(adapter) => adapter.public_key(),
        }
    }

    fn connected(&self) -> bool {
        match self {
            Self::Detected(adapter) => adapter.connected(),
            Self::NotInstalled(adapter) => adapter.connected(),
        }
    }

    fn auto_approve(&self) -> bool {
        match self {
            Self::Detected(adapter) => adapter.auto_approve(),
            Self::NotInstalled(adapter) => adapter.auto_approve(),
        }
    }

    fn on(&self, kind: WalletAdapterEventKind, listener: WalletAdapterListener) -> ListenerId {
        match self {
            Self::Detected(adapter) => adapter.on(kind, listener),
            Self::NotInstalled(adapter) => adapter.on(kind, listener),
        }
    }

    fn off(&self, id: ListenerId) -> bool {
        match self {
            Self::Detected(adapter) => adapter.off(id),
            Self::NotInstalled(adapter) => adapter.off(id),
        }
    }

    async fn connect(&self) -> wallet_adapter_base::Result<()> {
        match self {
            Self::Detected(adapter) => adapter.connect().await,
            Self::NotInstalled(adapter) => adapter.connect().await,
        }
    }

    async fn disconnect(&self) -> wallet_adapter_base::Result<()> {
        match self {
            Self::Detected(adapter) => adapter.disconnect().await,
            Self::NotInstalled(adapter) => adapter.disconnect().await,
        }
    }
}
