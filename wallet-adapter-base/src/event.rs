use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use wallet_adapter_common::{EventArgs, ProviderEventKind};

pub type WalletAdapterEventKind = ProviderEventKind;

#[derive(Debug, Clone, PartialEq)]
pub enum WalletAdapterEvent {
    Connect(EventArgs),
    Disconnect(EventArgs),
}

impl WalletAdapterEvent {
    pub fn new(kind: WalletAdapterEventKind, args: EventArgs) -> Self {
        match kind {
            WalletAdapterEventKind::Connect => Self::Connect(args),
            WalletAdapterEventKind::Disconnect => Self::Disconnect(args),
        }
    }

    pub fn kind(&self) -> WalletAdapterEventKind {
        match self {
            Self::Connect(_) => WalletAdapterEventKind::Connect,
            Self::Disconnect(_) => WalletAdapterEventKind::Disconnect,
        }
    }

    pub fn args(&self) -> &EventArgs {
        match self {
            Self::Connect(args) | Self::Disconnect(args) => args,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type WalletAdapterListener = Arc<dyn Fn(&WalletAdapterEvent) + Send + Sync>;

struct Registration {
    id: ListenerId,
    kind: WalletAdapterEventKind,
    listener: WalletAdapterListener,
}

/// Event source owned by an adapter.
///
/// Handlers registered with [`on`](Self::on) run synchronously inside
/// [`emit`](Self::emit). Consumers that would rather poll get a broadcast
/// receiver from [`subscribe`](Self::subscribe).
#[derive(Clone)]
pub struct WalletAdapterEventEmitter {
    listeners: Arc<Mutex<Vec<Registration>>>,
    next_id: Arc<AtomicU64>,
    tx: broadcast::Sender<WalletAdapterEvent>,
}

impl std::fmt::Debug for WalletAdapterEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletAdapterEventEmitter")
            .field("listeners", &self.listeners.lock().map(|l| l.len()).unwrap_or(0))
            .field("receivers", &self.tx.receiver_count())
            .finish()
    }
}

impl Default for WalletAdapterEventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletAdapterEventEmitter {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(100);
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
            tx,
        }
    }

    pub fn on(
        &self,
        kind: WalletAdapterEventKind,
        listener: impl Fn(&WalletAdapterEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Registration {
                id,
                kind,
                listener: Arc::new(listener),
            });
        }
        id
    }

    /// Removes a handler, returns false if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let Ok(mut listeners) = self.listeners.lock() else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|registration| registration.id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self, kind: WalletAdapterEventKind) -> usize {
        self.listeners
            .lock()
            .map(|listeners| listeners.iter().filter(|r| r.kind == kind).count())
            .unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WalletAdapterEvent> {
        self.tx.subscribe()
    }

    /// Delivers `event` to every handler of its kind and to all subscribers.
    /// Returns the number of handlers called.
    pub fn emit(&self, event: WalletAdapterEvent) -> usize {
        // handlers may call back into the emitter, so don't hold the lock
        let handlers: Vec<WalletAdapterListener> = match self.listeners.lock() {
            Ok(listeners) => listeners
                .iter()
                .filter(|r| r.kind == event.kind())
                .map(|r| r.listener.clone())
                .collect(),
            Err(_) => Vec::new(),
        };

        tracing::trace!(kind = %event.kind(), handlers = handlers.len(), "emit");

        for handler in handlers.iter() {
            handler(&event);
        }

        // no receivers is fine
        let _ = self.tx.send(event);

        handlers.len()
    }
}
