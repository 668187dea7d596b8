pub mod environment;
pub mod error;
pub mod message;
pub mod network;
pub mod notification;
pub mod provider;

pub use environment::Environment;
pub use error::ProviderError;
pub use message::{SignMessageShape, SignedMessage};
pub use network::WalletAdapterNetwork;
pub use notification::{
    Notification, NotificationType, Notifier, RecordingNotifier, TracingNotifier,
};
pub use provider::{
    ConnectOptions, EventArgs, InjectedProvider, ProviderEventKind, ProviderListener, SigningApi,
};
