mod adapter;
mod error;
mod event;
mod outcome;

pub use adapter::{
    BaseMessageSignerWalletAdapter, BaseSignerWalletAdapter, BaseWalletAdapter, WalletAdapter,
    WalletReadyState, DEFAULT_PUBLIC_KEY,
};
pub use error::{Result, WalletError};
pub use event::{
    ListenerId, WalletAdapterEvent, WalletAdapterEventEmitter, WalletAdapterEventKind,
    WalletAdapterListener,
};
pub use outcome::SignOutcome;
