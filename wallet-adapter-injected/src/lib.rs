mod adapter;
mod environment;
mod not_installed;
mod wallet;

pub use adapter::InjectedWalletAdapter;
pub use environment::InjectedEnvironment;
pub use not_installed::NotInstalledAdapter;
pub use wallet::InjectedWallet;
