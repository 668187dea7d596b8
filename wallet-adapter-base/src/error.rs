use wallet_adapter_common::ProviderError;

pub type Result<T> = std::result::Result<T, WalletError>;

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("wallet is not ready")]
    WalletNotReady,
    #[error("{0} is not installed")]
    WalletNotInstalled(String),
    #[error("wallet is not connected")]
    WalletNotConnected,
    #[error("wallet does not support `{0}`")]
    Unsupported(&'static str),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl WalletError {
    /// True when the user declined the request in the wallet popup.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Provider(ProviderError::UserRejected(_)))
    }
}
