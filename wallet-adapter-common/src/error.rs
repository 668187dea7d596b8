#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The user declined the request in the extension popup.
    #[error("user rejected the request: {0}")]
    UserRejected(String),
    #[error("provider does not implement `{0}`")]
    MethodMissing(&'static str),
    #[error("signature must be 64 bytes, got {0}")]
    InvalidSignature(usize),
    #[error("native provider error: {0}")]
    Native(String),
}

impl ProviderError {
    pub fn is_method_missing(&self) -> bool {
        matches!(self, Self::MethodMissing(_))
    }
}
