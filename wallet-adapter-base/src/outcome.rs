use crate::WalletError;

/// Result of a signing request that could not reach a provider.
///
/// Signing without a provider hands the input back untouched as `Unsigned`
/// instead of failing, so callers that skip the `connected` check keep
/// working, but the value can't be mistaken for a signed one.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutcome<T> {
    Signed(T),
    Unsigned(T),
}

impl<T> SignOutcome<T> {
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Signed(_))
    }

    pub fn as_inner(&self) -> &T {
        match self {
            Self::Signed(value) | Self::Unsigned(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Signed(value) | Self::Unsigned(value) => value,
        }
    }

    /// The signed value, or [`WalletError::WalletNotConnected`].
    pub fn signed(self) -> crate::Result<T> {
        match self {
            Self::Signed(value) => Ok(value),
            Self::Unsigned(_) => Err(WalletError::WalletNotConnected),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SignOutcome<U> {
        match self {
            Self::Signed(value) => SignOutcome::Signed(f(value)),
            Self::Unsigned(value) => SignOutcome::Unsigned(f(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_keeps_the_value_but_refuses_signed() {
        let outcome = SignOutcome::Unsigned(vec![1, 2]);
        assert!(!outcome.is_signed());
        assert_eq!(outcome.as_inner(), &vec![1, 2]);
        assert!(matches!(
            outcome.clone().signed(),
            Err(WalletError::WalletNotConnected)
        ));
        assert_eq!(outcome.into_inner(), vec![1, 2]);
    }

    #[test]
    fn map_preserves_the_tag() {
        let outcome = SignOutcome::Signed(2).map(|n| n * 2);
        assert_eq!(outcome, SignOutcome::Signed(4));
        assert_eq!(outcome.signed().unwrap(), 4);
    }
}
