use serde::{Deserialize, Serialize};
use solana_sdk::{pubkey::Pubkey, signature::Signature};

use crate::ProviderError;

/// Return convention of a provider's native `signMessage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum SignMessageShape {
    /// `Uint8Array` signature bytes
    Raw,
    /// `{ signature: Uint8Array, publicKey?: PublicKey }`
    Structured,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignedMessage {
    Raw(Vec<u8>),
    Structured {
        signature: Vec<u8>,
        public_key: Option<Pubkey>,
    },
}

impl SignedMessage {
    pub fn shape(&self) -> SignMessageShape {
        match self {
            Self::Raw(_) => SignMessageShape::Raw,
            Self::Structured { .. } => SignMessageShape::Structured,
        }
    }

    pub fn signature_bytes(&self) -> &[u8] {
        match self {
            Self::Raw(bytes) => bytes,
            Self::Structured { signature, .. } => signature,
        }
    }

    pub fn into_signature(self) -> Result<Signature, ProviderError> {
        let bytes = self.signature_bytes();
        Signature::try_from(bytes).map_err(|_| ProviderError::InvalidSignature(bytes.len()))
    }
}
