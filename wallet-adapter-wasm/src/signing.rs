//! Transaction payloads for both signing apis, and putting the returned
//! signatures back into transactions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::{bs58, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use wallet_adapter_common::{ProviderError, SigningApi};

/// Picks the api a sign call goes through, given what the provider object
/// actually exposes. The wallet's preference wins when both exist.
pub fn signing_route(
    preferred: SigningApi,
    has_request: bool,
    has_native: bool,
    native_method: &'static str,
) -> Result<SigningApi, ProviderError> {
    match (preferred, has_request, has_native) {
        (SigningApi::Request, true, _) | (SigningApi::Native, true, false) => {
            Ok(SigningApi::Request)
        }
        (_, _, true) => Ok(SigningApi::Native),
        (SigningApi::Request, false, false) => Err(ProviderError::MethodMissing("request")),
        (SigningApi::Native, false, false) => Err(ProviderError::MethodMissing(native_method)),
    }
}

/// Wire format handed to a native `signTransaction`.
pub fn serialize_transaction(transaction: &Transaction) -> Result<Vec<u8>, ProviderError> {
    bincode::serialize(transaction).map_err(|err| ProviderError::Native(err.to_string()))
}

/// Reads back a transaction returned by a native sign method. The message
/// must be the one that was sent.
pub fn deserialize_signed(sent: &Transaction, bytes: &[u8]) -> Result<Transaction, ProviderError> {
    let signed: Transaction =
        bincode::deserialize(bytes).map_err(|err| ProviderError::Native(err.to_string()))?;

    if signed.message != sent.message {
        return Err(ProviderError::Native(
            "wallet returned a different transaction".to_string(),
        ));
    }
    Ok(signed)
}

#[derive(Debug, Serialize)]
pub struct SignRequest<P> {
    pub method: &'static str,
    pub params: P,
}

#[derive(Debug, Serialize)]
pub struct SignTransactionParams {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SignAllTransactionsParams {
    pub messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignTransactionResponse {
    pub signature: String,
    pub public_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignAllTransactionsResponse {
    pub signatures: Vec<String>,
    pub public_key: String,
}

pub fn encode_message(transaction: &Transaction) -> String {
    bs58::encode(transaction.message_data()).into_string()
}

pub fn sign_transaction_request(transaction: &Transaction) -> SignRequest<SignTransactionParams> {
    SignRequest {
        method: "signTransaction",
        params: SignTransactionParams {
            message: encode_message(transaction),
        },
    }
}

pub fn sign_all_transactions_request(
    transactions: &[Transaction],
) -> SignRequest<SignAllTransactionsParams> {
    SignRequest {
        method: "signAllTransactions",
        params: SignAllTransactionsParams {
            messages: transactions.iter().map(encode_message).collect(),
        },
    }
}

fn parse_pubkey(value: &str) -> Result<Pubkey, ProviderError> {
    Pubkey::from_str(value)
        .map_err(|err| ProviderError::Native(format!("invalid public key {value}: {err}")))
}

fn parse_signature(value: &str) -> Result<Signature, ProviderError> {
    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|err| ProviderError::Native(format!("invalid signature encoding: {err}")))?;
    Signature::try_from(bytes.as_slice()).map_err(|_| ProviderError::InvalidSignature(bytes.len()))
}

/// Writes `signature` into the slot of `signer`.
///
/// The slot is the signer's position among the message's required signers.
pub fn add_signature(
    transaction: &mut Transaction,
    signer: &Pubkey,
    signature: Signature,
) -> Result<(), ProviderError> {
    let required = transaction.message.header.num_required_signatures as usize;

    let slot = transaction
        .message
        .account_keys
        .iter()
        .take(required)
        .position(|key| key == signer)
        .and_then(|index| transaction.signatures.get_mut(index))
        .ok_or_else(|| {
            ProviderError::Native(format!("{signer} is not a signer of the transaction"))
        })?;

    *slot = signature;
    Ok(())
}

pub fn apply_signature(
    mut transaction: Transaction,
    response: &SignTransactionResponse,
) -> Result<Transaction, ProviderError> {
    let signer = parse_pubkey(&response.public_key)?;
    add_signature(&mut transaction, &signer, parse_signature(&response.signature)?)?;
    Ok(transaction)
}

pub fn apply_signatures(
    mut transactions: Vec<Transaction>,
    response: &SignAllTransactionsResponse,
) -> Result<Vec<Transaction>, ProviderError> {
    if response.signatures.len() != transactions.len() {
        return Err(ProviderError::Native(format!(
            "expected {} signatures, got {}",
            transactions.len(),
            response.signatures.len()
        )));
    }

    let signer = parse_pubkey(&response.public_key)?;
    for (transaction, signature) in transactions.iter_mut().zip(&response.signatures) {
        add_signature(transaction, &signer, parse_signature(signature)?)?;
    }
    Ok(transactions)
}
