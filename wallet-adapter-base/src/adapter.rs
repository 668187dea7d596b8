//! loosely follows https://github.com/anza-xyz/wallet-adapter/blob/master/packages/core/base/src/adapter.ts

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::event::{
    ListenerId, WalletAdapterEventEmitter, WalletAdapterEventKind, WalletAdapterListener,
};
use crate::{Result, SignOutcome};

/// Placeholder for "no account", returned by `public_key` while disconnected.
pub const DEFAULT_PUBLIC_KEY: Pubkey = Pubkey::new_from_array([0; 32]);

/**
 * A wallet's readiness describes a series of states that the wallet can be in,
 * depending on what kind of wallet it is. An installable wallet (eg. a browser
 * extension like Phantom) might be `Installed` if we've found the Phantom API
 * in the global scope, or `NotDetected` otherwise.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum WalletReadyState {
    /**
     * User-installable wallets can typically be detected by scanning for an API
     * that they've injected into the global context. If such an API is present,
     * we consider the wallet to have been installed.
     */
    Installed,
    NotDetected,
    /**
     * Loadable wallets are always available to you. Since you can load them at
     * any time, it's meaningless to say that they have been detected.
     */
    Loadable,
    /**
     * If a wallet is not supported on a given platform (eg. server-rendering, or
     * mobile) then it will stay in the `Unsupported` state.
     */
    Unsupported,
}

#[async_trait::async_trait(?Send)]
pub trait BaseWalletAdapter: dyn_clone::DynClone + std::fmt::Debug {
    fn event_emitter(&self) -> WalletAdapterEventEmitter;
    fn name(&self) -> String;
    fn url(&self) -> String;
    fn icon(&self) -> String;
    fn ready_state(&self) -> WalletReadyState;

    /// [`DEFAULT_PUBLIC_KEY`] unless a provider reports an account.
    fn public_key(&self) -> Pubkey;

    /// Read from the provider on every call.
    fn connected(&self) -> bool;

    fn auto_approve(&self) -> bool {
        false
    }

    fn on(&self, kind: WalletAdapterEventKind, listener: WalletAdapterListener) -> ListenerId {
        self.event_emitter().on(kind, move |event| listener(event))
    }

    fn off(&self, id: ListenerId) -> bool {
        self.event_emitter().off(id)
    }

    /// May wait indefinitely for the user to answer the extension popup.
    async fn connect(&self) -> Result<()>;

    /// The `disconnect` event fires once the provider reports it, not
    /// necessarily before this returns.
    async fn disconnect(&self) -> Result<()>;
}

dyn_clone::clone_trait_object!(BaseWalletAdapter);

#[async_trait::async_trait(?Send)]
pub trait BaseSignerWalletAdapter: BaseWalletAdapter {
    async fn sign_transaction(&self, transaction: Transaction) -> Result<SignOutcome<Transaction>>;

    async fn sign_all_transactions(
        &self,
        transactions: Vec<Transaction>,
    ) -> Result<SignOutcome<Vec<Transaction>>> {
        let mut all_signed = true;
        let mut signed_transactions = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            let outcome = self.sign_transaction(transaction).await?;
            all_signed &= outcome.is_signed();
            signed_transactions.push(outcome.into_inner());
        }

        Ok(if all_signed {
            SignOutcome::Signed(signed_transactions)
        } else {
            SignOutcome::Unsigned(signed_transactions)
        })
    }
}

#[async_trait::async_trait(?Send)]
pub trait BaseMessageSignerWalletAdapter: BaseSignerWalletAdapter {
    async fn sign_message(&self, message: &[u8]) -> Result<Signature>;
}

/// Everything an application needs from a connected wallet.
pub trait WalletAdapter: BaseMessageSignerWalletAdapter {}

impl<T: BaseMessageSignerWalletAdapter + ?Sized> WalletAdapter for T {}

dyn_clone::clone_trait_object!(WalletAdapter);
