//! Walks a wallet adapter through a session against an in-process extension.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use solana_sdk::{
    hash::Hash, message::Message, pubkey::Pubkey, system_instruction, transaction::Transaction,
};
use strum::IntoEnumIterator;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wallet_adapter_base::{BaseWalletAdapter, WalletAdapterEvent, WalletAdapterEventKind};
use wallet_adapter_common::{TracingNotifier, WalletAdapterNetwork};
use wallet_adapter_factory::{WalletAdapterFactory, WalletType};
use wallet_adapter_injected::InjectedEnvironment;
use wallet_adapter_unsafe_burner::BurnerProvider;

#[derive(Parser, Debug)]
#[command(name = "all-wallets")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Wallet to select (phantom, solflare, sollet, huobi, backpack, burner)
    #[arg(short, long, default_value_t = WalletType::UnsafeBurner)]
    wallet: WalletType,

    /// Network passed to wallets that need one
    #[arg(short, long, default_value_t = WalletAdapterNetwork::Devnet)]
    network: WalletAdapterNetwork,

    /// Inject a burner extension posing as the selected wallet
    #[arg(long)]
    install: bool,

    /// Run every wallet type instead of just `--wallet`
    #[arg(long)]
    all: bool,

    /// Message to sign once connected
    #[arg(short, long, default_value = "hello from all-wallets")]
    message: String,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Puts a burner into `environment` under `wallet_type`'s namespace and markers.
fn install(environment: &InjectedEnvironment, wallet_type: WalletType) -> Arc<BurnerProvider> {
    let mut provider =
        BurnerProvider::new().with_sign_message_shape(wallet_type.sign_message_shape());
    if let Some(flag) = wallet_type.marker_flag() {
        provider = provider.with_flag(flag);
    }

    let provider = Arc::new(provider);
    environment.inject(wallet_type.namespace(), provider.clone());
    tracing::info!("installed a burner as window.{}", wallet_type.namespace());
    provider
}

fn transfer(payer: &Pubkey) -> Transaction {
    let message = Message::new_with_blockhash(
        &[system_instruction::transfer(payer, &Pubkey::new_unique(), 1_000)],
        Some(payer),
        &Hash::new_unique(),
    );
    Transaction::new_unsigned(message)
}

async fn run(args: &Args, wallet_type: WalletType) -> Result<()> {
    let environment = InjectedEnvironment::new();
    // kept alive for the whole session; the adapter only holds a weak handle
    let _provider = args.install.then(|| install(&environment, wallet_type));

    let factory = WalletAdapterFactory::new(Arc::new(environment), Arc::new(TracingNotifier));
    let selection = factory.create(wallet_type, args.network);

    for kind in WalletAdapterEventKind::iter() {
        selection.on(
            kind,
            Arc::new(move |event: &WalletAdapterEvent| {
                tracing::info!("event {kind}: {:?}", event.args());
            }),
        );
    }

    tracing::info!(
        "{} ({}) ready state: {}",
        selection.name(),
        selection.url(),
        selection.ready_state()
    );

    selection.connect().await?;

    let Some(adapter) = selection.as_wallet_adapter() else {
        tracing::warn!("{} is not installed, nothing to sign", selection.name());
        return Ok(());
    };

    tracing::info!(
        "connected: {}, public key: {}",
        adapter.connected(),
        adapter.public_key()
    );

    let signature = adapter.sign_message(args.message.as_bytes()).await?;
    tracing::info!("message signature: {signature}");

    let outcome = adapter.sign_transaction(transfer(&adapter.public_key())).await?;
    tracing::info!(
        "transaction signed: {}, signature: {}",
        outcome.is_signed(),
        outcome.as_inner().signatures[0]
    );

    adapter.disconnect().await?;
    tracing::info!("disconnected");

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    if args.all {
        for wallet_type in WalletType::iter() {
            run(&args, wallet_type).await?;
        }
    } else {
        run(&args, args.wallet).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "all-wallets",
            "--wallet",
            "huobi",
            "--network",
            "mainnet",
            "--install",
        ]);
        assert_eq!(args.wallet, WalletType::Huobi);
        assert_eq!(args.network, WalletAdapterNetwork::Mainnet);
        assert!(args.install);
        assert!(!args.all);
    }

    #[test]
    fn defaults_to_the_burner_on_devnet() {
        let args = Args::parse_from(["all-wallets"]);
        assert_eq!(args.wallet, WalletType::UnsafeBurner);
        assert_eq!(args.network, WalletAdapterNetwork::Devnet);
    }

    #[tokio::test]
    async fn every_wallet_runs_with_and_without_the_extension() {
        for install in [false, true] {
            let args = Args {
                wallet: WalletType::UnsafeBurner,
                network: WalletAdapterNetwork::Devnet,
                install,
                all: true,
                message: "test".into(),
            };
            for wallet_type in WalletType::iter() {
                run(&args, wallet_type).await.unwrap();
            }
        }
    }
}
