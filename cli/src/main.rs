// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # BUMO Transaction Tool
//!
//! Entry point for the `bumo-tx` binary. Parses CLI arguments, initializes
//! logging, and runs one subcommand against the transaction core:
//!
//! - `pay-coin` — build a single-transfer transaction, print hex and hash
//! - `decode`   — decode hex bytes and print the transaction as JSON
//! - `version`  — print build version information
//!
//! The output is meant to be handed to a signer or broadcaster; this tool
//! does neither.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use bumo_protocol::codec;
use bumo_protocol::transaction::{Operation, TransactionBuilder};

use cli::{BumoTxCli, Commands, DecodeArgs, PayCoinArgs};

fn main() -> Result<()> {
    let cli = BumoTxCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::PayCoin(args) => pay_coin(args),
        Commands::Decode(args) => decode(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds a PAY_COIN transaction from the arguments and prints its
/// canonical encoding.
fn pay_coin(args: PayCoinArgs) -> Result<()> {
    let operation =
        Operation::pay_coin(&args.dest, args.amount).context("invalid pay-coin operation")?;
    let tx = TransactionBuilder::new(&args.source)
        .nonce(args.nonce)
        .fee_limit(args.fee_limit)
        .gas_price(args.gas_price)
        .operation(operation)
        .build()
        .context("invalid transaction")?;

    let bytes = codec::encode(&tx);
    tracing::info!(
        source = tx.source_address(),
        nonce = tx.nonce(),
        bytes = bytes.len(),
        "transaction built"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&tx).context("failed to render transaction JSON")?;
        println!("{json}");
    }
    println!("bytes : {}", hex::encode(&bytes));
    println!("hash  : {}", tx.hash_hex());
    Ok(())
}

/// Decodes hex-encoded transaction bytes and prints the result as JSON.
fn decode(args: DecodeArgs) -> Result<()> {
    let bytes = hex::decode(args.hex.trim()).context("input is not valid hex")?;
    let tx = codec::decode(&bytes)
        .with_context(|| format!("failed to decode {} transaction bytes", bytes.len()))?;

    tracing::info!(
        operations = tx.operations().len(),
        hash = %tx.hash_hex(),
        "transaction decoded"
    );

    let json = serde_json::to_string_pretty(&tx).context("failed to render transaction JSON")?;
    println!("{json}");
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("bumo-tx {}", env!("CARGO_PKG_VERSION"));
    println!("wire    v{}", bumo_protocol::config::WIRE_FORMAT_VERSION);
}
