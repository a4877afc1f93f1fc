//! # CLI Interface
//!
//! Defines the command-line argument structure for `bumo-tx` using `clap`
//! derive. Supports three subcommands: `pay-coin`, `decode`, and `version`.

use clap::{Args, Parser, Subcommand};

use crate::logging::LogFormat;

/// BUMO transaction builder.
///
/// Assembles transactions, prints their canonical encoding and hash, and
/// decodes encoded transactions back to JSON. Does not sign or submit.
#[derive(Parser, Debug)]
#[command(
    name = "bumo-tx",
    about = "Build and inspect canonical BUMO transactions",
    version,
    propagate_version = true
)]
pub struct BumoTxCli {
    /// Log output format for stderr diagnostics.
    #[arg(long, global = true, env = "BUMO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, global = true, default_value = "bumo_tx=info,bumo_protocol=info")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `bumo-tx` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a single PAY_COIN transaction and print its encoding.
    PayCoin(PayCoinArgs),
    /// Decode a hex-encoded transaction and print it as JSON.
    Decode(DecodeArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `pay-coin` subcommand.
#[derive(Args, Debug)]
pub struct PayCoinArgs {
    /// Address of the paying account.
    #[arg(long, env = "BUMO_SOURCE_ADDRESS")]
    pub source: String,

    /// Account nonce for this transaction (last accepted nonce + 1).
    #[arg(long)]
    pub nonce: i64,

    /// Maximum fee the sender authorises.
    #[arg(long, env = "BUMO_FEE_LIMIT", default_value_t = 1_000_000)]
    pub fee_limit: i64,

    /// Gas price.
    #[arg(long, env = "BUMO_GAS_PRICE", default_value_t = 1000)]
    pub gas_price: i64,

    /// Address receiving the coin.
    #[arg(long)]
    pub dest: String,

    /// Amount to transfer, in the smallest coin unit.
    #[arg(long)]
    pub amount: i64,

    /// Print the transaction as JSON alongside its encoding.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex-encoded canonical transaction bytes.
    pub hex: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        BumoTxCli::command().debug_assert();
    }

    #[test]
    fn pay_coin_parses_with_defaults() {
        let cli = BumoTxCli::try_parse_from([
            "bumo-tx",
            "pay-coin",
            "--source",
            "buQmWJrdYJP5CPKTbkQUqscwvTGaU44dord8",
            "--nonce",
            "1",
            "--dest",
            "buQVkUUBKpDKRmHYWw1MU8U7ngoQehno165i",
            "--amount",
            "1000",
        ])
        .unwrap();

        match cli.command {
            Commands::PayCoin(args) => {
                assert_eq!(args.nonce, 1);
                assert_eq!(args.amount, 1000);
                assert_eq!(args.fee_limit, 1_000_000);
                assert_eq!(args.gas_price, 1000);
                assert!(!args.json);
            }
            other => panic!("expected pay-coin, got {other:?}"),
        }
    }

    #[test]
    fn default_filter_covers_both_log_targets() {
        let cli = BumoTxCli::try_parse_from(["bumo-tx", "version"]).unwrap();
        assert!(cli.log_level.contains("bumo_tx="));
        assert!(cli.log_level.contains("bumo_protocol="));
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn negative_amount_parses_and_is_left_to_the_model() {
        let cli = BumoTxCli::try_parse_from([
            "bumo-tx", "pay-coin", "--source", "a", "--nonce", "1", "--dest", "b", "--amount=-1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::PayCoin(PayCoinArgs { amount: -1, .. })));
    }
}
